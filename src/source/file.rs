use std::path::PathBuf;

use anyhow::{Context, Result};

use super::PassengerSource;

pub struct FileSource(PathBuf);

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl PassengerSource for FileSource {
    fn describe(&self) -> String {
        self.0.display().to_string()
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.0).with_context(|| format!("failed to read {}", self.0.display()))
    }
}
