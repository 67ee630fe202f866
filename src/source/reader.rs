use std::cell::RefCell;
use std::io::Read;

use anyhow::Result;

use super::PassengerSource;

/// Wraps any reader, such as stdin. The reader is drained on first use.
pub struct ReaderSource<R>(RefCell<R>);

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self(RefCell::new(reader))
    }
}

impl<R: Read> PassengerSource for ReaderSource<R> {
    fn describe(&self) -> String {
        "reader".to_string()
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.0.borrow_mut().read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
