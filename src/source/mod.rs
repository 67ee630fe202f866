mod file;
mod reader;

pub use file::FileSource;
pub use reader::ReaderSource;

use anyhow::Result;
use tracing::info;

use crate::parser::parse_passengers;
use crate::passenger::Dataset;

/// Something that can hand over the raw bytes of a passenger CSV.
pub trait PassengerSource {
    fn describe(&self) -> String;

    fn read_bytes(&self) -> Result<Vec<u8>>;
}

/// Reads the source once and parses it into a [`Dataset`].
#[tracing::instrument(skip_all, fields(source = %source.describe()))]
pub fn load_dataset<S: PassengerSource>(source: &S) -> Result<Dataset> {
    let bytes = source.read_bytes()?;
    let dataset = Dataset::new(parse_passengers(&bytes)?);

    info!(passengers = dataset.len(), "Dataset loaded");
    Ok(dataset)
}

/// Picks a source from a CLI argument: `-` reads stdin, anything else is a path.
pub fn load_from_arg(input: &str) -> Result<Dataset> {
    if input == "-" {
        load_dataset(&ReaderSource::new(std::io::stdin()))
    } else {
        load_dataset(&FileSource::new(input))
    }
}
