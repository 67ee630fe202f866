//! CSV parser for the passenger table.

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::DatasetError;
use crate::passenger::Passenger;

/// Required columns and the header spellings accepted for each.
///
/// The first spelling is the canonical one reported in errors.
pub const REQUIRED_COLUMNS: &[&[&str]] = &[
    &["PassengerId", "passenger_id", "passengerid"],
    &["Pclass", "pclass"],
    &["Sex", "sex"],
    &["Age", "age"],
    &["Survived", "survived"],
    &["SibSp", "sib_sp", "sibsp"],
    &["Parch", "parch"],
    &["Fare", "fare"],
    &["Name", "name"],
];

/// Decodes a CSV passenger table with a header row.
///
/// # Errors
///
/// Returns [`DatasetError::MissingColumns`] before decoding any row if the
/// header lacks a required column, and [`DatasetError::InvalidRecord`] for
/// the first row whose values do not fit the schema.
pub fn parse_passengers(bytes: &[u8]) -> Result<Vec<Passenger>, DatasetError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(bytes);

    check_headers(rdr.headers()?)?;

    let mut passengers = Vec::new();
    for result in rdr.deserialize() {
        let record: Passenger = result.map_err(into_dataset_error)?;
        passengers.push(record);
    }

    debug!(rows = passengers.len(), "Passenger table parsed");
    Ok(passengers)
}

fn check_headers(headers: &StringRecord) -> Result<(), DatasetError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|names| !names.iter().any(|n| headers.iter().any(|h| h == *n)))
        .map(|names| names[0].to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}

fn into_dataset_error(err: csv::Error) -> DatasetError {
    let line = err.position().map_or(0, |p| p.line());
    let message = match err.kind() {
        ErrorKind::Deserialize { err: de, .. } => Some(de.to_string()),
        ErrorKind::UnequalLengths { .. } => {
            Some("row has a different number of fields than the header".to_string())
        }
        _ => None,
    };

    match message {
        Some(message) => DatasetError::InvalidRecord { line, message },
        None => DatasetError::Csv(err),
    }
}
