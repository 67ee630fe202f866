//! Error types for loading the passenger table.

use thiserror::Error;

/// A malformed passenger table. Always fatal, never a partial result.
///
/// Empty groups are valid data and never surface here.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}
