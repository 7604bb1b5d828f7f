//! Error types for loading the usage dataset.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure to turn an input file into a `Table`. Fatal to the session.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file is missing or unreadable
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader could not parse the input
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A field could not be converted to its typed value
    #[error("Malformed row {row}: {message}")]
    Malformed { row: usize, message: String },

    /// The same calendar date appears on more than one row
    #[error("Duplicate date in dataset: {0}")]
    DuplicateDate(NaiveDate),

    /// The header is present but there are no data rows
    #[error("Dataset contains no records")]
    Empty,
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
