//! Error types for the data-loader crate.
//!
//! Every failure that can happen while reading the title dataset is
//! represented here, with enough context (file and line) to find the
//! offending row.

use thiserror::Error;

/// Errors that can occur during dataset loading and parsing
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader itself failed (malformed quoting, bad UTF-8, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Header row is missing one of the columns we need
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// Row in the data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// Two rows share the same title id
    #[error("Duplicate title id {id} at line {line} in {file}")]
    DuplicateId { file: String, id: String, line: u64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
