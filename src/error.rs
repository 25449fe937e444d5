//! Error types for the nordea_ofx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during parsing and conversion operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading the tab-delimited input.
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// First row of the statement did not contain an account id.
    #[error("malformed header row: expected at least 2 fields, found {found}")]
    MalformedHeader { found: usize },

    /// Transaction row with the wrong number of fields.
    #[error("malformed transaction row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Invalid date format.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Output file could not be created.
    #[error("output file {} couldn't be created: {source}", path.display())]
    OutputCreation { path: PathBuf, source: io::Error },
}
