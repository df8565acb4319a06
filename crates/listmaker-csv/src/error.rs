//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
///
/// Ragged records are not an error: they are padded on load.
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error (missing file, permission denied, disk full)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error (for example, a field that is not valid UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
