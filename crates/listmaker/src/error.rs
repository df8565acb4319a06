//! Error types for the editor hooks

use thiserror::Error;

use listmaker_csv::CsvError;

/// Result type for [`Editor`](crate::Editor) operations
pub type EditorResult<T> = std::result::Result<T, EditorError>;

/// Errors surfaced to the host application
#[derive(Debug, Error)]
pub enum EditorError {
    /// Loading or saving failed; the table is unchanged
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// A request addressed a position the table does not have
    #[error(transparent)]
    Table(#[from] listmaker_core::Error),

    /// A background load ended without delivering a result
    #[error("Background load did not complete: {0}")]
    LoadAborted(String),
}
