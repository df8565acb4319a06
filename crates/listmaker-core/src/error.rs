//! Error types for listmaker-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in listmaker-core
///
/// Both variants signal a caller that disagrees with the table about its
/// dimensions. They are reported, never recovered from, and the table is left
/// exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row position out of bounds
    #[error("Row position {position} out of bounds (rows: {len})")]
    RowOutOfBounds { position: usize, len: usize },

    /// Column position out of bounds
    #[error("Column position {position} out of bounds (columns: {len})")]
    ColumnOutOfBounds { position: usize, len: usize },
}

impl Error {
    /// Build the out-of-bounds error for the given axis
    pub fn out_of_bounds(axis: crate::Axis, position: usize, len: usize) -> Self {
        match axis {
            crate::Axis::Row => Error::RowOutOfBounds { position, len },
            crate::Axis::Column => Error::ColumnOutOfBounds { position, len },
        }
    }
}
