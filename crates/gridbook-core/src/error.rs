//! Error types for gridbook-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridbook-core
///
/// Every error is a rejected input; the grid itself is never left in a
/// partial state. Out-of-bounds reads and writes are not errors here:
/// reads of unwritten cells yield `Empty` and writes grow the grid.
#[derive(Debug, Error)]
pub enum Error {
    /// Column label contained non-alphabetic characters or was empty
    #[error("Invalid column label: {0}")]
    InvalidColumnLabel(String),

    /// Malformed cell or range text (bad row number, multiple colons, ...)
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),
}
