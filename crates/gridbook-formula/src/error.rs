//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// Formula text does not match `=NAME(argument)`
    #[error("Parse error: {0}")]
    Parse(String),

    /// Function name is not in the supported set
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}
