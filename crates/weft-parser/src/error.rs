//! Parser error types

use thiserror::Error;

/// Parse failure with the byte offset where it occurred
#[derive(Error, Debug, Clone, PartialEq)]
#[error("parse error at offset {position}: expected {expected}")]
pub struct ParseError {
    /// Byte offset into the source string
    pub position: usize,
    /// Description of the expected production
    pub expected: String,
}

impl ParseError {
    /// Create a parse error at the given offset
    pub fn new(position: usize, expected: impl Into<String>) -> Self {
        Self {
            position,
            expected: expected.into(),
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
