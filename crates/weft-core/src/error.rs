//! Error types for Weft Core

use thiserror::Error;

/// Errors raised by operations on a [`Value`](crate::types::Value)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Operation applied to a value of the wrong kind
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Non-nullable access to an absent object key
    #[error("key not found: {0}")]
    KeyMissing(String),

    /// Array index outside `[0, len)`
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// JSON conversion hit a value the engine does not model
    #[error("unsupported JSON value: {0}")]
    UnsupportedJsonType(String),
}

impl ValueError {
    /// Shorthand for a [`ValueError::TypeMismatch`]
    pub fn mismatch(expected: impl Into<String>, actual: impl std::fmt::Display) -> Self {
        ValueError::TypeMismatch {
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ValueError>;
