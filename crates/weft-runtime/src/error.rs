//! Runtime error types

use thiserror::Error;
use weft_core::error::ValueError;

/// Evaluation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Function name not present in the registry
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong arity or unrecognised option at a handler
    #[error("{function}: {message}")]
    Argument { function: String, message: String },

    /// Host cancellation propagated during evaluation
    #[error("evaluation cancelled")]
    Cancelled,

    /// Value-level failure (type mismatch, missing key, bad index)
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl EvalError {
    /// Shorthand for an [`EvalError::Argument`]
    pub fn argument(function: &str, message: impl Into<String>) -> Self {
        EvalError::Argument {
            function: function.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, EvalError>;
