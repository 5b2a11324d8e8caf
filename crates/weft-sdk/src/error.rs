//! SDK error types

use thiserror::Error;

/// Engine boundary error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Grammar violation in the source string
    #[error("Parse error: {0}")]
    Parse(#[from] weft_parser::ParseError),

    /// Evaluation failure
    #[error("Evaluation error: {0}")]
    Eval(#[from] weft_runtime::EvalError),

    /// Value-level failure outside evaluation (ingestion, conversion)
    #[error("Value error: {0}")]
    Value(#[from] weft_core::ValueError),

    /// Malformed JSON handed to ingestion
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
