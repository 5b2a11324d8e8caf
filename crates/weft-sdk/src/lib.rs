//! Weft SDK - the public engine API
//!
//! Ties the workspace together: macro pre-pass, parser, evaluator and
//! function registry behind one immutable [`Engine`]. Build an engine once
//! with [`EngineBuilder`], then evaluate template strings from any number
//! of concurrent callers:
//!
//! ```
//! use weft_sdk::Engine;
//!
//! # async fn demo() -> Result<(), weft_sdk::EngineError> {
//! let engine = Engine::new();
//! let text = engine
//!     .evaluate_to_string("@concat('hello ', toUpper('world'))")
//!     .await?;
//! assert_eq!(text, "hello WORLD");
//! # Ok(())
//! # }
//! ```

mod builder;
mod engine;

pub mod error;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::EngineError;

// Re-export the types callers touch at the API surface
pub use weft_core::{GuidFormat, Value, ValueError, ValueKind};
pub use weft_runtime::{EvalError, NativeFunction};
