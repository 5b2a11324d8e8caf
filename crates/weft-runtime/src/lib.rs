//! Weft Runtime - rule tree evaluation
//!
//! Interprets the rule tree produced by `weft-parser` against a registry of
//! named functions. Evaluation is asynchronous throughout: rules, function
//! handlers and the public entry points all suspend cooperatively. The
//! built-in function catalogue and the textual macro pre-pass live here.

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod macros;
pub mod registry;

pub use error::EvalError;
pub use evaluator::Evaluator;
pub use macros::MacroSet;
pub use registry::{FunctionRegistry, NativeFunction, SyncFunction};
