//! Weft Parser - source text to rule tree
//!
//! Recognises the template surface syntax: a bare `@method(...)` expression
//! spanning the whole input, or literal text with `@{...}` splices and `@@`
//! as the escape for `@`. Parsing is synchronous; the output is the rule
//! tree defined in `weft-core`.

mod cursor;
mod expression_parser;
mod template_parser;

pub mod error;

pub use error::ParseError;
pub use template_parser::TemplateParser;
