//! AST definitions for parsed templates

mod rule;

pub use rule::{Rule, Segment, Template};
