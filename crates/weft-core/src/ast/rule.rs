//! Rule tree nodes
//!
//! The parser lowers a source string into this tree; the evaluator walks it.
//! Accessor chains are a left-fold over the call at their root, so
//! `f(x)[1].y` becomes `Access(Access(f(x), [1]), .y)`.

use crate::types::Value;

/// A node of the parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Literal fold of `true`, `false` and numeric literals
    Constant(Value),

    /// Single-quoted string literal
    StringLiteral(Value),

    /// Named function invocation
    Invocation { name: String, args: Vec<Rule> },

    /// Bracket or dot accessor reading into the surrounding value; the
    /// nullable flag corresponds to a `?` before the accessor
    Index { key: Box<Rule>, nullable: bool },

    /// Evaluate `base`, then evaluate `accessor` against the result
    Access { base: Box<Rule>, accessor: Box<Rule> },
}

impl Rule {
    /// Create a constant rule
    pub fn constant(value: Value) -> Self {
        Rule::Constant(value)
    }

    /// Create a string-literal rule
    pub fn string_literal(text: impl Into<String>) -> Self {
        Rule::StringLiteral(Value::String(text.into()))
    }

    /// Create an invocation rule
    pub fn invocation(name: impl Into<String>, args: Vec<Rule>) -> Self {
        Rule::Invocation {
            name: name.into(),
            args,
        }
    }

    /// Create an index accessor rule
    pub fn index(key: Rule, nullable: bool) -> Self {
        Rule::Index {
            key: Box::new(key),
            nullable,
        }
    }

    /// Create an access composition rule
    pub fn access(base: Rule, accessor: Rule) -> Self {
        Rule::Access {
            base: Box::new(base),
            accessor: Box::new(accessor),
        }
    }
}

/// One segment of an interpolated input string
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Verbatim text between expressions
    Literal(String),
    /// An `@{...}` expression whose result is stringified in place
    Expression(Rule),
}

/// Top-level parse result for one input string
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// The whole input was a bare `@...` expression
    Expression(Rule),
    /// Literal text with zero or more `@{...}` splices
    JoinedString(Vec<Segment>),
}
