//! Textual macro pre-pass
//!
//! Registered `(from, to)` pairs are applied as plain find-and-replace in
//! registration order, before the source string reaches the parser. This is
//! the engine's only extension point for user-defined shortcuts.

use std::borrow::Cow;

/// Ordered `from → to` substitutions
#[derive(Debug, Clone, Default)]
pub struct MacroSet {
    substitutions: Vec<(String, String)>,
}

impl MacroSet {
    /// Create an empty macro set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a substitution pair
    pub fn register(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.substitutions.push((from.into(), to.into()));
    }

    /// Apply every substitution to the input, in registration order
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.substitutions.is_empty() {
            return Cow::Borrowed(input);
        }
        let mut output = input.to_string();
        for (from, to) in &self.substitutions {
            output = output.replace(from, to);
        }
        Cow::Owned(output)
    }

    /// Number of registered substitutions
    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    /// Whether no substitutions are registered
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}
