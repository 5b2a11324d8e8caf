//! Builder pattern for Engine

use crate::engine::Engine;
use std::sync::Arc;
use weft_core::Value;
use weft_runtime::functions::register_builtins;
use weft_runtime::{FunctionRegistry, MacroSet, NativeFunction, SyncFunction};

/// Builder for [`Engine`]
///
/// Functions and macros are registered here, once; the built engine is
/// immutable. User registrations win over built-ins of the same name.
pub struct EngineBuilder {
    functions: Vec<(String, Arc<dyn NativeFunction>)>,
    macros: MacroSet,
    builtins: bool,
}

impl EngineBuilder {
    /// Create a new builder with the built-in catalogue enabled
    pub fn new() -> Self {
        Self {
            functions: Vec::new(),
            macros: MacroSet::new(),
            builtins: true,
        }
    }

    /// Enable or disable the built-in function catalogue
    pub fn with_builtins(mut self, enable: bool) -> Self {
        self.builtins = enable;
        self
    }

    /// Register a function handler
    pub fn with_function(
        mut self,
        name: impl Into<String>,
        handler: Arc<dyn NativeFunction>,
    ) -> Self {
        self.functions.push((name.into(), handler));
        self
    }

    /// Register a synchronous function handler
    pub fn with_fn<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Vec<Value>) -> weft_runtime::error::Result<Value> + Send + Sync + 'static,
    {
        self.with_function(name, Arc::new(SyncFunction(handler)))
    }

    /// Register a textual macro, applied before parsing in registration order
    pub fn with_macro(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.macros.register(from, to);
        self
    }

    /// Build the engine
    pub fn build(self) -> Engine {
        let mut registry = FunctionRegistry::new();
        if self.builtins {
            register_builtins(&mut registry);
        }
        for (name, handler) in self.functions {
            registry.register(name, handler);
        }
        tracing::debug!(functions = registry.len(), macros = self.macros.len(), "engine built");
        Engine::from_parts(registry, self.macros)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_registers_custom_function() {
        let engine = EngineBuilder::new()
            .with_fn("answer", |_| Ok(Value::Integer(42)))
            .build();
        let value = engine.evaluate_to_value("@answer()").await.unwrap();
        assert_eq!(value, Value::Integer(42));
    }

    #[tokio::test]
    async fn test_user_function_overrides_builtin() {
        let engine = EngineBuilder::new()
            .with_fn("concat", |_| Ok(Value::from("custom")))
            .build();
        let value = engine.evaluate_to_value("@concat('a', 'b')").await.unwrap();
        assert_eq!(value, Value::from("custom"));
    }

    #[tokio::test]
    async fn test_without_builtins_nothing_is_registered() {
        let engine = EngineBuilder::new().with_builtins(false).build();
        assert!(engine.registry().is_empty());

        let result = engine.evaluate_to_value("@concat('a')").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_macros_apply_before_parsing() {
        let engine = EngineBuilder::new()
            .with_macro("#shout", "@toUpper('hey')")
            .build();
        let value = engine.evaluate_to_value("#shout").await.unwrap();
        assert_eq!(value, Value::from("HEY"));
    }
}
