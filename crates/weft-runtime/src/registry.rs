//! Function registry consulted by the evaluator
//!
//! A case-sensitive mapping from function name to handler. Handlers own
//! their arity and type checks; the engine only resolves the name and hands
//! over the evaluated argument vector. The registry is immutable once the
//! engine is built, so it can be shared across concurrent evaluations.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use weft_core::types::Value;

/// An engine-callable named function
#[async_trait]
pub trait NativeFunction: Send + Sync {
    /// Invoke the handler with the evaluated argument vector
    async fn call(&self, args: Vec<Value>) -> Result<Value>;
}

/// Adapter turning a synchronous closure into a [`NativeFunction`]
pub struct SyncFunction<F>(pub F);

#[async_trait]
impl<F> NativeFunction for SyncFunction<F>
where
    F: Fn(Vec<Value>) -> Result<Value> + Send + Sync,
{
    async fn call(&self, args: Vec<Value>) -> Result<Value> {
        (self.0)(args)
    }
}

/// Name → handler mapping
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn NativeFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under the given name, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn NativeFunction>) {
        self.functions.insert(name.into(), handler);
    }

    /// Register a synchronous handler under the given name
    pub fn register_fn<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(name, Arc::new(SyncFunction(handler)));
    }

    /// Look up a handler by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn NativeFunction>> {
        self.functions.get(name)
    }

    /// Whether a handler is registered under the given name
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Names of every registered handler
    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }
}
