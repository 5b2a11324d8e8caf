//! Core Engine implementation

use crate::builder::EngineBuilder;
use crate::error::Result;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use weft_core::Value;
use weft_parser::TemplateParser;
use weft_runtime::{Evaluator, FunctionRegistry, MacroSet};

/// The expression engine
///
/// Immutable after construction: the registry and macro list are fixed, so
/// one engine may serve any number of concurrent evaluations.
pub struct Engine {
    macros: MacroSet,
    evaluator: Evaluator,
}

impl Engine {
    /// Engine with the built-in catalogue and no macros
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    /// Start configuring an engine
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(registry: FunctionRegistry, macros: MacroSet) -> Self {
        Self {
            macros,
            evaluator: Evaluator::new(registry.into()),
        }
    }

    /// The registry this engine dispatches against
    pub fn registry(&self) -> &FunctionRegistry {
        self.evaluator.registry()
    }

    /// Parse and evaluate, returning the raw result
    pub async fn evaluate_to_value(&self, input: &str) -> Result<Value> {
        let source = self.macros.apply(input);
        let template = TemplateParser::parse(&source)?;
        tracing::debug!(input = %source, "evaluating template");
        Ok(self.evaluator.evaluate(&template).await?)
    }

    /// Parse and evaluate, then stringify
    ///
    /// A String value returns its inner text; any other kind renders in its
    /// diagnostic form.
    pub async fn evaluate_to_string(&self, input: &str) -> Result<String> {
        let value = self.evaluate_to_value(input).await?;
        Ok(match value {
            Value::String(text) => text,
            other => other.to_string(),
        })
    }

    /// Alias used by the JSON normalisation pipeline
    pub async fn parse_to_value(&self, input: &str) -> Result<Value> {
        self.evaluate_to_value(input).await
    }

    /// Import a JSON tree, normalising templates on the way in
    ///
    /// String leaves containing an expression (`@...` or `@{...}`) are
    /// re-parsed through the engine; every other node converts as in
    /// [`Value::from_json`]. Values the evaluator itself builds never pass
    /// through here again, so normalisation cannot loop.
    pub async fn ingest_json(&self, node: &serde_json::Value) -> Result<Value> {
        self.ingest_node(node).await
    }

    /// Parse JSON text, then import it as [`ingest_json`](Self::ingest_json)
    pub async fn ingest_json_str(&self, text: &str) -> Result<Value> {
        let node: serde_json::Value = serde_json::from_str(text)?;
        self.ingest_node(&node).await
    }

    fn ingest_node<'a>(&'a self, node: &'a serde_json::Value) -> BoxFuture<'a, Result<Value>> {
        Box::pin(async move {
            match node {
                serde_json::Value::String(text) if text.contains('@') => {
                    tracing::debug!(leaf = %text, "normalising string leaf");
                    self.parse_to_value(text).await
                }
                serde_json::Value::Array(items) if !items.is_empty() => {
                    let mut output = Vec::with_capacity(items.len());
                    for item in items {
                        output.push(self.ingest_node(item).await?);
                    }
                    Ok(Value::Array(output))
                }
                serde_json::Value::Object(map) => {
                    let mut entries = IndexMap::with_capacity(map.len());
                    for (key, child) in map {
                        entries.insert(key.clone(), self.ingest_node(child).await?);
                    }
                    Ok(Value::Object(entries))
                }
                other => Ok(Value::from_json(other)?),
            }
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
