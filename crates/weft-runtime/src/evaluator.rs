//! Rule tree evaluation
//!
//! The evaluator walks the parsed tree recursively. Arguments of a call and
//! segments of a joined string evaluate left-to-right in source order; the
//! first error aborts the whole evaluation. Accessors evaluate against the
//! value produced by their base, threaded through as the current scope.

use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use futures::future::BoxFuture;
use std::sync::Arc;
use weft_core::ast::{Rule, Segment, Template};
use weft_core::error::ValueError;
use weft_core::types::Value;

/// Interprets parsed templates against a function registry
pub struct Evaluator {
    registry: Arc<FunctionRegistry>,
}

impl Evaluator {
    /// Create an evaluator over the given registry
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this evaluator dispatches against
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Evaluate a parsed template to its final value
    ///
    /// A bare expression returns its value directly. A joined string
    /// stringifies each spliced expression and concatenates the segments in
    /// source order into one String value.
    pub async fn evaluate(&self, template: &Template) -> Result<Value> {
        match template {
            Template::Expression(rule) => self.eval_rule(rule, None).await,
            Template::JoinedString(segments) => {
                let mut output = String::new();
                for segment in segments {
                    match segment {
                        Segment::Literal(text) => output.push_str(text),
                        Segment::Expression(rule) => {
                            let value = self.eval_rule(rule, None).await?;
                            output.push_str(&value.to_string());
                        }
                    }
                }
                Ok(Value::String(output))
            }
        }
    }

    fn eval_rule<'a>(
        &'a self,
        rule: &'a Rule,
        scope: Option<&'a Value>,
    ) -> BoxFuture<'a, Result<Value>> {
        Box::pin(async move {
            match rule {
                Rule::Constant(value) | Rule::StringLiteral(value) => Ok(value.clone()),

                Rule::Invocation { name, args } => {
                    let handler = self
                        .registry
                        .get(name)
                        .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                    let mut evaluated = Vec::with_capacity(args.len());
                    for arg in args {
                        evaluated.push(self.eval_rule(arg, scope).await?);
                    }
                    tracing::trace!(function = %name, argc = evaluated.len(), "dispatching");
                    handler.call(evaluated).await
                }

                Rule::Access { base, accessor } => {
                    let value = self.eval_rule(base, scope).await?;
                    self.eval_rule(accessor, Some(&value)).await
                }

                Rule::Index { key, nullable } => {
                    let Some(current) = scope else {
                        return Err(ValueError::mismatch("indexable value", "nothing").into());
                    };
                    if current.is_null() && *nullable {
                        return Ok(Value::Null);
                    }
                    let key = self.eval_rule(key, None).await?;
                    index_value(current, &key, *nullable)
                }
            }
        })
    }
}

/// Resolve one accessor step against the current value
fn index_value(current: &Value, key: &Value, nullable: bool) -> Result<Value> {
    match key {
        Value::String(name) => {
            let entries = current.as_object().map_err(EvalError::from)?;
            match entries.get(name) {
                Some(found) => Ok(found.clone()),
                None if nullable => Ok(Value::Null),
                None => Err(ValueError::KeyMissing(name.clone()).into()),
            }
        }
        Value::Integer(index) => Ok(current.index(*index).map_err(EvalError::from)?.clone()),
        other => Err(ValueError::mismatch("string or integer key", other.kind()).into()),
    }
}
