//! Object functions
//!
//! Handlers that build new objects out of existing ones. Inputs are never
//! mutated; each handler works on its own copy.

use super::expect_arity;
use crate::error::Result;
use crate::registry::FunctionRegistry;
use weft_core::types::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("setProperty", set_property);
    registry.register_fn("removeProperty", remove_property);
}

/// Replace the leaf at a slash-separated path, creating intermediate
/// objects as needed
fn set_property(args: Vec<Value>) -> Result<Value> {
    expect_arity("setProperty", &args, 3)?;
    let mut target = args[0].clone();
    target.set_path(args[1].as_str()?, args[2].clone())?;
    Ok(target)
}

fn remove_property(args: Vec<Value>) -> Result<Value> {
    expect_arity("removeProperty", &args, 2)?;
    let key = args[1].as_str()?;
    let mut entries = args[0].as_object()?.clone();
    entries.shift_remove(key);
    Ok(Value::Object(entries))
}
