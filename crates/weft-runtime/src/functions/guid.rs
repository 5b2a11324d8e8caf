//! Fresh GUID generation
//!
//! The one deliberately side-effectful built-in: every call produces a new
//! random UUID, rendered as text in the requested layout.

use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use uuid::Uuid;
use weft_core::types::{format_guid, GuidFormat, Value};

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("guid", guid);
}

fn guid(args: Vec<Value>) -> Result<Value> {
    let format = match args.as_slice() {
        [] => GuidFormat::default(),
        [Value::String(specifier)] => GuidFormat::from_specifier(specifier)
            .ok_or_else(|| EvalError::argument("guid", format!("unknown format '{specifier}'")))?,
        [other] => {
            return Err(EvalError::argument(
                "guid",
                format!("format must be a string, got {}", other.kind()),
            ))
        }
        _ => return Err(EvalError::argument("guid", "expects at most one argument")),
    };
    Ok(Value::String(format_guid(&Uuid::new_v4(), format)))
}
