//! Built-in function catalogue
//!
//! The handlers workflow templates lean on day to day, grouped by concern.
//! Every handler does its own arity and type checking; the evaluator only
//! resolves names. All built-ins are synchronous and registered through the
//! [`SyncFunction`](crate::registry::SyncFunction) adapter.

mod collection;
mod conversion;
mod datetime;
mod guid;
mod logical;
mod math;
mod object;
mod string;

use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use weft_core::types::Value;

/// Register every built-in on the given registry
pub fn register_builtins(registry: &mut FunctionRegistry) {
    string::register(registry);
    collection::register(registry);
    math::register(registry);
    logical::register(registry);
    conversion::register(registry);
    datetime::register(registry);
    object::register(registry);
    guid::register(registry);
}

pub(crate) fn expect_arity(function: &str, args: &[Value], arity: usize) -> Result<()> {
    if args.len() == arity {
        Ok(())
    } else {
        Err(EvalError::argument(
            function,
            format!("expects {arity} argument(s), got {}", args.len()),
        ))
    }
}

pub(crate) fn expect_arity_between(
    function: &str,
    args: &[Value],
    min: usize,
    max: usize,
) -> Result<()> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(EvalError::argument(
            function,
            format!("expects {min} to {max} arguments, got {}", args.len()),
        ))
    }
}

pub(crate) fn expect_at_least(function: &str, args: &[Value], min: usize) -> Result<()> {
    if args.len() >= min {
        Ok(())
    } else {
        Err(EvalError::argument(
            function,
            format!("expects at least {min} argument(s), got {}", args.len()),
        ))
    }
}
