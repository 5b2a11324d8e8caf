//! Conversion functions

use super::expect_arity;
use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use rust_decimal::Decimal;
use weft_core::error::ValueError;
use weft_core::types::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("string", to_string);
    registry.register_fn("int", to_int);
    registry.register_fn("decimal", to_decimal);
    registry.register_fn("bool", to_bool);
    registry.register_fn("json", parse_json);
}

fn to_string(args: Vec<Value>) -> Result<Value> {
    expect_arity("string", &args, 1)?;
    Ok(Value::String(args[0].to_string()))
}

fn to_int(args: Vec<Value>) -> Result<Value> {
    expect_arity("int", &args, 1)?;
    match &args[0] {
        Value::Integer(i) => Ok(Value::Integer(*i)),
        decimal @ Value::Decimal(_) => Ok(Value::Integer(decimal.as_integer()?)),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| EvalError::argument("int", format!("cannot convert '{text}'"))),
        other => Err(ValueError::mismatch("integer, decimal or string", other.kind()).into()),
    }
}

fn to_decimal(args: Vec<Value>) -> Result<Value> {
    expect_arity("decimal", &args, 1)?;
    match &args[0] {
        Value::Decimal(d) => Ok(Value::Decimal(*d)),
        Value::Integer(i) => Ok(Value::Decimal(Decimal::from(*i))),
        Value::String(text) => text
            .trim()
            .parse::<Decimal>()
            .map(Value::Decimal)
            .map_err(|_| EvalError::argument("decimal", format!("cannot convert '{text}'"))),
        other => Err(ValueError::mismatch("integer, decimal or string", other.kind()).into()),
    }
}

fn to_bool(args: Vec<Value>) -> Result<Value> {
    expect_arity("bool", &args, 1)?;
    match &args[0] {
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::Integer(i) => Ok(Value::Bool(*i != 0)),
        Value::String(text) => text
            .trim()
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| EvalError::argument("bool", format!("cannot convert '{text}'"))),
        other => Err(ValueError::mismatch("boolean, integer or string", other.kind()).into()),
    }
}

fn parse_json(args: Vec<Value>) -> Result<Value> {
    expect_arity("json", &args, 1)?;
    let text = args[0].as_str()?;
    let node: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| EvalError::argument("json", format!("invalid JSON: {e}")))?;
    Ok(Value::from_json(&node)?)
}
