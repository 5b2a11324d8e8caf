//! Numeric functions
//!
//! Integers stay integral as long as both operands are integers; any
//! decimal operand promotes the whole operation into the Decimal domain.

use super::{expect_arity, expect_at_least};
use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use weft_core::types::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("add", add);
    registry.register_fn("sub", sub);
    registry.register_fn("mul", mul);
    registry.register_fn("div", div);
    registry.register_fn("mod", modulo);
    registry.register_fn("min", min);
    registry.register_fn("max", max);
}

fn add(args: Vec<Value>) -> Result<Value> {
    expect_arity("add", &args, 2)?;
    numeric_binary("add", &args[0], &args[1], i64::checked_add, Decimal::checked_add)
}

fn sub(args: Vec<Value>) -> Result<Value> {
    expect_arity("sub", &args, 2)?;
    numeric_binary("sub", &args[0], &args[1], i64::checked_sub, Decimal::checked_sub)
}

fn mul(args: Vec<Value>) -> Result<Value> {
    expect_arity("mul", &args, 2)?;
    numeric_binary("mul", &args[0], &args[1], i64::checked_mul, Decimal::checked_mul)
}

fn div(args: Vec<Value>) -> Result<Value> {
    expect_arity("div", &args, 2)?;
    guard_zero_divisor("div", &args[1])?;
    numeric_binary("div", &args[0], &args[1], i64::checked_div, Decimal::checked_div)
}

fn modulo(args: Vec<Value>) -> Result<Value> {
    expect_arity("mod", &args, 2)?;
    guard_zero_divisor("mod", &args[1])?;
    numeric_binary("mod", &args[0], &args[1], i64::checked_rem, Decimal::checked_rem)
}

fn min(args: Vec<Value>) -> Result<Value> {
    fold_extremum("min", args, Ordering::Less)
}

fn max(args: Vec<Value>) -> Result<Value> {
    fold_extremum("max", args, Ordering::Greater)
}

fn numeric_binary(
    function: &str,
    left: &Value,
    right: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    dec_op: fn(Decimal, Decimal) -> Option<Decimal>,
) -> Result<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => int_op(*a, *b)
            .map(Value::Integer)
            .ok_or_else(|| EvalError::argument(function, "integer overflow")),
        _ => dec_op(left.as_decimal()?, right.as_decimal()?)
            .map(Value::Decimal)
            .ok_or_else(|| EvalError::argument(function, "decimal overflow")),
    }
}

fn guard_zero_divisor(function: &str, divisor: &Value) -> Result<()> {
    if divisor.as_decimal()? == Decimal::ZERO {
        Err(EvalError::argument(function, "division by zero"))
    } else {
        Ok(())
    }
}

/// Keep the argument whose decimal promotion wins the given ordering,
/// preserving its original kind.
fn fold_extremum(function: &str, args: Vec<Value>, keep: Ordering) -> Result<Value> {
    expect_at_least(function, &args, 1)?;
    let mut best = args[0].clone();
    let mut best_key = best.as_decimal()?;
    for candidate in &args[1..] {
        let key = candidate.as_decimal()?;
        if key.cmp(&best_key) == keep {
            best = candidate.clone();
            best_key = key;
        }
    }
    Ok(best)
}
