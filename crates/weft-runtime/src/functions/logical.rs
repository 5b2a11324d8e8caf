//! Comparison and logic functions
//!
//! Comparisons delegate to the value model's total ordering, so numeric
//! kinds compare across Integer/Decimal and incomparable kinds surface a
//! type mismatch. Arguments are already evaluated when a handler runs, so
//! `if`, `and` and `or` are eager.

use super::{expect_arity, expect_at_least};
use crate::error::Result;
use crate::registry::FunctionRegistry;
use std::cmp::Ordering;
use weft_core::types::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("equals", equals);
    registry.register_fn("not", not);
    registry.register_fn("and", and);
    registry.register_fn("or", or);
    registry.register_fn("greater", |args| comparison("greater", args, &[Ordering::Greater]));
    registry.register_fn("greaterOrEquals", |args| {
        comparison("greaterOrEquals", args, &[Ordering::Greater, Ordering::Equal])
    });
    registry.register_fn("less", |args| comparison("less", args, &[Ordering::Less]));
    registry.register_fn("lessOrEquals", |args| {
        comparison("lessOrEquals", args, &[Ordering::Less, Ordering::Equal])
    });
    registry.register_fn("if", if_then_else);
    registry.register_fn("coalesce", coalesce);
}

fn equals(args: Vec<Value>) -> Result<Value> {
    expect_arity("equals", &args, 2)?;
    Ok(Value::Bool(args[0] == args[1]))
}

fn not(args: Vec<Value>) -> Result<Value> {
    expect_arity("not", &args, 1)?;
    Ok(Value::Bool(!args[0].as_bool()?))
}

fn and(args: Vec<Value>) -> Result<Value> {
    expect_at_least("and", &args, 2)?;
    for arg in &args {
        if !arg.as_bool()? {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn or(args: Vec<Value>) -> Result<Value> {
    expect_at_least("or", &args, 2)?;
    for arg in &args {
        if arg.as_bool()? {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

fn comparison(function: &str, args: Vec<Value>, accepted: &[Ordering]) -> Result<Value> {
    expect_arity(function, &args, 2)?;
    let ordering = args[0].compare(&args[1])?;
    Ok(Value::Bool(accepted.contains(&ordering)))
}

fn if_then_else(args: Vec<Value>) -> Result<Value> {
    expect_arity("if", &args, 3)?;
    let condition = args[0].as_bool()?;
    Ok(args[if condition { 1 } else { 2 }].clone())
}

fn coalesce(args: Vec<Value>) -> Result<Value> {
    expect_at_least("coalesce", &args, 1)?;
    Ok(args.iter().find(|arg| !arg.is_null()).cloned().unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use weft_core::error::ValueError;

    #[test]
    fn test_equals_is_structural() {
        assert_eq!(
            equals(vec![Value::Integer(2), Value::Decimal("2.0".parse().unwrap())]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            equals(vec![Value::from("a"), Value::from("b")]).unwrap(),
            Value::Bool(false)
        );
        // mismatched kinds are unequal, not an error
        assert_eq!(
            equals(vec![Value::Integer(1), Value::from("1")]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(not(vec![Value::Bool(false)]).unwrap(), Value::Bool(true));
        assert!(not(vec![Value::Integer(1)]).is_err());
    }

    #[test]
    fn test_and_or() {
        assert_eq!(
            and(vec![Value::Bool(true), Value::Bool(true)]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            and(vec![Value::Bool(true), Value::Bool(false)]).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            or(vec![Value::Bool(false), Value::Bool(true)]).unwrap(),
            Value::Bool(true)
        );
        assert!(and(vec![Value::Bool(true)]).is_err());
    }

    #[test]
    fn test_comparisons() {
        let greater = comparison(
            "greater",
            vec![Value::Integer(3), Value::Decimal("2.5".parse().unwrap())],
            &[Ordering::Greater],
        )
        .unwrap();
        assert_eq!(greater, Value::Bool(true));

        let le = comparison(
            "lessOrEquals",
            vec![Value::Integer(2), Value::Integer(2)],
            &[Ordering::Less, Ordering::Equal],
        )
        .unwrap();
        assert_eq!(le, Value::Bool(true));
    }

    #[test]
    fn test_comparison_type_mismatch() {
        let result = comparison(
            "greater",
            vec![Value::Integer(1), Value::from("x")],
            &[Ordering::Greater],
        );
        assert!(matches!(result, Err(EvalError::Value(ValueError::TypeMismatch { .. }))));
    }

    #[test]
    fn test_if_picks_branch() {
        let result = if_then_else(vec![Value::Bool(true), Value::from("a"), Value::from("b")]);
        assert_eq!(result.unwrap(), Value::from("a"));
        let result = if_then_else(vec![Value::Bool(false), Value::from("a"), Value::from("b")]);
        assert_eq!(result.unwrap(), Value::from("b"));
    }

    #[test]
    fn test_coalesce() {
        let result = coalesce(vec![Value::Null, Value::Null, Value::Integer(7)]).unwrap();
        assert_eq!(result, Value::Integer(7));
        assert_eq!(coalesce(vec![Value::Null]).unwrap(), Value::Null);
    }
}
