//! Collection functions

use super::{expect_arity, expect_at_least};
use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use indexmap::IndexMap;
use weft_core::error::ValueError;
use weft_core::types::{Value, ValueKind};

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("createArray", create_array);
    registry.register_fn("first", first);
    registry.register_fn("last", last);
    registry.register_fn("length", length);
    registry.register_fn("contains", contains);
    registry.register_fn("skip", skip);
    registry.register_fn("take", take);
    registry.register_fn("join", join);
    registry.register_fn("union", union);
    registry.register_fn("empty", empty);
}

fn create_array(args: Vec<Value>) -> Result<Value> {
    Ok(Value::Array(args))
}

fn first(args: Vec<Value>) -> Result<Value> {
    expect_arity("first", &args, 1)?;
    match &args[0] {
        Value::Array(items) => Ok(items.first().cloned().unwrap_or(Value::Null)),
        Value::String(text) => Ok(text
            .chars()
            .next()
            .map(|c| Value::String(c.to_string()))
            .unwrap_or(Value::Null)),
        other => Err(ValueError::mismatch("array or string", other.kind()).into()),
    }
}

fn last(args: Vec<Value>) -> Result<Value> {
    expect_arity("last", &args, 1)?;
    match &args[0] {
        Value::Array(items) => Ok(items.last().cloned().unwrap_or(Value::Null)),
        Value::String(text) => Ok(text
            .chars()
            .next_back()
            .map(|c| Value::String(c.to_string()))
            .unwrap_or(Value::Null)),
        other => Err(ValueError::mismatch("array or string", other.kind()).into()),
    }
}

fn length(args: Vec<Value>) -> Result<Value> {
    expect_arity("length", &args, 1)?;
    match &args[0] {
        Value::Array(items) => Ok(Value::Integer(items.len() as i64)),
        Value::String(text) => Ok(Value::Integer(text.chars().count() as i64)),
        other => Err(ValueError::mismatch("array or string", other.kind()).into()),
    }
}

fn contains(args: Vec<Value>) -> Result<Value> {
    expect_arity("contains", &args, 2)?;
    match &args[0] {
        Value::String(text) => Ok(Value::Bool(text.contains(args[1].as_str()?))),
        Value::Array(items) => Ok(Value::Bool(items.contains(&args[1]))),
        object @ Value::Object(_) => Ok(Value::Bool(object.contains_path(args[1].as_str()?))),
        other => Err(ValueError::mismatch("string, array or object", other.kind()).into()),
    }
}

fn skip(args: Vec<Value>) -> Result<Value> {
    let count = offset("skip", &args)?;
    let items = args[0].as_array()?;
    Ok(Value::Array(items.iter().skip(count).cloned().collect()))
}

fn take(args: Vec<Value>) -> Result<Value> {
    let count = offset("take", &args)?;
    let items = args[0].as_array()?;
    Ok(Value::Array(items.iter().take(count).cloned().collect()))
}

fn offset(function: &str, args: &[Value]) -> Result<usize> {
    expect_arity(function, args, 2)?;
    let count = args[1].as_integer()?;
    usize::try_from(count)
        .map_err(|_| EvalError::argument(function, "count must not be negative"))
}

fn join(args: Vec<Value>) -> Result<Value> {
    expect_arity("join", &args, 2)?;
    let items = args[0].as_array()?;
    let separator = args[1].as_str()?;
    let parts: Vec<String> = items.iter().map(Value::to_string).collect();
    Ok(Value::String(parts.join(separator)))
}

/// Union of arrays (deduplicated, first-seen order) or of objects (later
/// keys overwrite earlier). Every argument must share the kind of the first.
fn union(args: Vec<Value>) -> Result<Value> {
    expect_at_least("union", &args, 1)?;
    match args[0].kind() {
        ValueKind::Array => {
            let mut output: Vec<Value> = Vec::new();
            for arg in &args {
                for item in arg.as_array()? {
                    if !output.contains(item) {
                        output.push(item.clone());
                    }
                }
            }
            Ok(Value::Array(output))
        }
        ValueKind::Object => {
            let mut output: IndexMap<String, Value> = IndexMap::new();
            for arg in &args {
                for (key, value) in arg.as_object()? {
                    output.insert(key.clone(), value.clone());
                }
            }
            Ok(Value::Object(output))
        }
        other => Err(ValueError::mismatch("array or object", other).into()),
    }
}

/// True iff the value is Null, an empty string, an empty array or an empty
/// object; any other kind is a type mismatch.
fn empty(args: Vec<Value>) -> Result<Value> {
    expect_arity("empty", &args, 1)?;
    match &args[0] {
        Value::Null => Ok(Value::Bool(true)),
        Value::String(text) => Ok(Value::Bool(text.is_empty())),
        Value::Array(items) => Ok(Value::Bool(items.is_empty())),
        Value::Object(entries) => Ok(Value::Bool(entries.is_empty())),
        other => Err(ValueError::mismatch("null, string, array or object", other.kind()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Value {
        Value::Array(values.iter().map(|&v| Value::Integer(v)).collect())
    }

    #[test]
    fn test_create_array() {
        assert_eq!(create_array(vec![]).unwrap(), Value::Array(vec![]));
        assert_eq!(
            create_array(vec![Value::Integer(1), Value::from("a")]).unwrap(),
            Value::Array(vec![Value::Integer(1), Value::from("a")])
        );
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(first(vec![ints(&[1, 2, 3])]).unwrap(), Value::Integer(1));
        assert_eq!(last(vec![ints(&[1, 2, 3])]).unwrap(), Value::Integer(3));
        assert_eq!(first(vec![ints(&[])]).unwrap(), Value::Null);
        assert_eq!(first(vec![Value::from("abc")]).unwrap(), Value::from("a"));
        assert_eq!(last(vec![Value::from("abc")]).unwrap(), Value::from("c"));
        assert!(first(vec![Value::Integer(1)]).is_err());
    }

    #[test]
    fn test_length() {
        assert_eq!(length(vec![ints(&[1, 2])]).unwrap(), Value::Integer(2));
        assert_eq!(length(vec![Value::from("héllo")]).unwrap(), Value::Integer(5));
        assert!(length(vec![Value::Bool(true)]).is_err());
    }

    #[test]
    fn test_contains_per_kind() {
        assert_eq!(
            contains(vec![Value::from("hello"), Value::from("ell")]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            contains(vec![ints(&[1, 2]), Value::Integer(2)]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            contains(vec![ints(&[1, 2]), Value::Integer(9)]).unwrap(),
            Value::Bool(false)
        );

        let mut entries = IndexMap::new();
        entries.insert("a".to_string(), Value::Object(IndexMap::new()));
        let object = Value::Object(entries);
        assert_eq!(
            contains(vec![object.clone(), Value::from("a")]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            contains(vec![object, Value::from("b")]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_skip_and_take() {
        assert_eq!(
            skip(vec![ints(&[1, 2, 3]), Value::Integer(2)]).unwrap(),
            ints(&[3])
        );
        assert_eq!(
            skip(vec![ints(&[1]), Value::Integer(5)]).unwrap(),
            ints(&[])
        );
        assert_eq!(
            take(vec![ints(&[1, 2, 3]), Value::Integer(2)]).unwrap(),
            ints(&[1, 2])
        );
        assert!(take(vec![ints(&[1]), Value::Integer(-1)]).is_err());
    }

    #[test]
    fn test_join() {
        let result = join(vec![ints(&[1, 2, 3]), Value::from("-")]).unwrap();
        assert_eq!(result, Value::from("1-2-3"));
    }

    #[test]
    fn test_union_arrays_dedups_in_first_seen_order() {
        let result = union(vec![ints(&[1, 2]), ints(&[2, 3])]).unwrap();
        assert_eq!(result, ints(&[1, 2, 3]));
    }

    #[test]
    fn test_union_arrays_dedup_crosses_numeric_kinds() {
        // 2 and 2.0 are structurally equal, so only the first survives
        let decimals = Value::Array(vec![Value::Decimal("2.0".parse().unwrap())]);
        let result = union(vec![ints(&[2]), decimals]).unwrap();
        assert_eq!(result, ints(&[2]));
    }

    #[test]
    fn test_union_is_idempotent() {
        let array = ints(&[1, 2, 3]);
        assert_eq!(union(vec![array.clone(), array.clone()]).unwrap(), array);

        let mut entries = IndexMap::new();
        entries.insert("a".to_string(), Value::Integer(1));
        let object = Value::Object(entries);
        assert_eq!(union(vec![object.clone(), object.clone()]).unwrap(), object);
    }

    #[test]
    fn test_union_objects_later_keys_win() {
        let mut left = IndexMap::new();
        left.insert("a".to_string(), Value::Integer(1));
        left.insert("b".to_string(), Value::Integer(2));
        let mut right = IndexMap::new();
        right.insert("b".to_string(), Value::Integer(20));
        right.insert("c".to_string(), Value::Integer(3));

        let result = union(vec![Value::Object(left), Value::Object(right)]).unwrap();
        let entries = result.as_object().unwrap();
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(entries["b"], Value::Integer(20));
    }

    #[test]
    fn test_union_rejects_mixed_kinds() {
        let result = union(vec![ints(&[1]), Value::from("x")]);
        assert!(matches!(result, Err(EvalError::Value(ValueError::TypeMismatch { .. }))));

        let scalar = union(vec![Value::Integer(1), Value::Integer(2)]);
        assert!(matches!(scalar, Err(EvalError::Value(ValueError::TypeMismatch { .. }))));
    }

    #[test]
    fn test_empty() {
        assert_eq!(empty(vec![Value::Null]).unwrap(), Value::Bool(true));
        assert_eq!(empty(vec![Value::from("")]).unwrap(), Value::Bool(true));
        assert_eq!(empty(vec![ints(&[])]).unwrap(), Value::Bool(true));
        assert_eq!(
            empty(vec![Value::Object(IndexMap::new())]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(empty(vec![Value::from("x")]).unwrap(), Value::Bool(false));
        assert!(empty(vec![Value::Integer(0)]).is_err());
    }
}
