//! String functions

use super::{expect_arity, expect_arity_between};
use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use weft_core::types::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("concat", concat);
    registry.register_fn("toUpper", to_upper);
    registry.register_fn("toLower", to_lower);
    registry.register_fn("trim", trim);
    registry.register_fn("replace", replace);
    registry.register_fn("split", split);
    registry.register_fn("substring", substring);
    registry.register_fn("indexOf", index_of);
    registry.register_fn("startsWith", starts_with);
    registry.register_fn("endsWith", ends_with);
}

fn concat(args: Vec<Value>) -> Result<Value> {
    let mut output = String::new();
    for arg in &args {
        output.push_str(&arg.to_string());
    }
    Ok(Value::String(output))
}

fn to_upper(args: Vec<Value>) -> Result<Value> {
    expect_arity("toUpper", &args, 1)?;
    Ok(Value::String(args[0].as_str()?.to_uppercase()))
}

fn to_lower(args: Vec<Value>) -> Result<Value> {
    expect_arity("toLower", &args, 1)?;
    Ok(Value::String(args[0].as_str()?.to_lowercase()))
}

fn trim(args: Vec<Value>) -> Result<Value> {
    expect_arity("trim", &args, 1)?;
    Ok(Value::String(args[0].as_str()?.trim().to_string()))
}

fn replace(args: Vec<Value>) -> Result<Value> {
    expect_arity("replace", &args, 3)?;
    let text = args[0].as_str()?;
    let from = args[1].as_str()?;
    let to = args[2].as_str()?;
    if from.is_empty() {
        return Err(EvalError::argument("replace", "search text must not be empty"));
    }
    Ok(Value::String(text.replace(from, to)))
}

fn split(args: Vec<Value>) -> Result<Value> {
    expect_arity("split", &args, 2)?;
    let text = args[0].as_str()?;
    let separator = args[1].as_str()?;
    if separator.is_empty() {
        return Err(EvalError::argument("split", "separator must not be empty"));
    }
    let parts = text
        .split(separator)
        .map(|part| Value::String(part.to_string()))
        .collect();
    Ok(Value::Array(parts))
}

fn substring(args: Vec<Value>) -> Result<Value> {
    expect_arity_between("substring", &args, 2, 3)?;
    let text = args[0].as_str()?;
    let start = args[1].as_integer()?;
    let start = usize::try_from(start)
        .map_err(|_| EvalError::argument("substring", "start must not be negative"))?;

    let total = text.chars().count();
    if start > total {
        return Err(EvalError::argument("substring", "start is past the end of the string"));
    }

    let rest = total - start;
    let length = match args.get(2) {
        Some(value) => {
            let length = value.as_integer()?;
            let length = usize::try_from(length)
                .map_err(|_| EvalError::argument("substring", "length must not be negative"))?;
            if length > rest {
                return Err(EvalError::argument("substring", "length is past the end of the string"));
            }
            length
        }
        None => rest,
    };

    Ok(Value::String(text.chars().skip(start).take(length).collect()))
}

fn index_of(args: Vec<Value>) -> Result<Value> {
    expect_arity("indexOf", &args, 2)?;
    let text = args[0].as_str()?;
    let needle = args[1].as_str()?;
    let position = match text.find(needle) {
        Some(byte_offset) => text[..byte_offset].chars().count() as i64,
        None => -1,
    };
    Ok(Value::Integer(position))
}

fn starts_with(args: Vec<Value>) -> Result<Value> {
    expect_arity("startsWith", &args, 2)?;
    Ok(Value::Bool(args[0].as_str()?.starts_with(args[1].as_str()?)))
}

fn ends_with(args: Vec<Value>) -> Result<Value> {
    expect_arity("endsWith", &args, 2)?;
    Ok(Value::Bool(args[0].as_str()?.ends_with(args[1].as_str()?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_stringifies_every_kind() {
        let result = concat(vec![
            Value::from("n="),
            Value::Integer(3),
            Value::from(", ok="),
            Value::Bool(true),
        ])
        .unwrap();
        assert_eq!(result, Value::from("n=3, ok=true"));
    }

    #[test]
    fn test_concat_empty_is_empty_string() {
        assert_eq!(concat(vec![]).unwrap(), Value::from(""));
    }

    #[test]
    fn test_case_functions() {
        assert_eq!(to_upper(vec![Value::from("abc")]).unwrap(), Value::from("ABC"));
        assert_eq!(to_lower(vec![Value::from("AbC")]).unwrap(), Value::from("abc"));
        assert!(to_upper(vec![Value::Integer(1)]).is_err());
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim(vec![Value::from("  x \t")]).unwrap(), Value::from("x"));
    }

    #[test]
    fn test_replace() {
        let result = replace(vec![
            Value::from("a-b-c"),
            Value::from("-"),
            Value::from("+"),
        ])
        .unwrap();
        assert_eq!(result, Value::from("a+b+c"));

        let empty = replace(vec![Value::from("x"), Value::from(""), Value::from("y")]);
        assert!(matches!(empty, Err(EvalError::Argument { .. })));
    }

    #[test]
    fn test_split() {
        let result = split(vec![Value::from("a,b,,c"), Value::from(",")]).unwrap();
        assert_eq!(
            result,
            Value::Array(vec![
                Value::from("a"),
                Value::from("b"),
                Value::from(""),
                Value::from("c"),
            ])
        );
    }

    #[test]
    fn test_substring_char_based() {
        let result = substring(vec![
            Value::from("héllo"),
            Value::Integer(1),
            Value::Integer(3),
        ])
        .unwrap();
        assert_eq!(result, Value::from("éll"));

        let tail = substring(vec![Value::from("héllo"), Value::Integer(2)]).unwrap();
        assert_eq!(tail, Value::from("llo"));
    }

    #[test]
    fn test_substring_bounds() {
        assert!(substring(vec![Value::from("ab"), Value::Integer(3)]).is_err());
        assert!(substring(vec![Value::from("ab"), Value::Integer(-1)]).is_err());
        assert!(substring(vec![
            Value::from("ab"),
            Value::Integer(1),
            Value::Integer(5)
        ])
        .is_err());
    }

    #[test]
    fn test_index_of_counts_chars() {
        let result = index_of(vec![Value::from("héllo"), Value::from("llo")]).unwrap();
        assert_eq!(result, Value::Integer(2));

        let missing = index_of(vec![Value::from("abc"), Value::from("z")]).unwrap();
        assert_eq!(missing, Value::Integer(-1));
    }

    #[test]
    fn test_affix_checks() {
        assert_eq!(
            starts_with(vec![Value::from("abc"), Value::from("ab")]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            ends_with(vec![Value::from("abc"), Value::from("ab")]).unwrap(),
            Value::Bool(false)
        );
    }
}
