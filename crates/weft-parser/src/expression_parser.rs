//! Expression grammar productions
//!
//! A `method` is a function call followed by any number of accessors:
//!
//! ```text
//! method       = function { accessor }
//! function     = letter (letter|digit)* "(" [ args ] ")"
//! args         = argument { "," argument }
//! argument     = method | string_literal | number | boolean
//! accessor     = [ "?" ] "[" ( method | string_literal | integer ) "]"
//!              | [ "?" ] "." member_name
//! ```
//!
//! Whitespace is tolerated only inside argument lists. Inside single-quoted
//! strings `''` escapes a single `'`.

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use rust_decimal::Decimal;
use weft_core::ast::Rule;
use weft_core::types::Value;

/// Parse a full method chain: a call root plus a left-fold of accessors
pub(crate) fn parse_method(cur: &mut Cursor) -> Result<Rule> {
    let mut node = parse_function(cur)?;
    while let Some(accessor) = parse_accessor(cur)? {
        node = Rule::access(node, accessor);
    }
    Ok(node)
}

fn parse_function(cur: &mut Cursor) -> Result<Rule> {
    match cur.peek() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return Err(cur.error("function name")),
    }
    let name = cur.take_while(|c| c.is_ascii_alphanumeric());
    cur.expect_char('(')?;
    cur.skip_spaces();

    let mut args = Vec::new();
    if !cur.eat_char(')') {
        loop {
            args.push(parse_argument(cur)?);
            cur.skip_spaces();
            if cur.eat_char(',') {
                cur.skip_spaces();
                continue;
            }
            break;
        }
        cur.expect_char(')')?;
    }
    Ok(Rule::invocation(name, args))
}

fn parse_argument(cur: &mut Cursor) -> Result<Rule> {
    match cur.peek() {
        Some('\'') => parse_string_literal(cur),
        Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => parse_number(cur),
        Some(c) if c.is_ascii_alphabetic() => {
            // `true`/`false` are literals unless they open a call
            let saved = cur.pos();
            let word = cur.take_while(|c| c.is_ascii_alphanumeric());
            if cur.peek() == Some('(') {
                cur.reset(saved);
                parse_method(cur)
            } else if word == "true" {
                Ok(Rule::constant(Value::Bool(true)))
            } else if word == "false" {
                Ok(Rule::constant(Value::Bool(false)))
            } else {
                Err(ParseError::new(saved, "argument"))
            }
        }
        _ => Err(cur.error("argument")),
    }
}

fn parse_number(cur: &mut Cursor) -> Result<Rule> {
    let start = cur.pos();
    let negative = match cur.peek() {
        Some('-') => {
            cur.bump();
            true
        }
        Some('+') => {
            cur.bump();
            false
        }
        _ => false,
    };

    let integral = cur.take_while(|c| c.is_ascii_digit());
    if integral.is_empty() {
        return Err(cur.error("digit"));
    }

    // Fractional part only when a digit follows the dot
    if cur.peek() == Some('.') && cur.peek_second().is_some_and(|c| c.is_ascii_digit()) {
        cur.bump();
        let fraction = cur.take_while(|c| c.is_ascii_digit());
        let mut text = format!("{integral}.{fraction}");
        if negative {
            text.insert(0, '-');
        }
        let decimal = text
            .parse::<Decimal>()
            .map_err(|_| ParseError::new(start, "decimal literal"))?;
        Ok(Rule::constant(Value::Decimal(decimal)))
    } else {
        let mut text = integral.to_string();
        if negative {
            text.insert(0, '-');
        }
        let integer = text
            .parse::<i64>()
            .map_err(|_| ParseError::new(start, "integer literal"))?;
        Ok(Rule::constant(Value::Integer(integer)))
    }
}

pub(crate) fn parse_string_literal(cur: &mut Cursor) -> Result<Rule> {
    cur.expect_char('\'')?;
    let mut text = String::new();
    loop {
        match cur.bump() {
            Some('\'') => {
                if cur.eat_char('\'') {
                    text.push('\'');
                } else {
                    return Ok(Rule::StringLiteral(Value::String(text)));
                }
            }
            Some(c) => text.push(c),
            None => return Err(cur.error("closing '")),
        }
    }
}

fn parse_accessor(cur: &mut Cursor) -> Result<Option<Rule>> {
    // Only consume '?' when an accessor actually follows
    let nullable = if cur.starts_with("?[") || cur.starts_with("?.") {
        cur.bump();
        true
    } else {
        false
    };

    if cur.eat_char('[') {
        let key = parse_bracket_key(cur)?;
        cur.expect_char(']')?;
        Ok(Some(Rule::index(key, nullable)))
    } else if cur.eat_char('.') {
        let name = cur.take_while(|c| {
            !matches!(c, '[' | ']' | '{' | '}' | '(' | ')' | '@' | ',' | '.' | '?')
        });
        if name.is_empty() {
            return Err(cur.error("member name"));
        }
        Ok(Some(Rule::index(Rule::string_literal(name), nullable)))
    } else {
        Ok(None)
    }
}

fn parse_bracket_key(cur: &mut Cursor) -> Result<Rule> {
    match cur.peek() {
        Some('\'') => parse_string_literal(cur),
        Some(c) if c.is_ascii_digit() => {
            let start = cur.pos();
            let digits = cur.take_while(|c| c.is_ascii_digit());
            let index = digits
                .parse::<i64>()
                .map_err(|_| ParseError::new(start, "array index"))?;
            Ok(Rule::constant(Value::Integer(index)))
        }
        Some(c) if c.is_ascii_alphabetic() => parse_method(cur),
        _ => Err(cur.error("bracket key")),
    }
}
