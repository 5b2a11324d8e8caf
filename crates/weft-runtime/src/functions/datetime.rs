//! Date functions
//!
//! Dates are instants with offset. Textual arguments must be RFC 3339;
//! format patterns use strftime specifiers and are validated before
//! rendering.

use super::{expect_arity, expect_arity_between};
use crate::error::{EvalError, Result};
use crate::registry::FunctionRegistry;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, FixedOffset, Utc};
use weft_core::types::Value;

pub(super) fn register(registry: &mut FunctionRegistry) {
    registry.register_fn("utcNow", utc_now);
    registry.register_fn("addDays", add_days);
    registry.register_fn("formatDateTime", format_date_time);
}

fn utc_now(args: Vec<Value>) -> Result<Value> {
    expect_arity_between("utcNow", &args, 0, 1)?;
    let now = Utc::now().fixed_offset();
    match args.first() {
        None => Ok(Value::Date(now)),
        Some(pattern) => {
            let rendered = render("utcNow", &now, pattern.as_str()?)?;
            Ok(Value::String(rendered))
        }
    }
}

fn add_days(args: Vec<Value>) -> Result<Value> {
    expect_arity("addDays", &args, 2)?;
    let date = as_date("addDays", &args[0])?;
    let days = args[1].as_integer()?;
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .map(Value::Date)
        .ok_or_else(|| EvalError::argument("addDays", "resulting date out of range"))
}

fn format_date_time(args: Vec<Value>) -> Result<Value> {
    expect_arity("formatDateTime", &args, 2)?;
    let date = as_date("formatDateTime", &args[0])?;
    let rendered = render("formatDateTime", &date, args[1].as_str()?)?;
    Ok(Value::String(rendered))
}

/// Accept a Date value or an RFC 3339 string
fn as_date(function: &str, value: &Value) -> Result<DateTime<FixedOffset>> {
    match value {
        Value::Date(date) => Ok(*date),
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map_err(|e| EvalError::argument(function, format!("invalid date '{text}': {e}"))),
        other => Err(EvalError::argument(
            function,
            format!("expects a date or RFC 3339 string, got {}", other.kind()),
        )),
    }
}

fn render(function: &str, date: &DateTime<FixedOffset>, pattern: &str) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(EvalError::argument(function, format!("invalid format '{pattern}'")));
    }
    Ok(date.format_with_items(items.into_iter()).to_string())
}
