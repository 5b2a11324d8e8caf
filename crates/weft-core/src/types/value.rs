//! The tagged runtime value
//!
//! `Value` represents every datum the engine can produce or consume. It is
//! a tagged sum: every downstream operation dispatches on the kind tag.
//! Integer and Decimal form a single numeric domain; equality and ordering
//! promote across the two. Host floats are converted to Decimal on ingest,
//! so no float ever takes part in a comparison.

use super::guid::{format_guid, GuidFormat};
use super::kind::ValueKind;
use crate::error::{Result, ValueError};
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Runtime value type
#[derive(Debug, Clone)]
pub enum Value {
    /// Null value, equal only to itself
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Integer(i64),
    /// Fixed-point decimal value; carries every non-integer numeric
    Decimal(Decimal),
    /// UTF-8 string value
    String(String),
    /// 128-bit UUID
    Guid(Uuid),
    /// Instant with offset
    Date(DateTime<FixedOffset>),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Keyed values; preserves insertion order, keys unique
    Object(IndexMap<String, Value>),
}

impl Value {
    /// The kind tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::String(_) => ValueKind::String,
            Value::Guid(_) => ValueKind::Guid,
            Value::Date(_) => ValueKind::Date,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Whether this value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Convert a host float, promoting it to the Decimal domain
    ///
    /// Returns `None` for values outside the Decimal range (NaN, infinities,
    /// overly large magnitudes).
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).map(Value::Decimal)
    }

    /// Build a value from text, recognising numeric and boolean forms
    ///
    /// A string containing `.` that parses as a decimal becomes `Decimal`;
    /// otherwise a parseable integer becomes `Integer`; otherwise a
    /// parseable boolean becomes `Bool`; anything else stays `String`.
    pub fn parsed(text: &str) -> Self {
        if text.contains('.') {
            if let Ok(decimal) = text.parse::<Decimal>() {
                return Value::Decimal(decimal);
            }
        }
        if let Ok(integer) = text.parse::<i64>() {
            return Value::Integer(integer);
        }
        if let Ok(flag) = text.parse::<bool>() {
            return Value::Bool(flag);
        }
        Value::String(text.to_string())
    }

    /// Typed view: boolean
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(ValueError::mismatch("boolean", other.kind())),
        }
    }

    /// Typed view: integer; a numerically integral Decimal cross-casts
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            Value::Decimal(d) if d.is_integer() => d
                .to_i64()
                .ok_or_else(|| ValueError::mismatch("integer", "decimal out of range")),
            other => Err(ValueError::mismatch("integer", other.kind())),
        }
    }

    /// Typed view: decimal; an Integer promotes
    pub fn as_decimal(&self) -> Result<Decimal> {
        match self {
            Value::Decimal(d) => Ok(*d),
            Value::Integer(i) => Ok(Decimal::from(*i)),
            other => Err(ValueError::mismatch("decimal", other.kind())),
        }
    }

    /// Typed view: string slice
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(ValueError::mismatch("string", other.kind())),
        }
    }

    /// Typed view: GUID
    pub fn as_guid(&self) -> Result<Uuid> {
        match self {
            Value::Guid(g) => Ok(*g),
            other => Err(ValueError::mismatch("guid", other.kind())),
        }
    }

    /// Typed view: date
    pub fn as_date(&self) -> Result<DateTime<FixedOffset>> {
        match self {
            Value::Date(d) => Ok(*d),
            other => Err(ValueError::mismatch("date", other.kind())),
        }
    }

    /// Typed view: array slice
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(ValueError::mismatch("array", other.kind())),
        }
    }

    /// Typed view: object entries
    pub fn as_object(&self) -> Result<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Ok(entries),
            other => Err(ValueError::mismatch("object", other.kind())),
        }
    }

    /// Total ordering over comparable pairs
    ///
    /// Booleans, strings, GUIDs and dates order within their own kind;
    /// Integer and Decimal order numerically across the two; arrays and
    /// objects order by size within their kind. Any other pairing is a
    /// `TypeMismatch`.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
            (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => Ok(a.cmp(b)),
            (Value::Integer(a), Value::Decimal(b)) => Ok(Decimal::from(*a).cmp(b)),
            (Value::Decimal(a), Value::Integer(b)) => Ok(a.cmp(&Decimal::from(*b))),
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            (Value::Guid(a), Value::Guid(b)) => Ok(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Ok(a.cmp(b)),
            (Value::Array(a), Value::Array(b)) => Ok(a.len().cmp(&b.len())),
            (Value::Object(a), Value::Object(b)) => Ok(a.len().cmp(&b.len())),
            (a, b) => Err(ValueError::TypeMismatch {
                expected: a.kind().to_string(),
                actual: b.kind().to_string(),
            }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Integer(a), Value::Decimal(b)) | (Value::Decimal(b), Value::Integer(a)) => {
                Decimal::from(*a) == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Guid(a), Value::Guid(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // Unordered multiset of (key, value) pairs; keys are unique, so
            // equal sizes plus per-key lookup suffices.
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| v == w))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<null>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(d) => write!(f, "{}", d.normalize()),
            Value::String(s) => f.write_str(s),
            Value::Guid(g) => f.write_str(&format_guid(g, GuidFormat::Hyphenated)),
            Value::Date(d) => f.write_str(&d.to_rfc3339()),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Guid(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(value: IndexMap<String, Value>) -> Self {
        Value::Object(value)
    }
}
