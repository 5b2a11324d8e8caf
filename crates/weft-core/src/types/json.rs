//! JSON tree conversion
//!
//! Recursive descent over a `serde_json` tree. Objects keep their insertion
//! order, an empty JSON array maps to `Null`, and every float is promoted
//! into the Decimal domain. The conversion here is the pure one: string
//! leaves pass through verbatim. The engine-aware, normalising ingestion
//! (string leaves re-parsed as templates) lives next to the engine in the
//! SDK crate.

use super::value::Value;
use crate::error::{Result, ValueError};
use indexmap::IndexMap;
use rust_decimal::prelude::ToPrimitive;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Value {
    /// Convert a JSON tree into a `Value`
    pub fn from_json(node: &serde_json::Value) -> Result<Value> {
        match node {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(number) => {
                if let Some(integer) = number.as_i64() {
                    Ok(Value::Integer(integer))
                } else {
                    number
                        .as_f64()
                        .and_then(Value::from_f64)
                        .ok_or_else(|| ValueError::UnsupportedJsonType(number.to_string()))
                }
            }
            serde_json::Value::String(text) => Ok(Value::String(text.clone())),
            serde_json::Value::Array(items) => {
                if items.is_empty() {
                    return Ok(Value::Null);
                }
                let converted = items
                    .iter()
                    .map(Value::from_json)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(converted))
            }
            serde_json::Value::Object(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (key, child) in map {
                    entries.insert(key.clone(), Value::from_json(child)?);
                }
                Ok(Value::Object(entries))
            }
        }
    }

    /// Convert this value into a JSON tree
    ///
    /// GUIDs and dates emit their textual form; a Decimal outside the f64
    /// range signals `UnsupportedJsonType`.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Integer(i) => Ok(serde_json::Value::from(*i)),
            Value::Decimal(d) => d
                .to_f64()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .ok_or_else(|| ValueError::UnsupportedJsonType(d.to_string())),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Guid(_) | Value::Date(_) => Ok(serde_json::Value::String(self.to_string())),
            Value::Array(items) => {
                let converted = items
                    .iter()
                    .map(Value::to_json)
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_json::Value::Array(converted))
            }
            Value::Object(entries) => {
                let mut map = serde_json::Map::with_capacity(entries.len());
                for (key, child) in entries {
                    map.insert(key.clone(), child.to_json()?);
                }
                Ok(serde_json::Value::Object(map))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let node = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(&node).map_err(D::Error::custom)
    }
}
