//! Index and path access
//!
//! Objects are addressed with slash-separated paths (`"a/b/c"`). Reads fail
//! on the first absent key; writes auto-create empty objects for missing
//! intermediate keys and replace the final leaf.

use super::value::Value;
use crate::error::{Result, ValueError};
use indexmap::IndexMap;

impl Value {
    /// Array element at `index`
    pub fn index(&self, index: i64) -> Result<&Value> {
        let items = self.as_array()?;
        usize::try_from(index)
            .ok()
            .and_then(|i| items.get(i))
            .ok_or(ValueError::IndexOutOfRange {
                index,
                len: items.len(),
            })
    }

    /// Read the value at a slash-separated path
    pub fn get_path(&self, path: &str) -> Result<&Value> {
        let mut current = self;
        for key in path.split('/') {
            let entries = current.as_object()?;
            current = entries
                .get(key)
                .ok_or_else(|| ValueError::KeyMissing(path.to_string()))?;
        }
        Ok(current)
    }

    /// Replace the leaf at a slash-separated path, creating empty objects
    /// for any missing intermediate key
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<()> {
        let keys: Vec<&str> = path.split('/').collect();
        let mut current = self;
        for key in &keys[..keys.len() - 1] {
            let entries = match current {
                Value::Object(entries) => entries,
                other => return Err(ValueError::mismatch("object", other.kind())),
            };
            current = entries
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(IndexMap::new()));
        }
        match current {
            Value::Object(entries) => {
                let last = keys[keys.len() - 1];
                entries.insert(last.to_string(), value);
                Ok(())
            }
            other => Err(ValueError::mismatch("object", other.kind())),
        }
    }

    /// Whether the full path resolves on this value
    ///
    /// Returns false when the value (or any intermediate) is not an object.
    pub fn contains_path(&self, path: &str) -> bool {
        let mut current = self;
        for key in path.split('/') {
            match current {
                Value::Object(entries) => match entries.get(key) {
                    Some(next) => current = next,
                    None => return false,
                },
                _ => return false,
            }
        }
        true
    }
}
