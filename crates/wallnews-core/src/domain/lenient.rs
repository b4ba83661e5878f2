//! Value-or-default decoding adapters for untrusted upstream JSON.
//!
//! Each adapter first buffers the field as a `serde_json::Value` and then
//! attempts the typed decode, so a wrongly-typed field degrades to its
//! default instead of failing the enclosing record. Pair every use with
//! `#[serde(default)]` so absent fields take the same path.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Decode `T`, falling back to `T::default()` on any shape mismatch.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a record-typed field. Anything but a JSON object yields
/// `T::default()`: derived struct visitors also accept positional arrays,
/// which must not pass for a record.
pub(crate) fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        if !value.is_null() {
            warn!(found = kind_of(&value), "ignoring non-object record field");
        }
        return Ok(T::default());
    }
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decode a list of records, keeping only elements that are JSON objects
/// and decode cleanly. A non-array yields an empty list.
pub(crate) fn object_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, found = kind_of(&item), "skipping non-object list element");
            continue;
        }
        match T::deserialize(item) {
            Ok(record) => out.push(record),
            Err(err) => warn!(index, error = %err, "skipping undecodable list element"),
        }
    }
    Ok(out)
}

/// Decode a string-keyed map of records, keeping only entries whose value is
/// a JSON object that decodes cleanly. A non-object yields an empty map.
pub(crate) fn object_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    let mut out = BTreeMap::new();
    for (key, item) in entries {
        if !item.is_object() {
            warn!(key = %key, found = kind_of(&item), "skipping non-object map entry");
            continue;
        }
        match T::deserialize(item) {
            Ok(record) => {
                out.insert(key, record);
            }
            Err(err) => warn!(key = %key, error = %err, "skipping undecodable map entry"),
        }
    }
    Ok(out)
}

/// Decode a list of strings, dropping non-string elements.
pub(crate) fn string_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// JSON type name for diagnostics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
