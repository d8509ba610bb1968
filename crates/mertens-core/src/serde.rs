//! Canonical JSON and YAML helpers with deterministic key ordering.

use std::collections::BTreeMap;
use std::iter::FromIterator;

use ::serde::de::DeserializeOwned;
use ::serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, MertensError};

fn serde_error(code: &str, err: impl ToString) -> MertensError {
    MertensError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ordered = BTreeMap::new();
            for (key, val) in map {
                ordered.insert(key, canonicalize(val));
            }
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, MertensError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MertensError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, MertensError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml-encode", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MertensError> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml-read", err))
}
