//! Response-shape normalization
//!
//! Collection endpoints have been observed returning either a bare JSON
//! array or a wrapped object such as `{"tables": [...]}`. This module is the
//! single normalization boundary: every collection response passes through
//! [`collection`] and comes out as a canonical `Vec<T>`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Normalize a collection response body
///
/// Accepts either a bare array or an object wrapping the array under any
/// key, and always returns the parsed sequence.
pub fn collection<T: DeserializeOwned>(value: Value) -> ClientResult<Vec<T>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(map) => {
            for (_, candidate) in map {
                if candidate.is_array() {
                    return Ok(serde_json::from_value(candidate)?);
                }
            }
            Err(ClientError::InvalidResponse(
                "expected an array or a wrapped collection".to_string(),
            ))
        }
        other => Err(ClientError::InvalidResponse(format!(
            "expected an array or a wrapped collection, got {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
