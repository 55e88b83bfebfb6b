//! List-query encoding.
//!
//! Filter params are plain serde structs. They are flattened into ordered
//! query pairs:
//!
//! - `null` values (unset `Option`s) are skipped
//! - arrays become repeated `key[]` pairs, one per element
//! - nested objects are sent as JSON strings
//! - dates serialize through chrono's serde support as ISO-8601
//!
//! Percent-encoding happens later in [`HttpRequest::query_string`], which
//! leaves the `[]` suffix of array keys unencoded.
//!
//! [`HttpRequest::query_string`]: crate::clients::HttpRequest::query_string

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// Serializes a params struct into ordered query pairs.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if the params cannot be
/// serialized.
pub fn encode_query<T: Serialize>(
    resource: &'static str,
    params: &T,
) -> Result<Vec<(String, String)>, ResourceError> {
    let value = serde_json::to_value(params)
        .map_err(|source| ResourceError::Serialization { resource, source })?;

    let mut query = Vec::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::Array(items) => {
                    let array_key = format!("{key}[]");
                    for item in items {
                        if let Some(scalar) = scalar_to_string(item) {
                            query.push((array_key.clone(), scalar));
                        }
                    }
                }
                other => {
                    if let Some(scalar) = scalar_to_string(other) {
                        query.push((key, scalar));
                    }
                }
            }
        }
    }

    Ok(query)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Nested structures are sent as JSON strings
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}
