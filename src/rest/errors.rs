//! Resource-level error types and the HTTP error mapper.
//!
//! Every failure of a resource operation ends up as a [`ResourceError`].
//! HTTP failures are classified by [`ResourceError::from_http_error`]:
//!
//! | Status | Operation | Variant |
//! |---|---|---|
//! | 404 | any | [`ResourceError::NotFound`] |
//! | 400 | action | [`ResourceError::StateConflict`] |
//! | 400 | other | [`ResourceError::Validation`] |
//! | other / transport | any | [`ResourceError::Request`] |
//!
//! Nothing here retries or swallows an error; the original HTTP error is
//! kept as the `source` of every mapped variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_api::rest::ResourceError;
//!
//! match client.invoices().get("inv_123").await {
//!     Ok(invoice) => println!("{} is {}", invoice.id, invoice.status),
//!     Err(ResourceError::NotFound { id, .. }) => println!("no invoice {id}"),
//!     Err(ResourceError::Validation { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError};
use crate::rest::ResourceOperation;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type name (e.g., "Invoice").
        resource: &'static str,
        /// The requested id, or `"unknown"` when the operation had none.
        id: String,
        /// The underlying response error.
        #[source]
        source: HttpResponseError,
    },

    /// The request was rejected as invalid, either by the server (HTTP 400)
    /// or by pre-flight checks before any request was sent.
    #[error("{resource} validation failed: {message}")]
    Validation {
        /// The resource type name.
        resource: &'static str,
        /// Human-readable summary.
        message: String,
        /// Field name to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The underlying response error; `None` for pre-flight failures.
        #[source]
        source: Option<HttpResponseError>,
    },

    /// The server refused a state transition (HTTP 400 on an action).
    #[error("{resource} {id} cannot {operation}: {message}")]
    StateConflict {
        /// The resource type name.
        resource: &'static str,
        /// The action that was refused.
        operation: ResourceOperation,
        /// The id of the resource.
        id: String,
        /// The server's message.
        message: String,
        /// The underlying response error.
        #[source]
        source: HttpResponseError,
    },

    /// A successful response lacked required fields or could not be decoded.
    #[error("Malformed {resource} response to {operation}: {reason}")]
    MalformedResponse {
        /// The resource type name.
        resource: &'static str,
        /// The operation whose response was malformed.
        operation: ResourceOperation,
        /// What was wrong with the body.
        reason: String,
    },

    /// The response carried a status outside the resource's known set.
    #[error("Unknown {resource} status '{status}'")]
    UnknownStatus {
        /// The resource type name.
        resource: &'static str,
        /// The status value received.
        status: String,
    },

    /// A 2xx response body carried an `error` field.
    #[error("{resource} {operation} rejected: {message}")]
    Rejected {
        /// The resource type name.
        resource: &'static str,
        /// The operation that was rejected.
        operation: ResourceOperation,
        /// The error message from the body.
        message: String,
    },

    /// Any other failure: unmapped status codes and transport errors.
    #[error("{resource} {operation} failed: {message}")]
    Request {
        /// The resource type name.
        resource: &'static str,
        /// The operation that failed.
        operation: ResourceOperation,
        /// Human-readable message.
        message: String,
        /// The original error.
        #[source]
        source: HttpError,
    },

    /// The request payload or filter parameters could not be serialized.
    #[error("Failed to serialize {resource} request: {source}")]
    Serialization {
        /// The resource type name.
        resource: &'static str,
        /// The serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Maps an HTTP error to a resource error.
    ///
    /// `id` tags a `NotFound` or `StateConflict`; it defaults to
    /// `"unknown"` when the operation had no id.
    #[must_use]
    pub fn from_http_error(
        error: HttpError,
        resource: &'static str,
        operation: ResourceOperation,
        id: Option<&str>,
    ) -> Self {
        let id = id.unwrap_or("unknown").to_string();

        match error {
            HttpError::Response(response) => match response.code {
                404 => Self::NotFound {
                    resource,
                    id,
                    source: response,
                },
                400 if operation.is_action() => Self::StateConflict {
                    resource,
                    operation,
                    id,
                    message: response.message.clone(),
                    source: response,
                },
                400 => Self::Validation {
                    resource,
                    message: response.message.clone(),
                    errors: parse_validation_errors(&response.body),
                    source: Some(response),
                },
                _ => Self::Request {
                    resource,
                    operation,
                    message: response.message.clone(),
                    source: HttpError::Response(response),
                },
            },
            other => Self::Request {
                resource,
                operation,
                message: other.to_string(),
                source: other,
            },
        }
    }

    /// Creates a pre-flight validation error from collected field errors.
    #[must_use]
    pub fn invalid(resource: &'static str, errors: HashMap<String, Vec<String>>) -> Self {
        let mut summary: Vec<String> = errors
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{field} {m}")))
            .collect();
        summary.sort();

        Self::Validation {
            resource,
            message: summary.join("; "),
            errors,
            source: None,
        }
    }

    /// Returns the request id of the failed response, if there was one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.response_error()
            .and_then(|e| e.error_reference.as_deref())
    }

    /// Returns the HTTP status code of the failed response, if there was one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.response_error().map(|e| e.code)
    }

    fn response_error(&self) -> Option<&HttpResponseError> {
        match self {
            Self::NotFound { source, .. } | Self::StateConflict { source, .. } => Some(source),
            Self::Validation { source, .. } => source.as_ref(),
            Self::Request {
                source: HttpError::Response(e),
                ..
            } => Some(e),
            _ => None,
        }
    }
}

/// Parses field errors from an error body.
///
/// Accepted shapes of the `errors` field:
/// - object: `{"quantity": ["must be positive"]}` or `{"quantity": "must be positive"}`
/// - array of strings: `["Quantity must be positive"]`, stored under `base`
/// - array of objects: `[{"field": "quantity", "message": "must be positive"}]`
/// - string: `"Quantity must be positive"`, stored under `base`
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    match body.get("errors") {
        Some(serde_json::Value::Object(map)) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .filter_map(|v| v.as_str().map(ToString::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    _ => vec![messages.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        Some(serde_json::Value::Array(arr)) => {
            for entry in arr {
                match entry {
                    serde_json::Value::String(s) => {
                        result.entry("base".to_string()).or_default().push(s.clone());
                    }
                    serde_json::Value::Object(obj) => {
                        let field = obj
                            .get("field")
                            .and_then(serde_json::Value::as_str)
                            .unwrap_or("base");
                        if let Some(message) = obj.get("message").and_then(serde_json::Value::as_str)
                        {
                            result
                                .entry(field.to_string())
                                .or_default()
                                .push(message.to_string());
                        }
                    }
                    _ => {}
                }
            }
        }
        Some(serde_json::Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
