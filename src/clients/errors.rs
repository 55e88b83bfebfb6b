//! HTTP-level error types for the Commerce API SDK.
//!
//! - [`HttpResponseError`]: a non-2xx response, captured with its body
//! - [`InvalidHttpRequestError`]: a request rejected before it was sent
//! - [`HttpError`]: unified transport error
//!
//! The transport itself only ever produces `InvalidRequest` and `Network`.
//! `Response` is built by the resource layer when it sees a non-2xx status,
//! so that every failure reaches the error mapper as one `HttpError`.

use thiserror::Error;

use crate::clients::HttpResponse;

/// A non-successful API response.
///
/// `message` is taken from the body's `message` field, falling back to its
/// `error` field and finally to a generic text naming the status code.
///
/// # Example
///
/// ```rust
/// use commerce_api::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Invoice not found".to_string(),
///     body: json!({"message": "Invoice not found"}),
///     error_reference: Some("req-1".to_string()),
/// };
/// assert_eq!(error.to_string(), "Invoice not found");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable message from the error envelope.
    pub message: String,
    /// The full response body.
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Builds an error from a response whose status is not 2xx.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let message = ["message", "error"]
            .iter()
            .find_map(|key| response.body.get(*key).and_then(serde_json::Value::as_str))
            .map_or_else(
                || format!("Request failed with status {}", response.code),
                ToString::to_string,
            );

        Self {
            code: response.code,
            message,
            error_reference: response.request_id().map(ToString::to_string),
            body: response.body,
        }
    }
}

/// A request that failed validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if this error came from a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(code: u16, body: serde_json::Value) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        HttpResponse::new(code, headers, body)
    }

    #[test]
    fn test_from_response_prefers_message_field() {
        let error = HttpResponseError::from_response(response(
            400,
            json!({"message": "quantity must be positive", "error": "bad_request"}),
        ));

        assert_eq!(error.code, 400);
        assert_eq!(error.message, "quantity must be positive");
        assert_eq!(error.error_reference.as_deref(), Some("req-9"));
    }

    #[test]
    fn test_from_response_falls_back_to_error_field() {
        let error = HttpResponseError::from_response(response(409, json!({"error": "conflict"})));
        assert_eq!(error.message, "conflict");
    }

    #[test]
    fn test_from_response_generic_message_when_body_has_none() {
        let error = HttpResponseError::from_response(response(502, json!({})));
        assert_eq!(error.message, "Request failed with status 502");
    }

    #[test]
    fn test_status_code_only_for_response_errors() {
        let error = HttpError::from(HttpResponseError::from_response(response(404, json!({}))));
        assert_eq!(error.status_code(), Some(404));

        let error = HttpError::from(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody {
                method: "post".to_string()
            }
            .to_string(),
            "Cannot use post without specifying data."
        );
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }
}
