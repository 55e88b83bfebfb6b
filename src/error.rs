//! Error types for SDK configuration.
//!
//! Every configuration constructor returns `Result<T, ConfigError>` so that
//! an invalid token, base URL or timeout is rejected before any client is
//! built.
//!
//! # Example
//!
//! ```rust
//! use commerce_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token was empty.
    #[error("Access token cannot be empty. Please provide a valid API bearer token.")]
    EmptyAccessToken,

    /// The base URL is not an absolute URL with a scheme and host.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.example.com/v1').")]
    InvalidBaseUrl {
        /// The URL that was rejected.
        url: String,
    },

    /// The request timeout was zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,

    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
