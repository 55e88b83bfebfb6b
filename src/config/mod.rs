//! Configuration types for the Commerce API SDK.
//!
//! - [`ClientConfig`]: immutable settings shared by every request
//! - [`ClientConfigBuilder`]: fluent builder for [`ClientConfig`]
//! - [`AccessToken`]: validated bearer token with masked debug output
//! - [`BaseUrl`]: validated absolute API base URL
//!
//! # Example
//!
//! ```rust
//! use commerce_api::{AccessToken, BaseUrl, ClientConfig};
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("sk_test_123").unwrap())
//!     .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(30));
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Base URL used when none is configured: the managed API proxy.
pub const DEFAULT_BASE_URL: &str = "https://proxy.commerce-api.com/v1";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Configuration for the Commerce API SDK.
///
/// Fixed at construction; clients built from it hold no other state.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// Only `access_token` is required.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`] (80 seconds)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bearer token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the default request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no access token was
    /// set, [`ConfigError::InvalidTimeout`] for a zero timeout, and
    /// [`ConfigError::InvalidBaseUrl`] if the default base URL fails to parse.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(ClientConfig {
            access_token,
            base_url,
            timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
