//! Top-level Commerce API client.

use crate::clients::{HttpClient, HttpError};
use crate::config::ClientConfig;
use crate::rest::resources::{Carrier, Invoice, Payment, PurchaseOrder, Shipment};
use crate::rest::{Resource, ResourceClient};

/// Entry point of the SDK.
///
/// Owns the transport and hands out resource clients that borrow it. All
/// resource clients share one connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use commerce_api::{AccessToken, ClientConfig, CommerceClient};
///
/// let config = ClientConfig::builder()
///     .access_token(AccessToken::new("sk_test_123")?)
///     .build()?;
/// let client = CommerceClient::new(&config)?;
///
/// let carrier = client.carriers().get("car_1").await?;
/// let shipment = client.shipments().get("shp_1").await?;
/// ```
#[derive(Clone, Debug)]
pub struct CommerceClient {
    http: HttpClient,
}

// Verify CommerceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommerceClient>();
};

impl CommerceClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Wraps an existing transport.
    #[must_use]
    pub const fn from_http_client(http: HttpClient) -> Self {
        Self { http }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Returns a client for any resource type.
    #[must_use]
    pub const fn resource<R: Resource>(&self) -> ResourceClient<'_, R> {
        ResourceClient::new(&self.http)
    }

    /// Purchase orders.
    #[must_use]
    pub const fn purchase_orders(&self) -> ResourceClient<'_, PurchaseOrder> {
        self.resource()
    }

    /// Invoices.
    #[must_use]
    pub const fn invoices(&self) -> ResourceClient<'_, Invoice> {
        self.resource()
    }

    /// Payments.
    #[must_use]
    pub const fn payments(&self) -> ResourceClient<'_, Payment> {
        self.resource()
    }

    /// Shipments.
    #[must_use]
    pub const fn shipments(&self) -> ResourceClient<'_, Shipment> {
        self.resource()
    }

    /// Carriers.
    #[must_use]
    pub const fn carriers(&self) -> ResourceClient<'_, Carrier> {
        self.resource()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, BaseUrl};

    #[test]
    fn test_resource_clients_share_transport() {
        let config = ClientConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
            .build()
            .unwrap();
        let client = CommerceClient::new(&config).unwrap();

        assert!(std::ptr::eq(client.invoices().http(), client.http()));
        assert!(std::ptr::eq(client.carriers().http(), client.http()));
        assert_eq!(
            client.shipments().http().base_url().as_ref(),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_debug_does_not_expose_access_token() {
        let config = ClientConfig::builder()
            .access_token(AccessToken::new("sk_live_secret_42").unwrap())
            .build()
            .unwrap();
        let client = CommerceClient::new(&config).unwrap();

        let debug = format!("{client:?}");
        assert!(debug.contains("CommerceClient"));
        assert!(!debug.contains("sk_live_secret_42"));

        let invoices = format!("{:?}", client.invoices());
        assert!(!invoices.contains("sk_live_secret_42"));
    }
}
