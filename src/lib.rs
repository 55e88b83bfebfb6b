//! # Commerce API Rust SDK
//!
//! A Rust SDK for a commerce and supply-chain REST API: purchase orders,
//! invoices, payments, shipments and carriers.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - An async transport adapter ([`HttpClient`]) that injects the bearer
//!   token, JSON headers and default timeout
//! - One generic resource client ([`rest::ResourceClient`]) implementing
//!   list/get/create/update/delete and state-transition actions for every
//!   resource
//! - Response normalization that rejects records without an id or with an
//!   unknown status
//! - Typed errors ([`rest::ResourceError`]) mapped from HTTP status codes
//! - Auto-pagination over page-number listings ([`rest::AutoPager`])
//!
//! ## Quick Start
//!
//! ```rust
//! use commerce_api::{AccessToken, BaseUrl, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("sk_test_123").unwrap())
//!     .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.example.com/v1");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use commerce_api::CommerceClient;
//! use commerce_api::rest::ResourceError;
//! use commerce_api::rest::resources::{CreateShipment, Package};
//!
//! let client = CommerceClient::new(&config)?;
//!
//! let shipment = client
//!     .shipments()
//!     .create(&CreateShipment {
//!         order_id: "po_1".to_string(),
//!         packages: vec![Package { weight_grams: 1_200, ..Default::default() }],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! match client.shipments().ship(&shipment.id, "1Z999AA10123456784").await {
//!     Ok(shipment) => println!("{} is {}", shipment.id, shipment.status),
//!     Err(ResourceError::StateConflict { message, .. }) => println!("refused: {message}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Auto-Pagination
//!
//! ```rust,ignore
//! use std::ops::ControlFlow;
//! use commerce_api::rest::resources::CarrierListParams;
//!
//! let first_hundred = client
//!     .carriers()
//!     .auto_paging(CarrierListParams::default())
//!     .to_vec(100)
//!     .await?;
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events (requests at `debug`, suspicious
//! pagination at `warn`). It never installs a subscriber; the application
//! decides where events go.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction, and
//!   malformed requests are rejected before any network I/O
//! - **No hidden retries**: every failure is returned to the caller
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, BaseUrl, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    CommerceClient, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError,
};
