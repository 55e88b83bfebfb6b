//! HTTP client types for Commerce API communication.
//!
//! This module provides the transport layer for authenticated requests to
//! the Commerce API, plus the top-level [`CommerceClient`].
//!
//! # Overview
//!
//! - [`HttpClient`]: the async transport adapter
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a response, whatever its status code
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: content types for request bodies
//! - [`HttpError`]: transport errors
//! - [`CommerceClient`]: entry point handing out per-resource clients
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_api::{AccessToken, ClientConfig};
//! use commerce_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("sk_test_123")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "carriers")
//!     .query_param("limit", "10")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Status Codes and Retries
//!
//! The transport never retries and never interprets status codes: a 404 or
//! a 500 comes back as an ordinary [`HttpResponse`]. Classifying failures is
//! left to [`ResourceError::from_http_error`](crate::rest::ResourceError::from_http_error).

mod commerce;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use commerce::CommerceClient;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
