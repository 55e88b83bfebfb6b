//! Transport adapter for the Commerce API.
//!
//! [`HttpClient`] owns one pooled `reqwest::Client`, injects the bearer
//! token, default timeout and JSON headers, and hands back every response
//! untouched. It performs no retries and does not interpret status codes.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, ClientConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Async HTTP client bound to one base URL and one access token.
///
/// Cloning is cheap: clones share the same connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use commerce_api::{AccessToken, ClientConfig};
/// use commerce_api::clients::HttpClient;
///
/// let config = ClientConfig::builder()
///     .access_token(AccessToken::new("sk_test_123")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let response = client.get("carriers", Vec::new()).await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: BaseUrl,
    timeout: Duration,
    default_headers: HashMap<String, String>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "Bearer *****")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Commerce API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Content-Type".to_string(),
            DataType::Json.as_content_type().to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer_header(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            timeout: config.timeout(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the response, whatever its status code.
    ///
    /// Headers from the request override the client defaults (matched
    /// case-insensitively), and a request timeout overrides the default one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation
    /// and [`HttpError::Network`] for connection, TLS, or timeout failures.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut url = self.base_url.join(&request.path);
        if !request.query.is_empty() {
            url.push('?');
            url.push_str(&request.query_string());
        }

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            set_header(
                &mut headers,
                "Content-Type",
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                set_header(&mut headers, key, value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Received API response"
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Sends a GET request to `path` with the given query pairs.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.request(request).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.request(request).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Inserts a header, replacing any existing entry with the same name in any case.
fn set_header(headers: &mut HashMap<String, String>, name: &str, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value);
}
