//! Integration tests for the transport adapter.
//!
//! These tests run the HTTP client against a local mock server and verify
//! header injection, query encoding on the wire, per-request overrides and
//! that non-2xx responses are handed back untouched.

use std::time::Duration;

use commerce_api::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use commerce_api::{AccessToken, BaseUrl, ClientConfig, HttpError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, HttpClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    (server, client)
}

#[tokio::test]
async fn test_injects_bearer_token_and_json_headers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/carriers"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("carriers", Vec::new()).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_extra_headers_override_defaults() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/carriers"))
        .and(header("authorization", "Bearer other-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "carriers")
        .header("authorization", "Bearer other-token")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_array_query_keeps_brackets_unencoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/shipments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let query = vec![
        ("status[]".to_string(), "PENDING".to_string()),
        ("status[]".to_string(), "IN_TRANSIT".to_string()),
        ("carrier".to_string(), "UPS Ground".to_string()),
    ];
    client.get("shipments", query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("status[]=PENDING&status[]=IN_TRANSIT&carrier=UPS%20Ground")
    );
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/carriers"))
        .and(body_json(json!({"name": "Parcel Co", "code": "PCL"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "car_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .post("carriers", json!({"name": "Parcel Co", "code": "PCL"}))
        .await
        .unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["id"], "car_1");
}

#[tokio::test]
async fn test_put_and_delete_use_their_verbs() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/v1/carriers/car_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/carriers/car_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client.put("carriers/car_1", json!({"name": "X"})).await.unwrap();
    assert_eq!(updated.code, 200);

    let deleted = client.delete("carriers/car_1").await.unwrap();
    assert_eq!(deleted.code, 204);
    assert_eq!(deleted.body, json!({}));
}

#[tokio::test]
async fn test_non_2xx_responses_are_returned_not_raised() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/inv_missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"message": "Invoice not found"}))
                .insert_header("x-request-id", "req-404"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("invoices/inv_missing", Vec::new()).await.unwrap();

    assert!(!response.is_ok());
    assert_eq!(response.code, 404);
    assert_eq!(response.body["message"], "Invoice not found");
    assert_eq!(response.request_id(), Some("req-404"));
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/payments"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("payments", Vec::new()).await.unwrap();
    assert_eq!(response.code, 500);
}

#[tokio::test]
async fn test_non_json_body_is_wrapped() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/health"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let response = client.get("health", Vec::new()).await.unwrap();
    assert_eq!(response.body, json!({"raw_body": "Bad Gateway"}));
}

#[tokio::test]
async fn test_per_request_timeout_surfaces_as_network_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "slow")
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let result = client.request(request).await;
    assert!(matches!(result, Err(HttpError::Network(e)) if e.is_timeout()));
}

#[tokio::test]
async fn test_query_param_builder_reaches_server() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/carriers"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "carriers")
        .query_param("limit", "10")
        .build()
        .unwrap();
    client.request(request).await.unwrap();
}

#[tokio::test]
async fn test_body_without_type_is_rejected_before_sending() {
    let (server, client) = setup().await;

    let request = HttpRequest {
        http_method: HttpMethod::Post,
        path: "carriers".to_string(),
        body: Some(json!({"name": "X"})),
        body_type: None,
        query: Vec::new(),
        extra_headers: None,
        timeout: None,
    };

    let result = client.request(request).await;
    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    assert!(server.received_requests().await.unwrap().is_empty());

    let valid = HttpRequest::builder(HttpMethod::Post, "carriers")
        .body(json!({"name": "X"}))
        .body_type(DataType::Json)
        .build();
    assert!(valid.is_ok());
}
