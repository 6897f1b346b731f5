//! Integration tests for the HTTP transport middleware.
//!
//! These tests verify headers, response parsing, timeouts and the retry
//! behavior against a mock API host, without an auth stage.

use std::time::Duration;

use commercetools_sdk::clients::{
    ClientRequest, HttpMethod, HttpMiddlewareOptionsBuilder, SDK_VERSION,
};
use commercetools_sdk::{
    Client, HostUrl, HttpError, HttpMiddleware, HttpMiddlewareOptions, RetryConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        retry_delay: Duration::from_millis(1),
        backoff: false,
        ..RetryConfig::default()
    }
}

fn create_client(options: HttpMiddlewareOptions) -> Client {
    Client::builder()
        .http(HttpMiddleware::new(options).unwrap())
        .build()
        .unwrap()
}

fn options_for(server: &MockServer) -> HttpMiddlewareOptionsBuilder {
    HttpMiddlewareOptions::builder().host(HostUrl::new(server.uri()).unwrap())
}

// ============================================================================
// Request and response handling
// ============================================================================

#[tokio::test]
async fn test_sends_json_headers_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/test-project/carts"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"currency": "EUR"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "cart-1", "version": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(options_for(&server).build().unwrap());
    let response = client
        .post("/test-project/carts", json!({"currency": "EUR"}))
        .await
        .unwrap();

    assert_eq!(response.status_code, 201);
    assert_eq!(response.body["id"], "cart-1");
}

#[tokio::test]
async fn test_user_agent_carries_prefix() {
    let server = MockServer::start().await;
    let expected = format!(
        "demo-app/1.0 | commercetools-sdk-rust v{SDK_VERSION} | Rust {}",
        env!("CARGO_PKG_RUST_VERSION")
    );
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .and(header("user-agent", expected.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(options_for(&server).user_agent_prefix("demo-app/1.0").build().unwrap());

    client.get("/test-project").await.unwrap();
}

#[tokio::test]
async fn test_extra_request_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .and(header("x-correlation-id", "demo-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(options_for(&server).build().unwrap());
    let request = ClientRequest::builder(HttpMethod::Get, "/test-project")
        .header("X-Correlation-ID", "demo-42")
        .build()
        .unwrap();

    client.execute(request).await.unwrap();
}

#[tokio::test]
async fn test_response_headers_are_included_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Correlation-ID", "projects-7f3c")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let client = create_client(options_for(&server).build().unwrap());
    let response = client.get("/test-project").await.unwrap();

    assert_eq!(response.correlation_id(), Some("projects-7f3c"));
}

#[tokio::test]
async fn test_response_headers_can_be_excluded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Correlation-ID", "x"))
        .mount(&server)
        .await;

    let client = create_client(
        options_for(&server)
            .include_response_headers(false)
            .build()
            .unwrap(),
    );
    let response = client.get("/test-project").await.unwrap();

    assert!(response.headers.is_none());
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_original_request_is_echoed_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "test-project"})))
        .mount(&server)
        .await;

    let client = create_client(
        options_for(&server)
            .include_original_request(true)
            .build()
            .unwrap(),
    );
    let response = client.get("/test-project").await.unwrap();

    let request = response.request.unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.uri, "/test-project");
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = create_client(options_for(&server).build().unwrap());
    let result = client.get("/test-project").await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 502);
            assert_eq!(e.message, "Bad Gateway");
            assert_eq!(e.body["raw_body"], "<html>Bad Gateway</html>");
        }
        other => panic!("Expected Response error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_maps_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = create_client(
        options_for(&server)
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap(),
    );
    let result = client.get("/test-project").await;

    match result {
        Err(HttpError::Network(e)) => assert!(e.is_timeout()),
        other => panic!("Expected Network error, got: {other:?}"),
    }
}

// ============================================================================
// Retry behavior
// ============================================================================

#[tokio::test]
async fn test_no_retry_when_disabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(options_for(&server).retry_config(fast_retry(3)).build().unwrap());
    let result = client.get("/test-project").await;

    assert!(matches!(result, Err(HttpError::Response(e)) if e.code == 503));
}

#[tokio::test]
async fn test_retries_503_until_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "test-project"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(
        options_for(&server)
            .enable_retry(true)
            .retry_config(fast_retry(3))
            .build()
            .unwrap(),
    );
    let response = client.get("/test-project").await.unwrap();

    assert_eq!(response.body["key"], "test-project");
}

#[tokio::test]
async fn test_exhausted_retries_return_max_retries_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "statusCode": 503,
            "message": "Service temporarily unavailable"
        })))
        .expect(3)
        .mount(&server)
        .await;

    let client = create_client(
        options_for(&server)
            .enable_retry(true)
            .retry_config(fast_retry(2))
            .build()
            .unwrap(),
    );
    let result = client.get("/test-project").await;

    match result {
        Err(HttpError::MaxRetries(e)) => {
            assert_eq!(e.code, 503);
            assert_eq!(e.retries, 2);
            assert_eq!(e.message, "Service temporarily unavailable");
        }
        other => panic!("Expected MaxRetries error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_retryable_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(
        options_for(&server)
            .enable_retry(true)
            .retry_config(fast_retry(3))
            .build()
            .unwrap(),
    );
    let result = client.get("/test-project").await;

    assert!(matches!(result, Err(HttpError::Response(e)) if e.code == 500));
}

#[tokio::test]
async fn test_custom_retry_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/test-project"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = create_client(
        options_for(&server)
            .enable_retry(true)
            .retry_config(RetryConfig {
                retry_codes: vec![502, 503, 504],
                ..fast_retry(2)
            })
            .build()
            .unwrap(),
    );

    assert!(client.get("/test-project").await.is_ok());
}

#[tokio::test]
async fn test_network_errors_are_retried_then_reported() {
    let options = HttpMiddlewareOptions::builder()
        .host(HostUrl::new("http://127.0.0.1:9").unwrap())
        .enable_retry(true)
        .retry_config(fast_retry(2))
        .build()
        .unwrap();

    let result = create_client(options).get("/test-project").await;

    assert!(matches!(result, Err(HttpError::Network(_))));
}
