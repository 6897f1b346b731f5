//! HTTP transport middleware for commercetools API communication.
//!
//! This module provides the [`HttpMiddleware`] type, the transport stage of a
//! [`Client`](crate::clients::Client). It sends requests with `reqwest`,
//! parses responses and optionally retries transient failures.
//!
//! # Retry Behavior
//!
//! Retries are disabled by default. When enabled via
//! [`HttpMiddlewareOptionsBuilder::enable_retry`]:
//!
//! - Network errors and responses whose status is listed in
//!   [`RetryConfig::retry_codes`] (default `[503]`) are retried
//! - Up to [`RetryConfig::max_retries`] retries are made after the first attempt
//! - Without backoff every retry waits `retry_delay`; with backoff the n-th
//!   retry waits `retry_delay * 2^n` scaled by a random factor in `[1, 2)`,
//!   capped at `max_delay`

use std::collections::HashMap;
use std::time::Duration;

use rand::Rng;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::{ClientRequest, ClientResponse, HttpMethod};
use crate::config::HostUrl;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Retry settings of the [`HttpMiddleware`].
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::clients::RetryConfig;
/// use std::time::Duration;
///
/// let config = RetryConfig {
///     max_retries: 3,
///     retry_delay: Duration::from_millis(100),
///     ..RetryConfig::default()
/// };
/// assert!(config.backoff);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Base delay between attempts.
    pub retry_delay: Duration,
    /// Whether the delay grows exponentially with each retry.
    pub backoff: bool,
    /// Upper bound for a single delay.
    pub max_delay: Duration,
    /// Status codes that trigger a retry.
    pub retry_codes: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            retry_delay: Duration::from_millis(200),
            backoff: true,
            max_delay: Duration::from_secs(60),
            retry_codes: vec![503],
        }
    }
}

impl RetryConfig {
    /// Returns the delay before retry number `retry` (0-based).
    ///
    /// `jitter` scales backoff delays and is expected in `[1, 2)`; the first
    /// retry always waits exactly `retry_delay`.
    #[must_use]
    pub fn delay_for(&self, retry: u32, jitter: f64) -> Duration {
        if !self.backoff || retry == 0 {
            return self.retry_delay.min(self.max_delay);
        }

        let factor = 2_f64.powi(i32::try_from(retry).unwrap_or(i32::MAX)) * jitter;
        let delay = self.retry_delay.as_secs_f64() * factor;

        if delay.is_finite() && delay < self.max_delay.as_secs_f64() {
            Duration::from_secs_f64(delay)
        } else {
            self.max_delay
        }
    }
}

/// Configuration of the [`HttpMiddleware`].
///
/// # Defaults
///
/// - `include_response_headers`: `true`
/// - `include_original_request`: `false`
/// - `timeout`: none
/// - `enable_retry`: `false`
/// - `retry_config`: [`RetryConfig::default`]
#[derive(Clone, Debug)]
pub struct HttpMiddlewareOptions {
    host: HostUrl,
    include_response_headers: bool,
    include_original_request: bool,
    timeout: Option<Duration>,
    enable_retry: bool,
    retry_config: RetryConfig,
    user_agent_prefix: Option<String>,
}

impl HttpMiddlewareOptions {
    /// Creates a new builder for constructing `HttpMiddlewareOptions`.
    #[must_use]
    pub fn builder() -> HttpMiddlewareOptionsBuilder {
        HttpMiddlewareOptionsBuilder::new()
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns whether response headers are attached to responses.
    #[must_use]
    pub const fn include_response_headers(&self) -> bool {
        self.include_response_headers
    }

    /// Returns whether the original request is attached to responses.
    #[must_use]
    pub const fn include_original_request(&self) -> bool {
        self.include_original_request
    }

    /// Returns the per-attempt timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether retries are enabled.
    #[must_use]
    pub const fn enable_retry(&self) -> bool {
        self.enable_retry
    }

    /// Returns the retry settings.
    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`HttpMiddlewareOptions`].
#[derive(Debug, Default)]
pub struct HttpMiddlewareOptionsBuilder {
    host: Option<HostUrl>,
    include_response_headers: Option<bool>,
    include_original_request: Option<bool>,
    timeout: Option<Duration>,
    enable_retry: Option<bool>,
    retry_config: Option<RetryConfig>,
    user_agent_prefix: Option<String>,
}

impl HttpMiddlewareOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets whether response headers are attached to responses.
    #[must_use]
    pub const fn include_response_headers(mut self, include: bool) -> Self {
        self.include_response_headers = Some(include);
        self
    }

    /// Sets whether the original request is attached to responses.
    #[must_use]
    pub const fn include_original_request(mut self, include: bool) -> Self {
        self.include_original_request = Some(include);
        self
    }

    /// Sets a timeout for each attempt.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables retries.
    #[must_use]
    pub const fn enable_retry(mut self, enable: bool) -> Self {
        self.enable_retry = Some(enable);
        self
    }

    /// Sets the retry settings; only used when retries are enabled.
    #[must_use]
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = Some(config);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the options, validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set.
    pub fn build(self) -> Result<HttpMiddlewareOptions, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        Ok(HttpMiddlewareOptions {
            host,
            include_response_headers: self.include_response_headers.unwrap_or(true),
            include_original_request: self.include_original_request.unwrap_or(false),
            timeout: self.timeout,
            enable_retry: self.enable_retry.unwrap_or(false),
            retry_config: self.retry_config.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Transport stage of a [`Client`](crate::clients::Client).
///
/// # Thread Safety
///
/// `HttpMiddleware` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpMiddleware {
    client: reqwest::Client,
    options: HttpMiddlewareOptions,
    default_headers: HashMap<String, String>,
}

// Verify HttpMiddleware is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpMiddleware>();
};

impl HttpMiddleware {
    /// Creates the middleware from its options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(options: HttpMiddlewareOptions) -> Result<Self, HttpError> {
        let user_agent_prefix = options
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}commercetools-sdk-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            options,
            default_headers,
        })
    }

    /// Returns the options this middleware was built from.
    #[must_use]
    pub const fn options(&self) -> &HttpMiddlewareOptions {
        &self.options
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `request` to the API host.
    ///
    /// `authorization` is sent verbatim as the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs and retries are disabled or exhausted (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A retryable status persisted past `max_retries` (`MaxRetries`)
    pub async fn send(
        &self,
        request: &ClientRequest,
        authorization: Option<&str>,
    ) -> Result<ClientResponse, HttpError> {
        let url = self.options.host.join(&request.uri);
        let retry = &self.options.retry_config;
        let mut retries: u32 = 0;

        loop {
            let can_retry = self.options.enable_retry && retries < retry.max_retries;

            match self.send_once(&url, request, authorization).await {
                Ok(response) if response.is_ok() => {
                    let mut response = response;
                    if self.options.include_original_request {
                        response.request = Some(request.clone());
                    }
                    return Ok(response);
                }
                Ok(response) => {
                    let code = response.status_code;
                    let retryable = self.options.enable_retry && retry.retry_codes.contains(&code);

                    if retryable && can_retry {
                        tracing::debug!(
                            "{} {} returned {}, retry {} of {}",
                            request.method,
                            request.uri,
                            code,
                            retries + 1,
                            retry.max_retries
                        );
                    } else {
                        let error = HttpResponseError::from_body(code, response.body);
                        if retryable && retries > 0 {
                            return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                                code,
                                retries,
                                message: error.message,
                            }));
                        }
                        return Err(HttpError::Response(error));
                    }
                }
                Err(e) if can_retry => {
                    tracing::debug!(
                        "{} {} failed with network error ({}), retry {} of {}",
                        request.method,
                        request.uri,
                        e,
                        retries + 1,
                        retry.max_retries
                    );
                }
                Err(e) => return Err(HttpError::Network(e)),
            }

            let jitter = rand::thread_rng().gen_range(1.0..2.0);
            tokio::time::sleep(retry.delay_for(retries, jitter)).await;
            retries += 1;
        }
    }

    async fn send_once(
        &self,
        url: &str,
        request: &ClientRequest,
        authorization: Option<&str>,
    ) -> Result<ClientResponse, reqwest::Error> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Head => self.client.head(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(authorization) = authorization {
            req_builder = req_builder.header("Authorization", authorization);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }
        if let Some(extra) = &request.headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }
        if let Some(timeout) = self.options.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = self
            .options
            .include_response_headers
            .then(|| Self::parse_response_headers(res.headers()));
        let body_text = res.text().await?;

        Ok(ClientResponse::new(code, Self::parse_body(&body_text), headers))
    }

    /// Parses response headers into a `HashMap`.
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

    /// Parses a response body; non-JSON bodies are kept under `raw_body`.
    fn parse_body(body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text)
            .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> HttpMiddlewareOptions {
        HttpMiddlewareOptions::builder()
            .host(HostUrl::new("https://api.europe-west1.gcp.commercetools.com").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_host() {
        let result = HttpMiddlewareOptions::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "host" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let options = options();

        assert!(options.include_response_headers());
        assert!(!options.include_original_request());
        assert!(!options.enable_retry());
        assert!(options.timeout().is_none());
        assert_eq!(options.retry_config(), &RetryConfig::default());
        assert!(options.user_agent_prefix().is_none());
    }

    #[test]
    fn test_user_agent_header_format() {
        let middleware = HttpMiddleware::new(options()).unwrap();

        let user_agent = middleware.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("commercetools-sdk-rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let options = HttpMiddlewareOptions::builder()
            .host(HostUrl::new("https://api.example.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let middleware = HttpMiddleware::new(options).unwrap();

        let user_agent = middleware.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let middleware = HttpMiddleware::new(options()).unwrap();
        assert_eq!(
            middleware.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_delay_without_backoff_is_constant() {
        let config = RetryConfig {
            backoff: false,
            ..RetryConfig::default()
        };
        assert_eq!(config.delay_for(0, 1.5), Duration::from_millis(200));
        assert_eq!(config.delay_for(5, 1.5), Duration::from_millis(200));
    }

    #[test]
    fn test_delay_with_backoff_grows_and_is_capped() {
        let config = RetryConfig {
            retry_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(1),
            ..RetryConfig::default()
        };

        assert_eq!(config.delay_for(0, 1.9), Duration::from_millis(100));
        assert_eq!(config.delay_for(1, 1.0), Duration::from_millis(200));
        assert_eq!(config.delay_for(2, 1.0), Duration::from_millis(400));
        let jittered = config.delay_for(2, 1.5);
        assert!(jittered > Duration::from_millis(590) && jittered < Duration::from_millis(610));
        assert_eq!(config.delay_for(10, 1.0), Duration::from_secs(1));
        assert_eq!(config.delay_for(u32::MAX, 1.0), Duration::from_secs(1));
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(HttpMiddleware::parse_body(""), serde_json::json!({}));
        assert_eq!(
            HttpMiddleware::parse_body(r#"{"key":"shop"}"#),
            serde_json::json!({"key": "shop"})
        );
        assert_eq!(
            HttpMiddleware::parse_body("<html>Bad Gateway</html>"),
            serde_json::json!({"raw_body": "<html>Bad Gateway</html>"})
        );
    }
}
