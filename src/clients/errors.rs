//! HTTP-specific error types for the commercetools SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_sdk::clients::{ErrorKind, HttpError};
//!
//! match client.execute(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) if e.kind() == ErrorKind::NotFound => {
//!         println!("No such resource");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::auth::AuthError;

/// Classification of an error response by status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400: the request was malformed or failed validation.
    BadRequest,
    /// 401: the access token is missing, invalid or expired.
    Unauthorized,
    /// 403: the token lacks the scope for this request.
    Forbidden,
    /// 404: the resource does not exist.
    NotFound,
    /// 409: the resource version did not match.
    ConcurrentModification,
    /// 500: the platform failed to process the request.
    InternalServerError,
    /// 503: the platform is temporarily unavailable.
    ServiceUnavailable,
    /// Any other non-2xx status.
    Other,
}

impl ErrorKind {
    /// Returns the kind for an HTTP status code.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::ConcurrentModification,
            500 => Self::InternalServerError,
            503 => Self::ServiceUnavailable,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::ConcurrentModification => "ConcurrentModification",
            Self::InternalServerError => "InternalServerError",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Other => "HttpError",
        };
        f.write_str(name)
    }
}

/// Error returned when an HTTP request receives a non-successful response.
///
/// commercetools error bodies look like
/// `{"statusCode": 404, "message": "...", "errors": [{"code": "ResourceNotFound", ...}]}`.
/// The `message` is taken from the body when present, and every `errors[].code`
/// is collected into `error_codes`.
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::clients::{ErrorKind, HttpResponseError};
/// use serde_json::json;
///
/// let error = HttpResponseError::from_body(404, json!({
///     "statusCode": 404,
///     "message": "The Resource with ID 'abc' was not found.",
///     "errors": [{"code": "ResourceNotFound"}]
/// }));
///
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// assert_eq!(error.error_codes, vec!["ResourceNotFound".to_string()]);
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Error message from the response body, or the status reason phrase.
    pub message: String,
    /// Codes of the individual errors reported in the body.
    pub error_codes: Vec<String>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponseError {
    /// Builds an error from a status code and parsed response body.
    #[must_use]
    pub fn from_body(code: u16, body: serde_json::Value) -> Self {
        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(String::from)
            .or_else(|| {
                reqwest::StatusCode::from_u16(code)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("Unexpected status {code}"));

        let error_codes = body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.get("code").and_then(serde_json::Value::as_str))
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            code,
            message,
            error_codes,
            body,
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::from_status(self.code)
    }

    /// Returns `true` if the API rejected the access token itself.
    ///
    /// Only such responses justify requesting a new token; other 401s
    /// would fail the same way again.
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        self.code == 401
            && (self.error_codes.iter().any(|c| c == "invalid_token")
                || self.body.get("error").and_then(serde_json::Value::as_str)
                    == Some("invalid_token"))
    }
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// This error is raised when a request keeps failing with a retryable status
/// code after all configured retries.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {retries}. Last response ({code}): {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of retries made after the first attempt.
    pub retries: u32,
    /// Error message from the last response.
    pub message: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URI is not an absolute path.
    #[error("Invalid request URI '{uri}'. URIs must start with '/'.")]
    InvalidUri {
        /// The URI that was provided.
        uri: String,
    },

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_sdk::HttpError;
///
/// match client.execute(request).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => { /* handle API error */ }
///     Err(HttpError::MaxRetries(e)) => { /* handle retry exhaustion */ }
///     Err(HttpError::InvalidRequest(e)) => { /* handle validation error */ }
///     Err(HttpError::Network(e)) => { /* handle network error */ }
///     Err(HttpError::Auth(e)) => { /* handle token failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An access token could not be obtained.
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),
}
