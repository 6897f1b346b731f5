//! Authentication error types for the commercetools SDK.
//!
//! # Example
//!
//! ```rust
//! use commercetools_sdk::AuthError;
//!
//! let error = AuthError::TokenRequestFailed {
//!     error: "invalid_client".to_string(),
//!     description: "Please provide valid client credentials.".to_string(),
//! };
//! assert!(error.to_string().contains("invalid_client"));
//! ```

use thiserror::Error;

/// Errors that can occur while obtaining an access token.
///
/// # Thread Safety
///
/// `AuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured auth host and token path do not form a valid URL.
    #[error("Invalid token endpoint '{url}': {source}")]
    InvalidTokenUrl {
        /// The URL that failed to parse.
        url: String,
        /// The underlying parse error.
        #[source]
        source: oauth2::url::ParseError,
    },

    /// The auth server rejected the client-credentials request.
    ///
    /// Typical `error` values are `invalid_client` (wrong id or secret) and
    /// `invalid_scope` (scope not granted to this API client).
    #[error("Token request rejected ({error}): {description}")]
    TokenRequestFailed {
        /// OAuth error code reported by the server.
        error: String,
        /// Human readable description, empty if the server sent none.
        description: String,
    },

    /// The token request could not be sent or its response not received.
    #[error("Network error while requesting access token: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The auth server answered with a body that is not a token response.
    #[error("Invalid token response: {message}")]
    InvalidTokenResponse {
        /// Description of the parse failure.
        message: String,
    },
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
