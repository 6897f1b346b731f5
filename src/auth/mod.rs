//! Authentication types for the commercetools SDK.
//!
//! This module provides the client-credentials authentication stage of the
//! client together with the scope and token types it works with.
//!
//! # Overview
//!
//! - [`AuthMiddleware`]: Obtains and caches access tokens
//! - [`AuthMiddlewareOptions`]: Auth host, project key, credentials and scopes
//! - [`Scopes`]: The OAuth scopes requested for a token
//! - [`AccessToken`]: A bearer token with its expiry
//! - [`AuthError`]: Token acquisition failures
//!
//! # Token Lifetime
//!
//! commercetools issues client-credentials tokens valid for 48 hours. The
//! middleware reuses a token until two hours before that and then requests
//! a new one; tokens are never refreshed with a refresh token.

mod error;
mod middleware;
mod scopes;
mod token;

pub use error::AuthError;
pub use middleware::{
    AuthMiddleware, AuthMiddlewareOptions, AuthMiddlewareOptionsBuilder, DEFAULT_TOKEN_PATH,
    DEFAULT_TOKEN_TIMEOUT,
};
pub use scopes::Scopes;
pub use token::{AccessToken, REFRESH_MARGIN_SECS};
