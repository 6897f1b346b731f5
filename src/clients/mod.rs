//! HTTP client types for commercetools API communication.
//!
//! This module provides the client layer: the transport middleware, the
//! client that composes it with authentication, and the request and response
//! types flowing through them.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: Composes an optional auth stage with the transport stage
//! - [`HttpMiddleware`]: Sends requests with `reqwest`, optionally retrying
//! - [`HttpMiddlewareOptions`]: Host, timeout, retry and echo settings
//! - [`ClientRequest`]: A request relative to the API host
//! - [`ClientResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, HEAD, POST, DELETE)
//! - [`graphql::GraphqlClient`]: Executes GraphQL queries for a project
//! - [`HttpError`]: Unified error type for the client layer
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_sdk::clients::{Client, HttpMiddleware, HttpMiddlewareOptions};
//! use commercetools_sdk::Region;
//!
//! let http = HttpMiddleware::new(
//!     HttpMiddlewareOptions::builder()
//!         .host(Region::EuropeWest1Gcp.api_host()?)
//!         .build()?,
//! )?;
//!
//! let client = Client::builder().auth(auth).http(http).build()?;
//! let response = client.get("/my-project").await?;
//! ```

mod client;
mod errors;
pub mod graphql;
mod http_middleware;
mod http_request;
mod http_response;

pub use client::{Client, ClientBuilder};
pub use errors::{
    ErrorKind, HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_middleware::{
    HttpMiddleware, HttpMiddlewareOptions, HttpMiddlewareOptionsBuilder, RetryConfig, SDK_VERSION,
};
pub use http_request::{ClientRequest, ClientRequestBuilder, HttpMethod};
pub use http_response::ClientResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError};
