//! # commercetools SDK for Rust
//!
//! A small client for the commercetools platform API: client-credentials
//! authentication, an HTTP transport with optional retries, a REST request
//! URI builder and a GraphQL entry point.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Validated configuration values ([`ProjectKey`], [`HostUrl`], [`Region`], [`Credentials`])
//! - OAuth 2.0 client-credentials authentication with token caching via [`AuthMiddleware`]
//! - An async HTTP transport with optional retry and backoff via [`HttpMiddleware`]
//! - A [`Client`] composing both stages, retrying once when a token is rejected
//! - REST request URIs via [`rest::RequestBuilder`]
//! - GraphQL queries via [`GraphqlClient`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use commercetools_sdk::{
//!     AuthMiddleware, AuthMiddlewareOptions, Client, Credentials, HttpMiddleware,
//!     HttpMiddlewareOptions, ProjectKey, Region,
//! };
//! use commercetools_sdk::rest::RequestBuilder;
//!
//! let project_key = ProjectKey::new("my-project")?;
//! let region = Region::EuropeWest1Gcp;
//!
//! // Authentication stage, credentials from ADMIN_CLIENT_ID / ADMIN_CLIENT_SECRET
//! let auth = AuthMiddleware::new(
//!     AuthMiddlewareOptions::builder()
//!         .host(region.auth_host()?)
//!         .project_key(project_key.clone())
//!         .credentials(Credentials::from_env()?)
//!         .build()?,
//! )?;
//!
//! // Transport stage
//! let http = HttpMiddleware::new(
//!     HttpMiddlewareOptions::builder()
//!         .host(region.api_host()?)
//!         .build()?,
//! )?;
//!
//! let client = Client::builder().auth(auth).http(http).build()?;
//!
//! let uri = RequestBuilder::new(project_key).project().build()?;
//! let response = client.get(uri).await?;
//! println!("Project: {}", response.body["name"]);
//! ```
//!
//! ## GraphQL
//!
//! ```rust,ignore
//! use commercetools_sdk::GraphqlClient;
//! use std::sync::Arc;
//!
//! let graphql = GraphqlClient::new(Arc::new(client), project_key);
//! let response = graphql.query("{ project { name } }", None).await?;
//! println!("Project: {}", response.body["data"]["project"]["name"]);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, AuthError, AuthMiddleware, AuthMiddlewareOptions, Scopes};
pub use config::{
    ClientId, ClientSecret, Credentials, HostUrl, ProjectKey, ProjectSettings, Region,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    Client, ClientRequest, ClientResponse, ErrorKind, GraphqlClient, GraphqlError, HttpError,
    HttpMethod, HttpMiddleware, HttpMiddlewareOptions, HttpResponseError, RetryConfig,
};

// Re-export request builder types
pub use rest::{RequestBuilder, RequestBuilderError};
