//! GraphQL API client for commercetools.
//!
//! This module provides a GraphQL client built on top of the
//! [`Client`](crate::clients::Client). The platform executes the query; the
//! client only POSTs it to the project's GraphQL endpoint.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes queries with `query()`
//! - [`GraphqlError`]: Error type for GraphQL API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_sdk::GraphqlClient;
//!
//! let response = graphql.query("{ project { name } }", None).await?;
//! if let Some(errors) = GraphqlClient::errors(&response) {
//!     eprintln!("GraphQL errors: {errors:?}");
//! }
//! ```

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
