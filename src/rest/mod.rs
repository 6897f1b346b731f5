//! REST request URIs for the commercetools API.
//!
//! This module builds the URIs that a [`Client`](crate::clients::Client)
//! sends REST requests to. It does not send anything itself.
//!
//! # Overview
//!
//! - [`RequestBuilder`]: One method per endpoint of a project
//! - [`Service`]: An endpoint with id/key addressing and query parameters
//! - [`ServiceKind`]: The endpoints known to the builder
//! - [`RequestBuilderError`]: Invalid parameter combinations
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_sdk::rest::RequestBuilder;
//!
//! let builder = RequestBuilder::new(project_key);
//!
//! // GET /{project_key}
//! let project = client.get(builder.project().build()?).await?;
//!
//! // GET /{project_key}/products?where=...&limit=20&offset=20
//! let uri = builder
//!     .products()
//!     .where_("masterData(published = true)")
//!     .per_page(20)
//!     .page(2)
//!     .build()?;
//! let products = client.get(uri).await?;
//! ```

mod errors;
mod request_builder;
mod service;

pub use errors::RequestBuilderError;
pub use request_builder::RequestBuilder;
pub use service::{Service, ServiceKind};
