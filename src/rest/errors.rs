//! Error types for building REST request URIs.

use thiserror::Error;

use crate::rest::ServiceKind;

/// Error returned when a [`Service`](crate::rest::Service) cannot build a URI.
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::rest::{RequestBuilder, RequestBuilderError};
/// use commercetools_sdk::ProjectKey;
///
/// let builder = RequestBuilder::new(ProjectKey::new("my-project").unwrap());
/// let result = builder.products().by_id("abc").by_key("shirt").build();
/// assert_eq!(result, Err(RequestBuilderError::IdAndKey));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestBuilderError {
    /// Both `by_id` and `by_key` were set.
    #[error("A resource can be addressed by id or by key, not both.")]
    IdAndKey,

    /// `by_id` or `by_key` was set on a service without addressable resources.
    #[error("The '{service}' service has no resources to address by id or key.")]
    NotAddressable {
        /// The service the id or key was set on.
        service: ServiceKind,
    },

    /// A parameter was given an empty value.
    #[error("The '{param}' parameter cannot be empty.")]
    EmptyParameter {
        /// The name of the parameter.
        param: &'static str,
    },

    /// `per_page` was zero.
    #[error("per_page must be greater than 0, got {value}.")]
    InvalidPerPage {
        /// The value that was provided.
        value: u32,
    },

    /// `page` was zero.
    #[error("page must be greater than 0, got {value}. Pages are numbered from 1.")]
    InvalidPage {
        /// The value that was provided.
        value: u32,
    },

    /// `page` was set without `per_page`.
    #[error("page requires per_page to be set.")]
    PageWithoutPerPage,
}
