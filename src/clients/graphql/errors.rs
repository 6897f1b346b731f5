//! GraphQL-specific error types for the commercetools SDK.
//!
//! Only HTTP-level failures are errors. GraphQL-level errors (unknown fields,
//! failed validation) come back with HTTP 200 in the body's `errors` array;
//! [`GraphqlClient::errors`](crate::clients::GraphqlClient::errors) extracts them.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    ///
    /// Includes token failures, network errors, non-2xx responses and retry
    /// exhaustion.
    #[error(transparent)]
    Http(#[from] HttpError),
}
