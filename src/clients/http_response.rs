//! HTTP response types for the commercetools SDK.
//!
//! This module provides the [`ClientResponse`] type returned by a
//! [`Client`](crate::clients::Client).

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::ClientRequest;

/// A successful response from the commercetools API.
///
/// Header and request echoes are only present when the corresponding
/// [`HttpMiddlewareOptions`](crate::clients::HttpMiddlewareOptions) flags are set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClientResponse {
    /// The HTTP status code.
    pub status_code: u16,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Response headers (lowercased names, headers may have multiple values).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, Vec<String>>>,
    /// The request that produced this response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<ClientRequest>,
}

impl ClientResponse {
    /// Creates a new `ClientResponse`.
    #[must_use]
    pub const fn new(
        status_code: u16,
        body: serde_json::Value,
        headers: Option<HashMap<String, Vec<String>>>,
    ) -> Self {
        Self {
            status_code,
            body,
            headers,
            request: None,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .get(&name.to_lowercase())?
            .first()
            .map(String::as_str)
    }

    /// Returns the `X-Correlation-ID` assigned to the request by the platform.
    ///
    /// Include this id when reporting problems to commercetools support.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.header("x-correlation-id")
    }
}
