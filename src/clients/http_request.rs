//! HTTP request types for the commercetools SDK.
//!
//! This module provides the [`ClientRequest`] type and its builder for
//! constructing requests to the commercetools API.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the commercetools API.
///
/// commercetools performs updates through `POST` with update actions, so
/// `PUT` and `PATCH` are never needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP HEAD method for checking resource existence.
    Head,
    /// HTTP POST method for creating resources, updates and GraphQL.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Head => write!(f, "HEAD"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request to be executed by a [`Client`](crate::clients::Client).
///
/// The `uri` is relative to the API host and normally produced by a
/// [`RequestBuilder`](crate::rest::RequestBuilder).
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::clients::{ClientRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = ClientRequest::builder(HttpMethod::Get, "/my-project")
///     .build()
///     .unwrap();
///
/// let post_request = ClientRequest::builder(HttpMethod::Post, "/my-project/graphql")
///     .body(json!({"query": "{ project { name } }"}))
///     .build()
///     .unwrap();
/// assert!(post_request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClientRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// Path and query string, relative to the API host.
    pub uri: String,
    /// The JSON request body, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Additional headers to include in the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl ClientRequest {
    /// Creates a new builder for constructing a `ClientRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, uri: impl Into<String>) -> ClientRequestBuilder {
        ClientRequestBuilder::new(method, uri)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `uri` does not start with `/`
    /// - `method` is `Post` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.uri.starts_with('/') {
            return Err(InvalidHttpRequestError::InvalidUri {
                uri: self.uri.clone(),
            });
        }

        if self.method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`ClientRequest`] instances.
#[derive(Debug)]
pub struct ClientRequestBuilder {
    method: HttpMethod,
    uri: String,
    body: Option<serde_json::Value>,
    headers: Option<HashMap<String, String>>,
}

impl ClientRequestBuilder {
    fn new(method: HttpMethod, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            body: None,
            headers: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`ClientRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<ClientRequest, InvalidHttpRequestError> {
        let request = ClientRequest {
            method: self.method,
            uri: self.uri,
            body: self.body,
            headers: self.headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Head.to_string(), "HEAD");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = ClientRequest::builder(HttpMethod::Get, "/shop")
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.uri, "/shop");
        assert!(request.body.is_none());
        assert!(request.headers.is_none());
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = ClientRequest::builder(HttpMethod::Post, "/shop/graphql").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "POST"
        ));
    }

    #[test]
    fn test_verify_requires_absolute_uri() {
        let result = ClientRequest::builder(HttpMethod::Get, "shop").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidUri { uri }) if uri == "shop"
        ));
    }

    #[test]
    fn test_builder_with_headers() {
        let request = ClientRequest::builder(HttpMethod::Post, "/shop/carts")
            .body(json!({"currency": "EUR"}))
            .header("X-Correlation-ID", "demo-1")
            .build()
            .unwrap();

        let headers = request.headers.unwrap();
        assert_eq!(headers.get("X-Correlation-ID"), Some(&"demo-1".to_string()));
    }

    #[test]
    fn test_serializes_without_empty_fields() {
        let request = ClientRequest::builder(HttpMethod::Get, "/shop")
            .build()
            .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"method": "GET", "uri": "/shop"}));
    }
}
