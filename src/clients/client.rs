//! Client composition for the commercetools SDK.
//!
//! A [`Client`] chains an optional [`AuthMiddleware`] in front of an
//! [`HttpMiddleware`]. Every request passes through the auth stage, which
//! attaches a bearer token, and is then sent by the transport stage.

use crate::auth::AuthMiddleware;
use crate::clients::errors::HttpError;
use crate::clients::{ClientRequest, ClientResponse, HttpMethod, HttpMiddleware};
use crate::error::ConfigError;

/// A commercetools API client composed from middlewares.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks
/// (typically behind an [`Arc`](std::sync::Arc)).
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_sdk::{AuthMiddleware, Client, HttpMiddleware};
///
/// let client = Client::builder()
///     .auth(AuthMiddleware::new(auth_options)?)
///     .http(HttpMiddleware::new(http_options)?)
///     .build()?;
///
/// let response = client.get("/my-project").await?;
/// ```
#[derive(Debug)]
pub struct Client {
    auth: Option<AuthMiddleware>,
    http: HttpMiddleware,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new builder for constructing a `Client`.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the auth middleware, if one is configured.
    #[must_use]
    pub const fn auth(&self) -> Option<&AuthMiddleware> {
        self.auth.as_ref()
    }

    /// Returns the transport middleware.
    #[must_use]
    pub const fn http(&self) -> &HttpMiddleware {
        &self.http
    }

    /// Executes a request through the middleware chain.
    ///
    /// When the API rejects the access token as `invalid_token`, the cached
    /// token is dropped and the request is sent once more with a new token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request fails validation (`InvalidRequest`)
    /// - No access token can be obtained (`Auth`)
    /// - The transport or the API fails (`Network`, `Response`, `MaxRetries`)
    pub async fn execute(&self, request: ClientRequest) -> Result<ClientResponse, HttpError> {
        request.verify()?;

        let Some(auth) = &self.auth else {
            return self.http.send(&request, None).await;
        };

        let token = auth.token().await?;
        match self
            .http
            .send(&request, Some(&token.authorization_header()))
            .await
        {
            Err(HttpError::Response(e)) if e.is_invalid_token() => {
                tracing::warn!(
                    "Access token for project {} was rejected, requesting a new one",
                    auth.options().project_key()
                );
                auth.invalidate_if(&token).await;
                let token = auth.token().await?;
                self.http
                    .send(&request, Some(&token.authorization_header()))
                    .await
            }
            result => result,
        }
    }

    /// Sends a `GET` request to `uri`.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn get(&self, uri: impl Into<String>) -> Result<ClientResponse, HttpError> {
        let request = ClientRequest::builder(HttpMethod::Get, uri).build()?;
        self.execute(request).await
    }

    /// Sends a `POST` request with a JSON body to `uri`.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn post(
        &self,
        uri: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<ClientResponse, HttpError> {
        let request = ClientRequest::builder(HttpMethod::Post, uri)
            .body(body)
            .build()?;
        self.execute(request).await
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    auth: Option<AuthMiddleware>,
    http: Option<HttpMiddleware>,
}

impl ClientBuilder {
    /// Creates a new builder with no middlewares.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth middleware.
    #[must_use]
    pub fn auth(mut self, auth: AuthMiddleware) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the transport middleware (required).
    #[must_use]
    pub fn http(mut self, http: HttpMiddleware) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no transport
    /// middleware was set.
    pub fn build(self) -> Result<Client, ConfigError> {
        let http = self
            .http
            .ok_or(ConfigError::MissingRequiredField { field: "http" })?;

        Ok(Client {
            auth: self.auth,
            http,
        })
    }
}
