//! Client-credentials authentication middleware.
//!
//! The [`AuthMiddleware`] obtains access tokens from the commercetools auth
//! host with the OAuth 2.0 client-credentials grant and caches them until
//! they approach expiry. The grant itself is performed by the `oauth2` crate;
//! this module only configures it and manages the cached token.
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_sdk::{AuthMiddleware, AuthMiddlewareOptions, Credentials, ProjectKey, Region};
//!
//! let project_key = ProjectKey::new("my-project").unwrap();
//! let options = AuthMiddlewareOptions::builder()
//!     .host(Region::EuropeWest1Gcp.auth_host()?)
//!     .project_key(project_key)
//!     .credentials(Credentials::from_env()?)
//!     .build()?;
//!
//! let auth = AuthMiddleware::new(options)?;
//! let token = auth.token().await?;
//! ```

use std::time::Duration;

use chrono::Utc;
use oauth2::basic::{BasicClient, BasicRequestTokenError};
use oauth2::{
    EndpointNotSet, EndpointSet, HttpClientError, RequestTokenError, Scope, TokenResponse,
    TokenUrl,
};
use tokio::sync::Mutex;

use crate::auth::{AccessToken, AuthError, Scopes};
use crate::config::{Credentials, HostUrl, ProjectKey};
use crate::error::ConfigError;

/// Default path of the token endpoint on the auth host.
pub const DEFAULT_TOKEN_PATH: &str = "/oauth/token";

// Lifetime assumed when the auth server omits `expires_in`.
const DEFAULT_EXPIRES_IN: u64 = 60 * 60;

/// Default deadline for a single token request.
pub const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(30);

type ConfiguredBasicClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Configuration of the [`AuthMiddleware`].
///
/// Required fields are `host`, `project_key` and `credentials`. When no
/// scopes are given, `manage_project:{project_key}` is requested. Token
/// requests time out after [`DEFAULT_TOKEN_TIMEOUT`] unless configured.
#[derive(Clone, Debug)]
pub struct AuthMiddlewareOptions {
    host: HostUrl,
    project_key: ProjectKey,
    credentials: Credentials,
    scopes: Scopes,
    token_path: String,
    timeout: Duration,
}

impl AuthMiddlewareOptions {
    /// Creates a new builder for constructing `AuthMiddlewareOptions`.
    #[must_use]
    pub fn builder() -> AuthMiddlewareOptionsBuilder {
        AuthMiddlewareOptionsBuilder::new()
    }

    /// Returns the auth host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the project key the token is requested for.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the client credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the requested scopes.
    #[must_use]
    pub const fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    /// Returns the deadline of a single token request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the full token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> String {
        self.host.join(&self.token_path)
    }
}

/// Builder for [`AuthMiddlewareOptions`].
#[derive(Debug, Default)]
pub struct AuthMiddlewareOptionsBuilder {
    host: Option<HostUrl>,
    project_key: Option<ProjectKey>,
    credentials: Option<Credentials>,
    scopes: Option<Scopes>,
    token_path: Option<String>,
    timeout: Option<Duration>,
}

impl AuthMiddlewareOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auth host (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the project key (required).
    #[must_use]
    pub fn project_key(mut self, project_key: ProjectKey) -> Self {
        self.project_key = Some(project_key);
        self
    }

    /// Sets the client credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the scopes to request.
    #[must_use]
    pub fn scopes(mut self, scopes: Scopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Overrides the token endpoint path (default `/oauth/token`).
    #[must_use]
    pub fn token_path(mut self, path: impl Into<String>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Sets the deadline of a single token request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the options, validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host`, `project_key`
    /// or `credentials` are not set.
    pub fn build(self) -> Result<AuthMiddlewareOptions, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;
        let project_key = self
            .project_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "project_key",
            })?;
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        let scopes = self
            .scopes
            .filter(|scopes| !scopes.is_empty())
            .unwrap_or_else(|| Scopes::manage_project(&project_key));

        Ok(AuthMiddlewareOptions {
            host,
            project_key,
            credentials,
            scopes,
            token_path: self
                .token_path
                .unwrap_or_else(|| DEFAULT_TOKEN_PATH.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TOKEN_TIMEOUT),
        })
    }
}

/// Authentication stage of a [`Client`](crate::clients::Client).
///
/// Holds at most one cached [`AccessToken`]. [`token`](Self::token) returns
/// the cached token while it is fresh and otherwise requests a new one.
/// The cache lock is held across the token request, so concurrent callers
/// wait for a single in-flight request instead of each starting their own.
///
/// # Thread Safety
///
/// `AuthMiddleware` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct AuthMiddleware {
    options: AuthMiddlewareOptions,
    oauth_client: ConfiguredBasicClient,
    http_client: reqwest::Client,
    cache: Mutex<Option<AccessToken>>,
}

// Verify AuthMiddleware is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthMiddleware>();
};

impl AuthMiddleware {
    /// Creates the middleware from its options.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidTokenUrl`] if the token URL cannot be parsed,
    /// or [`AuthError::Transport`] if the HTTP client cannot be initialized.
    pub fn new(options: AuthMiddlewareOptions) -> Result<Self, AuthError> {
        let url = options.token_url();
        let token_url = TokenUrl::new(url.clone())
            .map_err(|source| AuthError::InvalidTokenUrl { url, source })?;

        let credentials = options.credentials();
        let oauth_client = BasicClient::new(oauth2::ClientId::new(
            credentials.client_id().as_ref().to_string(),
        ))
        .set_client_secret(oauth2::ClientSecret::new(
            credentials.client_secret().as_ref().to_string(),
        ))
        .set_token_uri(token_url);

        // Token endpoints must not redirect; following one would leak the credentials.
        let http_client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(options.timeout)
            .build()
            .map_err(|e| AuthError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self {
            options,
            oauth_client,
            http_client,
            cache: Mutex::new(None),
        })
    }

    /// Returns the options this middleware was built from.
    #[must_use]
    pub const fn options(&self) -> &AuthMiddlewareOptions {
        &self.options
    }

    /// Returns a valid access token, requesting a new one when needed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if a new token is needed and the request fails.
    pub async fn token(&self) -> Result<AccessToken, AuthError> {
        let mut cache = self.cache.lock().await;

        if let Some(token) = cache.as_ref().filter(|token| !token.expired()) {
            tracing::debug!(
                "Reusing cached access token for project {}",
                self.options.project_key
            );
            return Ok(token.clone());
        }

        let token = self.fetch_token().await?;
        *cache = Some(token.clone());
        Ok(token)
    }

    /// Drops the cached token so the next [`token`](Self::token) call requests a new one.
    pub async fn invalidate(&self) {
        self.cache.lock().await.take();
    }

    /// Drops the cached token only if it is still `rejected`.
    ///
    /// Returns `true` if the token was dropped. A token cached by another
    /// caller in the meantime is kept.
    pub async fn invalidate_if(&self, rejected: &AccessToken) -> bool {
        let mut cache = self.cache.lock().await;
        if cache.as_ref().is_some_and(|cached| cached.token == rejected.token) {
            cache.take();
            true
        } else {
            false
        }
    }

    /// Returns the cached token, if any, without requesting a new one.
    pub async fn cached_token(&self) -> Option<AccessToken> {
        self.cache.lock().await.clone()
    }

    async fn fetch_token(&self) -> Result<AccessToken, AuthError> {
        tracing::debug!(
            "Requesting access token from {} for project {}",
            self.options.token_url(),
            self.options.project_key
        );

        let mut request = self.oauth_client.exchange_client_credentials();
        for scope in self.options.scopes.iter() {
            request = request.add_scope(Scope::new(scope.to_string()));
        }

        let issued_at = Utc::now();
        let response = request
            .request_async(&self.http_client)
            .await
            .map_err(map_token_error)?;

        let granted = response.scopes().map_or_else(
            || self.options.scopes.clone(),
            |scopes| {
                scopes
                    .iter()
                    .map(|scope| scope.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
                    .parse()
                    .unwrap_or_else(|_| self.options.scopes.clone())
            },
        );
        let expires_in = response
            .expires_in()
            .map_or(DEFAULT_EXPIRES_IN, |lifetime| lifetime.as_secs());

        Ok(AccessToken::issued_at(
            issued_at,
            response.access_token().secret().clone(),
            expires_in,
            granted,
        ))
    }
}

fn map_token_error(error: BasicRequestTokenError<HttpClientError<reqwest::Error>>) -> AuthError {
    match error {
        RequestTokenError::ServerResponse(response) => AuthError::TokenRequestFailed {
            error: response.error().as_ref().to_string(),
            description: response.error_description().cloned().unwrap_or_default(),
        },
        RequestTokenError::Request(e) => AuthError::Transport {
            message: e.to_string(),
        },
        RequestTokenError::Parse(e, _body) => AuthError::InvalidTokenResponse {
            message: e.to_string(),
        },
        RequestTokenError::Other(message) => AuthError::InvalidTokenResponse { message },
    }
}
