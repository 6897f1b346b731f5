//! API client credentials and environment loading.

use crate::config::{ClientId, ClientSecret};
use crate::error::ConfigError;

/// Environment variable holding the API client id.
pub const CLIENT_ID_ENV: &str = "ADMIN_CLIENT_ID";

/// Environment variable holding the API client secret.
pub const CLIENT_SECRET_ENV: &str = "ADMIN_CLIENT_SECRET";

/// The id/secret pair of a commercetools API client.
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::{ClientId, ClientSecret, Credentials};
///
/// let credentials = Credentials::new(
///     ClientId::new("client-id").unwrap(),
///     ClientSecret::new("client-secret").unwrap(),
/// );
/// assert_eq!(credentials.client_id().as_ref(), "client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    client_id: ClientId,
    client_secret: ClientSecret,
}

impl Credentials {
    /// Creates credentials from validated parts.
    #[must_use]
    pub const fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    /// Loads credentials from `ADMIN_CLIENT_ID` and `ADMIN_CLIENT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if either variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_vars(CLIENT_ID_ENV, CLIENT_SECRET_ENV)
    }

    /// Loads credentials from the named environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if either variable is unset or empty.
    pub fn from_env_vars(id_var: &str, secret_var: &str) -> Result<Self, ConfigError> {
        let client_id = ClientId::new(read_var(id_var)?)?;
        let client_secret = ClientSecret::new(read_var(secret_var)?)?;
        Ok(Self::new(client_id, client_secret))
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }
}

fn read_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar {
            name: name.to_string(),
        })
}
