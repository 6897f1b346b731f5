//! Project connection settings loaded from the environment.

use crate::auth::Scopes;
use crate::config::{HostUrl, ProjectKey, Region};
use crate::error::ConfigError;

/// Environment variable holding the project key.
pub const PROJECT_KEY_ENV: &str = "CTP_PROJECT_KEY";

/// Environment variable selecting the hosting region.
pub const REGION_ENV: &str = "CTP_REGION";

/// Environment variable overriding the auth host.
pub const AUTH_URL_ENV: &str = "CTP_AUTH_URL";

/// Environment variable overriding the API host.
pub const API_URL_ENV: &str = "CTP_API_URL";

/// Environment variable holding the requested scopes.
pub const SCOPES_ENV: &str = "CTP_SCOPES";

/// Where a project lives and which scopes to request for it.
///
/// The hosts default to those of [`region`](Self::region); explicit URLs
/// take precedence.
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::config::ProjectSettings;
///
/// let settings = ProjectSettings::from_lookup(|name| match name {
///     "CTP_PROJECT_KEY" => Some("my-project".to_string()),
///     "CTP_REGION" => Some("us-central1.gcp".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(settings.api_host().as_ref(), "https://api.us-central1.gcp.commercetools.com");
/// assert!(settings.scopes().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectSettings {
    project_key: ProjectKey,
    region: Region,
    auth_host: HostUrl,
    api_host: HostUrl,
    scopes: Option<Scopes>,
}

impl ProjectSettings {
    /// Loads settings from `CTP_PROJECT_KEY`, `CTP_REGION`, `CTP_AUTH_URL`,
    /// `CTP_API_URL` and `CTP_SCOPES`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `CTP_PROJECT_KEY` is unset,
    /// or the validation error of any value that is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through `lookup`, which maps a variable name to its value.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let project_key = get(PROJECT_KEY_ENV)
            .ok_or_else(|| ConfigError::MissingEnvVar {
                name: PROJECT_KEY_ENV.to_string(),
            })
            .and_then(ProjectKey::new)?;

        let region: Region = get(REGION_ENV)
            .map(|value| value.parse::<Region>())
            .transpose()?
            .unwrap_or_default();

        let auth_host = get(AUTH_URL_ENV).map_or_else(|| region.auth_host(), HostUrl::new)?;
        let api_host = get(API_URL_ENV).map_or_else(|| region.api_host(), HostUrl::new)?;

        let scopes = get(SCOPES_ENV)
            .map(|value| value.parse::<Scopes>())
            .transpose()?;

        Ok(Self {
            project_key,
            region,
            auth_host,
            api_host,
            scopes,
        })
    }

    /// Returns the project key.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the hosting region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the auth host.
    #[must_use]
    pub const fn auth_host(&self) -> &HostUrl {
        &self.auth_host
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the configured scopes, if any.
    ///
    /// When `None`, `manage_project:{project_key}` is requested.
    #[must_use]
    pub const fn scopes(&self) -> Option<&Scopes> {
        self.scopes.as_ref()
    }
}
