//! commercetools hosting region definitions.
//!
//! This module provides the [`Region`] enum for deriving the auth and API
//! hosts of a project.

use crate::config::HostUrl;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A commercetools hosting region.
///
/// Every project lives in exactly one region; the region determines both the
/// auth host (`https://auth.{region}.commercetools.com`) and the API host
/// (`https://api.{region}.commercetools.com`).
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::Region;
///
/// let region: Region = "europe-west1.gcp".parse().unwrap();
/// assert_eq!(region, Region::EuropeWest1Gcp);
/// assert_eq!(
///     region.auth_host().unwrap().as_ref(),
///     "https://auth.europe-west1.gcp.commercetools.com"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Europe (Google Cloud, Belgium).
    #[default]
    EuropeWest1Gcp,
    /// North America (Google Cloud, Iowa).
    UsCentral1Gcp,
    /// Australia (Google Cloud, Sydney).
    AustraliaSoutheast1Gcp,
    /// Europe (AWS, Frankfurt).
    EuCentral1Aws,
    /// North America (AWS, Ohio).
    UsEast2Aws,
    /// Region identifier not known to this SDK version.
    Custom(String),
}

impl Region {
    /// Returns the region identifier used in host names.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EuropeWest1Gcp => "europe-west1.gcp",
            Self::UsCentral1Gcp => "us-central1.gcp",
            Self::AustraliaSoutheast1Gcp => "australia-southeast1.gcp",
            Self::EuCentral1Aws => "eu-central-1.aws",
            Self::UsEast2Aws => "us-east-2.aws",
            Self::Custom(region) => region,
        }
    }

    /// Returns all regions known to this SDK version.
    #[must_use]
    pub fn known_regions() -> Vec<Self> {
        vec![
            Self::EuropeWest1Gcp,
            Self::UsCentral1Gcp,
            Self::AustraliaSoutheast1Gcp,
            Self::EuCentral1Aws,
            Self::UsEast2Aws,
        ]
    }

    /// Returns the OAuth host for this region.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegion`] if a hand-built
    /// [`Custom`](Self::Custom) identifier is not host-safe.
    pub fn auth_host(&self) -> Result<HostUrl, ConfigError> {
        self.host("auth")
    }

    /// Returns the HTTP API host for this region.
    ///
    /// # Errors
    ///
    /// See [`auth_host`](Self::auth_host).
    pub fn api_host(&self) -> Result<HostUrl, ConfigError> {
        self.host("api")
    }

    fn host(&self, service: &str) -> Result<HostUrl, ConfigError> {
        if let Self::Custom(region) = self {
            if !is_valid_custom(region) {
                return Err(ConfigError::InvalidRegion {
                    region: region.clone(),
                });
            }
        }
        HostUrl::new(format!(
            "https://{service}.{}.commercetools.com",
            self.as_str()
        ))
    }
}

// Custom regions look like `{location}.{cloud}`
fn is_valid_custom(region: &str) -> bool {
    region.split('.').count() == 2
        && region.split('.').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        })
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = s.trim().to_lowercase();

        if let Some(known) = Self::known_regions()
            .into_iter()
            .find(|r| r.as_str() == region)
        {
            return Ok(known);
        }

        if is_valid_custom(&region) {
            Ok(Self::Custom(region))
        } else {
            Err(ConfigError::InvalidRegion {
                region: s.to_string(),
            })
        }
    }
}
