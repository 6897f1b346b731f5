//! Error types for the commercetools SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use commercetools_sdk::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the id of an API client.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the secret of an API client.")]
    EmptyClientSecret,

    /// Project key is invalid.
    #[error("Invalid project key '{key}'. Expected 2-36 characters of lowercase letters, digits, '-' or '_'.")]
    InvalidProjectKey {
        /// The invalid key that was provided.
        key: String,
    },

    /// Region is invalid.
    #[error("Invalid region '{region}'. Expected a region such as 'europe-west1.gcp' or 'us-east-2.aws'.")]
    InvalidRegion {
        /// The invalid region string that was provided.
        region: String,
    },

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.europe-west1.gcp.commercetools.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required environment variable is unset or empty.
    #[error("Environment variable '{name}' is not set. Export it or add it to a .env file.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: String,
    },
}
