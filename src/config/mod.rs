//! Configuration types for the commercetools SDK.
//!
//! This module provides the validated values needed to talk to a
//! commercetools project.
//!
//! # Overview
//!
//! - [`ClientId`] and [`ClientSecret`]: API client credentials (the secret masks itself in debug output)
//! - [`Credentials`]: The id/secret pair, loadable from `ADMIN_CLIENT_ID` / `ADMIN_CLIENT_SECRET`
//! - [`ProjectKey`]: A validated project key
//! - [`HostUrl`]: A validated auth or API base URL
//! - [`Region`]: A hosting region that derives both hosts
//! - [`ProjectSettings`]: Project key, hosts and scopes loaded from `CTP_*` variables
//!
//! # Example
//!
//! ```rust
//! use commercetools_sdk::{ProjectKey, Region};
//!
//! let project_key = ProjectKey::new("my-project").unwrap();
//! let region = Region::EuropeWest1Gcp;
//!
//! assert_eq!(project_key.as_ref(), "my-project");
//! assert_eq!(region.api_host().unwrap().as_ref(), "https://api.europe-west1.gcp.commercetools.com");
//! ```

mod credentials;
mod newtypes;
mod project;
mod region;

pub use credentials::{Credentials, CLIENT_ID_ENV, CLIENT_SECRET_ENV};
pub use newtypes::{ClientId, ClientSecret, HostUrl, ProjectKey};
pub use project::{
    ProjectSettings, API_URL_ENV, AUTH_URL_ENV, PROJECT_KEY_ENV, REGION_ENV, SCOPES_ENV,
};
pub use region::Region;
