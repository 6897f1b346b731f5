//! OAuth scope handling for the commercetools API.
//!
//! This module provides the [`Scopes`] type for managing the scopes requested
//! during the client-credentials grant.

use crate::config::ProjectKey;
use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered, deduplicated set of OAuth scopes.
///
/// commercetools scopes are usually bound to a project, e.g.
/// `manage_project:my-project` or `view_products:my-project`. Scopes are
/// kept in insertion order because that is how they are sent to the auth
/// server.
///
/// # Serialization
///
/// `Scopes` serializes to and deserializes from a space-separated string, the
/// format used in token responses:
///
/// ```rust
/// use commercetools_sdk::Scopes;
///
/// let scopes: Scopes = "view_products:shop,view_orders:shop".parse().unwrap();
/// let json = serde_json::to_string(&scopes).unwrap();
/// assert_eq!(json, r#""view_products:shop view_orders:shop""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Scopes {
    scopes: Vec<String>,
}

impl Scopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `manage_project:{key}` scope set, granting full access to a project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commercetools_sdk::{ProjectKey, Scopes};
    ///
    /// let scopes = Scopes::manage_project(&ProjectKey::new("shop").unwrap());
    /// assert_eq!(scopes.to_string(), "manage_project:shop");
    /// ```
    #[must_use]
    pub fn manage_project(project_key: &ProjectKey) -> Self {
        Self {
            scopes: vec![format!("manage_project:{project_key}")],
        }
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns the number of scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns `true` if `scope` is part of this set.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Returns `true` if this scope set contains every scope in `other`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.iter().all(|s| self.contains(s))
    }

    /// Returns an iterator over the scopes in request order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    fn push(&mut self, scope: &str) {
        if !self.contains(scope) {
            self.scopes.push(scope.to_string());
        }
    }

    fn is_valid_scope(scope: &str) -> bool {
        scope
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':'))
    }
}

impl FromStr for Scopes {
    type Err = ConfigError;

    /// Parses scopes separated by spaces and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = Self::new();

        for scope in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if scope.is_empty() {
                continue;
            }

            if !Self::is_valid_scope(scope) {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }

            scopes.push(scope);
        }

        Ok(scopes)
    }
}

impl fmt::Display for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scopes.join(" "))
    }
}

impl Serialize for Scopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Scopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scopes_parse_space_and_comma_separated() {
        let scopes: Scopes = "view_products:shop, view_orders:shop manage_my_profile:shop"
            .parse()
            .unwrap();

        assert_eq!(scopes.len(), 3);
        assert!(scopes.contains("view_orders:shop"));
        assert!(scopes.contains("manage_my_profile:shop"));
    }

    #[test]
    fn test_scopes_keep_order_and_deduplicate() {
        let scopes: Scopes = "b:shop a:shop b:shop".parse().unwrap();
        assert_eq!(scopes.iter().collect::<Vec<_>>(), vec!["b:shop", "a:shop"]);
    }

    #[test]
    fn test_scopes_reject_invalid_characters() {
        let result: Result<Scopes, _> = "view_products:shop;drop".parse();
        assert!(matches!(result, Err(ConfigError::InvalidScopes { .. })));
    }

    #[test]
    fn test_empty_string_gives_empty_scopes() {
        let scopes: Scopes = "  ,  ".parse().unwrap();
        assert!(scopes.is_empty());
    }

    #[test]
    fn test_covers() {
        let granted: Scopes = "manage_project:shop view_products:shop".parse().unwrap();
        let required: Scopes = "view_products:shop".parse().unwrap();
        assert!(granted.covers(&required));
        assert!(!required.covers(&granted));
    }

    #[test]
    fn test_deserialize_from_token_response_format() {
        let scopes: Scopes = serde_json::from_str(r#""manage_project:shop view_orders:shop""#).unwrap();
        assert!(scopes.contains("manage_project:shop"));
        assert!(scopes.contains("view_orders:shop"));
    }
}
