//! Access tokens obtained through the client-credentials grant.

use crate::auth::Scopes;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Seconds before the server-side expiry at which a token is considered stale.
pub const REFRESH_MARGIN_SECS: i64 = 2 * 60 * 60;

// Upper bound for reported lifetimes, keeps expiry arithmetic in range.
const MAX_LIFETIME_SECS: u64 = 365 * 24 * 60 * 60;

/// A bearer token for the commercetools API.
///
/// Tokens are treated as expired [`REFRESH_MARGIN_SECS`] before the instant the
/// auth server reported, so a token never expires while a request is in
/// flight. Tokens issued with a lifetime shorter than twice the margin are
/// considered expired halfway through their lifetime instead.
///
/// The `Debug` implementation masks the token value.
///
/// # Example
///
/// ```rust
/// use commercetools_sdk::{AccessToken, Scopes};
/// use chrono::Utc;
///
/// let token = AccessToken::issued_at(Utc::now(), "abc".to_string(), 172_800, Scopes::new());
/// assert!(!token.expired());
/// assert_eq!(token.authorization_header(), "Bearer abc");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// The raw bearer token.
    pub token: String,

    /// When this token should be replaced.
    pub expires_at: DateTime<Utc>,

    /// The scopes granted by the auth server.
    pub scopes: Scopes,
}

impl AccessToken {
    /// Creates a token issued at `issued_at` that the server declared valid
    /// for `expires_in` seconds.
    #[must_use]
    pub fn issued_at(
        issued_at: DateTime<Utc>,
        token: String,
        expires_in: u64,
        scopes: Scopes,
    ) -> Self {
        let margin = Duration::seconds(REFRESH_MARGIN_SECS);
        let lifetime = Duration::seconds(
            i64::try_from(expires_in.min(MAX_LIFETIME_SECS)).unwrap_or(REFRESH_MARGIN_SECS),
        );
        let usable = if lifetime > margin * 2 {
            lifetime - margin
        } else {
            lifetime / 2
        };

        Self {
            token,
            expires_at: issued_at + usable,
            scopes,
        }
    }

    /// Returns `true` if this token must be replaced before the next request.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired_at(Utc::now())
    }

    /// Returns `true` if this token is stale at `now`.
    #[must_use]
    pub fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns the value of the `Authorization` header for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"*****")
            .field("expires_at", &self.expires_at)
            .field("scopes", &self.scopes)
            .finish()
    }
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_lived_token_expires_two_hours_early() {
        let now = Utc::now();
        // commercetools issues tokens valid for 48 hours
        let token = AccessToken::issued_at(now, "t".to_string(), 172_800, Scopes::new());

        assert_eq!(token.expires_at, now + Duration::hours(46));
        assert!(!token.expired_at(now + Duration::hours(45)));
        assert!(token.expired_at(now + Duration::hours(46)));
    }

    #[test]
    fn test_short_lived_token_expires_at_half_life() {
        let now = Utc::now();
        let token = AccessToken::issued_at(now, "t".to_string(), 600, Scopes::new());

        assert_eq!(token.expires_at, now + Duration::minutes(5));
    }

    #[test]
    fn test_zero_lifetime_token_is_immediately_expired() {
        let now = Utc::now();
        let token = AccessToken::issued_at(now, "t".to_string(), 0, Scopes::new());
        assert!(token.expired_at(now));
    }

    #[test]
    fn test_absurd_lifetime_is_clamped() {
        let now = Utc::now();
        let token = AccessToken::issued_at(now, "t".to_string(), u64::MAX, Scopes::new());
        assert!(token.expires_at > now + Duration::days(300));
    }

    #[test]
    fn test_debug_masks_token() {
        let token = AccessToken::issued_at(Utc::now(), "secret-token".to_string(), 3600, Scopes::new());
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("AccessToken"));
    }
}
