//! Access tokens issued by the OAuth2 token endpoint.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Raw JSON body returned by the token endpoint.
///
/// Only `access_token` is required; the other fields are informational.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// Lifetime of the token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Token type, normally `Bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Granted scopes, space separated.
    #[serde(default)]
    pub scope: Option<String>,
}

/// A bearer token obtained through the client-credentials grant.
///
/// The token is never refreshed by the SDK. `Debug` output masks the value.
///
/// # Example
///
/// ```rust
/// use cdiscount_api::AccessToken;
///
/// let token = AccessToken::new("abc", None);
/// assert_eq!(token.as_str(), "abc");
/// assert!(!token.is_expired());
/// assert_eq!(format!("{:?}", token), "AccessToken { token: *****, expires_at: None }");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a token with an optional expiry instant.
    #[must_use]
    pub fn new(token: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Builds a token from a token endpoint response, computing the expiry
    /// instant from `expires_in` relative to `issued_at`.
    #[must_use]
    pub fn from_response(response: AccessTokenResponse, issued_at: DateTime<Utc>) -> Self {
        let expires_at = response
            .expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime));
        Self::new(response.access_token, expires_at)
    }

    /// Returns the raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Returns when the token expires, if the endpoint said so.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns `true` if this token has expired.
    ///
    /// Tokens without an expiration time are considered never expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|expires| Utc::now() > expires)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &format_args!("*****"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};
