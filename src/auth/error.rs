//! Authentication error types for the Cdiscount API SDK.
//!
//! # Error Types
//!
//! - [`AuthError::TokenRequestFailed`]: The token endpoint answered with a non-200 status
//! - [`AuthError::InvalidTokenResponse`]: The token endpoint answered 200 without a usable token
//! - [`AuthError::Http`]: The token request could not be sent
//!
//! # Example
//!
//! ```rust
//! use cdiscount_api::auth::AuthError;
//!
//! let error = AuthError::TokenRequestFailed {
//!     status: 401,
//!     message: r#"{"error":"invalid_client"}"#.to_string(),
//! };
//! assert_eq!(
//!     error.to_string(),
//!     r#"Error 401: {"error":"invalid_client"}"#
//! );
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur while authenticating against the token endpoint.
///
/// Authentication failures are fatal to client construction; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint did not answer with status 200.
    #[error("Error {status}: {message}")]
    TokenRequestFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        message: String,
    },

    /// The token endpoint answered 200 but the body holds no `access_token`.
    #[error("Invalid token response: {message}")]
    InvalidTokenResponse {
        /// Why the body could not be used.
        message: String,
    },

    /// The token request could not be built or sent.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(HttpError::Network(error))
    }
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
