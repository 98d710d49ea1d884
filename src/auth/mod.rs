//! Authentication for the Cdiscount API SDK.
//!
//! The seller API uses the OAuth 2.0 client-credentials grant. A token is
//! obtained once when a [`CdiscountClient`](crate::CdiscountClient) is built
//! and installed as a bearer header for every subsequent request.
//!
//! - [`exchange_client_credentials`]: Exchange client id and secret for a token
//! - [`AccessToken`]: The resulting bearer token
//! - [`AuthError`]: Authentication failures

mod client_credentials;
mod error;
mod token;

pub use client_credentials::{exchange_client_credentials, exchange_client_credentials_with};
pub use error::AuthError;
pub use token::{AccessToken, AccessTokenResponse};
