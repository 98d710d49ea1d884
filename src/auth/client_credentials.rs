//! OAuth 2.0 Client Credentials Grant for marketplace sellers.
//!
//! The seller API authenticates server-to-server: the client id and secret
//! of the seller's API account are exchanged for a bearer token at a fixed
//! token endpoint, with no user interaction.
//!
//! # Example
//!
//! ```rust,ignore
//! use cdiscount_api::{CdiscountConfig, ClientId, ClientSecret, SellerId};
//! use cdiscount_api::auth::exchange_client_credentials;
//!
//! let config = CdiscountConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .seller_id(SellerId::new("12345").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let token = exchange_client_credentials(&config).await?;
//! println!("Token expires at {:?}", token.expires_at());
//! ```

use chrono::Utc;
use serde::Serialize;

use crate::auth::{AccessToken, AccessTokenResponse, AuthError};
use crate::clients::HttpClient;
use crate::config::CdiscountConfig;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Form body for the client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Exchanges client credentials for an access token on a fresh transport.
///
/// # Errors
///
/// - [`AuthError::TokenRequestFailed`] if the endpoint does not answer 200
/// - [`AuthError::InvalidTokenResponse`] if the body has no `access_token`
/// - [`AuthError::Http`] if the request cannot be sent
pub async fn exchange_client_credentials(
    config: &CdiscountConfig,
) -> Result<AccessToken, AuthError> {
    let transport = HttpClient::transport()?;
    exchange_client_credentials_with(&transport, config).await
}

/// Exchanges client credentials for an access token using `transport`.
///
/// The form fields `client_id`, `client_secret` and
/// `grant_type=client_credentials` are POSTed to the configured token URL.
///
/// # Errors
///
/// See [`exchange_client_credentials`].
pub async fn exchange_client_credentials_with(
    transport: &reqwest::Client,
    config: &CdiscountConfig,
) -> Result<AccessToken, AuthError> {
    let request_body = ClientCredentialsRequest {
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
    };

    tracing::debug!(token_url = %config.token_url(), "Requesting access token");

    let response = transport
        .post(config.token_url().as_ref())
        .form(&request_body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    if status != 200 {
        tracing::warn!(status, "Token exchange rejected");
        return Err(AuthError::TokenRequestFailed {
            status,
            message: body,
        });
    }

    let token_response: AccessTokenResponse =
        serde_json::from_str(&body).map_err(|e| AuthError::InvalidTokenResponse {
            message: format!("Failed to parse token response: {e}"),
        })?;

    if token_response.access_token.is_empty() {
        return Err(AuthError::InvalidTokenResponse {
            message: "access_token is empty".to_string(),
        });
    }

    let token = AccessToken::from_response(token_response, Utc::now());
    tracing::info!(
        seller_id = %config.seller_id(),
        expires_at = ?token.expires_at(),
        "Authenticated against Cdiscount API"
    );

    Ok(token)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientCredentialsRequest<'_>>();
};
