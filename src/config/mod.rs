//! Configuration types for the Cdiscount API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with the marketplace seller API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CdiscountConfig`]: The main configuration struct holding all SDK settings
//! - [`CdiscountConfigBuilder`]: A builder for constructing [`CdiscountConfig`] instances
//! - [`ClientId`], [`ClientSecret`], [`SellerId`]: Validated credential newtypes
//! - [`SubscriptionKeys`]: Gateway subscription keys per [`ApiDomain`]
//! - [`BaseUrl`]: A validated absolute URL
//!
//! # Example
//!
//! ```rust
//! use cdiscount_api::{CdiscountConfig, ClientId, ClientSecret, SellerId};
//!
//! let config = CdiscountConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .seller_id(SellerId::new("12345").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://marketplaceapi.cdiscount.com");
//! ```

mod domain;
mod newtypes;

pub use domain::{ApiDomain, SubscriptionKeys};
pub use newtypes::{BaseUrl, ClientId, ClientSecret, SellerId, SubscriptionKey};

use crate::error::ConfigError;

/// Default host of the marketplace seller API.
pub const DEFAULT_BASE_URL: &str = "https://marketplaceapi.cdiscount.com";

/// Default OAuth2 token endpoint for international sellers.
pub const DEFAULT_TOKEN_URL: &str =
    "https://oauth2.cdiscount.com/auth/realms/maas-international-sellers/protocol/openid-connect/token";

/// Configuration for the Cdiscount API SDK.
///
/// Holds the OAuth2 client credentials, the seller identity, the per-domain
/// subscription keys and the endpoints to talk to.
///
/// # Thread Safety
///
/// `CdiscountConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CdiscountConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    seller_id: SellerId,
    subscription_keys: SubscriptionKeys,
    base_url: BaseUrl,
    token_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl CdiscountConfig {
    /// Creates a new builder for constructing a `CdiscountConfig`.
    #[must_use]
    pub fn builder() -> CdiscountConfigBuilder {
        CdiscountConfigBuilder::new()
    }

    /// Builds a configuration from `CDISCOUNT_*` environment variables.
    ///
    /// Required: `CDISCOUNT_CLIENT_ID`, `CDISCOUNT_CLIENT_SECRET`,
    /// `CDISCOUNT_SELLER_ID`.
    ///
    /// Optional: `CDISCOUNT_PRODUCT_SUBSCRIPTION_KEY`,
    /// `CDISCOUNT_ORDER_SUBSCRIPTION_KEY`, `CDISCOUNT_OFFER_SUBSCRIPTION_KEY`,
    /// `CDISCOUNT_BASE_URL`, `CDISCOUNT_TOKEN_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is unset,
    /// or the validation error of any value that is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingEnvVar { name })
        };

        let mut builder = Self::builder()
            .client_id(ClientId::new(required("CDISCOUNT_CLIENT_ID")?)?)
            .client_secret(ClientSecret::new(required("CDISCOUNT_CLIENT_SECRET")?)?)
            .seller_id(SellerId::new(required("CDISCOUNT_SELLER_ID")?)?);

        let mut keys = SubscriptionKeys::new();
        for domain in ApiDomain::ALL {
            let name = format!(
                "CDISCOUNT_{}_SUBSCRIPTION_KEY",
                domain.as_str().to_ascii_uppercase()
            );
            if let Some(key) = lookup(&name).filter(|value| !value.is_empty()) {
                keys.insert(domain, SubscriptionKey::new(key)?);
            }
        }
        builder = builder.subscription_keys(keys);

        if let Some(url) = lookup("CDISCOUNT_BASE_URL") {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        if let Some(url) = lookup("CDISCOUNT_TOKEN_URL") {
            builder = builder.token_url(BaseUrl::new(url)?);
        }

        builder.build()
    }

    /// Returns the OAuth2 client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the OAuth2 client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the seller id sent with every request.
    #[must_use]
    pub const fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    /// Returns the subscription keys.
    #[must_use]
    pub const fn subscription_keys(&self) -> &SubscriptionKeys {
        &self.subscription_keys
    }

    /// Returns the subscription key for one API domain, if configured.
    #[must_use]
    pub fn subscription_key(&self, domain: ApiDomain) -> Option<&SubscriptionKey> {
        self.subscription_keys.get(domain)
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the OAuth2 token endpoint.
    #[must_use]
    pub const fn token_url(&self) -> &BaseUrl {
        &self.token_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CdiscountConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CdiscountConfig>();
};

/// Builder for constructing [`CdiscountConfig`] instances.
///
/// Required fields are `client_id`, `client_secret` and `seller_id`.
///
/// # Defaults
///
/// - `subscription_keys`: empty
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `token_url`: [`DEFAULT_TOKEN_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CdiscountConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    seller_id: Option<SellerId>,
    subscription_keys: Option<SubscriptionKeys>,
    base_url: Option<BaseUrl>,
    token_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl CdiscountConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth2 client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the OAuth2 client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the seller id (required).
    #[must_use]
    pub fn seller_id(mut self, id: SellerId) -> Self {
        self.seller_id = Some(id);
        self
    }

    /// Sets all subscription keys at once.
    #[must_use]
    pub fn subscription_keys(mut self, keys: SubscriptionKeys) -> Self {
        self.subscription_keys = Some(keys);
        self
    }

    /// Sets the subscription key of a single API domain.
    #[must_use]
    pub fn subscription_key(mut self, domain: ApiDomain, key: SubscriptionKey) -> Self {
        self.subscription_keys
            .get_or_insert_with(SubscriptionKeys::new)
            .insert(domain, key);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the OAuth2 token endpoint.
    #[must_use]
    pub fn token_url(mut self, url: BaseUrl) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CdiscountConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id`,
    /// `client_secret` or `seller_id` is not set, and
    /// [`ConfigError::InvalidUrl`] if a default URL fails validation.
    pub fn build(self) -> Result<CdiscountConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;
        let seller_id = self
            .seller_id
            .ok_or(ConfigError::MissingRequiredField { field: "seller_id" })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };
        let token_url = match self.token_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_TOKEN_URL)?,
        };

        Ok(CdiscountConfig {
            client_id,
            client_secret,
            seller_id,
            subscription_keys: self.subscription_keys.unwrap_or_default(),
            base_url,
            token_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
