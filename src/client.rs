//! The authenticated entry point of the SDK.
//!
//! [`CdiscountClient::new`] authenticates once, builds the shared transport
//! and exposes the three roots of the resource tree.
//!
//! # Example
//!
//! ```rust,ignore
//! use cdiscount_api::{CdiscountClient, CdiscountConfig};
//! use cdiscount_api::rest::Listable;
//!
//! let config = CdiscountConfig::from_env()?;
//! let client = CdiscountClient::new(config).await?;
//!
//! let response = client.product_management().categories().fetch_list(None).await?;
//! println!("{} {}", response.code, response.body);
//! ```

use std::sync::Arc;

use crate::auth::{exchange_client_credentials_with, AccessToken, AuthError};
use crate::clients::HttpClient;
use crate::config::{ApiDomain, CdiscountConfig, SellerId};
use crate::rest::resources::{OfferManagement, OrderManagement, ProductManagement};
use crate::rest::ResourcePool;

/// The three roots of the resource tree.
#[derive(Clone, Debug)]
pub struct Resources {
    /// Product API root.
    pub product_management: ProductManagement,
    /// Offer API root.
    pub offer_management: OfferManagement,
    /// Order API root.
    pub order_management: OrderManagement,
}

impl Resources {
    /// Builds the roots under the configured base URL, each carrying the
    /// subscription key of its domain.
    #[must_use]
    pub fn new(config: &CdiscountConfig, http: &Arc<HttpClient>) -> Self {
        let base = |domain: ApiDomain| {
            ResourcePool::new(
                config.base_url().as_ref(),
                Arc::clone(http),
                config.subscription_key(domain).cloned(),
            )
        };

        Self {
            product_management: ProductManagement::from_base(&base(ApiDomain::Product)),
            offer_management: OfferManagement::from_base(&base(ApiDomain::Offer)),
            order_management: OrderManagement::from_base(&base(ApiDomain::Order)),
        }
    }
}

/// An authenticated client for the Cdiscount seller API.
///
/// Construction performs the client-credentials exchange; a client that
/// exists is authenticated. The token is not refreshed: build a new client
/// once it expires.
///
/// # Thread Safety
///
/// `CdiscountClient` is `Send + Sync`. Resource nodes borrowed from it share
/// one connection pool.
#[derive(Debug)]
pub struct CdiscountClient {
    config: CdiscountConfig,
    token: AccessToken,
    http: Arc<HttpClient>,
    resources: Resources,
}

// Verify CdiscountClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CdiscountClient>();
};

impl CdiscountClient {
    /// Authenticates with `config` and builds the resource tree.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenRequestFailed`] if the token endpoint does
    /// not answer 200, or another [`AuthError`] if the exchange cannot
    /// complete. No client is produced in either case.
    pub async fn new(config: CdiscountConfig) -> Result<Self, AuthError> {
        let transport = HttpClient::transport()?;
        let token = exchange_client_credentials_with(&transport, &config).await?;
        let http = Arc::new(HttpClient::with_transport(transport, &config, &token));
        let resources = Resources::new(&config, &http);

        tracing::debug!(
            base_url = %config.base_url(),
            subscription_keys = ?ApiDomain::ALL
                .iter()
                .filter(|domain| config.subscription_key(**domain).is_some())
                .map(ApiDomain::as_str)
                .collect::<Vec<_>>(),
            "Cdiscount client ready"
        );

        Ok(Self {
            config,
            token,
            http,
            resources,
        })
    }

    /// Returns the product API root.
    #[must_use]
    pub const fn product_management(&self) -> &ProductManagement {
        &self.resources.product_management
    }

    /// Returns the offer API root.
    #[must_use]
    pub const fn offer_management(&self) -> &OfferManagement {
        &self.resources.offer_management
    }

    /// Returns the order API root.
    #[must_use]
    pub const fn order_management(&self) -> &OrderManagement {
        &self.resources.order_management
    }

    /// Returns all three roots.
    #[must_use]
    pub const fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Returns a pool for an endpoint outside the typed tree.
    ///
    /// `path` is joined to the base URL and requests carry the subscription
    /// key of `domain`.
    #[must_use]
    pub fn pool(&self, path: &str, domain: ApiDomain) -> ResourcePool {
        ResourcePool::new(
            self.config.base_url().as_ref(),
            Arc::clone(&self.http),
            self.config.subscription_key(domain).cloned(),
        )
        .child([path])
    }

    /// Returns the configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &CdiscountConfig {
        &self.config
    }

    /// Returns the access token obtained at construction.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.token
    }

    /// Returns the seller id sent with every request.
    #[must_use]
    pub const fn seller_id(&self) -> &SellerId {
        self.config.seller_id()
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &Arc<HttpClient> {
        &self.http
    }
}
