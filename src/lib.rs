//! # Cdiscount API Rust SDK
//!
//! A Rust SDK for the Cdiscount marketplace seller API, providing type-safe
//! configuration, OAuth 2.0 client-credentials authentication and a typed
//! tree of REST resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CdiscountConfig`] and [`CdiscountConfigBuilder`]
//! - Validated newtypes for credentials, seller id, subscription keys and URLs
//! - Client-credentials authentication via [`auth`]
//! - One shared async HTTP client carrying the bearer token and seller id
//! - A resource tree ([`rest::resources`]) whose nodes opt into create, get,
//!   list, search, update and delete requests
//! - Per-domain gateway subscription keys scoped to each branch of the tree
//!
//! ## Quick Start
//!
//! ```rust
//! use cdiscount_api::{ApiDomain, CdiscountConfig, ClientId, ClientSecret, SellerId, SubscriptionKey};
//!
//! let config = CdiscountConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .seller_id(SellerId::new("12345").unwrap())
//!     .subscription_key(ApiDomain::Product, SubscriptionKey::new("product-key").unwrap())
//!     .subscription_key(ApiDomain::Order, SubscriptionKey::new("order-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://marketplaceapi.cdiscount.com");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use cdiscount_api::CdiscountClient;
//! use cdiscount_api::rest::{Creatable, Listable, Updatable};
//!
//! let client = CdiscountClient::new(config).await?;
//!
//! // GET productManagement/categories
//! let categories = client.product_management().categories().fetch_list(None).await?;
//!
//! // POST offerManagement/offers/search
//! let offers = client
//!     .offer_management()
//!     .offers()
//!     .search()
//!     .create_item(&serde_json::json!({"pageSize": 20}))
//!     .await?;
//!
//! // PUT OrderManagement/orders/ORDER123/validate/ORDER123
//! let validated = client
//!     .order_management()
//!     .validate_order("ORDER123")
//!     .update_create_item(&serde_json::json!({"id": "ORDER123"}), None)
//!     .await?;
//!
//! if !validated.is_ok() {
//!     eprintln!("{}: {}", validated.code, validated.body);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Subscription keys travel with each request of
//!   their branch; building a node has no side effect
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Raw responses**: Non-2xx statuses are returned, not raised

pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::{CdiscountClient, Resources};

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, AuthError};
pub use config::{
    ApiDomain, BaseUrl, CdiscountConfig, CdiscountConfigBuilder, ClientId, ClientSecret, SellerId,
    SubscriptionKey, SubscriptionKeys,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    FilePart, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, QueryParams, RequestBody,
};
