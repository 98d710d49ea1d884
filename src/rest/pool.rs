//! The resource pool: an endpoint bound to the shared transport.

use std::sync::Arc;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    SUBSCRIPTION_KEY_HEADER,
};
use crate::config::SubscriptionKey;
use crate::rest::urljoin;

/// An endpoint URL bound to the shared [`HttpClient`] and the subscription
/// key of its API branch.
///
/// Pools are cheap values: cloning one clones a `String` and bumps an `Arc`.
/// Constructing a pool has no side effect. The subscription key is attached
/// to each request the pool sends, so pools of different branches can be
/// used in any order, or concurrently, without affecting each other.
#[derive(Clone, Debug)]
pub struct ResourcePool {
    endpoint: String,
    http: Arc<HttpClient>,
    subscription_key: Option<SubscriptionKey>,
}

impl ResourcePool {
    /// Creates a pool for an absolute endpoint URL.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        http: Arc<HttpClient>,
        subscription_key: Option<SubscriptionKey>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
            subscription_key,
        }
    }

    /// Returns the absolute endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the subscription key sent with this pool's requests.
    #[must_use]
    pub const fn subscription_key(&self) -> Option<&SubscriptionKey> {
        self.subscription_key.as_ref()
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub const fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    /// Builds a child pool whose endpoint is this endpoint joined with
    /// `segments`. The transport and subscription key are carried forward.
    #[must_use]
    pub fn child<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            endpoint: urljoin(&self.endpoint, segments),
            http: Arc::clone(&self.http),
            subscription_key: self.subscription_key.clone(),
        }
    }

    /// Starts a request against `url` carrying this pool's subscription key.
    #[must_use]
    pub fn request(&self, method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        let builder = HttpRequest::builder(method, url);
        match &self.subscription_key {
            Some(key) => builder.header(SUBSCRIPTION_KEY_HEADER, key.as_ref()),
            None => builder,
        }
    }

    /// Builds and sends a request through the shared client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or cannot be sent.
    pub async fn send(&self, builder: HttpRequestBuilder) -> Result<HttpResponse, HttpError> {
        let request = builder.build()?;
        self.http.request(request).await
    }
}

/// A node of the resource tree.
///
/// Every node wraps a [`ResourcePool`]. The capability traits in
/// [`crate::rest`] build on this to issue requests.
pub trait Resource {
    /// Returns the underlying pool.
    fn pool(&self) -> &ResourcePool;

    /// Returns the absolute endpoint URL of this node.
    fn endpoint(&self) -> &str {
        self.pool().endpoint()
    }
}

impl Resource for ResourcePool {
    fn pool(&self) -> &ResourcePool {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AccessToken;
    use crate::config::{CdiscountConfig, ClientId, ClientSecret, SellerId};

    fn create_http() -> Arc<HttpClient> {
        let config = CdiscountConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .seller_id(SellerId::new("1").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config, &AccessToken::new("t", None)).unwrap())
    }

    #[test]
    fn test_child_joins_endpoint_and_keeps_key() {
        let key = SubscriptionKey::new("k").unwrap();
        let pool = ResourcePool::new("https://x.com/root/", create_http(), Some(key.clone()));

        let child = pool.child(["/sub", "leaf"]);
        assert_eq!(child.endpoint(), "https://x.com/root/sub/leaf");
        assert_eq!(child.subscription_key(), Some(&key));
        assert!(Arc::ptr_eq(child.http(), pool.http()));
    }

    #[test]
    fn test_child_does_not_touch_parent() {
        let pool = ResourcePool::new("https://x.com/root", create_http(), None);
        let _child = pool.child(["sub"]);
        assert_eq!(pool.endpoint(), "https://x.com/root");
    }

    #[test]
    fn test_request_carries_subscription_key() {
        let pool = ResourcePool::new(
            "https://x.com/root",
            create_http(),
            Some(SubscriptionKey::new("branch-key").unwrap()),
        );

        let request = pool
            .request(HttpMethod::Get, pool.endpoint())
            .build()
            .unwrap();
        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get(SUBSCRIPTION_KEY_HEADER),
            Some(&"branch-key".to_string())
        );
    }

    #[test]
    fn test_request_without_key_has_no_subscription_header() {
        let pool = ResourcePool::new("https://x.com/root", create_http(), None);
        let request = pool
            .request(HttpMethod::Get, pool.endpoint())
            .build()
            .unwrap();
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_pools_do_not_share_keys() {
        let http = create_http();
        let product = ResourcePool::new(
            "https://x.com/p",
            Arc::clone(&http),
            Some(SubscriptionKey::new("product-key").unwrap()),
        );
        let _order = ResourcePool::new(
            "https://x.com/o",
            Arc::clone(&http),
            Some(SubscriptionKey::new("order-key").unwrap()),
        );

        let request = product
            .request(HttpMethod::Get, product.endpoint())
            .build()
            .unwrap();
        assert_eq!(
            request.extra_headers.unwrap().get(SUBSCRIPTION_KEY_HEADER),
            Some(&"product-key".to_string())
        );
        assert!(http.default_headers().get(SUBSCRIPTION_KEY_HEADER).is_none());
    }
}
