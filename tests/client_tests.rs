//! Integration tests for client construction and authentication.
//!
//! A mock server plays both the token endpoint and the API host.

use cdiscount_api::rest::{Listable, Resource};
use cdiscount_api::{
    ApiDomain, AuthError, BaseUrl, CdiscountClient, CdiscountConfig, ClientId, ClientSecret,
    HttpMethod, SellerId, SubscriptionKey,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> CdiscountConfig {
    CdiscountConfig::builder()
        .client_id(ClientId::new("client").unwrap())
        .client_secret(ClientSecret::new("secret").unwrap())
        .seller_id(SellerId::new("12345").unwrap())
        .subscription_key(ApiDomain::Product, SubscriptionKey::new("product-key").unwrap())
        .subscription_key(ApiDomain::Order, SubscriptionKey::new("order-key").unwrap())
        .subscription_key(ApiDomain::Offer, SubscriptionKey::new("offer-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .token_url(BaseUrl::new(format!("{}/token", server.uri())).unwrap())
        .build()
        .unwrap()
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": token,
            "expires_in": 1800,
            "token_type": "Bearer"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_client_authenticates_once_at_construction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client"))
        .and(body_string_contains("client_secret=secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "abc"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CdiscountClient::new(create_config(&server)).await.unwrap();

    assert_eq!(client.access_token().as_str(), "abc");
    assert!(client.access_token().expires_at().is_none());
    assert_eq!(client.seller_id().as_ref(), "12345");
}

#[tokio::test]
async fn test_requests_carry_bearer_seller_and_cache_headers() {
    let server = MockServer::start().await;
    mount_token(&server, "abc").await;

    Mock::given(method("GET"))
        .and(path("/productManagement/categories"))
        .and(header("authorization", "Bearer abc"))
        .and(header("sellerid", "12345"))
        .and(header("cache-control", "no-cache"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CdiscountClient::new(create_config(&server)).await.unwrap();
    let response = client
        .product_management()
        .categories()
        .fetch_list(None)
        .await
        .unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_user_agent_identifies_the_sdk() {
    let server = MockServer::start().await;
    mount_token(&server, "abc").await;

    let client = CdiscountClient::new(create_config(&server)).await.unwrap();
    let user_agent = client
        .http_client()
        .default_headers()
        .get("User-Agent")
        .unwrap();

    assert!(user_agent.contains("Cdiscount API Library"));
}

#[tokio::test]
async fn test_rejected_credentials_produce_no_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let result = CdiscountClient::new(create_config(&server)).await;

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        AuthError::TokenRequestFailed { status: 401, .. }
    ));
    let message = error.to_string();
    assert!(message.contains("401"));
    assert!(message.contains("invalid_client"));
}

#[tokio::test]
async fn test_token_response_without_token_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = CdiscountClient::new(create_config(&server)).await;
    assert!(matches!(result, Err(AuthError::InvalidTokenResponse { .. })));
}

#[tokio::test]
async fn test_roots_sit_under_the_base_url() {
    let server = MockServer::start().await;
    mount_token(&server, "abc").await;

    let client = CdiscountClient::new(create_config(&server)).await.unwrap();
    let base = server.uri();

    assert_eq!(
        client.product_management().endpoint(),
        format!("{base}/productManagement")
    );
    assert_eq!(
        client.offer_management().endpoint(),
        format!("{base}/offerManagement")
    );
    assert_eq!(
        client.order_management().endpoint(),
        format!("{base}/OrderManagement/orders")
    );

    let resources = client.resources();
    assert_eq!(
        resources.product_management.endpoint(),
        client.product_management().endpoint()
    );
}

#[tokio::test]
async fn test_each_root_carries_its_domain_key() {
    let server = MockServer::start().await;
    mount_token(&server, "abc").await;

    let client = CdiscountClient::new(create_config(&server)).await.unwrap();

    let key = |resource: &dyn Resource| resource.pool().subscription_key().cloned();
    let expected = |key: &str| Some(SubscriptionKey::new(key).unwrap());

    assert_eq!(key(client.product_management()), expected("product-key"));
    assert_eq!(key(client.order_management()), expected("order-key"));
    assert_eq!(key(client.offer_management()), expected("offer-key"));
}

#[tokio::test]
async fn test_custom_pool_uses_domain_key_and_base_url() {
    let server = MockServer::start().await;
    mount_token(&server, "abc").await;

    Mock::given(method("GET"))
        .and(path("/OrderManagement/returns"))
        .and(header("ocp-apim-subscription-key", "order-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = CdiscountClient::new(create_config(&server)).await.unwrap();
    let pool = client.pool("OrderManagement/returns", ApiDomain::Order);

    assert_eq!(pool.endpoint(), format!("{}/OrderManagement/returns", server.uri()));
    let response = pool
        .send(pool.request(HttpMethod::Get, pool.endpoint()))
        .await
        .unwrap();
    assert_eq!(response.code, 200);
}
