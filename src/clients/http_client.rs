//! HTTP client for marketplace API communication.
//!
//! This module provides the [`HttpClient`] type, the single transport shared
//! by every node of the resource tree.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::AccessToken;
use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::CdiscountConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the seller identity.
pub const SELLER_ID_HEADER: &str = "SellerId";

/// Header carrying the gateway subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// HTTP client for making requests to the marketplace API.
///
/// The client holds the connection pool and the headers shared by every
/// request once authenticated:
/// - `User-Agent`
/// - `Accept: application/json`
/// - `Authorization: Bearer <token>`
/// - `Cache-Control: no-cache`
/// - `SellerId: <seller id>`
///
/// Default headers are fixed at construction. Anything that varies per
/// branch of the resource tree, such as the subscription key, travels with
/// each [`HttpRequest`] instead.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and is shared behind an `Arc` by all
/// resource pools of a client.
pub struct HttpClient {
    client: reqwest::Client,
    default_headers: HashMap<String, String>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .default_headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("Authorization") {
                    (name.as_str(), "Bearer *****")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpClient")
            .field("default_headers", &headers)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Builds the underlying `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialised.
    pub fn transport() -> Result<reqwest::Client, HttpError> {
        Ok(reqwest::Client::builder().use_rustls_tls().build()?)
    }

    /// Creates an authenticated client on a fresh transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be built.
    pub fn new(config: &CdiscountConfig, token: &AccessToken) -> Result<Self, HttpError> {
        Ok(Self::with_transport(Self::transport()?, config, token))
    }

    /// Creates an authenticated client reusing an existing transport.
    #[must_use]
    pub fn with_transport(
        client: reqwest::Client,
        config: &CdiscountConfig,
        token: &AccessToken,
    ) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Cdiscount API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", token.as_str()),
        );
        default_headers.insert("Cache-Control".to_string(), "no-cache".to_string());
        default_headers.insert(
            SELLER_ID_HEADER.to_string(),
            config.seller_id().as_ref().to_string(),
        );

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request and returns the response as-is.
    ///
    /// The status code is not inspected: 4xx and 5xx responses are returned
    /// as `Ok` for the caller to interpret. No retries are attempted.
    ///
    /// For multipart bodies the default `Accept` header is dropped and the
    /// transport sets `Content-Type` with the multipart boundary.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let headers = self.merge_headers(&request);
        let header_map = Self::to_header_map(&headers)?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        }
        .headers(header_map);

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match request.body {
            Some(RequestBody::Json(body)) => {
                req_builder = req_builder.body(body.to_string());
            }
            Some(RequestBody::Multipart { fields, files }) => {
                req_builder = req_builder.multipart(Self::build_form(fields, files)?);
            }
            None => {}
        }

        tracing::debug!(
            method = %request.http_method,
            url = %request.url,
            "Sending request to Cdiscount API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(
            method = %request.http_method,
            url = %request.url,
            status = code,
            "Received response from Cdiscount API"
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Merges default, body and per-request headers, later ones winning.
    ///
    /// Names are lowercased so a per-request `accept` replaces the default
    /// `Accept` instead of being sent next to it.
    fn merge_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = self
            .default_headers
            .iter()
            .map(|(key, value)| (key.to_ascii_lowercase(), value.clone()))
            .collect();

        match &request.body {
            Some(RequestBody::Json(_)) => {
                headers.insert("content-type".to_string(), "application/json".to_string());
            }
            Some(RequestBody::Multipart { .. }) => {
                headers.remove("accept");
                headers.remove("content-type");
            }
            None => {}
        }

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.to_ascii_lowercase(), value.clone());
            }
        }

        headers
    }

    fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, HttpError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (key, value) in headers {
            let invalid = || InvalidHttpRequestError::InvalidHeader { name: key.clone() };
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            map.insert(name, value);
        }
        Ok(map)
    }

    fn build_form(
        fields: Vec<(String, String)>,
        files: Vec<crate::clients::FilePart>,
    ) -> Result<reqwest::multipart::Form, HttpError> {
        let mut form = reqwest::multipart::Form::new();
        for (key, value) in fields {
            form = form.text(key, value);
        }
        for file in files {
            let mut part =
                reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name.clone());
            if let Some(mime_type) = file.mime_type {
                part = part.mime_str(&mime_type).map_err(|_| {
                    InvalidHttpRequestError::InvalidMimeType {
                        file_name: file.file_name.clone(),
                        mime_type: mime_type.clone(),
                    }
                })?;
            }
            form = form.part(file.field_name, part);
        }
        Ok(form)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::FilePart;
    use crate::config::{ClientId, ClientSecret, SellerId};
    use serde_json::json;

    fn create_test_config() -> CdiscountConfig {
        CdiscountConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .seller_id(SellerId::new("1234").unwrap())
            .build()
            .unwrap()
    }

    fn create_test_client() -> HttpClient {
        HttpClient::new(&create_test_config(), &AccessToken::new("test-token", None)).unwrap()
    }

    #[test]
    fn test_authentication_headers_are_installed() {
        let client = create_test_client();
        let headers = client.default_headers();

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
        assert_eq!(headers.get("Cache-Control"), Some(&"no-cache".to_string()));
        assert_eq!(headers.get(SELLER_ID_HEADER), Some(&"1234".to_string()));
        assert_eq!(
            headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_subscription_key_in_default_headers() {
        let client = create_test_client();
        assert!(client.default_headers().get(SUBSCRIPTION_KEY_HEADER).is_none());
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = CdiscountConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .seller_id(SellerId::new("1234").unwrap())
            .user_agent_prefix("MyShop/2.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config, &AccessToken::new("t", None)).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyShop/2.0 | "));
        assert!(user_agent.contains("Cdiscount API Library v"));
    }

    #[test]
    fn test_merge_headers_for_json_body() {
        let client = create_test_client();
        let request = HttpRequest::builder(HttpMethod::Post, "https://x.com/offers")
            .body(RequestBody::Json(json!({"a": 1})))
            .header(SUBSCRIPTION_KEY_HEADER, "offer-key")
            .build()
            .unwrap();

        let headers = client.merge_headers(&request);
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            headers.get("ocp-apim-subscription-key"),
            Some(&"offer-key".to_string())
        );
    }

    #[test]
    fn test_merge_headers_for_multipart_drops_content_negotiation() {
        let client = create_test_client();
        let request = HttpRequest::builder(HttpMethod::Post, "https://x.com/packages")
            .body(RequestBody::Multipart {
                fields: vec![("packageName".to_string(), "p1".to_string())],
                files: vec![FilePart::new("file", "p1.zip", vec![0u8; 4])],
            })
            .build()
            .unwrap();

        let headers = client.merge_headers(&request);
        assert!(headers.get("accept").is_none());
        assert!(headers.get("content-type").is_none());
        assert!(headers.contains_key("authorization"));

        // The shared defaults are left untouched.
        assert!(client.default_headers().contains_key("Accept"));
    }

    #[test]
    fn test_merge_headers_override_ignores_case() {
        let client = create_test_client();
        let request = HttpRequest::builder(HttpMethod::Post, "https://x.com/offers")
            .body(RequestBody::Json(json!({"a": 1})))
            .header("ACCEPT", "text/csv")
            .header("content-TYPE", "application/merge-patch+json")
            .build()
            .unwrap();

        let headers = client.merge_headers(&request);
        assert_eq!(headers.get("accept"), Some(&"text/csv".to_string()));
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/merge-patch+json".to_string())
        );
        let accept_count = headers
            .keys()
            .filter(|key| key.eq_ignore_ascii_case("accept"))
            .count();
        assert_eq!(accept_count, 1);
        assert!(headers.keys().all(|key| *key == key.to_ascii_lowercase()));
    }

    #[test]
    fn test_invalid_header_value_is_rejected() {
        let mut headers = HashMap::new();
        headers.insert("X-Bad".to_string(), "line\nbreak".to_string());

        let result = HttpClient::to_header_map(&headers);
        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidHeader { name }))
                if name == "X-Bad"
        ));
    }

    #[test]
    fn test_invalid_mime_type_is_rejected() {
        let result = HttpClient::build_form(
            Vec::new(),
            vec![FilePart::new("file", "a.zip", vec![1]).mime_type("not a mime")],
        );
        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidMimeType { .. }))
        ));
    }

    #[test]
    fn test_debug_masks_bearer_token() {
        let client = create_test_client();
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-token"));
        assert!(debug.contains("Bearer *****"));
        assert!(debug.contains("1234"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
