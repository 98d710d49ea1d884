//! HTTP response type for the Cdiscount API SDK.
//!
//! Responses are handed back to the caller untouched: status code, headers
//! and the raw body text. Interpreting them is left to the caller.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the marketplace API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Deserializes the body as JSON.
    ///
    /// An empty body is read as JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body does not match `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cdiscount_api::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), r#"{"total": 2}"#.to_string());
    /// let value: serde_json::Value = response.json().unwrap();
    /// assert_eq!(value["total"], 2);
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        if self.body.trim().is_empty() {
            return serde_json::from_str("null");
        }
        serde_json::from_str(&self.body)
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the gateway request id, if present.
    ///
    /// Useful when reporting an issue to the marketplace support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
            .or_else(|| self.header("x-correlation-id"))
    }
}
