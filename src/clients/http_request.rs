//! HTTP request types for the Cdiscount API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against absolute endpoint URLs.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the marketplace API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and running searches.
    Post,
    /// HTTP PUT method for upserting resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A file attached to a multipart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name the file is sent under.
    pub field_name: String,
    /// File name reported to the server.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
    /// MIME type, if known (e.g. `application/zip`).
    pub mime_type: Option<String>,
}

impl FilePart {
    /// Creates a file part with no explicit MIME type.
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime_type: None,
        }
    }

    /// Sets the MIME type of the file.
    #[must_use]
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// The body of an HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// JSON document sent as `application/json`.
    Json(serde_json::Value),
    /// `multipart/form-data` with text fields and attached files.
    Multipart {
        /// Text form fields, in insertion order.
        fields: Vec<(String, String)>,
        /// Attached files.
        files: Vec<FilePart>,
    },
}

impl RequestBody {
    /// Builds a multipart body whose text fields come from a JSON object.
    ///
    /// String values are sent as-is, `null` values are skipped and every other
    /// value is sent as its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::FormFieldsNotObject`] if `item` is
    /// not a JSON object.
    pub fn multipart_from_json(
        item: serde_json::Value,
        files: Vec<FilePart>,
    ) -> Result<Self, InvalidHttpRequestError> {
        let serde_json::Value::Object(map) = item else {
            return Err(InvalidHttpRequestError::FormFieldsNotObject {
                kind: json_kind(&item),
            });
        };

        let fields = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::Null => None,
                serde_json::Value::String(text) => Some((key, text)),
                other => Some((key, other.to_string())),
            })
            .collect();

        Ok(Self::Multipart { fields, files })
    }

    /// Returns `true` for multipart bodies.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Ordered query parameters. Repeated keys are sent as `?id=a&id=b`.
pub type QueryParams = Vec<(String, String)>;

/// An HTTP request to be sent to the marketplace API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use cdiscount_api::clients::{HttpRequest, HttpMethod, RequestBody};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "https://api.example.com/models")
///     .query_param("categoryCode", "07")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "https://api.example.com/offers")
///     .body(RequestBody::Json(json!({"sellerProductId": "SKU-1"})))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL of the endpoint.
    pub url: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters to append to the URL, in order. A key may repeat.
    pub query: Option<QueryParams>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Put` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<RequestBody>,
    query: Option<QueryParams>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends query parameters, keeping their order.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query.get_or_insert_with(Vec::new).extend(query);
        self
    }

    /// Appends a single query parameter. Repeating a key sends it twice.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
