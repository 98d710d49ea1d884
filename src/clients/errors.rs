//! HTTP-specific error types for the Cdiscount API SDK.
//!
//! Non-2xx responses are not errors at this layer: they are returned to the
//! caller as a normal [`HttpResponse`](crate::clients::HttpResponse). The
//! errors below cover requests that cannot be built or sent.
//!
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use cdiscount_api::clients::HttpError;
//!
//! match categories.fetch_list(None).await {
//!     Ok(response) if response.is_ok() => println!("{}", response.body),
//!     Ok(response) => println!("API answered {}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Serialization(e)) => println!("Cannot serialize item: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use cdiscount_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "put".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use put without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// An upsert was requested without an explicit id and the item has no `id` field.
    #[error("Cannot resolve the resource id: pass one explicitly or set an 'id' field on the item.")]
    MissingResourceId,

    /// Multipart form fields must come from a JSON object.
    #[error("Multipart form fields must be a JSON object, got {kind}.")]
    FormFieldsNotObject {
        /// The JSON kind that was provided instead.
        kind: &'static str,
    },

    /// A file part declares a MIME type that cannot be parsed.
    #[error("Invalid MIME type '{mime_type}' for file '{file_name}'.")]
    InvalidMimeType {
        /// The file carrying the MIME type.
        file_name: String,
        /// The MIME type that was provided.
        mime_type: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request item could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use post without specifying data."
        );
    }

    #[test]
    fn test_invalid_request_error_missing_resource_id() {
        let error = InvalidHttpRequestError::MissingResourceId;
        assert!(error.to_string().contains("'id' field"));
    }

    #[test]
    fn test_form_fields_not_object_names_kind() {
        let error = InvalidHttpRequestError::FormFieldsNotObject { kind: "array" };
        assert!(error.to_string().contains("array"));
    }

    #[test]
    fn test_http_error_from_invalid_request_is_transparent() {
        let error: HttpError = InvalidHttpRequestError::MissingResourceId.into();
        assert_eq!(
            error.to_string(),
            InvalidHttpRequestError::MissingResourceId.to_string()
        );
    }

    #[test]
    fn test_http_error_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: HttpError = serde_error.into();
        assert!(matches!(error, HttpError::Serialization(_)));
        assert!(error.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingResourceId;
        let _ = invalid;

        let http: &dyn std::error::Error =
            &HttpError::InvalidRequest(InvalidHttpRequestError::MissingResourceId);
        let _ = http;
    }
}
