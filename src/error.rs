//! Error types for the Cdiscount API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use cdiscount_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the client id of your seller API account.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the client secret of your seller API account.")]
    EmptyClientSecret,

    /// Seller id cannot be empty.
    #[error("Seller id cannot be empty. Please provide the identifier of your seller account.")]
    EmptySellerId,

    /// A subscription key was provided but is empty.
    #[error("Subscription key cannot be empty. Omit the key for API domains you are not subscribed to.")]
    EmptySubscriptionKey,

    /// The API domain name is not one of `product`, `order` or `offer`.
    #[error("Unknown API domain '{name}'. Expected one of: 'product', 'order', 'offer'.")]
    UnknownApiDomain {
        /// The name that was provided.
        name: String,
    },

    /// A URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://marketplaceapi.cdiscount.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let error = ConfigError::EmptyClientId;
        let message = error.to_string();
        assert!(message.contains("Client id cannot be empty"));
    }

    #[test]
    fn test_unknown_api_domain_error_message() {
        let error = ConfigError::UnknownApiDomain {
            name: "catalog".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("catalog"));
        assert!(message.contains("'product', 'order', 'offer'"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "seller_id" };
        let message = error.to_string();
        assert!(message.contains("seller_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_missing_env_var_error_message() {
        let error = ConfigError::MissingEnvVar {
            name: "CDISCOUNT_CLIENT_ID",
        };
        assert!(error.to_string().contains("CDISCOUNT_CLIENT_ID"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySellerId;
        let _: &dyn std::error::Error = &error;
    }
}
