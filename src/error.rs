//! Error types for client configuration.
//!
//! This module contains the error type returned by configuration
//! constructors and the [`KongConfigBuilder`](crate::KongConfigBuilder).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use kong_admin::{AdminUrl, ConfigError};
//!
//! let result = AdminUrl::new("localhost:8001");
//! assert!(matches!(result, Err(ConfigError::InvalidAdminUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The admin URL is invalid.
    #[error("Invalid admin URL '{url}'. Please provide a URL with scheme (e.g., 'http://localhost:8001').")]
    InvalidAdminUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_admin_url_error_message() {
        let error = ConfigError::InvalidAdminUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "admin_url" };
        let message = error.to_string();
        assert!(message.contains("admin_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "admin_url" };
        let _: &dyn std::error::Error = &error;
    }
}
