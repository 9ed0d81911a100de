//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Kong Admin API base URL.
///
/// This newtype ensures the URL carries an `http://` or `https://` scheme and
/// a non-empty host part. Any trailing slashes are stripped on construction so
/// path joining produces a canonical form regardless of how the URL was
/// written.
///
/// # Example
///
/// ```rust
/// use kong_admin::AdminUrl;
///
/// let url = AdminUrl::new("http://localhost:8001/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminUrl(String);

impl AdminUrl {
    /// Creates a new validated admin URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAdminUrl`] if the URL has no
    /// `http://`/`https://` scheme or no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();

        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));

        match rest {
            Some(host) if !host.trim_end_matches('/').is_empty() => {
                Ok(Self(trimmed.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidAdminUrl { url }),
        }
    }

    /// Returns the URL as a string slice, without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AdminUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdminUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
