//! Configuration types for the Kong Admin API client.
//!
//! This module provides the core configuration types used to initialize the
//! client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`KongConfig`]: The main configuration struct holding all client settings
//! - [`KongConfigBuilder`]: A builder for constructing [`KongConfig`] instances
//! - [`AdminUrl`]: A validated admin base URL newtype
//!
//! Process-wide knobs the deployment environment traditionally provides (the
//! minimum request interval and the connection-reuse flag) are explicit
//! builder fields here; loading them from the environment is the embedding
//! application's concern.
//!
//! # Example
//!
//! ```rust
//! use kong_admin::{AdminUrl, KongConfig};
//! use std::time::Duration;
//!
//! let config = KongConfig::builder()
//!     .admin_url(AdminUrl::new("http://localhost:8001").unwrap())
//!     .minimum_request_interval(Duration::from_millis(200))
//!     .build()
//!     .unwrap();
//!
//! assert!(config.reuse_connections());
//! ```

mod newtypes;

pub use newtypes::AdminUrl;

use crate::error::ConfigError;
use std::time::Duration;

/// Configuration for the Kong Admin API client.
///
/// # Thread Safety
///
/// `KongConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use kong_admin::{AdminUrl, KongConfig};
///
/// let config = KongConfig::builder()
///     .admin_url(AdminUrl::new("http://localhost:8001").unwrap())
///     .reuse_connections(false)
///     .build()
///     .unwrap();
///
/// assert!(!config.reuse_connections());
/// ```
#[derive(Clone, Debug)]
pub struct KongConfig {
    admin_url: AdminUrl,
    minimum_request_interval: Duration,
    reuse_connections: bool,
}

impl KongConfig {
    /// Creates a new builder for constructing a `KongConfig`.
    #[must_use]
    pub fn builder() -> KongConfigBuilder {
        KongConfigBuilder::new()
    }

    /// Returns the admin base URL.
    #[must_use]
    pub const fn admin_url(&self) -> &AdminUrl {
        &self.admin_url
    }

    /// Returns the minimum wall-clock spacing enforced between consecutive
    /// requests. Zero means throttling is disabled.
    #[must_use]
    pub const fn minimum_request_interval(&self) -> Duration {
        self.minimum_request_interval
    }

    /// Returns whether the underlying connection is reused across requests.
    #[must_use]
    pub const fn reuse_connections(&self) -> bool {
        self.reuse_connections
    }
}

// Verify KongConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KongConfig>();
};

/// Builder for constructing [`KongConfig`] instances.
///
/// The only required field is `admin_url`. All other fields have defaults:
///
/// - `minimum_request_interval`: zero (throttling disabled)
/// - `reuse_connections`: `true`
///
/// # Example
///
/// ```rust
/// use kong_admin::{AdminUrl, KongConfig};
/// use std::time::Duration;
///
/// let config = KongConfig::builder()
///     .admin_url(AdminUrl::new("https://kong.internal:8444").unwrap())
///     .minimum_request_interval(Duration::from_secs(1))
///     .reuse_connections(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct KongConfigBuilder {
    admin_url: Option<AdminUrl>,
    minimum_request_interval: Option<Duration>,
    reuse_connections: Option<bool>,
}

impl KongConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the admin base URL (required).
    #[must_use]
    pub fn admin_url(mut self, admin_url: AdminUrl) -> Self {
        self.admin_url = Some(admin_url);
        self
    }

    /// Sets the minimum spacing between consecutive requests.
    ///
    /// The throttle only takes effect when connection reuse is enabled; a
    /// session that discards its connection per request has no state to
    /// carry the previous request timestamp.
    #[must_use]
    pub const fn minimum_request_interval(mut self, interval: Duration) -> Self {
        self.minimum_request_interval = Some(interval);
        self
    }

    /// Sets whether the underlying connection is reused across requests.
    #[must_use]
    pub const fn reuse_connections(mut self, reuse: bool) -> Self {
        self.reuse_connections = Some(reuse);
        self
    }

    /// Builds the [`KongConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `admin_url` was not set.
    pub fn build(self) -> Result<KongConfig, ConfigError> {
        let admin_url = self
            .admin_url
            .ok_or(ConfigError::MissingRequiredField { field: "admin_url" })?;

        Ok(KongConfig {
            admin_url,
            minimum_request_interval: self.minimum_request_interval.unwrap_or(Duration::ZERO),
            reuse_connections: self.reuse_connections.unwrap_or(true),
        })
    }
}
