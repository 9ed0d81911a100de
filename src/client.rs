//! The client facade.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::{AdminUrl, KongConfig};
use crate::error::ConfigError;
use crate::resources::{ApisClient, ConsumersClient, PluginsClient};

/// Entry point for the Admin API: the three top-level resource clients
/// behind one handle.
///
/// All resource clients created from one `KongAdminClient`, nested ones
/// included, share a single HTTP session, and with it one throttle clock.
/// Sharing a throttle across *multiple* facades is the embedding
/// application's call; nothing here is process-global.
///
/// # Example
///
/// ```rust,ignore
/// use kong_admin::{ApiDefinition, KongAdminClient, ListParams};
///
/// let kong = KongAdminClient::from_url("http://localhost:8001")?;
///
/// let api = kong.apis().add(&ApiDefinition::new("http://upstream").name("svc")).await?;
/// let page = kong.apis().list(&ListParams::new().size(10)).await?;
///
/// kong.consumers()
///     .basic_auth("alice")
///     .create_or_update(None, Some("alice"), Some("secret"))
///     .await?;
/// ```
#[derive(Debug)]
pub struct KongAdminClient {
    apis: ApisClient,
    consumers: ConsumersClient,
    plugins: PluginsClient,
}

// Verify KongAdminClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KongAdminClient>();
};

impl KongAdminClient {
    /// Creates a client from the given configuration.
    #[must_use]
    pub fn new(config: &KongConfig) -> Self {
        let http = Arc::new(HttpClient::new(config));
        let base_url = config.admin_url().as_str();

        Self {
            apis: ApisClient::new(Arc::clone(&http), base_url),
            consumers: ConsumersClient::new(Arc::clone(&http), base_url),
            plugins: PluginsClient::new(http, base_url),
        }
    }

    /// Creates a client for the given admin URL with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAdminUrl`] if the URL is invalid.
    pub fn from_url(admin_url: &str) -> Result<Self, ConfigError> {
        let config = KongConfig::builder()
            .admin_url(AdminUrl::new(admin_url)?)
            .build()?;
        Ok(Self::new(&config))
    }

    /// Returns the client for the `apis` collection.
    #[must_use]
    pub const fn apis(&self) -> &ApisClient {
        &self.apis
    }

    /// Returns the client for the `consumers` collection.
    #[must_use]
    pub const fn consumers(&self) -> &ConsumersClient {
        &self.consumers
    }

    /// Returns the client for the `plugins` collection.
    #[must_use]
    pub const fn plugins(&self) -> &PluginsClient {
        &self.plugins
    }
}
