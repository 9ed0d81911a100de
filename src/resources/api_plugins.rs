//! Client for plugin configurations nested under one API.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::{
    Fields, KongError, ListParams, PagedList, Parent, Record, ResourceClient, ResourceSpec,
};

const API_PLUGIN_SPEC: ResourceSpec = ResourceSpec {
    name: "Plugin Configuration",
    collection: "plugins",
    filter_fields: &["id", "name", "api_id", "consumer_id"],
    update_fields: &[],
};

/// Prefix namespacing plugin-specific configuration values on the wire.
const VALUE_PREFIX: &str = "value.";

/// A plugin configuration to attach to an API.
///
/// Plugin metadata (`name`, `consumer_id`, `enabled`) stays disjoint from
/// the plugin-specific configuration values, which are namespaced with a
/// `value.` prefix when serialized.
///
/// # Example
///
/// ```rust
/// use kong_admin::PluginDefinition;
///
/// let plugin = PluginDefinition::new("ratelimiting")
///     .config("minute", 20)
///     .config("hour", 500)
///     .enabled(true);
/// ```
#[derive(Clone, Debug)]
pub struct PluginDefinition {
    name: String,
    consumer_id: Option<String>,
    enabled: Option<bool>,
    config: Fields,
}

impl PluginDefinition {
    /// Creates a definition for the named plugin.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            consumer_id: None,
            enabled: None,
            config: Fields::new(),
        }
    }

    /// Scopes the plugin to a single consumer.
    #[must_use]
    pub fn consumer_id(mut self, consumer_id: impl Into<String>) -> Self {
        self.consumer_id = Some(consumer_id.into());
        self
    }

    /// Sets whether the plugin is enabled. Left unset, the field is omitted
    /// and the backend default applies.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Adds one plugin-specific configuration value.
    #[must_use]
    pub fn config(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.config = self.config.set(key, value);
        self
    }

    /// Returns the plugin name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn to_fields(&self) -> Fields {
        Fields::new()
            .set("name", &self.name)
            .set_opt("consumer_id", self.consumer_id.as_deref())
            .merge(&self.config.prefixed(VALUE_PREFIX))
            .set_opt("enabled", self.enabled)
    }
}

/// Client for `apis/{api}/plugins`, scoped to one API.
///
/// The API identifier is fixed when the client is created and carried into
/// every path and error message.
#[derive(Clone, Debug)]
pub struct ApiPluginsClient {
    inner: ResourceClient,
}

impl ApiPluginsClient {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: String, api_name_or_id: String) -> Self {
        Self {
            inner: ResourceClient::new(
                http,
                base_url,
                API_PLUGIN_SPEC,
                Some(Parent {
                    name: "API",
                    collection: "apis",
                    id: api_name_or_id,
                }),
            ),
        }
    }

    /// Attaches a plugin configuration.
    /// `POST /apis/{api}/plugins/`, succeeds only on 201.
    ///
    /// # Errors
    ///
    /// [`KongError::Conflict`] when the plugin is already configured for the
    /// API; [`KongError::RequestFailed`] otherwise.
    pub async fn create(&self, plugin: &PluginDefinition) -> Result<Record, KongError> {
        self.inner.create(&plugin.to_fields()).await
    }

    /// Attaches or replaces a plugin configuration, keyed by
    /// `plugin_configuration_id` when given. `PUT /apis/{api}/plugins/`.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::create_or_update`].
    pub async fn create_or_update(
        &self,
        plugin_configuration_id: Option<&str>,
        plugin: &PluginDefinition,
    ) -> Result<Record, KongError> {
        self.inner
            .create_or_update(plugin_configuration_id, &plugin.to_fields())
            .await
    }

    /// Updates a plugin configuration, addressed by plugin name.
    /// `PATCH /apis/{api}/plugins/{name}/`.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status.
    pub async fn update(&self, plugin: &PluginDefinition) -> Result<Record, KongError> {
        self.inner
            .update(&plugin.name, plugin.to_fields(), &Fields::new())
            .await
    }

    /// Lists plugin configurations of this API.
    /// Filters: `id`, `name`, `api_id`, `consumer_id`.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::list`].
    pub async fn list(&self, params: &ListParams) -> Result<PagedList, KongError> {
        self.inner.list(params).await
    }

    /// Counts plugin configurations of this API.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::count`].
    pub async fn count(&self) -> Result<u64, KongError> {
        self.inner.count().await
    }

    /// Removes a plugin configuration. Succeeds on 204 or 404; retried on
    /// generic failure.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::delete`].
    pub async fn delete(&self, plugin_name_or_id: &str) -> Result<(), KongError> {
        self.inner.delete(plugin_name_or_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_values_are_namespaced() {
        let plugin = PluginDefinition::new("ratelimiting")
            .config("minute", 20)
            .enabled(true);
        let pairs = plugin.to_fields().into_pairs();

        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), "ratelimiting".to_string()),
                ("value.minute".to_string(), "20".to_string()),
                ("enabled".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_unset_enabled_is_omitted() {
        let plugin = PluginDefinition::new("ssl").consumer_id("alice");
        let fields = plugin.to_fields();

        assert!(fields.keys().all(|k| k != "enabled"));
        assert!(fields.keys().any(|k| k == "consumer_id"));
    }
}
