//! Client for the top-level `plugins` collection.
//!
//! Plugins are read-only at the top level: configurations are managed
//! through [`ApiPluginsClient`](crate::resources::ApiPluginsClient) under
//! their API. This client lists the configurations known to the gateway and
//! retrieves per-plugin configuration schemas.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::rest::{classify, join_url, Disposition, KongError, PagedList, Record, OK};

/// Client for `plugins` and `plugins/{name}/schema`.
#[derive(Clone, Debug)]
pub struct PluginsClient {
    http: Arc<HttpClient>,
    base_url: String,
}

impl PluginsClient {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Lists plugin configurations across the gateway. `GET /plugins/`.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status.
    pub async fn list(&self) -> Result<PagedList, KongError> {
        let url = join_url(&self.base_url, &["plugins"]);
        let request = HttpRequest::builder(HttpMethod::Get, url).build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[OK], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => {
                serde_json::from_value(response.body.clone()).map_err(|err| {
                    KongError::RequestFailed {
                        status: response.status,
                        message: format!("unexpected list payload: {err}"),
                    }
                })
            }
            _ => Err(KongError::request_failed(&response)),
        }
    }

    /// Retrieves the configuration schema of one plugin.
    /// `GET /plugins/{name}/schema/`.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status.
    pub async fn retrieve_schema(&self, plugin_name: &str) -> Result<Record, KongError> {
        let url = join_url(&self.base_url, &["plugins", plugin_name, "schema"]);
        let request = HttpRequest::builder(HttpMethod::Get, url).build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[OK], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => Ok(response.record()),
            _ => Err(KongError::request_failed(&response)),
        }
    }
}
