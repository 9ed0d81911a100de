//! Client for the `apis` collection.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::resources::api_plugins::ApiPluginsClient;
use crate::rest::{Fields, KongError, ListParams, PagedList, Record, ResourceClient, ResourceSpec};

const API_SPEC: ResourceSpec = ResourceSpec {
    name: "API",
    collection: "apis",
    filter_fields: &["id", "name", "public_dns", "path"],
    update_fields: &["name", "public_dns", "path", "strip_path", "preserve_host"],
};

/// An API definition to register with the gateway.
///
/// Only `target_url` is required. Empty strings for `public_dns` and `path`
/// are treated as absent since the backend rejects empty values.
///
/// # Example
///
/// ```rust
/// use kong_admin::ApiDefinition;
///
/// let api = ApiDefinition::new("http://upstream.internal")
///     .name("svc")
///     .public_dns("svc.example.com")
///     .strip_path(true);
/// ```
#[derive(Clone, Debug)]
pub struct ApiDefinition {
    target_url: String,
    name: Option<String>,
    public_dns: Option<String>,
    path: Option<String>,
    strip_path: bool,
    preserve_host: bool,
}

impl ApiDefinition {
    /// Creates a definition proxying to the given upstream URL.
    #[must_use]
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            name: None,
            public_dns: None,
            path: None,
            strip_path: false,
            preserve_host: false,
        }
    }

    /// Sets the API name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the public DNS the gateway routes on.
    #[must_use]
    pub fn public_dns(mut self, public_dns: impl Into<String>) -> Self {
        self.public_dns = Some(public_dns.into());
        self
    }

    /// Sets the path the gateway routes on.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets whether the matched path is stripped before proxying.
    #[must_use]
    pub const fn strip_path(mut self, strip_path: bool) -> Self {
        self.strip_path = strip_path;
        self
    }

    /// Sets whether the original Host header is preserved.
    #[must_use]
    pub const fn preserve_host(mut self, preserve_host: bool) -> Self {
        self.preserve_host = preserve_host;
        self
    }

    fn to_fields(&self) -> Fields {
        Fields::new()
            .set_opt("name", self.name.as_deref())
            .set_opt("public_dns", non_empty(self.public_dns.as_deref()))
            .set_opt("path", non_empty(self.path.as_deref()))
            .set("strip_path", self.strip_path)
            .set("preserve_host", self.preserve_host)
            .set("target_url", &self.target_url)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Client for the top-level `apis` collection.
#[derive(Clone, Debug)]
pub struct ApisClient {
    inner: ResourceClient,
}

impl ApisClient {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: &str) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, API_SPEC, None),
        }
    }

    /// Registers a new API. `POST /apis/`, succeeds only on 201.
    ///
    /// # Errors
    ///
    /// [`KongError::Conflict`] when a unique field (name, public DNS)
    /// collides; [`KongError::RequestFailed`] otherwise.
    pub async fn add(&self, api: &ApiDefinition) -> Result<Record, KongError> {
        self.inner.create(&api.to_fields()).await
    }

    /// Registers or replaces an API, keyed by `api_id` when given.
    /// `PUT /apis/`, succeeds on 200 or 201.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::create_or_update`].
    pub async fn add_or_update(
        &self,
        api_id: Option<&str>,
        api: &ApiDefinition,
    ) -> Result<Record, KongError> {
        self.inner.create_or_update(api_id, &api.to_fields()).await
    }

    /// Partially updates an API. `PATCH /apis/{name_or_id}/`.
    ///
    /// `fields` may only contain `name`, `public_dns`, `path`, `strip_path`,
    /// and `preserve_host`.
    ///
    /// # Errors
    ///
    /// [`KongError::Validation`] for an out-of-whitelist field (before any
    /// I/O); [`KongError::RequestFailed`] for any non-200 status.
    pub async fn update(
        &self,
        name_or_id: &str,
        target_url: &str,
        fields: &Fields,
    ) -> Result<Record, KongError> {
        self.inner
            .update(name_or_id, Fields::new().set("target_url", target_url), fields)
            .await
    }

    /// Lists APIs. `GET /apis/`; filters: `id`, `name`, `public_dns`, `path`.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::list`].
    pub async fn list(&self, params: &ListParams) -> Result<PagedList, KongError> {
        self.inner.list(params).await
    }

    /// Retrieves a single API. `GET /apis/{name_or_id}/`, 200 only.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status, 404 included.
    pub async fn retrieve(&self, name_or_id: &str) -> Result<Record, KongError> {
        self.inner.retrieve(name_or_id).await
    }

    /// Counts registered APIs.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::count`].
    pub async fn count(&self) -> Result<u64, KongError> {
        self.inner.count().await
    }

    /// Deletes an API. Succeeds on 204 or 404; retried on generic failure.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::delete`].
    pub async fn delete(&self, name_or_id: &str) -> Result<(), KongError> {
        self.inner.delete(name_or_id).await
    }

    /// Returns a client for the plugin configurations of one API.
    ///
    /// The parent identifier is fixed for the lifetime of the returned
    /// client. This is cheap (no network I/O) and may be called
    /// repeatedly.
    #[must_use]
    pub fn plugins(&self, api_name_or_id: impl Into<String>) -> ApiPluginsClient {
        ApiPluginsClient::new(
            self.inner.http(),
            self.inner.base_url().to_string(),
            api_name_or_id.into(),
        )
    }
}
