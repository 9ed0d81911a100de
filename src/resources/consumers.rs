//! Client for the `consumers` collection.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::resources::basic_auth::BasicAuthClient;
use crate::resources::key_auth::KeyAuthClient;
use crate::resources::oauth2::OAuth2Client;
use crate::rest::{Fields, KongError, ListParams, PagedList, Record, ResourceClient, ResourceSpec};

const CONSUMER_SPEC: ResourceSpec = ResourceSpec {
    name: "Consumer",
    collection: "consumers",
    filter_fields: &["id", "custom_id", "username"],
    update_fields: &["username", "custom_id"],
};

/// Client for the top-level `consumers` collection.
///
/// Consumers carry at least one of `username` or `custom_id`; which one a
/// caller supplies is its own business; the client sends whatever is
/// present.
#[derive(Clone, Debug)]
pub struct ConsumersClient {
    inner: ResourceClient,
}

impl ConsumersClient {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: &str) -> Self {
        Self {
            inner: ResourceClient::new(http, base_url, CONSUMER_SPEC, None),
        }
    }

    /// Creates a consumer. `POST /consumers/`, succeeds only on 201.
    ///
    /// # Errors
    ///
    /// [`KongError::Conflict`] when the username or custom id is taken;
    /// [`KongError::RequestFailed`] otherwise.
    pub async fn create(
        &self,
        username: Option<&str>,
        custom_id: Option<&str>,
    ) -> Result<Record, KongError> {
        let fields = Fields::new()
            .set_opt("username", username)
            .set_opt("custom_id", custom_id);
        self.inner.create(&fields).await
    }

    /// Creates or replaces a consumer, keyed by `consumer_id` when given.
    /// `PUT /consumers/`, succeeds on 200 or 201.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::create_or_update`].
    pub async fn create_or_update(
        &self,
        consumer_id: Option<&str>,
        username: Option<&str>,
        custom_id: Option<&str>,
    ) -> Result<Record, KongError> {
        let fields = Fields::new()
            .set_opt("username", username)
            .set_opt("custom_id", custom_id);
        self.inner.create_or_update(consumer_id, &fields).await
    }

    /// Partially updates a consumer. `PATCH /consumers/{username_or_id}/`.
    ///
    /// `fields` may only contain `username` and `custom_id`.
    ///
    /// # Errors
    ///
    /// [`KongError::Validation`] for an out-of-whitelist field (before any
    /// I/O); [`KongError::RequestFailed`] for any non-200 status.
    pub async fn update(
        &self,
        username_or_id: &str,
        fields: &Fields,
    ) -> Result<Record, KongError> {
        self.inner.update(username_or_id, Fields::new(), fields).await
    }

    /// Lists consumers. Filters: `id`, `custom_id`, `username`.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::list`].
    pub async fn list(&self, params: &ListParams) -> Result<PagedList, KongError> {
        self.inner.list(params).await
    }

    /// Retrieves a single consumer. 200 only.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status, 404 included.
    pub async fn retrieve(&self, username_or_id: &str) -> Result<Record, KongError> {
        self.inner.retrieve(username_or_id).await
    }

    /// Counts consumers.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::count`].
    pub async fn count(&self) -> Result<u64, KongError> {
        self.inner.count().await
    }

    /// Deletes a consumer. Succeeds on 204 or 404; retried on generic
    /// failure.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::delete`].
    pub async fn delete(&self, username_or_id: &str) -> Result<(), KongError> {
        self.inner.delete(username_or_id).await
    }

    /// Returns a client for the basic-auth credentials of one consumer.
    ///
    /// Cheap (no network I/O); the consumer identifier is fixed for the
    /// lifetime of the returned client.
    #[must_use]
    pub fn basic_auth(&self, username_or_id: impl Into<String>) -> BasicAuthClient {
        BasicAuthClient::new(
            self.inner.http(),
            self.inner.base_url().to_string(),
            username_or_id.into(),
        )
    }

    /// Returns a client for the key-auth credentials of one consumer.
    #[must_use]
    pub fn key_auth(&self, username_or_id: impl Into<String>) -> KeyAuthClient {
        KeyAuthClient::new(
            self.inner.http(),
            self.inner.base_url().to_string(),
            username_or_id.into(),
        )
    }

    /// Returns a client for the OAuth2 applications of one consumer.
    #[must_use]
    pub fn oauth2(&self, username_or_id: impl Into<String>) -> OAuth2Client {
        OAuth2Client::new(
            self.inner.http(),
            self.inner.base_url().to_string(),
            username_or_id.into(),
        )
    }
}
