//! Client for basic-auth credentials nested under one consumer.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::{
    Fields, KongError, ListParams, PagedList, Parent, Record, ResourceClient, ResourceSpec,
};

const BASIC_AUTH_SPEC: ResourceSpec = ResourceSpec {
    name: "Basic Auth",
    collection: "basicauth",
    filter_fields: &["id", "username"],
    update_fields: &["username", "password"],
};

/// Client for `consumers/{consumer}/basicauth`, scoped to one consumer.
#[derive(Clone, Debug)]
pub struct BasicAuthClient {
    inner: ResourceClient,
}

impl BasicAuthClient {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: String, consumer_id: String) -> Self {
        Self {
            inner: ResourceClient::new(
                http,
                base_url,
                BASIC_AUTH_SPEC,
                Some(Parent {
                    name: "Consumer",
                    collection: "consumers",
                    id: consumer_id,
                }),
            ),
        }
    }

    /// Creates a basic-auth credential. Succeeds only on 201.
    ///
    /// # Errors
    ///
    /// [`KongError::Conflict`] when the username is taken;
    /// [`KongError::RequestFailed`] otherwise.
    pub async fn create(&self, username: &str, password: &str) -> Result<Record, KongError> {
        let fields = Fields::new().set("username", username).set("password", password);
        self.inner.create(&fields).await
    }

    /// Creates or replaces a credential, keyed by `basic_auth_id` when
    /// given. Succeeds on 200 or 201.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::create_or_update`].
    pub async fn create_or_update(
        &self,
        basic_auth_id: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Record, KongError> {
        let fields = Fields::new()
            .set_opt("username", username)
            .set_opt("password", password);
        self.inner.create_or_update(basic_auth_id, &fields).await
    }

    /// Partially updates a credential. `fields` may only contain `username`
    /// and `password`.
    ///
    /// # Errors
    ///
    /// [`KongError::Validation`] for an out-of-whitelist field (before any
    /// I/O); [`KongError::RequestFailed`] for any non-200 status.
    pub async fn update(&self, basic_auth_id: &str, fields: &Fields) -> Result<Record, KongError> {
        self.inner.update(basic_auth_id, Fields::new(), fields).await
    }

    /// Lists credentials of this consumer. Filters: `id`, `username`.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::list`].
    pub async fn list(&self, params: &ListParams) -> Result<PagedList, KongError> {
        self.inner.list(params).await
    }

    /// Retrieves a single credential. 200 only.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status, 404 included.
    pub async fn retrieve(&self, basic_auth_id: &str) -> Result<Record, KongError> {
        self.inner.retrieve(basic_auth_id).await
    }

    /// Counts credentials of this consumer.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::count`].
    pub async fn count(&self) -> Result<u64, KongError> {
        self.inner.count().await
    }

    /// Deletes a credential. Succeeds on 204 or 404; retried on generic
    /// failure, with the consumer named in the failure message.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::delete`].
    pub async fn delete(&self, basic_auth_id: &str) -> Result<(), KongError> {
        self.inner.delete(basic_auth_id).await
    }
}
