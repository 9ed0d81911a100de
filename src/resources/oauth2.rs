//! Client for OAuth2 applications nested under one consumer.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::rest::{
    Fields, KongError, ListParams, PagedList, Parent, Record, ResourceClient, ResourceSpec,
};

const OAUTH2_SPEC: ResourceSpec = ResourceSpec {
    name: "OAuth2",
    collection: "oauth2",
    filter_fields: &["id", "name", "redirect_uri", "client_id"],
    update_fields: &["name", "redirect_uri", "client_id", "client_secret"],
};

/// Client for `consumers/{consumer}/oauth2`, scoped to one consumer.
#[derive(Clone, Debug)]
pub struct OAuth2Client {
    inner: ResourceClient,
}

impl OAuth2Client {
    pub(crate) fn new(http: Arc<HttpClient>, base_url: String, consumer_id: String) -> Self {
        Self {
            inner: ResourceClient::new(
                http,
                base_url,
                OAUTH2_SPEC,
                Some(Parent {
                    name: "Consumer",
                    collection: "consumers",
                    id: consumer_id,
                }),
            ),
        }
    }

    /// Registers an OAuth2 application. With `client_id`/`client_secret`
    /// absent the backend generates them. Succeeds only on 201.
    ///
    /// # Errors
    ///
    /// [`KongError::Conflict`] when the client id is taken;
    /// [`KongError::RequestFailed`] otherwise.
    pub async fn create(
        &self,
        name: &str,
        redirect_uri: &str,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<Record, KongError> {
        let fields = Fields::new()
            .set("name", name)
            .set("redirect_uri", redirect_uri)
            .set_opt("client_id", client_id)
            .set_opt("client_secret", client_secret);
        self.inner.create(&fields).await
    }

    /// Registers or replaces an application, keyed by `oauth2_id` when
    /// given. Succeeds on 200 or 201.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::create_or_update`].
    pub async fn create_or_update(
        &self,
        oauth2_id: Option<&str>,
        name: Option<&str>,
        redirect_uri: Option<&str>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> Result<Record, KongError> {
        let fields = Fields::new()
            .set_opt("name", name)
            .set_opt("redirect_uri", redirect_uri)
            .set_opt("client_id", client_id)
            .set_opt("client_secret", client_secret);
        self.inner.create_or_update(oauth2_id, &fields).await
    }

    /// Partially updates an application. `fields` may only contain `name`,
    /// `redirect_uri`, `client_id`, and `client_secret`.
    ///
    /// # Errors
    ///
    /// [`KongError::Validation`] for an out-of-whitelist field (before any
    /// I/O); [`KongError::RequestFailed`] for any non-200 status.
    pub async fn update(&self, oauth2_id: &str, fields: &Fields) -> Result<Record, KongError> {
        self.inner.update(oauth2_id, Fields::new(), fields).await
    }

    /// Lists applications of this consumer.
    /// Filters: `id`, `name`, `redirect_uri`, `client_id`.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::list`].
    pub async fn list(&self, params: &ListParams) -> Result<PagedList, KongError> {
        self.inner.list(params).await
    }

    /// Retrieves a single application. 200 only.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status, 404 included.
    pub async fn retrieve(&self, oauth2_id: &str) -> Result<Record, KongError> {
        self.inner.retrieve(oauth2_id).await
    }

    /// Counts applications of this consumer.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::count`].
    pub async fn count(&self) -> Result<u64, KongError> {
        self.inner.count().await
    }

    /// Deletes an application. Succeeds on 204 or 404; retried on generic
    /// failure, with the consumer named in the failure message.
    ///
    /// # Errors
    ///
    /// See [`ResourceClient::delete`].
    pub async fn delete(&self, oauth2_id: &str) -> Result<(), KongError> {
        self.inner.delete(oauth2_id).await
    }
}
