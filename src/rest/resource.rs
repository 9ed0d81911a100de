//! The shared resource-client pattern.
//!
//! Every Admin API collection, top-level or nested under a parent, exposes
//! the same operation set: `create`, `create_or_update`, `update`, `list`,
//! `retrieve`, `count`, `delete`. [`ResourceClient`] implements that set
//! once, configured by [`ResourceSpec`] data (path segment, filter
//! whitelist, update whitelist) instead of by a type hierarchy. The concrete
//! resource clients in [`crate::resources`] are thin typed wrappers around
//! this one.
//!
//! # Status contract
//!
//! - `create`: POST, succeeds only on 201; 409 raises
//!   [`KongError::Conflict`]; never retried.
//! - `create_or_update`: PUT with the identifier in the body when provided;
//!   succeeds on 200 or 201 (the idempotent upsert form).
//! - `update`: PATCH, whitelisted fields only; succeeds only on 200.
//! - `list`/`count`/`retrieve`: GET; succeed only on 200.
//! - `delete`: DELETE; 204 and 404 both succeed; wrapped in the retry
//!   policy.

use std::sync::Arc;

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::rest::errors::KongError;
use crate::rest::fields::Fields;
use crate::rest::path::{append_query, join_url};
use crate::rest::response::{
    classify, Disposition, PagedList, Record, CREATED, DEFAULT_PAGE_SIZE, NO_CONTENT, OK,
};
use crate::rest::retry::{retry_with_backoff, RetryPolicy};

/// Static configuration for one resource collection.
///
/// A resource is fully described by data: its display name (for error
/// messages), the collection path segment, and the two field whitelists.
#[derive(Clone, Copy, Debug)]
pub struct ResourceSpec {
    /// Display name used in error messages (e.g., "API").
    pub name: &'static str,
    /// Collection path segment (e.g., "apis", "basicauth").
    pub collection: &'static str,
    /// Fields accepted as `list` filters.
    pub filter_fields: &'static [&'static str],
    /// Fields accepted by `update`.
    pub update_fields: &'static [&'static str],
}

impl ResourceSpec {
    fn ensure_allowed(
        &self,
        fields: &Fields,
        allowed: &'static [&'static str],
    ) -> Result<(), KongError> {
        for key in fields.keys() {
            if !allowed.contains(&key) {
                return Err(KongError::Validation {
                    resource: self.name,
                    field: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The parent scope of a nested resource collection.
///
/// Fixed when the nested client is created; a nested client can never be
/// repointed at another parent.
#[derive(Clone, Debug)]
pub struct Parent {
    /// Display name of the parent resource (e.g., "Consumer").
    pub name: &'static str,
    /// Collection path segment of the parent (e.g., "consumers").
    pub collection: &'static str,
    /// The parent's name or id.
    pub id: String,
}

/// Parameters for `list` operations.
///
/// # Example
///
/// ```rust
/// use kong_admin::ListParams;
///
/// let params = ListParams::new().size(10).filter("name", "svc");
/// ```
#[derive(Clone, Debug)]
pub struct ListParams {
    size: u64,
    offset: Option<String>,
    filters: Fields,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_PAGE_SIZE,
            offset: None,
            filters: Fields::new(),
        }
    }
}

impl ListParams {
    /// Creates parameters with the default page size and no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Sets the opaque continuation token, passed to the backend verbatim.
    #[must_use]
    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Adds a filter field. Filters are validated against the resource's
    /// whitelist before any request is made.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters = self.filters.set(key, value);
        self
    }
}

/// A client for one resource collection.
///
/// Holds a shared HTTP session (so every resource client of one
/// [`KongAdminClient`](crate::KongAdminClient) shares one throttle clock),
/// the admin base URL, the resource's static spec, and for nested
/// resources the parent scope.
#[derive(Clone, Debug)]
pub struct ResourceClient {
    http: Arc<HttpClient>,
    base_url: String,
    spec: ResourceSpec,
    parent: Option<Parent>,
    retry: RetryPolicy,
}

impl ResourceClient {
    /// Creates a client for a resource collection.
    #[must_use]
    pub fn new(
        http: Arc<HttpClient>,
        base_url: impl Into<String>,
        spec: ResourceSpec,
        parent: Option<Parent>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            spec,
            parent,
            retry: RetryPolicy::default(),
        }
    }

    /// Returns a handle to the shared HTTP session.
    #[must_use]
    pub fn http(&self) -> Arc<HttpClient> {
        Arc::clone(&self.http)
    }

    /// Returns the admin base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the URL of the collection endpoint.
    #[must_use]
    pub fn collection_url(&self) -> String {
        match &self.parent {
            Some(parent) => join_url(
                &self.base_url,
                &[parent.collection, &parent.id, self.spec.collection],
            ),
            None => join_url(&self.base_url, &[self.spec.collection]),
        }
    }

    /// Returns the URL of a single item endpoint.
    #[must_use]
    pub fn item_url(&self, name_or_id: &str) -> String {
        match &self.parent {
            Some(parent) => join_url(
                &self.base_url,
                &[parent.collection, &parent.id, self.spec.collection, name_or_id],
            ),
            None => join_url(&self.base_url, &[self.spec.collection, name_or_id]),
        }
    }

    /// Creates a resource (POST). Succeeds only on 201; never retried.
    ///
    /// # Errors
    ///
    /// [`KongError::Conflict`] when a unique field collides, and
    /// [`KongError::RequestFailed`] for any other unexpected status.
    pub async fn create(&self, fields: &Fields) -> Result<Record, KongError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.collection_url())
            .form(fields.clone().into_pairs())
            .build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[CREATED], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => Ok(response.record()),
            _ => Err(KongError::request_failed(&response)),
        }
    }

    /// Creates or replaces a resource (PUT), keyed by an optional identifier
    /// carried in the body. Succeeds on 200 or 201; replaying the same
    /// identifier is an update, not a conflict.
    ///
    /// # Errors
    ///
    /// [`KongError::Conflict`] when a unique field (other than the
    /// identifier) collides, and [`KongError::RequestFailed`] for any other
    /// unexpected status.
    pub async fn create_or_update(
        &self,
        id: Option<&str>,
        fields: &Fields,
    ) -> Result<Record, KongError> {
        let body = fields.clone().set_opt("id", id);
        let request = HttpRequest::builder(HttpMethod::Put, self.collection_url())
            .form(body.into_pairs())
            .build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[OK, CREATED], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => Ok(response.record()),
            _ => Err(KongError::request_failed(&response)),
        }
    }

    /// Partially updates a resource (PATCH). `fields` are validated against
    /// the update whitelist before any I/O; `base` carries the operation's
    /// required fields and bypasses validation.
    ///
    /// # Errors
    ///
    /// [`KongError::Validation`] for an out-of-whitelist field (no request
    /// is made), [`KongError::Conflict`] on 409, and
    /// [`KongError::RequestFailed`] for any other non-200 status.
    pub async fn update(
        &self,
        name_or_id: &str,
        base: Fields,
        fields: &Fields,
    ) -> Result<Record, KongError> {
        self.spec.ensure_allowed(fields, self.spec.update_fields)?;

        let request = HttpRequest::builder(HttpMethod::Patch, self.item_url(name_or_id))
            .form(base.merge(fields).into_pairs())
            .build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[OK], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => Ok(response.record()),
            _ => Err(KongError::request_failed(&response)),
        }
    }

    /// Lists resources (GET). Filters are validated against the filter
    /// whitelist before any I/O; the `offset` token is passed verbatim.
    ///
    /// # Errors
    ///
    /// [`KongError::Validation`] for an out-of-whitelist filter (no request
    /// is made), and [`KongError::RequestFailed`] for any non-200 status.
    pub async fn list(&self, params: &ListParams) -> Result<PagedList, KongError> {
        self.spec
            .ensure_allowed(&params.filters, self.spec.filter_fields)?;

        let size = params.size.to_string();
        let query = std::iter::once(("size", Some(size.as_str())))
            .chain(
                params
                    .filters
                    .iter()
                    .map(|(key, value)| (key.as_str(), Some(value.as_str()))),
            )
            .chain(std::iter::once(("offset", params.offset.as_deref())));

        let url = append_query(&self.collection_url(), query);
        let request = HttpRequest::builder(HttpMethod::Get, url).build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[OK], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => parse_paged_list(&response),
            _ => Err(KongError::request_failed(&response)),
        }
    }

    /// Retrieves a single resource (GET). Succeeds only on 200; unlike
    /// delete, an absent resource is an error here.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status, 404 included.
    pub async fn retrieve(&self, name_or_id: &str) -> Result<Record, KongError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.item_url(name_or_id)).build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[OK], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => Ok(response.record()),
            _ => Err(KongError::request_failed(&response)),
        }
    }

    /// Counts resources by reading the collection endpoint. There is no
    /// dedicated count endpoint; when the backend omits `total` the page
    /// length is reported, which is then only a lower bound.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] for any non-200 status.
    pub async fn count(&self) -> Result<u64, KongError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.collection_url()).build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[OK], false) {
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Success => parse_paged_list(&response).map(|list| list.count()),
            _ => Err(KongError::request_failed(&response)),
        }
    }

    /// Deletes a resource (DELETE). 204 and 404 both succeed (deleting
    /// something already gone is not an error) and generic failures are
    /// retried with bounded exponential backoff.
    ///
    /// # Errors
    ///
    /// [`KongError::RequestFailed`] after attempts are exhausted, naming the
    /// resource and its parent context; [`KongError::Conflict`] on 409
    /// (not retried).
    pub async fn delete(&self, name_or_id: &str) -> Result<(), KongError> {
        retry_with_backoff(&self.retry, self.spec.name, || self.delete_once(name_or_id)).await
    }

    async fn delete_once(&self, name_or_id: &str) -> Result<(), KongError> {
        let request = HttpRequest::builder(HttpMethod::Delete, self.item_url(name_or_id)).build();
        let response = self.http.request(request).await?;

        match classify(response.status, &[NO_CONTENT], true) {
            Disposition::Success | Disposition::NotFoundAsSuccess => Ok(()),
            Disposition::Conflict => Err(KongError::conflict(&response)),
            Disposition::Failure => Err(KongError::RequestFailed {
                status: response.status,
                message: self.delete_failure_message(response.status, name_or_id),
            }),
        }
    }

    fn delete_failure_message(&self, status: u16, name_or_id: &str) -> String {
        match &self.parent {
            Some(parent) => format!(
                "Could not delete {} (status: {status}): {name_or_id} for {}: {}",
                self.spec.name, parent.name, parent.id
            ),
            None => format!(
                "Could not delete {} (status: {status}): {name_or_id}",
                self.spec.name
            ),
        }
    }
}

fn parse_paged_list(response: &crate::clients::HttpResponse) -> Result<PagedList, KongError> {
    serde_json::from_value(response.body.clone()).map_err(|err| KongError::RequestFailed {
        status: response.status,
        message: format!("unexpected list payload: {err}"),
    })
}
