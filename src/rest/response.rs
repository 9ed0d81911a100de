//! Response classification and list payloads.
//!
//! The Admin API keeps a small, constant status-code contract across every
//! resource: 200/201 for reads and writes, 204 for deletes, 404 as a
//! *success* for deletes only, 409 for uniqueness conflicts, anything else a
//! generic failure. [`classify`] captures that contract in one place; the
//! resource layer maps the outcome to typed errors.

use serde::Deserialize;

use crate::clients::HttpResponse;

/// Status: success for reads, updates, and upsert-as-update.
pub const OK: u16 = 200;
/// Status: success for create and upsert-as-insert.
pub const CREATED: u16 = 201;
/// Status: success for delete.
pub const NO_CONTENT: u16 = 204;
/// Status: absent, a success only for delete.
pub const NOT_FOUND: u16 = 404;
/// Status: a uniqueness constraint was violated.
pub const CONFLICT: u16 = 409;

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// An opaque resource record, as returned by the backend.
///
/// Records are not validated or strongly typed beyond being JSON objects;
/// the backend guarantees that create/update results carry an identifier
/// field.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// How a response status should be interpreted for one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The operation succeeded and the payload is usable.
    Success,
    /// The resource was already absent, a success for delete semantics.
    NotFoundAsSuccess,
    /// A uniqueness constraint was violated (409).
    Conflict,
    /// Any other unexpected status.
    Failure,
}

/// Classifies a status code against an operation's success set.
///
/// `absent_ok` opts into treating 404 as a success; only delete does.
///
/// # Example
///
/// ```rust
/// use kong_admin::rest::{classify, Disposition, CREATED, NO_CONTENT};
///
/// assert_eq!(classify(201, &[CREATED], false), Disposition::Success);
/// assert_eq!(classify(409, &[CREATED], false), Disposition::Conflict);
/// assert_eq!(classify(404, &[NO_CONTENT], true), Disposition::NotFoundAsSuccess);
/// assert_eq!(classify(404, &[CREATED], false), Disposition::Failure);
/// ```
#[must_use]
pub fn classify(status: u16, success: &[u16], absent_ok: bool) -> Disposition {
    if success.contains(&status) {
        Disposition::Success
    } else if absent_ok && status == NOT_FOUND {
        Disposition::NotFoundAsSuccess
    } else if status == CONFLICT {
        Disposition::Conflict
    } else {
        Disposition::Failure
    }
}

/// Flattens a structured error body into a readable message.
///
/// JSON object bodies become a `"key: value"` comma-join so operators can
/// see exactly which constraint failed; anything else falls back to the raw
/// response text, or to the bare status when the body is empty.
#[must_use]
pub fn flatten_error_body(response: &HttpResponse) -> String {
    if let Some(object) = response.body.as_object() {
        if !object.is_empty() {
            return object
                .iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(text) => format!("{key}: {text}"),
                    other => format!("{key}: {other}"),
                })
                .collect::<Vec<_>>()
                .join(", ");
        }
    }

    if response.text.is_empty() {
        format!("HTTP status {}", response.status)
    } else {
        response.text.clone()
    }
}

/// One page of a list operation.
///
/// `total` is authoritative when present; [`PagedList::count`] falls back to
/// the page length otherwise, in which case the count is only a lower bound.
/// The `offset` continuation token is opaque and passed back to the backend
/// verbatim.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PagedList {
    /// Total number of matching records, when the backend reports it.
    pub total: Option<u64>,
    /// The records on this page.
    #[serde(default)]
    pub data: Vec<Record>,
    /// Opaque continuation token for the next page, if any.
    pub offset: Option<String>,
    /// URL of the next page as reported by the backend, if any.
    pub next: Option<String>,
}

impl PagedList {
    /// Returns the total count, falling back to the page length.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.total.unwrap_or(self.data.len() as u64)
    }
}
