//! Error taxonomy for Admin API operations.
//!
//! The taxonomy distinguishes the cases a caller handles differently:
//!
//! - [`KongError::Conflict`]: a uniqueness constraint was violated (409).
//!   Recoverable via `create_or_update` or a different identifier.
//! - [`KongError::Validation`]: a local precondition failed: a filter or
//!   update field outside the resource's whitelist. Raised before any I/O.
//! - [`KongError::RequestFailed`]: any unexpected status; the message
//!   carries the backend's error payload verbatim for observability.
//! - [`KongError::Http`]: transport-level failures, propagated unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! match apis.add(&definition).await {
//!     Ok(record) => println!("created {:?}", record.get("id")),
//!     Err(KongError::Conflict { message }) => println!("already exists: {message}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};
use crate::rest::response::flatten_error_body;

/// Error type for Admin API operations.
#[derive(Debug, Error)]
pub enum KongError {
    /// A uniqueness constraint was violated (HTTP 409).
    #[error("conflict: {message}")]
    Conflict {
        /// The backend's error payload, flattened to `key: value` pairs.
        message: String,
    },

    /// A field outside the resource's whitelist was supplied.
    ///
    /// This error is raised before any network I/O.
    #[error("unknown field '{field}' for {resource}")]
    Validation {
        /// The resource whose whitelist rejected the field.
        resource: &'static str,
        /// The offending field name.
        field: String,
    },

    /// The backend answered with an unexpected status.
    #[error("{message}")]
    RequestFailed {
        /// The HTTP status code of the response.
        status: u16,
        /// The backend's error payload, flattened to `key: value` pairs.
        message: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl KongError {
    /// Creates a conflict error from a 409 response.
    #[must_use]
    pub fn conflict(response: &HttpResponse) -> Self {
        Self::Conflict {
            message: flatten_error_body(response),
        }
    }

    /// Creates a generic failure from an unexpected response.
    #[must_use]
    pub fn request_failed(response: &HttpResponse) -> Self {
        Self::RequestFailed {
            status: response.status,
            message: flatten_error_body(response),
        }
    }

    /// Returns the HTTP status behind this error, when there is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Verify KongError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KongError>();
};
