//! HTTP session types for Admin API communication.
//!
//! This module provides the transport-facing layer of the client: a
//! throttled, optionally connection-reusing session and the request/response
//! types that cross it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The throttled async HTTP session
//! - [`HttpRequest`]: A request to be sent to the Admin API
//! - [`HttpResponse`]: A parsed response (status + JSON body + raw text)
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpError`]: Transport-level failures, propagated unchanged
//!
//! Status-code interpretation (success, conflict, not-found-as-success)
//! lives in [`crate::rest`], not here: the session reports every response it
//! receives, whatever the status.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::HttpError;
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
