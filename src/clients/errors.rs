//! Transport-level error types.
//!
//! The HTTP layer deliberately exposes a narrow error surface: anything the
//! network stack reports (connection refused, DNS failure, timeout) is
//! propagated unchanged. Interpreting response *status codes* is the job of
//! the REST layer above, which sees every response, whatever its status, as
//! a successful round trip at this level.

use thiserror::Error;

/// Errors raised by the HTTP session itself.
///
/// # Example
///
/// ```rust,ignore
/// match client.request(request).await {
///     Ok(response) => println!("status {}", response.status),
///     Err(HttpError::Network(e)) => println!("transport failure: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error from the transport.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
