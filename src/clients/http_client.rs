//! Throttled HTTP session for Admin API communication.
//!
//! This module provides the [`HttpClient`] type: a thin session over the
//! HTTP transport that owns the two behaviors the Admin API needs from its
//! callers: cooperative request spacing and optional connection reuse.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::KongConfig;

/// HTTP session for making requests to the Admin API.
///
/// The session handles:
/// - an optional minimum wall-clock interval between consecutive requests,
///   enforced by sleeping before the send;
/// - optional connection reuse; when disabled, a fresh transport is built
///   per request and a `Connection: close` header is sent;
/// - merging base headers with per-request headers (per-request wins).
///
/// # Throttling
///
/// When `minimum_request_interval > 0` and reuse is enabled, a send that
/// follows the previous one too closely sleeps for the remaining difference
/// first. The last-request timestamp is updated after every send, success or
/// not. Disabling reuse discards session state per request, so the throttle
/// only applies to reuse-enabled sessions.
///
/// # Concurrency
///
/// One instance is meant for one logical caller: the read-then-update of the
/// throttle timestamp is not atomic across the send, so concurrent calls
/// against the same instance can space themselves against a stale timestamp.
/// Use external synchronization or one instance per task if that matters.
///
/// # Example
///
/// ```rust,ignore
/// use kong_admin::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "http://localhost:8001/apis/").build();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The reusable transport; `None` when connection reuse is disabled.
    transport: Option<reqwest::Client>,
    /// Headers applied to every request.
    base_headers: HashMap<String, String>,
    /// Minimum spacing between consecutive requests; zero disables the throttle.
    minimum_request_interval: Duration,
    /// When the previous request was sent, if any.
    last_request: Mutex<Option<Instant>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP session from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying transport cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &KongConfig) -> Self {
        let mut base_headers = HashMap::new();
        if !config.reuse_connections() {
            base_headers.insert("Connection".to_string(), "close".to_string());
        }

        let transport = config.reuse_connections().then(Self::build_transport);

        Self {
            transport,
            base_headers,
            minimum_request_interval: config.minimum_request_interval(),
            last_request: Mutex::new(None),
        }
    }

    /// Returns the headers applied to every request.
    #[must_use]
    pub const fn base_headers(&self) -> &HashMap<String, String> {
        &self.base_headers
    }

    /// Returns `true` when the session holds a reusable transport.
    #[must_use]
    pub const fn reuses_connections(&self) -> bool {
        self.transport.is_some()
    }

    /// Sends an HTTP request to the Admin API.
    ///
    /// Applies the throttle (reuse-enabled sessions only), dispatches the
    /// request, and records the send time. Any response, whatever its
    /// status code, is a successful round trip here.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] for transport-level failures
    /// (connection refused, DNS failure, timeout).
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        match &self.transport {
            Some(transport) => {
                self.pause_before_send().await;
                let result = self.dispatch(transport, &request).await;
                self.mark_sent();
                result
            }
            None => {
                // No session state survives the call: fresh transport in,
                // dropped on return.
                let transport = Self::build_transport();
                self.dispatch(&transport, &request).await
            }
        }
    }

    /// Sleeps until the configured interval since the previous send has passed.
    async fn pause_before_send(&self) {
        if self.minimum_request_interval.is_zero() {
            return;
        }

        let remaining = {
            let last = self
                .last_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            last.map_or(Duration::ZERO, |sent_at| {
                let elapsed = sent_at.elapsed();
                if elapsed.is_zero() || elapsed >= self.minimum_request_interval {
                    Duration::ZERO
                } else {
                    self.minimum_request_interval - elapsed
                }
            })
        };

        if !remaining.is_zero() {
            tracing::debug!("throttling request for {remaining:?}");
            tokio::time::sleep(remaining).await;
        }
    }

    /// Records the current time as the last-request timestamp.
    fn mark_sent(&self) {
        *self
            .last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
    }

    async fn dispatch(
        &self,
        transport: &reqwest::Client,
        request: &HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = match request.http_method {
            HttpMethod::Get => transport.get(&request.url),
            HttpMethod::Post => transport.post(&request.url),
            HttpMethod::Put => transport.put(&request.url),
            HttpMethod::Patch => transport.patch(&request.url),
            HttpMethod::Delete => transport.delete(&request.url),
        };

        // Base headers first, per-request headers override on collision.
        let mut headers = self.base_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in &headers {
            builder = builder.header(key, value);
        }

        if let Some(form) = &request.form {
            builder = builder.form(form);
        }

        tracing::debug!("{} {}", request.http_method, request.url);

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        Ok(HttpResponse::new(status, text))
    }

    fn build_transport() -> reqwest::Client {
        reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP transport")
    }
}
