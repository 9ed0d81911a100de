//! HTTP response types for the Kong Admin API client.

use crate::rest::Record;

/// An HTTP response from the Admin API.
///
/// The body is parsed as JSON eagerly; when parsing fails the raw text is
/// still available in `text` so error reporting can fall back to it. A
/// response is never an error at this level; classifying status codes is
/// the REST layer's job.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body parsed as JSON, or `Null` if it did not parse.
    pub body: serde_json::Value,
    /// The raw response text.
    pub text: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the body text as JSON.
    #[must_use]
    pub fn new(status: u16, text: String) -> Self {
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
        Self { status, body, text }
    }

    /// Returns the body as an opaque resource record.
    ///
    /// Non-object bodies (arrays, `null`, unparseable text) yield an empty
    /// record.
    #[must_use]
    pub fn record(&self) -> Record {
        self.body.as_object().cloned().unwrap_or_default()
    }
}
