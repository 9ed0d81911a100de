//! HTTP request types for the Kong Admin API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests sent through the
//! [`HttpClient`](crate::clients::HttpClient).

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the Admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reads and lists.
    Get,
    /// HTTP POST method for creation (non-idempotent).
    Post,
    /// HTTP PUT method for create-or-update (idempotent by id).
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for idempotent deletes.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Admin API.
///
/// The `url` is a fully-composed request URL (the REST layer builds it,
/// query string included). Bodies are form-encoded field pairs, matching the
/// Admin API's expectations; their order is preserved on the wire.
///
/// # Example
///
/// ```rust
/// use kong_admin::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Post, "http://localhost:8001/apis/")
///     .form(vec![("name".to_string(), "svc".to_string())])
///     .build();
///
/// assert_eq!(request.http_method, HttpMethod::Post);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The fully-composed request URL.
    pub url: String,
    /// Form-encoded body fields, in wire order.
    pub form: Option<Vec<(String, String)>>,
    /// Additional headers; these override the session's base headers on
    /// key collision.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    form: Option<Vec<(String, String)>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            form: None,
            extra_headers: None,
        }
    }

    /// Sets the form-encoded request body.
    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.form = Some(pairs);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            url: self.url,
            form: self.form,
            extra_headers: self.extra_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "http://x/apis/").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "http://x/apis/");
        assert!(request.form.is_none());
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_builder_preserves_form_field_order() {
        let request = HttpRequest::builder(HttpMethod::Post, "http://x/apis/")
            .form(vec![
                ("name".to_string(), "svc".to_string()),
                ("target_url".to_string(), "http://upstream".to_string()),
            ])
            .build();

        let form = request.form.unwrap();
        assert_eq!(form[0].0, "name");
        assert_eq!(form[1].0, "target_url");
    }

    #[test]
    fn test_builder_collects_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "http://x/apis/")
            .header("X-Custom", "value")
            .build();

        assert_eq!(
            request.extra_headers.unwrap().get("X-Custom"),
            Some(&"value".to_string())
        );
    }
}
