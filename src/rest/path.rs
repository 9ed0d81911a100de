//! URL building for Admin API endpoints.
//!
//! The Admin API is picky about its canonical form: every endpoint path ends
//! in exactly one trailing slash, and query parameters follow it. The two
//! functions here guarantee that form no matter how the base URL or the
//! segments were written.
//!
//! # Example
//!
//! ```rust
//! use kong_admin::rest::{append_query, join_url};
//!
//! let url = join_url("http://localhost:8001", &["apis", "my-api"]);
//! assert_eq!(url, "http://localhost:8001/apis/my-api/");
//!
//! // Re-joining an already-slashed URL never doubles slashes.
//! assert_eq!(join_url(&url, &[]), url);
//!
//! let url = append_query(&url, [("size", Some("10")), ("offset", None)]);
//! assert_eq!(url, "http://localhost:8001/apis/my-api/?size=10");
//! ```

/// Joins a base URL and path segments into a canonical endpoint URL.
///
/// The result always ends in exactly one trailing slash. Leading/trailing
/// slashes on the base and on each segment are normalized away, so the
/// function is idempotent: feeding its own output back in (with no further
/// segments) returns it unchanged.
#[must_use]
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();

    for segment in segments {
        let segment = segment.trim_matches('/');
        if !segment.is_empty() {
            url.push('/');
            url.push_str(segment);
        }
    }

    url.push('/');
    url
}

/// Appends query parameters to a URL without disturbing its trailing slash.
///
/// Entries with a `None` value are omitted; keys and values of the rest are
/// percent-encoded. Parameter order follows iteration order. A URL with no
/// surviving parameters is returned unchanged.
#[must_use]
pub fn append_query<'a, I>(url: &str, params: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let encoded: Vec<String> = params
        .into_iter()
        .filter_map(|(key, value)| {
            value.map(|value| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
        })
        .collect();

    if encoded.is_empty() {
        return url.to_string();
    }

    format!("{}?{}", url, encoded.join("&"))
}
