//! Ordered field maps for request bodies and query parameters.
//!
//! The Admin API takes form-encoded bodies and query strings built from
//! small, resource-specific field sets. [`Fields`] is the explicit,
//! insertion-ordered map those call sites use: absent values never enter the
//! map, so "omit `None` entries" falls out of construction rather than
//! serialization.

/// An ordered field map.
///
/// Keys keep their insertion order all the way to the wire. Setters are
/// chainable so resource clients can assemble bodies declaratively.
///
/// # Example
///
/// ```rust
/// use kong_admin::Fields;
///
/// let fields = Fields::new()
///     .set("name", "rate-limiting")
///     .set_opt("consumer_id", None::<&str>)
///     .set("enabled", true);
///
/// assert_eq!(fields.len(), 2);
/// assert!(fields.keys().any(|k| k == "enabled"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    /// Creates an empty field map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets a field, rendering the value with its `Display` form.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Sets a field only when a value is present.
    #[must_use]
    pub fn set_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Appends every field of `other`, after the existing ones.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        self.0.extend(other.0.iter().cloned());
        self
    }

    /// Returns a copy with every key prefixed.
    ///
    /// This is the namespacing transform for plugin-specific configuration
    /// values (`value.` prefix), keeping them disjoint from plugin metadata
    /// in the wire payload.
    #[must_use]
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, value)| (format!("{prefix}{key}"), value.clone()))
                .collect(),
        )
    }

    /// Iterates over the field keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    /// Returns the pairs as a slice, in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts into the owned pair list for a form body.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
