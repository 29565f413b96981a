use std::collections::HashMap;
use std::fmt;

use crate::redact::HeaderDump;

/// Header mapping for a single inbound request.
///
/// Keys are opaque, case-sensitive header names exactly as delivered by the
/// HTTP layer. The map is owned by the caller; extraction only reads it.
///
/// `Debug` prints entries sorted by name with credential values redacted.
///
/// # Examples
///
/// ```
/// use easyauth_identity::RequestHeaders;
///
/// let headers = RequestHeaders::from_iter([
///     ("X-Ms-Client-Principal-Id", "abc"),
///     ("X-Ms-Client-Principal-Name", "alice"),
/// ]);
///
/// assert_eq!(headers.get("X-Ms-Client-Principal-Id"), Some("abc"));
/// assert_eq!(headers.get("x-ms-client-principal-id"), None);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    inner: HashMap<String, String>,
}

impl RequestHeaders {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(name.into(), value.into());
    }

    /// Removes a header, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner.remove(name)
    }

    /// Looks up a header by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Returns true if a header with exactly this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn owned(&self, name: &str) -> Option<String> {
        self.inner.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&HeaderDump(self), f)
    }
}

impl From<HashMap<String, String>> for RequestHeaders {
    fn from(inner: HashMap<String, String>) -> Self {
        Self { inner }
    }
}

/// An authenticated user or service principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Unique identifier for this principal
    pub id: String,
    /// Display name
    pub name: String,
}
