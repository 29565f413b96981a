//! Extraction boundary trait for web integration.

use std::collections::{BTreeMap, HashMap};

use crate::request::RequestHeaders;

/// Collects the headers of a framework-specific request.
///
/// Framework integrations implement this once for their request type. The
/// returned map must keep header names exactly as the proxy sent them;
/// frameworks that lower-case names must restore the proxy's casing.
///
/// # Design Notes
///
/// This trait intentionally does NOT:
/// - Decide between proxy and development mode (that's the extractor's job)
/// - Reject unauthenticated requests (that's `extract_authed`'s job)
///
/// # Examples
///
/// ```
/// use easyauth_identity::web::ExtractHeaders;
/// use easyauth_identity::RequestHeaders;
///
/// struct MyFrameworkRequest {
///     headers: Vec<(String, String)>,
/// }
///
/// impl ExtractHeaders for MyFrameworkRequest {
///     fn extract_headers(&self) -> RequestHeaders {
///         self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
///     }
/// }
/// ```
pub trait ExtractHeaders {
    /// Returns an owned copy of the request's headers.
    fn extract_headers(&self) -> RequestHeaders;
}

impl ExtractHeaders for RequestHeaders {
    fn extract_headers(&self) -> RequestHeaders {
        self.clone()
    }
}

impl ExtractHeaders for HashMap<String, String> {
    fn extract_headers(&self) -> RequestHeaders {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

impl ExtractHeaders for BTreeMap<String, String> {
    fn extract_headers(&self) -> RequestHeaders {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}
