use std::fmt;
use std::sync::OnceLock;

use crate::headers::{X_AZURE_CLIENTIP, X_CLIENT_IP, X_MS_CLIENT_PRINCIPAL_ID};
use crate::identity::UserIdentity;
use crate::redact::HeaderDump;
use crate::request::RequestHeaders;
use crate::sample::sample_user;

/// Where an identity's fields were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// The request carried the proxy's principal headers.
    Proxy,
    /// No principal headers; the fallback identity was used.
    Development,
}

impl IdentitySource {
    /// Selects the source for a header map.
    ///
    /// Only the exact name `X-Ms-Client-Principal-Id` counts.
    pub fn detect(headers: &RequestHeaders) -> Self {
        if headers.contains(X_MS_CLIENT_PRINCIPAL_ID) {
            IdentitySource::Proxy
        } else {
            IdentitySource::Development
        }
    }
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentitySource::Proxy => write!(f, "proxy"),
            IdentitySource::Development => write!(f, "development"),
        }
    }
}

/// Turns proxy headers into a [`UserIdentity`].
///
/// Extraction never fails. Requests without `X-Ms-Client-Principal-Id`
/// are served from a fallback identity, the sample user unless replaced
/// with [`with_fallback`](Self::with_fallback).
///
/// # Examples
///
/// ```
/// use easyauth_identity::{IdentityExtractor, RequestHeaders};
///
/// let extractor = IdentityExtractor::new();
///
/// let headers = RequestHeaders::from_iter([
///     ("X-Ms-Client-Principal-Id", "abc"),
///     ("X-Ms-Client-Principal-Name", "alice"),
/// ]);
/// let identity = extractor.extract(&headers);
/// assert_eq!(identity.user_name(), Some("alice"));
/// assert_eq!(identity.client_ip(), None);
///
/// // No proxy headers: the sample user stands in.
/// let dev = extractor.extract(&RequestHeaders::new());
/// assert_eq!(dev.auth_provider(), Some("aad"));
/// ```
#[derive(Debug, Clone)]
pub struct IdentityExtractor {
    fallback: RequestHeaders,
    require_proxy: bool,
}

impl Default for IdentityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityExtractor {
    /// Creates an extractor that falls back to the sample user.
    pub fn new() -> Self {
        Self {
            fallback: sample_user(),
            require_proxy: false,
        }
    }

    /// Replaces the fallback identity used in development mode.
    ///
    /// The map is read with the same header names the proxy uses.
    pub fn with_fallback(mut self, fallback: RequestHeaders) -> Self {
        self.fallback = fallback;
        self
    }

    /// Makes [`extract_authed`](crate::web::extract_authed) reject
    /// development-mode requests.
    ///
    /// Has no effect on [`extract`](Self::extract).
    pub fn require_proxy(mut self, required: bool) -> Self {
        self.require_proxy = required;
        self
    }

    /// Returns true if development-mode requests must be rejected.
    pub fn proxy_required(&self) -> bool {
        self.require_proxy
    }

    /// Returns the fallback identity's headers.
    pub fn fallback(&self) -> &RequestHeaders {
        &self.fallback
    }

    /// Extracts the identity carried by `headers`.
    ///
    /// In development mode the fallback is copied. If the request sends
    /// `X-Client-Ip`, the copy's `X-Client-Ip` is replaced by the request's
    /// `X-Azure-Clientip`, or cleared when that is absent.
    pub fn extract(&self, headers: &RequestHeaders) -> UserIdentity {
        let source = IdentitySource::detect(headers);

        tracing::debug!(%source, header_count = headers.len(), "extracting user identity");
        tracing::trace!(headers = ?HeaderDump(headers), "raw request headers");

        match source {
            IdentitySource::Proxy => UserIdentity::from_raw(headers),
            IdentitySource::Development => {
                let mut raw = self.fallback.clone();
                if headers.contains(X_CLIENT_IP) {
                    // The address is read from X-Azure-Clientip even though
                    // presence is checked on X-Client-Ip.
                    match headers.get(X_AZURE_CLIENTIP) {
                        Some(ip) => raw.insert(X_CLIENT_IP, ip),
                        None => {
                            raw.remove(X_CLIENT_IP);
                        }
                    }
                }
                UserIdentity::from_raw(&raw)
            }
        }
    }
}

/// Extracts the identity carried by `headers`, falling back to the sample
/// user.
///
/// Uses a default [`IdentityExtractor`] built once per process.
///
/// # Examples
///
/// ```
/// use easyauth_identity::{extract, RequestHeaders};
///
/// let identity = extract(&RequestHeaders::from_iter([
///     ("X-Ms-Client-Principal-Id", "abc"),
/// ]));
/// assert_eq!(identity.user_principal_id(), Some("abc"));
/// assert_eq!(identity.auth_token(), None);
/// ```
pub fn extract(headers: &RequestHeaders) -> UserIdentity {
    default_extractor().extract(headers)
}

fn default_extractor() -> &'static IdentityExtractor {
    static DEFAULT: OnceLock<IdentityExtractor> = OnceLock::new();
    DEFAULT.get_or_init(IdentityExtractor::new)
}
