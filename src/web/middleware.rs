//! Extractor functions for building identities from HTTP requests.
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework-specific ExtractHeaders impl
//!   ↓
//! extract_identity() or extract_authed()
//!   ↓
//! UserIdentity, or AuthenticatedIdentity / Violation (401)
//! ```

use crate::error::{Violation, ViolationKind};
use crate::extractor::{IdentityExtractor, IdentitySource};
use crate::identity::UserIdentity;
use crate::request::Principal;

use super::ExtractHeaders;

/// An identity that carries a principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    /// Whether the proxy or the fallback supplied the identity
    pub source: IdentitySource,
    /// The authenticated principal
    pub principal: Principal,
    /// The full identity record
    pub identity: UserIdentity,
}

/// Extracts the identity of a request.
///
/// Never fails. See [`IdentityExtractor::extract`].
pub fn extract_identity<R>(request: &R, extractor: &IdentityExtractor) -> UserIdentity
where
    R: ExtractHeaders + ?Sized,
{
    extractor.extract(&request.extract_headers())
}

/// Extracts the identity of a request and requires a principal.
///
/// # Errors
///
/// - `ViolationKind::ProxyRequired` if the extractor requires the proxy and
///   the request carries no `X-Ms-Client-Principal-Id`.
/// - `ViolationKind::Unauthenticated` if the resulting identity has no
///   principal id.
///
/// Either typically means middleware should return 401 Unauthorized.
///
/// # Examples
///
/// ```
/// use easyauth_identity::{IdentityExtractor, RequestHeaders, ViolationKind};
/// use easyauth_identity::web::extract_authed;
///
/// let extractor = IdentityExtractor::new().require_proxy(true);
///
/// let result = extract_authed(&RequestHeaders::new(), &extractor);
/// assert_eq!(result.unwrap_err().kind, ViolationKind::ProxyRequired);
/// ```
pub fn extract_authed<R>(
    request: &R,
    extractor: &IdentityExtractor,
) -> Result<AuthenticatedIdentity, Violation>
where
    R: ExtractHeaders + ?Sized,
{
    let headers = request.extract_headers();
    let source = IdentitySource::detect(&headers);

    if source == IdentitySource::Development && extractor.proxy_required() {
        tracing::warn!("rejecting request without proxy principal headers");
        return Err(Violation::new(
            ViolationKind::ProxyRequired,
            "request did not pass through the authentication proxy",
        ));
    }

    let identity = extractor.extract(&headers);
    let principal = identity.principal().ok_or_else(|| {
        tracing::warn!(%source, "identity has no principal id");
        Violation::new(ViolationKind::Unauthenticated, "no principal id")
    })?;

    Ok(AuthenticatedIdentity {
        source,
        principal,
        identity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestHeaders;

    #[test]
    fn extract_authed_succeeds_with_principal() {
        let headers = RequestHeaders::from_iter([
            ("X-Ms-Client-Principal-Id", "user-123"),
            ("X-Ms-Client-Principal-Name", "Test User"),
        ]);

        let authed = extract_authed(&headers, &IdentityExtractor::new())
            .expect("should succeed with principal");

        assert_eq!(authed.source, IdentitySource::Proxy);
        assert_eq!(authed.principal.id, "user-123");
        assert_eq!(authed.principal.name, "Test User");
        assert_eq!(authed.identity.user_principal_id(), Some("user-123"));
    }

    #[test]
    fn extract_authed_accepts_sample_user_by_default() {
        let authed = extract_authed(&RequestHeaders::new(), &IdentityExtractor::new())
            .expect("sample user has a principal id");

        assert_eq!(authed.source, IdentitySource::Development);
        assert_eq!(authed.principal.name, "testusername@contoso.com");
    }

    #[test]
    fn extract_authed_rejects_development_when_proxy_required() {
        let extractor = IdentityExtractor::new().require_proxy(true);
        let result = extract_authed(&RequestHeaders::new(), &extractor);

        assert_eq!(result.unwrap_err().kind, ViolationKind::ProxyRequired);
    }

    #[test]
    fn extract_authed_fails_without_principal_id() {
        let extractor = IdentityExtractor::new().with_fallback(RequestHeaders::new());
        let result = extract_authed(&RequestHeaders::new(), &extractor);

        assert_eq!(result.unwrap_err().kind, ViolationKind::Unauthenticated);
    }

    #[test]
    fn extract_identity_never_fails() {
        let extractor = IdentityExtractor::new().with_fallback(RequestHeaders::new());
        let identity = extract_identity(&RequestHeaders::new(), &extractor);

        assert_eq!(identity, UserIdentity::default());
    }
}
