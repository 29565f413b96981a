//! Integration tests for web module extractors.
//!
//! These tests walk the flow from a framework request to an identity and,
//! for protected endpoints, to an authenticated principal.

use std::collections::{BTreeMap, HashMap};

use easyauth_identity::web::{extract_authed, extract_identity, ExtractHeaders};
use easyauth_identity::{IdentityExtractor, IdentitySource, RequestHeaders, ViolationKind};

/// Stand-in for a framework request with lower-cased header names.
struct LowercasingRequest {
    headers: Vec<(&'static str, &'static str)>,
}

impl ExtractHeaders for LowercasingRequest {
    fn extract_headers(&self) -> RequestHeaders {
        self.headers
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
            .collect()
    }
}

fn proxy_request() -> HashMap<String, String> {
    let mut request = HashMap::new();
    request.insert("X-Ms-Client-Principal-Id".to_string(), "user-alice".to_string());
    request.insert("X-Ms-Client-Principal-Name".to_string(), "alice@contoso.com".to_string());
    request.insert("X-Ms-Client-Principal-Idp".to_string(), "aad".to_string());
    request.insert("X-Client-Ip".to_string(), "198.51.100.4:50123".to_string());
    request
}

#[test]
fn public_endpoint_gets_identity() {
    let identity = extract_identity(&proxy_request(), &IdentityExtractor::new());

    assert_eq!(identity.user_principal_id(), Some("user-alice"));
    assert_eq!(identity.auth_provider(), Some("aad"));
    assert_eq!(identity.client_ip(), Some("198.51.100.4:50123"));
}

#[test]
fn protected_endpoint_gets_principal() {
    let extractor = IdentityExtractor::new().require_proxy(true);

    let authed = extract_authed(&proxy_request(), &extractor).expect("principal present");

    assert_eq!(authed.source, IdentitySource::Proxy);
    assert_eq!(authed.principal.id, "user-alice");
    assert_eq!(authed.principal.name, "alice@contoso.com");
}

#[test]
fn local_development_uses_sample_user() {
    let request: BTreeMap<String, String> = BTreeMap::new();

    let authed = extract_authed(&request, &IdentityExtractor::new()).expect("sample user");

    assert_eq!(authed.source, IdentitySource::Development);
    assert_eq!(authed.identity.auth_provider(), Some("aad"));
}

#[test]
fn production_rejects_missing_proxy_headers() {
    let request: BTreeMap<String, String> = BTreeMap::new();
    let extractor = IdentityExtractor::new().require_proxy(true);

    let err = extract_authed(&request, &extractor).unwrap_err();

    assert_eq!(err.kind, ViolationKind::ProxyRequired);
}

#[test]
fn lowercased_headers_fall_back_to_development_mode() {
    let request = LowercasingRequest {
        headers: vec![("X-Ms-Client-Principal-Id", "user-bob")],
    };

    let identity = extract_identity(&request, &IdentityExtractor::new());

    assert_ne!(identity.user_principal_id(), Some("user-bob"));
    assert_eq!(
        identity.user_principal_id(),
        Some("00000000-0000-0000-0000-000000000000")
    );
}

#[test]
fn empty_fallback_yields_unauthenticated() {
    let extractor = IdentityExtractor::new().with_fallback(RequestHeaders::new());

    let err = extract_authed(&RequestHeaders::new(), &extractor).unwrap_err();

    assert_eq!(err.kind, ViolationKind::Unauthenticated);
    assert!(err.to_string().starts_with("Unauthenticated"));
}
