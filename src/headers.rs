//! Header names injected by the authentication proxy.
//!
//! Names are matched exactly. The proxy emits them in this casing; if the
//! host HTTP layer lower-cases header names it must restore them first.

/// Client address as forwarded by the front door.
pub const X_CLIENT_IP: &str = "X-Client-Ip";
/// Client address as reported by the Azure edge.
///
/// Only read in development mode, when the request also carries
/// [`X_CLIENT_IP`].
pub const X_AZURE_CLIENTIP: &str = "X-Azure-Clientip";
/// Object id of the signed-in principal. Its presence selects proxy mode.
pub const X_MS_CLIENT_PRINCIPAL_ID: &str = "X-Ms-Client-Principal-Id";
/// Display or login name of the signed-in principal.
pub const X_MS_CLIENT_PRINCIPAL_NAME: &str = "X-Ms-Client-Principal-Name";
/// Identity provider that authenticated the principal (e.g. `aad`).
pub const X_MS_CLIENT_PRINCIPAL_IDP: &str = "X-Ms-Client-Principal-Idp";
/// Base64-encoded JSON document with the principal's claims.
pub const X_MS_CLIENT_PRINCIPAL: &str = "X-Ms-Client-Principal";
/// Raw ID token issued by Azure AD.
pub const X_MS_TOKEN_AAD_ID_TOKEN: &str = "X-Ms-Token-Aad-Id-Token";

const TOKEN_PREFIX: &str = "X-Ms-Token-";

/// Returns true if values of this header carry credentials.
///
/// Used to keep tokens out of diagnostic output. Unlike extraction, this
/// check ignores ASCII case, so lower-cased names from the host are masked too.
pub fn is_sensitive(name: &str) -> bool {
    name.eq_ignore_ascii_case(X_MS_CLIENT_PRINCIPAL)
        || name
            .get(..TOKEN_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(TOKEN_PREFIX))
        || name.eq_ignore_ascii_case("authorization")
        || name.eq_ignore_ascii_case("cookie")
}
