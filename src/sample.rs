//! Development identity used when no proxy is in front of the service.

use crate::headers::{
    X_MS_CLIENT_PRINCIPAL, X_MS_CLIENT_PRINCIPAL_ID, X_MS_CLIENT_PRINCIPAL_IDP,
    X_MS_CLIENT_PRINCIPAL_NAME, X_MS_TOKEN_AAD_ID_TOKEN,
};
use crate::request::RequestHeaders;

/// Headers the proxy would have sent for the sample user.
///
/// Carries no client address: a development request only gets one when it
/// sends `X-Client-Ip` itself.
pub static SAMPLE_USER: &[(&str, &str)] = &[
    (X_MS_CLIENT_PRINCIPAL_ID, "00000000-0000-0000-0000-000000000000"),
    (X_MS_CLIENT_PRINCIPAL_NAME, "testusername@contoso.com"),
    (X_MS_CLIENT_PRINCIPAL_IDP, "aad"),
    (X_MS_CLIENT_PRINCIPAL, "your_base_64_encoded_token"),
    (X_MS_TOKEN_AAD_ID_TOKEN, "your_aad_id_token"),
    ("Accept", "*/*"),
    ("Host", "localhost:5000"),
];

/// Builds a fresh copy of the sample user's headers.
pub fn sample_user() -> RequestHeaders {
    SAMPLE_USER.iter().copied().collect()
}
