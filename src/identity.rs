use std::fmt;

use serde::{Deserialize, Serialize};

use crate::headers::{
    X_CLIENT_IP, X_MS_CLIENT_PRINCIPAL, X_MS_CLIENT_PRINCIPAL_ID, X_MS_CLIENT_PRINCIPAL_IDP,
    X_MS_CLIENT_PRINCIPAL_NAME, X_MS_TOKEN_AAD_ID_TOKEN,
};
use crate::redact::Redacted;
use crate::request::{Principal, RequestHeaders};

/// Normalized identity of the caller.
///
/// Always carries all seven fields; any of them may be `None`. Serializes to
/// an object with every key present and absent values as `null`.
///
/// `auth_token` and `aad_id_token` come from the same header and are always
/// equal.
///
/// `Debug` output redacts the token fields and the encoded client principal.
///
/// # Examples
///
/// ```
/// use easyauth_identity::{extract, RequestHeaders};
///
/// let headers = RequestHeaders::from_iter([
///     ("X-Ms-Client-Principal-Id", "abc"),
///     ("X-Ms-Token-Aad-Id-Token", "eyJ0eXAi"),
/// ]);
/// let identity = extract(&headers);
///
/// assert_eq!(identity.user_principal_id(), Some("abc"));
/// assert_eq!(identity.auth_token(), identity.aad_id_token());
/// assert!(!format!("{:?}", identity).contains("eyJ0eXAi"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    client_ip: Option<String>,
    user_principal_id: Option<String>,
    user_name: Option<String>,
    auth_provider: Option<String>,
    auth_token: Option<String>,
    client_principal_b64: Option<String>,
    aad_id_token: Option<String>,
}

impl UserIdentity {
    /// Reads every identity field out of a raw header source.
    pub(crate) fn from_raw(raw: &RequestHeaders) -> Self {
        Self {
            client_ip: raw.owned(X_CLIENT_IP),
            user_principal_id: raw.owned(X_MS_CLIENT_PRINCIPAL_ID),
            user_name: raw.owned(X_MS_CLIENT_PRINCIPAL_NAME),
            auth_provider: raw.owned(X_MS_CLIENT_PRINCIPAL_IDP),
            auth_token: raw.owned(X_MS_TOKEN_AAD_ID_TOKEN),
            client_principal_b64: raw.owned(X_MS_CLIENT_PRINCIPAL),
            aad_id_token: raw.owned(X_MS_TOKEN_AAD_ID_TOKEN),
        }
    }

    /// Client address, if known.
    pub fn client_ip(&self) -> Option<&str> {
        self.client_ip.as_deref()
    }

    /// Object id of the signed-in principal.
    pub fn user_principal_id(&self) -> Option<&str> {
        self.user_principal_id.as_deref()
    }

    /// Login or display name.
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Identity provider name, e.g. `aad`.
    pub fn auth_provider(&self) -> Option<&str> {
        self.auth_provider.as_deref()
    }

    /// Raw AAD ID token.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// The base64-encoded client principal, passed through undecoded.
    pub fn client_principal_b64(&self) -> Option<&str> {
        self.client_principal_b64.as_deref()
    }

    /// Raw AAD ID token; same value as [`auth_token`](Self::auth_token).
    pub fn aad_id_token(&self) -> Option<&str> {
        self.aad_id_token.as_deref()
    }

    /// Returns the principal, if a principal id is present.
    ///
    /// The name falls back to the id when no name header was sent.
    pub fn principal(&self) -> Option<Principal> {
        let id = self.user_principal_id.clone()?;
        let name = self.user_name.clone().unwrap_or_else(|| id.clone());
        Some(Principal { id, name })
    }
}

impl fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserIdentity")
            .field("client_ip", &self.client_ip)
            .field("user_principal_id", &self.user_principal_id)
            .field("user_name", &self.user_name)
            .field("auth_provider", &self.auth_provider)
            .field("auth_token", &self.auth_token.as_ref().map(Redacted))
            .field(
                "client_principal_b64",
                &self.client_principal_b64.as_ref().map(Redacted),
            )
            .field("aad_id_token", &self.aad_id_token.as_ref().map(Redacted))
            .finish()
    }
}
