use std::fmt;

use crate::headers::is_sensitive;
use crate::request::RequestHeaders;

const REDACTED: &str = "[REDACTED]";

/// Formats as `[REDACTED]` regardless of the wrapped value.
///
/// Used when printing identities and header maps so that bearer material
/// (ID tokens, the encoded client principal) never reaches a log line.
///
/// # Examples
///
/// ```
/// use easyauth_identity::Redacted;
///
/// let token = "eyJhbGciOi...";
/// assert_eq!(format!("{:?}", Redacted(&token)), "[REDACTED]");
/// assert_eq!(format!("{}", Redacted(&token)), "[REDACTED]");
/// ```
// Do NOT add Deref or AsRef: the wrapped value must only be reachable
// through the field, which is never formatted.
pub struct Redacted<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> fmt::Debug for Redacted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: ?Sized> fmt::Display for Redacted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Debug view of a header map with credential-bearing values masked.
///
/// Entries are printed sorted by name so log output is stable.
pub(crate) struct HeaderDump<'a>(pub &'a RequestHeaders);

impl fmt::Debug for HeaderDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_unstable_by_key(|(name, _)| *name);

        let mut map = f.debug_map();
        for (name, value) in entries {
            if is_sensitive(name) {
                map.entry(&name, &Redacted(value));
            } else {
                map.entry(&name, &value);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_hides_debug_and_display() {
        let token = "secret-token".to_string();

        let debug_output = format!("{:?}", Redacted(&token));
        let display_output = format!("{}", Redacted(&token));

        assert_eq!(debug_output, "[REDACTED]");
        assert_eq!(display_output, "[REDACTED]");
        assert!(!debug_output.contains("String")); // No type leak
    }

    #[test]
    fn header_dump_masks_tokens_only() {
        let headers = RequestHeaders::from_iter([
            ("X-Ms-Client-Principal-Name", "alice@contoso.com"),
            ("X-Ms-Token-Aad-Id-Token", "eyJ0eXAi.secret"),
            ("X-Ms-Client-Principal", "eyJhdXRoX3R5cCI6"),
        ]);

        let dump = format!("{:?}", HeaderDump(&headers));

        assert!(dump.contains("alice@contoso.com"));
        assert!(!dump.contains("eyJ0eXAi.secret"));
        assert!(!dump.contains("eyJhdXRoX3R5cCI6"));
        assert!(dump.contains("[REDACTED]"));
    }

    #[test]
    fn header_dump_masks_lowercase_token_headers() {
        let headers = RequestHeaders::from_iter([
            ("x-ms-token-aad-id-token", "SECRET_TOKEN"),
            ("x-ms-client-principal", "SECRET_PRINCIPAL"),
        ]);

        let dump = format!("{:?}", HeaderDump(&headers));

        assert!(!dump.contains("SECRET_TOKEN"));
        assert!(!dump.contains("SECRET_PRINCIPAL"));
        assert_eq!(
            dump,
            r#"{"x-ms-client-principal": [REDACTED], "x-ms-token-aad-id-token": [REDACTED]}"#
        );
    }

    #[test]
    fn header_dump_is_sorted() {
        let headers = RequestHeaders::from_iter([("B", "2"), ("A", "1")]);

        assert_eq!(format!("{:?}", HeaderDump(&headers)), r#"{"A": "1", "B": "2"}"#);
    }
}
