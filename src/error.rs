use std::fmt;

use thiserror::Error;

/// A rejected request, with details about what was missing.
///
/// Only produced by [`web::extract_authed`](crate::web::extract_authed).
/// Identity extraction itself never fails.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The kind of violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// No principal id was available
    Unauthenticated,
    /// The request did not come through the authentication proxy, and the
    /// extractor was configured to require it
    ProxyRequired,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Unauthenticated => write!(f, "Unauthenticated"),
            ViolationKind::ProxyRequired => write!(f, "Proxy required"),
        }
    }
}
