//! Web framework integration surface.
//!
//! This module is the boundary between HTTP frameworks and identity
//! extraction. It handles:
//! - Collecting request headers into [`RequestHeaders`](crate::RequestHeaders)
//! - Producing a [`UserIdentity`](crate::UserIdentity) for every request
//! - Optionally insisting on an authenticated principal
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: Framework-specific code implements
//!    [`ExtractHeaders`]; nothing here names a framework type.
//!
//! 2. **No Token Validation**: The proxy has already validated the caller.
//!    Headers are trusted as delivered.
//!
//! 3. **Explicit Configuration**: The [`IdentityExtractor`](crate::IdentityExtractor)
//!    is passed in by the caller. There is no global state.
//!
//! # Example Flow
//!
//! ```
//! use std::collections::HashMap;
//! use easyauth_identity::IdentityExtractor;
//! use easyauth_identity::web::{extract_authed, extract_identity};
//!
//! let mut request: HashMap<String, String> = HashMap::new();
//! request.insert("X-Ms-Client-Principal-Id".into(), "abc".into());
//! request.insert("X-Ms-Client-Principal-Name".into(), "alice".into());
//!
//! let extractor = IdentityExtractor::new().require_proxy(true);
//!
//! // Public endpoints only need the identity record.
//! let identity = extract_identity(&request, &extractor);
//! assert_eq!(identity.user_name(), Some("alice"));
//!
//! // Protected endpoints want a principal or a 401.
//! let authed = extract_authed(&request, &extractor).expect("principal present");
//! assert_eq!(authed.principal.id, "abc");
//! ```

mod extract;
mod middleware;

pub use extract::ExtractHeaders;
pub use middleware::{extract_authed, extract_identity, AuthenticatedIdentity};
