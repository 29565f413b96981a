//! User identity extraction from EasyAuth-style proxy headers.
//!
//! A managed authentication proxy validates the caller's token and forwards
//! the result as request headers. This crate turns those headers into a
//! normalized [`UserIdentity`]:
//! - **Proxy mode**: `X-Ms-Client-Principal-Id` is present, fields are read
//!   from the request
//! - **Development mode**: no proxy in front of the service, fields are read
//!   from a fallback identity (the [`sample`] user by default)
//!
//! Extraction never fails. Whether a missing principal id is an error is up
//! to the caller; [`web::extract_authed`] is one such policy.
//!
//! # Core Types
//!
//! - [`RequestHeaders`]: Case-sensitive header map supplied by the HTTP layer
//! - [`UserIdentity`]: The seven-field identity record
//! - [`IdentityExtractor`]: Configurable extractor (fallback identity, proxy requirement)
//! - [`Redacted`]: Formatter that hides credential values
//!
//! # Examples
//!
//! ```
//! use easyauth_identity::{extract, RequestHeaders};
//!
//! let headers = RequestHeaders::from_iter([
//!     ("X-Ms-Client-Principal-Id", "abc"),
//!     ("X-Ms-Client-Principal-Name", "alice"),
//! ]);
//!
//! let identity = extract(&headers);
//! assert_eq!(identity.user_principal_id(), Some("abc"));
//! assert_eq!(identity.user_name(), Some("alice"));
//! assert_eq!(identity.client_ip(), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod extractor;
pub mod headers;
mod identity;
mod redact;
mod request;
pub mod sample;
pub mod web;

pub use error::{Violation, ViolationKind};
pub use extractor::{extract, IdentityExtractor, IdentitySource};
pub use identity::UserIdentity;
pub use redact::Redacted;
pub use request::{Principal, RequestHeaders};
