//! URL-safe Base64 (RFC 4648 §5) without padding.
//!
//! [`encode`] and [`decode`] fail with a [`CodecError`] on bad input, while
//! [`validate`] never fails and can be used as a cheap pre-check before
//! decoding.

pub mod codec;
pub mod error;
pub mod serde_base64url;

pub use codec::{decode, encode, validate, Validation};
pub use error::CodecError;
pub use serde_base64url::Base64UrlBytes;
