//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated account from a JWT
//!   Bearer token; any valid token grants access to every product
//!   operation (there are no roles).

pub mod auth;
