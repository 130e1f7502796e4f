//! Shared primitives for the shelf workspace.
//!
//! - [`types`] -- database id and timestamp aliases.
//! - [`error`] -- the domain-level [`error::CoreError`] enum.

pub mod error;
pub mod types;
