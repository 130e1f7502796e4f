//! CLI subcommand implementations.
//!
//! - [`migrate`] applies the embedded database migrations.
//! - [`seed`] resets the catalog to randomized sample data.

pub mod migrate;
pub mod seed;
