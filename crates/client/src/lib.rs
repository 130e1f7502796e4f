//! Shelf catalog client library.
//!
//! Splits the terminal client into testable layers: the HTTP API wrapper
//! ([`api`]), token persistence ([`store`]), the in-memory table view with
//! search, pagination, and edit drafts ([`table`]), the session state
//! machine ([`app`]), and the command loop ([`repl`]).

pub mod api;
pub mod app;
pub mod repl;
pub mod store;
pub mod table;
