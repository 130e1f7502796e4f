use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// All configuration lives here explicitly; there are no process-wide globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shelf_db::DbPool,
    /// Server configuration, including the JWT and hashing settings.
    pub config: Arc<ServerConfig>,
}
