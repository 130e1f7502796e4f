pub mod auth;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// POST /register       register (public)
/// POST /login          login (public)
///
/// GET    /products         list products (requires auth)
/// PUT    /products/{id}    update product (requires auth)
/// DELETE /products/{id}    delete product (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration and login (public).
        .merge(auth::router())
        // Product catalog (bearer token required).
        .nest("/products", products::router())
}
