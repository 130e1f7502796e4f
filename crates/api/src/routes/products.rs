//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`. All of them require a bearer token.
///
/// ```text
/// GET    /            -> list_products
/// PUT    /{id}        -> update_product
/// DELETE /{id}        -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list_products))
        .route(
            "/{id}",
            axum::routing::put(products::update_product).delete(products::delete_product),
        )
}
