//! Handlers for the product catalog (list, update, delete).
//!
//! Every handler here is gated by [`AuthUser`]; any valid session token
//! grants full access. Failures collapse to a fixed caller-visible message
//! while the cause goes to the log.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use shelf_core::types::DbId;
use shelf_db::models::product::{Product, UpdateProduct};
use shelf_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const FETCH_FAILED: &str = "Failed to fetch products";
const UPDATE_FAILED: &str = "Failed to update product";
const DELETE_FAILED: &str = "Failed to delete product";

/// Deletion acknowledgement returned by `DELETE /products/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// GET /products
///
/// Return every product, unfiltered and unpaginated; search and paging are
/// entirely the client's concern.
pub async fn list_products(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "Product list failed");
        AppError::OperationFailed(FETCH_FAILED)
    })?;

    Ok(Json(products))
}

/// PUT /products/{id}
///
/// Apply the supplied fields to a product and return the post-update row.
/// A non-resolving id and a rejected write are indistinguishable to the
/// caller.
pub async fn update_product(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let updated = ProductRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, product_id = id, "Product update failed");
            AppError::OperationFailed(UPDATE_FAILED)
        })?
        .ok_or(AppError::OperationFailed(UPDATE_FAILED))?;

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(updated))
}

/// DELETE /products/{id}
///
/// Remove a product. Deleting an id that never existed still reports
/// success; "not found" and "already absent" are the same outcome.
pub async fn delete_product(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    let removed = ProductRepo::delete(&state.pool, id).await.map_err(|e| {
        tracing::error!(error = %e, product_id = id, "Product delete failed");
        AppError::OperationFailed(DELETE_FAILED)
    })?;

    tracing::info!(product_id = id, removed, "Product delete handled");

    Ok(Json(DeleteResponse { success: true }))
}
