use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shelf_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the wire contract's two body
/// shapes: auth-flavored errors carry `{"message"}`, product operation
/// failures carry `{"error"}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A product operation that failed for any reason. The message is the
    /// fixed, caller-visible text; the cause is logged where it happened.
    #[error("{0}")]
    OperationFailed(&'static str),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants: distinct statuses, {"message"} body ---
            AppError::Core(core) => match core {
                CoreError::NotFound(msg) => {
                    (StatusCode::NOT_FOUND, json!({ "message": msg }))
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, json!({ "message": msg }))
                }
                CoreError::Forbidden(msg) => {
                    (StatusCode::FORBIDDEN, json!({ "message": msg }))
                }
            },

            // --- Store errors: log the detail, return a fixed message ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Something went wrong" }),
                )
            }

            // --- Product operation failures: {"error"} body ---
            AppError::OperationFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }

            // --- Everything else: log the detail, return a fixed message ---
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Something went wrong" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
