/// Domain-level errors shared across the workspace.
///
/// Each variant carries the human-readable message that ultimately goes to
/// the caller; the HTTP layer decides status codes and body shape.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
