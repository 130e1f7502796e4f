//! Handlers for registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shelf_core::error::CoreError;
use shelf_db::models::account::CreateAccount;
use shelf_db::repositories::AccountRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register` and `POST /login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Confirmation message returned by `POST /register`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Session token returned by `POST /login`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create an account from a username and password. Only the Argon2id hash
/// of the password is stored. There is no duplicate-username pre-check;
/// a collision with the store's unique index surfaces as the generic
/// failure response.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<Credentials>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let password_hash = hash_password(&input.password, &state.config.hash)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create(
        &state.pool,
        &CreateAccount {
            username: input.username,
            password_hash,
        },
    )
    .await?;

    tracing::info!(
        account_id = account.id,
        username = %account.username,
        "Account registered",
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful. You can now login",
        }),
    ))
}

/// POST /login
///
/// Authenticate with username + password. Returns a session token, good
/// for one hour by default.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<Credentials>,
) -> AppResult<Json<TokenResponse>> {
    // 1. Find the account by username. Absence has its own status,
    //    distinct from a credential mismatch.
    let account = AccountRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound(
                "User not found. Please register.".into(),
            ))
        })?;

    // 2. Verify the password against the stored hash.
    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    // 3. Issue the session token.
    let token = generate_token(account.id, &account.username, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::debug!(account_id = account.id, "Login succeeded");

    Ok(Json(TokenResponse { token }))
}
