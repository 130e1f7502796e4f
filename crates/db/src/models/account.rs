//! Account entity model and DTOs.

use shelf_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- this struct is deliberately not
/// serializable; nothing account-shaped ever leaves the API.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new account at registration.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub password_hash: String,
}
