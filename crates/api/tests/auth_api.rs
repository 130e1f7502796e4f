//! HTTP-level integration tests for registration and login.
//!
//! Tests cover the register flow, the login flow, and the exact status codes
//! and body messages the endpoints commit to.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use shelf_api::auth::jwt::validate_token;
use shelf_db::repositories::AccountRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register an account via the API and assert it succeeded.
async fn register_user(app: axum::Router, username: &str, password: &str) {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Log in via the API and return the JSON response containing `token`.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Registration tests
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with the fixed confirmation message
/// and stores an Argon2id hash, never the plaintext password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "username": "newcomer", "password": "hunter2hunter2" });
    let response = post_json(app, "/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Registration successful. You can now login");

    let account = AccountRepo::find_by_username(&pool, "newcomer")
        .await
        .expect("lookup should succeed")
        .expect("account should exist after registration");
    assert!(
        account.password_hash.starts_with("$argon2id$"),
        "stored credential must be an Argon2id hash"
    );
    assert_ne!(account.password_hash, "hunter2hunter2");
}

/// Registering a username that already exists returns the generic 500 and
/// leaves exactly one stored account.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_registration_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "twice", "first-password").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "twice", "password": "second-password" });
    let response = post_json(app, "/register", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Something went wrong");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE username = $1")
        .bind("twice")
        .fetch_one(&pool)
        .await
        .expect("count should succeed");
    assert_eq!(count, 1, "the first registration must remain the only row");
}

// ---------------------------------------------------------------------------
// Login tests
// ---------------------------------------------------------------------------

/// Register-then-login round trip returns a token carrying the account's
/// id and username.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_then_login(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "shopkeeper", "swordfish-123").await;

    let app = common::build_test_app(pool.clone());
    let json = login_user(app, "shopkeeper", "swordfish-123").await;

    let token = json["token"].as_str().expect("response must contain token");

    let config = common::test_config();
    let claims = validate_token(token, &config.jwt).expect("issued token must validate");
    assert_eq!(claims.username, "shopkeeper");
    assert_eq!(claims.exp, claims.iat + 3600);

    let account = AccountRepo::find_by_username(&pool, "shopkeeper")
        .await
        .expect("lookup should succeed")
        .expect("account should exist");
    assert_eq!(claims.sub, account.id);
}

/// Login with a username nobody registered returns 404 with a hint to
/// register first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User not found. Please register.");
}

/// Login with the wrong password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "careful", "the-real-password").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "careful", "password": "not-the-password" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid credentials");
}

/// Usernames are matched exactly; a different casing is a different user.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_username_is_case_sensitive(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app, "Casey", "some-password").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "casey", "password": "some-password" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
