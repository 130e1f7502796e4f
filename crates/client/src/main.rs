//! `shelf` -- terminal client for the shelf catalog backend.
//!
//! Logs in against the backend, keeps the full product list in memory,
//! and offers search, pagination, editing, and deletion over it. A
//! persisted token resumes the previous session on startup.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default                 | Description                |
//! |--------------------|----------|-------------------------|----------------------------|
//! | `SHELF_API_URL`    | no       | `http://localhost:5000` | Backend base URL           |
//! | `SHELF_TOKEN_FILE` | no       | `.shelf_token`          | Where the token is stored  |

use shelf_client::api::ApiClient;
use shelf_client::app::CatalogApp;
use shelf_client::repl;
use shelf_client::store::TokenStore;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default backend base URL.
const DEFAULT_API_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = std::env::var("SHELF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

    let api = ApiClient::new(api_url.clone());
    let store = TokenStore::from_env();
    let mut app = CatalogApp::new(api, store);

    tracing::debug!(api_url = %api_url, "Starting shelf client");

    // A stored token from a previous run resumes the session; a rejected
    // or missing token just lands at the login prompt.
    if let Err(e) = app.try_resume().await {
        println!("Could not reach the backend at {api_url}: {e}");
    }

    repl::run(&mut app).await;
}
