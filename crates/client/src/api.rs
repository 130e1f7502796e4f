//! REST API client for the shelf backend.
//!
//! Wraps the backend HTTP API (register, login, product list/update/delete)
//! using [`reqwest`]. On protected endpoints a 401 or 403 response is
//! collapsed into [`ClientError::SessionExpired`] so the caller can drop
//! the session.

use serde::{Deserialize, Serialize};
use shelf_core::types::DbId;

/// HTTP client for a single shelf backend.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// A product as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProduct {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Update payload for `PUT /products/{id}`. Absent fields keep their
/// stored value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// Errors from the client layers.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A protected endpoint rejected the bearer token.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// The backend returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the raw body.
        message: String,
    },

    /// A command needs a session and there is none.
    #[error("Please login first")]
    NotLoggedIn,

    /// The referenced product is not in the fetched list.
    #[error("No product with id {0} in the current list")]
    UnknownProduct(DbId),

    /// A save was requested with no edit in progress.
    #[error("Nothing is being edited")]
    NoDraft,

    /// The edit draft could not be parsed into an update.
    #[error(transparent)]
    Draft(#[from] crate::table::DraftError),
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Debug, Deserialize)]
struct DeleteBody {
    success: bool,
}

impl ApiClient {
    /// Create a new API client for a backend instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Register a new account. Returns the backend's confirmation message.
    pub async fn register(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(&body)
            .send()
            .await?;

        let body: MessageBody = Self::parse_response(response).await?;
        Ok(body.message)
    }

    /// Log in and return the issued bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(&body)
            .send()
            .await?;

        let body: TokenBody = Self::parse_response(response).await?;
        Ok(body.token)
    }

    /// Fetch the full product list.
    pub async fn list_products(&self, token: &str) -> Result<Vec<ClientProduct>, ClientError> {
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .bearer_auth(token)
            .send()
            .await?;

        Self::parse_authed(response).await
    }

    /// Apply an update and return the post-update product.
    pub async fn update_product(
        &self,
        token: &str,
        id: DbId,
        patch: &ProductPatch,
    ) -> Result<ClientProduct, ClientError> {
        let response = self
            .client
            .put(format!("{}/products/{}", self.base_url, id))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;

        Self::parse_authed(response).await
    }

    /// Delete a product. Returns the backend's success flag.
    pub async fn delete_product(&self, token: &str, id: DbId) -> Result<bool, ClientError> {
        let response = self
            .client
            .delete(format!("{}/products/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await?;

        let body: DeleteBody = Self::parse_authed(response).await?;
        Ok(body.success)
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ClientError::Api`], pulling the
    /// human-readable message out of either error body shape.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);
        ClientError::Api { status, message }
    }

    /// Ensure a public-endpoint response has a success status code.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response)
    }

    /// Ensure a protected-endpoint response has a success status code,
    /// mapping 401 and 403 to [`ClientError::SessionExpired`].
    async fn ensure_authed(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ClientError::SessionExpired);
        }
        if !status.is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(response)
    }

    /// Parse a successful public-endpoint JSON response body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Parse a successful protected-endpoint JSON response body.
    async fn parse_authed<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_authed(response).await?;
        Ok(response.json::<T>().await?)
    }
}
