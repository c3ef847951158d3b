//! HTTP client for the nibble-api server

use nibble_core::{FoodIdea, IdeaDraft, IdeaId, IdeaPatch};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:4000";

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure: the request never produced a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Thin client over the four food-idea endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds a client from `NIBBLE_API_BASE_URL`, falling back to the
    /// local default server address.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("NIBBLE_API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Builds a client for an explicit API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full record list (unfiltered; filtering is client-side)
    pub async fn list(&self) -> Result<Vec<FoodIdea>, ApiError> {
        let response = self
            .http
            .get(format!("{}/food-ideas", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Submit a new record; the server assigns the id
    pub async fn create(&self, draft: &IdeaDraft) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/food-ideas", self.base_url))
            .json(draft)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Replace the supplied fields of an existing record
    pub async fn update(&self, id: IdeaId, patch: &IdeaPatch) -> Result<(), ApiError> {
        let response = self
            .http
            .put(format!("{}/food-ideas/{id}", self.base_url))
            .json(patch)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Permanently remove a record
    pub async fn delete(&self, id: IdeaId) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/food-ideas/{id}", self.base_url))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}
