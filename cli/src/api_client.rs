/// HTTP client for the VideoGrab API.
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use videograb_shared::models::{
    DownloadProgress, DownloadRequest, StartDownloadResponse, VideoInfo,
};

/// Client-side view of an API failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success response; carries the server's `error` message.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Transport-level failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// POST /api/parse-url
    pub async fn parse_url(&self, url: &str) -> Result<VideoInfo, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/parse-url", self.base_url))
            .json(&json!({ "url": url }))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// POST /api/download
    pub async fn start_download(&self, request: &DownloadRequest) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/download", self.base_url))
            .json(request)
            .send()
            .await?;
        let body: StartDownloadResponse = Self::read_json(response).await?;
        Ok(body.download_id)
    }

    /// GET /api/download/:id/status
    pub async fn status(&self, id: &str) -> Result<DownloadProgress, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/download/{}/status", self.base_url, id))
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| format!("request failed with status {}", status));
        debug!("API error {}: {}", status, message);
        Err(ApiError::Api { status, message })
    }
}
