/// API route handlers for the VideoGrab server.
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use videograb_shared::errors::ResolveError;
use videograb_shared::models::{
    DownloadProgress, DownloadRequest, ParseUrlRequest, StartDownloadResponse, ValidationIssue,
    VideoInfo,
};

use crate::AppState;

// ====== RESPONSE TYPES ======

/// Error response body; `details` is present only for validation failures.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationIssue>>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: Vec<ValidationIssue>) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}

const UNSUPPORTED_PLATFORM_MESSAGE: &str =
    "Unsupported platform. We support YouTube, Vimeo, Dailymotion, Facebook, and Twitter.";

// ====== HEALTH ROUTE ======

/// GET /health - liveness probe
pub async fn health() -> &'static str {
    "OK"
}

// ====== PARSE URL ROUTE ======

/// POST /api/parse-url - Resolve a pasted URL into its metadata record
pub async fn parse_url(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<VideoInfo>, (StatusCode, Json<ErrorResponse>)> {
    let request = ParseUrlRequest::from_json(&body).map_err(|issues| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_details("Invalid URL format", issues)),
        )
    })?;

    match state.resolver.resolve(&request.url).await {
        Ok(info) => {
            info!("Resolved {} as {} ({})", request.url, info.platform, info.id);
            Ok(Json(info))
        }
        Err(ResolveError::InvalidUrl(issues)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_details("Invalid URL format", issues)),
        )),
        Err(ResolveError::UnsupportedPlatform) => {
            warn!("Unsupported platform for {}", request.url);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(UNSUPPORTED_PLATFORM_MESSAGE)),
            ))
        }
        Err(ResolveError::RecordMissing) => {
            // Unreachable with the shipped catalog, handled regardless.
            warn!("No catalog record for {}", request.url);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Video not found")),
            ))
        }
    }
}

// ====== DOWNLOAD ROUTES ======

/// POST /api/download - Allocate a download session
pub async fn start_download(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<StartDownloadResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = DownloadRequest::from_json(&body).map_err(|issues| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_details("Invalid download request", issues)),
        )
    })?;

    let download_id = state.sessions.start(&request).await;
    Ok(Json(StartDownloadResponse { download_id }))
}

/// GET /api/download/:id/status - Read a session's stored record
pub async fn download_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DownloadProgress>, (StatusCode, Json<ErrorResponse>)> {
    match state.sessions.status(&id).await {
        Some(progress) => Ok(Json(progress)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Download not found")),
        )),
    }
}
