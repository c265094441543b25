//! Integration tests for the VideoGrab API.
//!
//! Drives the router directly with a zero lookup delay and asserts the
//! exact wire contract of each endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use videograb_api::{create_router, AppState};

fn test_app() -> Router {
    create_router(Arc::new(AppState::new(Duration::ZERO)))
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let response = test_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn parse_url_returns_youtube_record() {
    let response = test_app()
        .oneshot(post_json(
            "/api/parse-url",
            &json!({ "url": "https://www.youtube.com/watch?v=abc" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["platform"], "YouTube");
    assert_eq!(body["title"], "Amazing Nature Documentary - 4K Ultra HD");
    assert_eq!(body["availableFormats"], json!(["mp4", "webm", "mp3"]));
    assert_eq!(body["availableQualities"], json!(["1080p", "720p", "480p", "360p"]));
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn parse_url_rejects_malformed_url() {
    let response = test_app()
        .oneshot(post_json("/api/parse-url", &json!({ "url": "not-a-url" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid URL format");
    assert!(!body["details"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn parse_url_requires_url_field() {
    let response = test_app()
        .oneshot(post_json("/api/parse-url", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid URL format");
}

#[tokio::test]
async fn parse_url_rejects_unknown_platform() {
    let response = test_app()
        .oneshot(post_json(
            "/api/parse-url",
            &json!({ "url": "https://unknownsite.example/video" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Unsupported platform"));
}

#[tokio::test]
async fn parse_url_mints_fresh_ids_per_call() {
    let app = test_app();
    let request = json!({ "url": "https://vimeo.com/12345" });

    let first = body_json(
        app.clone()
            .oneshot(post_json("/api/parse-url", &request))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(post_json("/api/parse-url", &request)).await.unwrap(),
    )
    .await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["title"], second["title"]);
    assert_eq!(first["thumbnail"], second["thumbnail"]);
    assert_eq!(first["channel"], second["channel"]);
}

#[tokio::test]
async fn parse_url_detection_is_case_insensitive() {
    let response = test_app()
        .oneshot(post_json(
            "/api/parse-url",
            &json!({ "url": "https://YOUTU.BE/dQw4w9WgXcQ" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["platform"], "YouTube");
}

#[tokio::test]
async fn download_returns_session_id() {
    let response = test_app()
        .oneshot(post_json(
            "/api/download",
            &json!({
                "url": "https://www.youtube.com/watch?v=abc",
                "format": "mp4",
                "quality": "1080p",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(!body["downloadId"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn download_rejects_unknown_format() {
    let response = test_app()
        .oneshot(post_json(
            "/api/download",
            &json!({
                "url": "https://www.youtube.com/watch?v=abc",
                "format": "avi",
                "quality": "1080p",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid download request");
    assert_eq!(body["details"][0]["field"], "format");
}

#[tokio::test]
async fn download_rejects_unknown_quality() {
    let response = test_app()
        .oneshot(post_json(
            "/api/download",
            &json!({
                "url": "https://www.youtube.com/watch?v=abc",
                "format": "mp4",
                "quality": "240p",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid download request");
    assert_eq!(body["details"][0]["field"], "quality");
}

#[tokio::test]
async fn download_rejects_malformed_url() {
    let response = test_app()
        .oneshot(post_json(
            "/api/download",
            &json!({ "url": "not-a-url", "format": "mp4", "quality": "720p" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["details"][0]["field"], "url");
}

#[tokio::test]
async fn download_status_returns_initial_record() {
    let app = test_app();

    let started = body_json(
        app.clone()
            .oneshot(post_json(
                "/api/download",
                &json!({
                    "url": "https://www.youtube.com/watch?v=abc",
                    "format": "webm",
                    "quality": "720p",
                }),
            ))
            .await
            .unwrap(),
    )
    .await;
    let download_id = started["downloadId"].as_str().unwrap();

    let response = app
        .oneshot(get(&format!("/api/download/{}/status", download_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], download_id);
    assert_eq!(body["status"], "preparing");
    assert_eq!(body["progress"], 0);
    assert_eq!(body["message"], "Preparing download...");
    // Optionals are omitted, not null.
    let keys = body.as_object().unwrap();
    assert!(!keys.contains_key("downloadUrl"));
    assert!(!keys.contains_key("fileSize"));
}

#[tokio::test]
async fn download_status_unknown_id_returns_404() {
    let response = test_app()
        .oneshot(get("/api/download/no-such-session/status"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Download not found");
}
