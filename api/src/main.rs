/// VideoGrab API Server
///
/// REST API for the VideoGrab client. Resolves pasted video URLs into
/// sample metadata records and tracks simulated download sessions.
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use videograb_api::{create_router, AppState};
use videograb_shared::resolver::DEFAULT_LOOKUP_DELAY;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "videograb_api=info,videograb_shared=info,tower_http=info".into()),
        )
        .init();

    // Config
    let api_host = std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let api_port: u16 = std::env::var("API_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);
    let lookup_delay = std::env::var("LOOKUP_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_LOOKUP_DELAY);

    // App state
    let state = Arc::new(AppState::new(lookup_delay));

    // Router
    let app = create_router(state);

    // Bind
    let addr = format!("{}:{}", api_host, api_port);
    info!("VideoGrab API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
