/// VideoGrab API server library.
///
/// Exposes the shared state and router constructor so integration tests
/// can drive the API without binding a socket.
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use videograb_shared::resolver::Resolver;
use videograb_shared::session::SessionStore;

/// Shared application state for all API handlers.
pub struct AppState {
    pub resolver: Resolver,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(lookup_delay: Duration) -> Self {
        Self {
            resolver: Resolver::new(lookup_delay),
            sessions: SessionStore::new(),
        }
    }
}

/// Build the full application router with CORS applied.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/parse-url", post(routes::parse_url))
        .route("/api/download", post(routes::start_download))
        .route("/api/download/:id/status", get(routes::download_status))
        .layer(cors)
        .with_state(state)
}
