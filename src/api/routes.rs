//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::docs::openapi;
use super::handlers::{health, metrics, read_high_score, update_high_score, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Score endpoints
        .route("/high-score", get(read_high_score).post(update_high_score))
        // Observability
        .route("/metrics", get(metrics))
        .route("/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Wide-open CORS. Any origin, method and header; no credentials.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
