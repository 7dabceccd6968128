//! OpenAPI document served on `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers::{self, HealthResponse, HighScoreResponse, ScorePayload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snake Score Service",
        description = "Stores the best score that the browser game reports."
    ),
    paths(handlers::health, handlers::read_high_score, handlers::update_high_score),
    components(schemas(HealthResponse, HighScoreResponse, ScorePayload, ErrorResponse))
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
