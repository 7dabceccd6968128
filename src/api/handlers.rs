//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{ApiError, ErrorResponse};
use crate::store::ScoreStore;

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// The high score store.
    pub store: Arc<ScoreStore>,
    /// Prometheus handle, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state around an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Current high score.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreResponse {
    /// Best score recorded so far.
    pub high_score: u64,
}

/// Payload used when the game reports a score.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScorePayload {
    /// Score reached in the finished game.
    pub score: i64,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Return the best score recorded so far.
#[utoipa::path(
    get,
    path = "/high-score",
    responses((status = 200, description = "Current high score", body = HighScoreResponse))
)]
pub async fn read_high_score(State(state): State<AppState>) -> Json<HighScoreResponse> {
    Json(HighScoreResponse {
        high_score: state.store.get(),
    })
}

/// Record a score, keeping it only if it beats the current record.
#[utoipa::path(
    post,
    path = "/high-score",
    request_body = ScorePayload,
    responses(
        (status = 200, description = "High score after the submission", body = HighScoreResponse),
        (status = 400, description = "Score is negative", body = ErrorResponse),
        (status = 415, description = "Content type is not JSON", body = ErrorResponse),
        (status = 422, description = "Body is not a valid score payload", body = ErrorResponse)
    )
)]
pub async fn update_high_score(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<HighScoreResponse>, ApiError> {
    let payload = parse_score_payload(&headers, &body)?;
    let submission = state.store.submit(payload.score)?;

    Ok(Json(HighScoreResponse {
        high_score: submission.high_score,
    }))
}

/// Decode a score payload. A body without `Content-Type` is read as JSON;
/// any other declared type must be `application/json` or `application/*+json`.
fn parse_score_payload(headers: &HeaderMap, body: &[u8]) -> Result<ScorePayload, ApiError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let is_json = content_type
            .to_str()
            .map(is_json_content_type)
            .unwrap_or(false);

        if !is_json {
            return Err(ApiError::MalformedBody {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: "Expected request with `Content-Type: application/json`".to_string(),
            });
        }
    }

    Ok(serde_json::from_slice(body)?)
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Prometheus metrics in text exposition format.
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let handle = state.metrics.as_ref().ok_or(ApiError::MetricsUnavailable)?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}
