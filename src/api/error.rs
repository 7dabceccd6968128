//! HTTP-facing errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;
use utoipa::ToSchema;

use crate::error::ScoreError;

/// Error returned by API handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request was well-formed but the value is not acceptable.
    #[error("{0}")]
    InvalidInput(String),

    /// Request body could not be parsed.
    #[error("{message}")]
    MalformedBody {
        /// Status chosen by the extractor.
        status: StatusCode,
        /// Parser message.
        message: String,
    },

    /// Metrics exporter is not installed.
    #[error("metrics are disabled")]
    MetricsUnavailable,
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error detail.
    pub detail: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody { status, .. } => *status,
            ApiError::MetricsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<ScoreError> for ApiError {
    fn from(err: ScoreError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        let status = match err.classify() {
            Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
            Category::Syntax | Category::Eof | Category::Io => StatusCode::BAD_REQUEST,
        };

        ApiError::MalformedBody {
            status,
            message: format!("Failed to parse the request body as JSON: {err}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_score_maps_to_bad_request() {
        let err = ApiError::from(ScoreError::Negative { score: -1 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Score must be 0 or higher.");
    }

    #[test]
    fn malformed_body_keeps_extractor_status() {
        let err = ApiError::MalformedBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `score`".to_string(),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn json_errors_map_by_category() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);

        #[derive(Debug, serde::Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            score: i64,
        }
        let err = serde_json::from_str::<Payload>(r#"{"points": 1}"#).unwrap_err();
        assert_eq!(ApiError::from(err).status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
