use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a004_part_detection::aggregate::ProbThresholdError;
use serde_json::json;
use thiserror::Error;

/// Ошибки HTTP API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    ProbThreshold(#[from] ProbThresholdError),

    #[error("Part detection {0} has no camera configured")]
    ConfigureWithoutCamera(i64),

    #[error("Part detection {0} has no parts configured")]
    ConfigureWithoutParts(i64),
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ApiError::NotFound(what.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_)
            | ApiError::ProbThreshold(_)
            | ApiError::ConfigureWithoutCamera(_)
            | ApiError::ConfigureWithoutParts(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!("{} -> {}", self, status);
        (
            status,
            Json(json!({ "status": "failed", "log": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::not_found("Camera 3").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ProbThresholdError::NotInteger).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("Camera 3").to_string(), "Camera 3 not found");
    }
}
