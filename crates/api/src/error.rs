//! API error type.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scenario_domain::ScenarioError;
use tracing::warn;

/// Errors returned by API handlers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Malformed request.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Request is well formed but a lever is out of bounds.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Baseline provider failed.
    #[error("Baseline unavailable: {0}")]
    BaselineUnavailable(String),
}

impl ApiError {
    /// HTTP status for the error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BaselineUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Validation(_) => "validation_failed",
            Self::BaselineUnavailable(_) => "baseline_unavailable",
        }
    }
}

impl From<ScenarioError> for ApiError {
    fn from(err: ScenarioError) -> Self {
        match err {
            ScenarioError::OutOfBounds { .. } => Self::Validation(err.to_string()),
            ScenarioError::Baseline(reason) => Self::BaselineUnavailable(reason),
            ScenarioError::NonFinite { .. }
            | ScenarioError::InvalidSweep(_)
            | ScenarioError::UnknownLever(_) => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "request rejected");

        let body = serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scenario_error_mapping() {
        let out_of_bounds = ScenarioError::OutOfBounds {
            lever: "sales_growth_multiplier",
            value: dec!(5),
            min: dec!(0.5),
            max: dec!(2),
        };
        assert_eq!(
            ApiError::from(out_of_bounds).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        assert_eq!(
            ApiError::from(ScenarioError::UnknownLever("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ScenarioError::Baseline("offline".into())).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
