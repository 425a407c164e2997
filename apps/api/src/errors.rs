use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::brand::service::BrandError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Extraction(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a service failure with the name of the operation that produced it,
    /// e.g. `"Error during analysis: LLM returned empty content"`.
    pub fn during(operation: &str, err: BrandError) -> Self {
        let message = format!("Error during {operation}: {err}");
        match err {
            BrandError::Extraction(_) => AppError::Extraction(message),
            BrandError::Upstream(_) => AppError::Upstream(message),
            BrandError::Encode(e) => AppError::Internal(anyhow::Error::new(e).context(message)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(msg) => {
                tracing::error!("Extraction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTRACTION_ERROR",
                    msg.clone(),
                )
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::extract::ExtractionError;
    use crate::llm_client::LlmError;

    #[test]
    fn test_during_embeds_operation_and_cause() {
        let err = AppError::during("analysis", BrandError::Extraction(ExtractionError::NoJsonFound));
        assert_eq!(
            err.to_string(),
            "Error during analysis: No valid JSON object found in the model's response"
        );
        assert!(matches!(err, AppError::Extraction(_)));
    }

    #[test]
    fn test_upstream_failure_maps_to_500() {
        let err = AppError::during(
            "content generation",
            BrandError::Upstream(LlmError::EmptyContent),
        );
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Validation("brand_text cannot be empty".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
