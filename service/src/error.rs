//! Error types and failure classification for the HTTP service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use extraction::{CompletionError, ExtractionError};

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur in the extraction service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A pipeline stage failed; classified per variant below.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Configuration error (startup-time only).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Server startup error.
    #[error("Server error: {0}")]
    Server(String),
}

/// Error response body for HTTP endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps a pipeline failure onto a user-facing status and message.
///
/// Classification switches on the error discriminant, never on message
/// text. Validation faults carry the specific rule that failed so callers
/// can correct their input; server-side faults stay generic and never echo
/// provider text or credential details.
fn classify(error: &ExtractionError) -> (StatusCode, String) {
    match error {
        ExtractionError::InvalidType
        | ExtractionError::TooShort { .. }
        | ExtractionError::TooLong { .. } => (StatusCode::BAD_REQUEST, error.to_string()),
        ExtractionError::Completion(CompletionError::Auth) => {
            tracing::error!("Provider rejected the configured API key");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "API configuration error".to_string(),
            )
        }
        ExtractionError::Completion(CompletionError::RateLimited { retry_after_secs }) => {
            tracing::warn!(?retry_after_secs, "Provider rate limit hit");
            (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests, please try again shortly".to_string(),
            )
        }
        ExtractionError::Completion(e) => {
            tracing::error!(error = %e, "Completion call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process meeting notes".to_string(),
            )
        }
        ExtractionError::MalformedJson { reason } | ExtractionError::UnexpectedShape { reason } => {
            tracing::error!(%reason, "Completion did not normalize");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process meeting notes".to_string(),
            )
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Extraction(e) => classify(e),
            Self::Configuration(msg) => {
                tracing::error!(message = %msg, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "API configuration error".to_string(),
                )
            }
            Self::Server(msg) => {
                tracing::error!(message = %msg, "Server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process meeting notes".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
