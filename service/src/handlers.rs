//! HTTP request handlers for the extraction service.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use extraction::ExtractionResult;

use crate::error::{ErrorResponse, Result};
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// GET /health
///
/// Liveness probe with the current server time. No side effects.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}

/// POST /api/extract-action-items
///
/// Takes `{ "notes": <string> }` and returns the normalized extraction
/// result. The body is read as a raw JSON value so the validator, not the
/// deserializer, decides how a missing or mistyped `notes` field is
/// reported.
pub async fn extract_action_items(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<ExtractionResult>> {
    let result = state.extractor.extract(body.get("notes")).await?;

    tracing::info!(
        item_count = result.action_items.len(),
        "Extracted action items"
    );

    Ok(Json(result))
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Endpoint not found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok_with_timestamp() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed["status"], "ok");
        // RFC 3339 timestamps parse back.
        let timestamp = parsed["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_not_found_body_shape() {
        let response = not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed["error"], "Endpoint not found");
    }
}
