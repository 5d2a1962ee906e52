//! Route definitions for the extraction service.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Maximum accepted request body size, enforced before any handler runs.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Creates the Axum router with all routes configured.
///
/// Unknown paths and unsupported methods both fall through to the 404
/// handler, so the error surface is exactly {400, 404, 429, 500}.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/extract-action-items",
            post(handlers::extract_action_items),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ServiceConfig;

    #[test]
    fn test_router_construction() {
        let config = ServiceConfig::builder().api_key("test-key").build().unwrap();
        let state = Arc::new(AppState::new(config).unwrap());
        let _router = create_router(state);
    }
}
