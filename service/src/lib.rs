//! # Extraction Service
//!
//! HTTP shell around the [`extraction`] pipeline: accepts free-text meeting
//! notes and returns structured action items plus a one-sentence summary.
//!
//! ## Endpoints
//!
//! - `POST /api/extract-action-items` - body `{ "notes": <string> }`,
//!   returns `{ "actionItems": [...], "summary": "..." }`
//! - `GET /health` - liveness probe with the current server time
//! - anything else - 404 `{ "error": "Endpoint not found" }`
//!
//! ## Configuration
//!
//! Read once at startup from the environment: `OPENAI_API_KEY` (required),
//! `OPENAI_MODEL`, `OPENAI_BASE_URL`, `HOST`, `PORT`,
//! `REQUEST_TIMEOUT_SECS`. A missing credential is fatal before the server
//! binds.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ServiceError;
pub use state::{AppState, ServiceConfig};
