//! Error types for the extraction pipeline.

use thiserror::Error;

use crate::client::CompletionError;

/// Result type alias for the extraction pipeline.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors produced by any stage of the extraction pipeline.
///
/// Every stage returns an explicit variant so callers classify failures by
/// discriminant, never by matching message text.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    /// The `notes` value was absent or not a string.
    #[error("notes must be a string")]
    InvalidType,

    /// The notes were shorter than the minimum after trimming.
    #[error("notes too short: {length} characters after trimming, minimum is {min}")]
    TooShort { length: usize, min: usize },

    /// The notes exceeded the maximum length.
    #[error("notes too long: {length} characters, maximum is {max}")]
    TooLong { length: usize, max: usize },

    /// The completion call failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The completion text was not valid JSON.
    #[error("completion was not valid JSON: {reason}")]
    MalformedJson { reason: String },

    /// The completion parsed as JSON but did not match the expected
    /// `{ "actionItems": [...], "summary": "..." }` shape.
    #[error("completion JSON had an unexpected shape: {reason}")]
    UnexpectedShape { reason: String },
}
