//! # Extraction
//!
//! Core pipeline turning free-text meeting notes into a structured list of
//! action items plus a one-sentence summary, by way of a single LLM
//! completion call.
//!
//! ## Pipeline
//!
//! ```text
//! notes ──► validate ──► build prompt ──► completion call ──► normalize ──► result
//! ```
//!
//! The completion provider is behind the [`CompletionClient`] trait and the
//! id stamp behind the [`Clock`] trait, so the whole pipeline runs under
//! test with a mock provider and a pinned timestamp. Every stage reports
//! failure through [`ExtractionError`] variants; callers classify by
//! discriminant, never by message text.

pub mod client;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod validate;

pub use client::{CompletionClient, CompletionError, OpenAiClient, OpenAiConfig};
pub use error::ExtractionError;
pub use normalize::{Clock, ExtractionResult, SystemClock};
pub use pipeline::ActionItemExtractor;
pub use validate::NotesInput;
