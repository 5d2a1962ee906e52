//! The request-to-structured-result pipeline.

use tracing::{Instrument, info_span};

use crate::client::CompletionClient;
use crate::error::Result;
use crate::normalize::{self, Clock, ExtractionResult, SystemClock};
use crate::prompt;
use crate::validate;

/// Runs validate → build prompt → one completion call → normalize.
///
/// Generic over the completion client and the clock so tests can supply a
/// mock provider and a fixed id stamp. No state is shared across requests;
/// one `extract` call performs exactly one outbound completion call.
pub struct ActionItemExtractor<C: CompletionClient, K: Clock = SystemClock> {
    client: C,
    clock: K,
}

impl<C: CompletionClient> ActionItemExtractor<C, SystemClock> {
    pub fn new(client: C) -> Self {
        Self::with_clock(client, SystemClock)
    }
}

impl<C: CompletionClient, K: Clock> ActionItemExtractor<C, K> {
    pub fn with_clock(client: C, clock: K) -> Self {
        Self { client, clock }
    }

    /// Extracts action items from the raw `notes` value of a request body.
    ///
    /// Failures at any stage surface as the stage's [`ExtractionError`]
    /// variant; nothing here retries or rewrites them.
    ///
    /// [`ExtractionError`]: crate::error::ExtractionError
    pub async fn extract(&self, raw_notes: Option<&serde_json::Value>) -> Result<ExtractionResult> {
        let notes = validate::validate(raw_notes)?;

        let span = info_span!("extract_action_items", notes_chars = notes.len_chars());

        async move {
            let request = prompt::build(&notes);
            let stamp = self.clock.now_millis();

            let text = self.client.complete(&request).await?;
            let result = normalize::normalize(&text, stamp)?;

            tracing::debug!(
                item_count = result.action_items.len(),
                "Normalized completion into action items"
            );

            Ok(result)
        }
        .instrument(span)
        .await
    }
}
