//! Batch commentary generation
//!
//! Drives one prompt per analyzed position through the LLM client,
//! sequentially and in input order. A position that fails keeps its slot
//! in the output as a failure record; only provider exhaustion aborts the
//! whole batch.

use tracing::{debug, info, warn};

use crate::analysis::{PositionAnalysis, PositionCommentary};
use crate::error::ProviderError;
use crate::prompt::build_commentary_prompt;
use crate::providers::{ChatMessage, LlmClient};

/// Sampling temperature for commentary generation
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Output token cap per position
pub const CHAT_MAX_TOKENS: u32 = 150;

/// Generate commentary for every position in `batch`, in order.
///
/// Records with ply 0 (the starting position) are skipped and produce no
/// output record. Each remaining record yields exactly one
/// [`PositionCommentary`] carrying its ply and move numbers, either with
/// the generated text and the answering provider, or with the fixed
/// failure text and the error.
///
/// Returns `Err(ProviderError::NoProvidersAvailable)` as soon as the
/// client reports exhaustion; per-position errors never abort the batch.
/// An empty batch is the caller's error and is rejected at the HTTP layer.
pub async fn generate_commentaries(
    client: &dyn LlmClient,
    batch: &[PositionAnalysis],
) -> Result<Vec<PositionCommentary>, ProviderError> {
    info!("generating commentary for {} positions", batch.len());

    let mut commentaries = Vec::with_capacity(batch.len());

    for (index, position) in batch.iter().enumerate() {
        if position.is_starting_position() {
            debug!(position = index + 1, "skipping starting position");
            continue;
        }

        let prompt = build_commentary_prompt(position);
        let messages = [ChatMessage::user(prompt)];

        match client.chat(&messages, CHAT_TEMPERATURE, CHAT_MAX_TOKENS).await {
            Ok(response) => {
                debug!(
                    position = index + 1,
                    total = batch.len(),
                    provider = %response.provider,
                    "commentary generated"
                );
                commentaries.push(PositionCommentary::generated(
                    position,
                    response.content.trim(),
                    response.provider,
                ));
            }
            Err(ProviderError::NoProvidersAvailable) => {
                warn!(position = index + 1, "all providers exhausted, aborting batch");
                return Err(ProviderError::NoProvidersAvailable);
            }
            Err(err) => {
                warn!(position = index + 1, error = %err, "commentary generation failed");
                commentaries.push(PositionCommentary::failed(position, err.to_string()));
            }
        }
    }

    info!("generated {} commentaries", commentaries.len());
    Ok(commentaries)
}
