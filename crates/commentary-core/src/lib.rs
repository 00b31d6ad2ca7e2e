//! commentary-core — engine analysis in, natural-language commentary out
//!
//! The batch pipeline turns an ordered list of analyzed chess positions
//! into commentary by prompting a multi-provider LLM layer, one position
//! at a time. Failures are isolated per position; only full provider
//! exhaustion aborts a batch.

pub mod analysis;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod providers;

pub use analysis::{FAILURE_COMMENTARY, PositionAnalysis, PositionCommentary};
pub use config::{ProviderCredentials, ServiceConfig};
pub use error::ProviderError;
pub use pipeline::{CHAT_MAX_TOKENS, CHAT_TEMPERATURE, generate_commentaries};
pub use providers::{ChatMessage, ChatResponse, ChatRole, LlmClient, LlmProvider, ModelRouter};
