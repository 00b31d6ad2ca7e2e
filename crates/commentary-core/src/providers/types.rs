//! Provider-agnostic types for multi-model LLM support

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Provider-agnostic chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatMessage {
    /// A user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Completion routed through whichever backend answered
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    /// Name of the backend that produced the content
    pub provider: String,
}

/// Trait that all LLM backends implement
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Backend name reported to callers (e.g. "groq", "gemini")
    fn provider_name(&self) -> &str;

    /// Model identifier requested from the backend
    fn model(&self) -> &str;

    /// Send a chat request and return the completion text
    async fn chat(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ProviderError>;
}

/// Session-level interface the commentary pipeline talks to.
///
/// [`ModelRouter`](crate::providers::ModelRouter) is the production
/// implementation; tests substitute deterministic stubs.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Names of the backends this session can route to
    fn list_providers(&self) -> Result<Vec<String>, ProviderError>;

    /// Send a chat request to the first backend that answers
    async fn chat(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<ChatResponse, ProviderError>;
}
