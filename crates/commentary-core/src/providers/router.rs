//! Ordered failover across configured LLM backends
//!
//! The router is the session handle callers acquire per request: build it
//! from credentials, use it for the batch, drop it. Backends are tried in
//! a fixed order; a rate-limited backend is skipped, and when nothing is
//! left the distinguished [`ProviderError::NoProvidersAvailable`] surfaces
//! instead of a per-backend error.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ProviderCredentials;
use crate::error::ProviderError;
use crate::providers::gemini::GeminiProvider;
use crate::providers::openai_compat::OpenAiCompatProvider;
use crate::providers::types::{ChatMessage, ChatResponse, LlmClient, LlmProvider};

/// Failover router over the configured backends
pub struct ModelRouter {
    providers: Vec<Box<dyn LlmProvider>>,
}

impl ModelRouter {
    /// Compose a router from explicit backends, tried in order
    pub fn new(providers: Vec<Box<dyn LlmProvider>>) -> Self {
        Self { providers }
    }

    /// Build the production router: Groq, then Gemini, then GitHub Models,
    /// including only backends whose credential is present.
    pub fn from_credentials(credentials: &ProviderCredentials) -> Self {
        let mut providers: Vec<Box<dyn LlmProvider>> = Vec::new();
        if let Some(key) = &credentials.groq_api_key {
            providers.push(Box::new(OpenAiCompatProvider::groq(key.clone())));
        }
        if let Some(key) = &credentials.gemini_api_key {
            providers.push(Box::new(GeminiProvider::new(key.clone())));
        }
        if let Some(token) = &credentials.github_token {
            providers.push(Box::new(OpenAiCompatProvider::github(token.clone())));
        }
        Self { providers }
    }
}

#[async_trait]
impl LlmClient for ModelRouter {
    fn list_providers(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self
            .providers
            .iter()
            .map(|p| p.provider_name().to_string())
            .collect())
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<ChatResponse, ProviderError> {
        if self.providers.is_empty() {
            return Err(ProviderError::NoProvidersAvailable);
        }

        let mut all_rate_limited = true;
        let mut last_error = None;

        for provider in &self.providers {
            match provider.chat(messages, temperature, max_tokens).await {
                Ok(content) => {
                    debug!(
                        provider = provider.provider_name(),
                        model = provider.model(),
                        "chat request served"
                    );
                    return Ok(ChatResponse {
                        content,
                        provider: provider.provider_name().to_string(),
                    });
                }
                Err(err) => {
                    warn!(
                        provider = provider.provider_name(),
                        error = %err,
                        "backend failed, trying next"
                    );
                    all_rate_limited &= err.is_rate_limited();
                    last_error = Some(err);
                }
            }
        }

        if all_rate_limited {
            Err(ProviderError::NoProvidersAvailable)
        } else {
            Err(last_error.unwrap_or(ProviderError::NoProvidersAvailable))
        }
    }
}
