//! Backend for OpenAI-compatible chat completion APIs
//!
//! Groq and GitHub Models both speak the OpenAI `chat/completions` wire
//! format, so one implementation covers both, parameterized by endpoint
//! and model.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::providers::types::{ChatMessage, LlmProvider};

const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const GITHUB_CHAT_URL: &str = "https://models.github.ai/inference/chat/completions";
const GITHUB_MODEL: &str = "openai/gpt-4o-mini";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for one OpenAI-compatible chat completions endpoint
pub struct OpenAiCompatProvider {
    client: Client,
    name: &'static str,
    chat_url: &'static str,
    model: &'static str,
    api_key: String,
}

impl std::fmt::Debug for OpenAiCompatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatProvider")
            .field("name", &self.name)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompatProvider {
    /// Groq backend
    pub fn groq(api_key: String) -> Self {
        Self::new("groq", GROQ_CHAT_URL, GROQ_MODEL, api_key)
    }

    /// GitHub Models backend, authenticated with a GitHub token
    pub fn github(token: String) -> Self {
        Self::new("github", GITHUB_CHAT_URL, GITHUB_MODEL, token)
    }

    fn new(name: &'static str, chat_url: &'static str, model: &'static str, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            name,
            chat_url,
            model,
            api_key,
        }
    }

    fn http_error(&self, source: reqwest::Error) -> ProviderError {
        ProviderError::Http {
            provider: self.name.to_string(),
            source,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatProvider {
    fn provider_name(&self) -> &str {
        self.name
    }

    fn model(&self) -> &str {
        self.model
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionsRequest {
            model: self.model,
            messages,
            temperature,
            max_tokens,
        };

        debug!(
            provider = self.name,
            model = self.model,
            messages = messages.len(),
            "chat completions request"
        );

        let response = self
            .client
            .post(self.chat_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                provider: self.name.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: self.name.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionsResponse =
            response.json().await.map_err(|e| self.http_error(e))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::MalformedResponse {
                provider: self.name.to_string(),
                detail: "no completion choices returned".to_string(),
            })
    }
}
