//! Google Gemini backend via the `generateContent` REST API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ProviderError;
use crate::providers::types::{ChatMessage, ChatRole, LlmProvider};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-2.0-flash";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Gemini generateContent API
pub struct GeminiProvider {
    client: Client,
    api_key: String,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("model", &GEMINI_MODEL)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, api_key }
    }

    /// Gemini names the assistant role "model"
    fn gemini_role(role: ChatRole) -> &'static str {
        match role {
            ChatRole::Assistant => "model",
            ChatRole::User | ChatRole::System => "user",
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        GEMINI_MODEL
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: messages
                .iter()
                .map(|msg| Content {
                    role: Self::gemini_role(msg.role),
                    parts: vec![Part { text: &msg.content }],
                })
                .collect(),
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: max_tokens,
            },
        };

        debug!(
            provider = "gemini",
            model = GEMINI_MODEL,
            messages = messages.len(),
            "generateContent request"
        );

        let url = format!(
            "{GEMINI_BASE_URL}/{GEMINI_MODEL}:generateContent?key={}",
            self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: "gemini".to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited {
                provider: "gemini".to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: "gemini".to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Http {
                    provider: "gemini".to_string(),
                    source,
                })?;

        let first_candidate =
            parsed
                .candidates
                .into_iter()
                .next()
                .ok_or_else(|| ProviderError::MalformedResponse {
                    provider: "gemini".to_string(),
                    detail: "no candidates returned".to_string(),
                })?;

        let text = first_candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(ProviderError::MalformedResponse {
                provider: "gemini".to_string(),
                detail: "candidate contained no text parts".to_string(),
            });
        }

        Ok(text)
    }
}
