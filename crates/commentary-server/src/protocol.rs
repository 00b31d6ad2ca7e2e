//! JSON payloads for the commentary HTTP API

use commentary_core::{PositionAnalysis, PositionCommentary};
use serde::{Deserialize, Serialize};

/// 400 body when the request carries no analysis records
pub const NO_ANALYSIS_ERROR: &str = "No analysis data provided";

/// 429 body when every configured provider is exhausted
pub const PROVIDERS_EXHAUSTED_ERROR: &str = "All LLM providers are rate-limited. Try again later.";

/// Body of `POST /generate-commentary`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCommentaryRequest {
    #[serde(default)]
    pub analysis: Vec<PositionAnalysis>,
}

/// 200 reply to `POST /generate-commentary`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCommentaryResponse {
    pub success: bool,
    pub commentaries: Vec<PositionCommentary>,
    pub total: usize,
}

impl GenerateCommentaryResponse {
    pub fn new(commentaries: Vec<PositionCommentary>) -> Self {
        Self {
            success: true,
            total: commentaries.len(),
            commentaries,
        }
    }
}

/// 200 reply to `GET /test-providers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderListResponse {
    pub success: bool,
    pub available_providers: Vec<String>,
    pub count: usize,
}

impl ProviderListResponse {
    pub fn new(available_providers: Vec<String>) -> Self {
        Self {
            success: true,
            count: available_providers.len(),
            available_providers,
        }
    }
}

/// Reply to `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: "commentary-service".to_string(),
        }
    }
}

/// 429/500 body: `{"success": false, "error": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// 400 body: `{"error": ...}` with no success flag, matching what the
/// game backend already parses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerErrorResponse {
    pub error: String,
}

impl CallerErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
