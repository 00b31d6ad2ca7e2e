//! Route table and request handlers
//!
//! Each request that talks to an LLM builds its own [`ModelRouter`] from
//! the shared config and drops it when the handler returns, so the
//! provider session never outlives the request.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use commentary_core::{
    LlmClient, ModelRouter, PositionCommentary, ProviderError, ServiceConfig,
    generate_commentaries,
};

use crate::protocol::{
    CallerErrorResponse, FailureResponse, GenerateCommentaryRequest, GenerateCommentaryResponse,
    HealthResponse, NO_ANALYSIS_ERROR, PROVIDERS_EXHAUSTED_ERROR, ProviderListResponse,
};

/// Shared state: the read-only config built at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/test-providers", get(test_providers))
        .route("/generate-commentary", post(generate_commentary))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn test_providers(State(state): State<AppState>) -> Response {
    let router = ModelRouter::from_credentials(&state.config.credentials);
    match router.list_providers() {
        Ok(providers) => {
            info!(count = providers.len(), "provider probe");
            (StatusCode::OK, Json(ProviderListResponse::new(providers))).into_response()
        }
        Err(err) => {
            error!(error = %err, "provider probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::new(err.to_string())),
            )
                .into_response()
        }
    }
}

async fn generate_commentary(
    State(state): State<AppState>,
    Json(request): Json<GenerateCommentaryRequest>,
) -> Response {
    if request.analysis.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(CallerErrorResponse::new(NO_ANALYSIS_ERROR)),
        )
            .into_response();
    }

    let router = ModelRouter::from_credentials(&state.config.credentials);
    let result = generate_commentaries(&router, &request.analysis).await;
    commentary_response(result)
}

/// Map the pipeline outcome onto the HTTP surface:
/// 200 with results, 429 on provider exhaustion, 500 otherwise.
fn commentary_response(result: Result<Vec<PositionCommentary>, ProviderError>) -> Response {
    match result {
        Ok(commentaries) => (
            StatusCode::OK,
            Json(GenerateCommentaryResponse::new(commentaries)),
        )
            .into_response(),
        Err(ProviderError::NoProvidersAvailable) => {
            error!("all providers exhausted");
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(FailureResponse::new(PROVIDERS_EXHAUSTED_ERROR)),
            )
                .into_response()
        }
        Err(err) => {
            error!(error = %err, "commentary generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse::new(err.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentary_core::{PositionAnalysis, ProviderCredentials};
    use serde_json::Value;

    fn empty_state() -> AppState {
        AppState::new(ServiceConfig::new(
            "127.0.0.1:0",
            ProviderCredentials::default(),
        ))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn analysis(ply: u32) -> PositionAnalysis {
        serde_json::from_value(serde_json::json!({
            "plyNumber": ply,
            "moveNumber": 1,
            "isWhiteMove": true,
            "playedMove": "e4"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = health().await;
        assert_eq!(response.0.status, "ok");
        assert_eq!(response.0.service, "commentary-service");
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_caller_error() {
        let request = GenerateCommentaryRequest {
            analysis: Vec::new(),
        };
        let response = generate_commentary(State(empty_state()), Json(request)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], NO_ANALYSIS_ERROR);
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn test_no_credentials_yields_rate_limited_status() {
        // With no configured backend the router reports exhaustion on the
        // first chat call, before any network traffic.
        let request = GenerateCommentaryRequest {
            analysis: vec![analysis(1)],
        };
        let response = generate_commentary(State(empty_state()), Json(request)).await;

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], PROVIDERS_EXHAUSTED_ERROR);
    }

    #[tokio::test]
    async fn test_provider_probe_with_no_credentials() {
        let response = test_providers(State(empty_state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 0);
        assert_eq!(body["available_providers"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_commentary_response_success() {
        let source = analysis(1);
        let result = Ok(vec![PositionCommentary::generated(
            &source,
            "Good opening move.",
            "stub",
        )]);
        let response = commentary_response(result);

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 1);
        assert_eq!(body["commentaries"][0]["plyNumber"], 1);
        assert_eq!(body["commentaries"][0]["commentary"], "Good opening move.");
        assert_eq!(body["commentaries"][0]["provider"], "stub");
    }

    #[tokio::test]
    async fn test_commentary_response_exhaustion() {
        let response = commentary_response(Err(ProviderError::NoProvidersAvailable));

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], PROVIDERS_EXHAUSTED_ERROR);
    }

    #[tokio::test]
    async fn test_commentary_response_generic_failure() {
        let response = commentary_response(Err(ProviderError::MalformedResponse {
            provider: "groq".to_string(),
            detail: "empty body".to_string(),
        }));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("groq"));
        assert!(error.contains("empty body"));
    }
}
