//! Error types for the LLM provider layer

use thiserror::Error;

/// Errors surfaced by LLM backends and the model router.
///
/// `NoProvidersAvailable` is batch-fatal: the commentary pipeline stops
/// iterating when it sees it. Every other variant is isolated to the
/// position that triggered it.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No backend is configured, or every configured backend is rate-limited
    #[error("no LLM providers are available")]
    NoProvidersAvailable,

    /// A single backend rejected the request with HTTP 429
    #[error("provider '{provider}' is rate-limited")]
    RateLimited { provider: String },

    /// The HTTP request to a backend failed before a response arrived
    #[error("request to provider '{provider}' failed: {source}")]
    Http {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    /// A backend answered with a non-success status
    #[error("provider '{provider}' returned status {status}: {body}")]
    Api {
        provider: String,
        status: u16,
        body: String,
    },

    /// A backend answered 200 but the body was not usable
    #[error("malformed response from provider '{provider}': {detail}")]
    MalformedResponse { provider: String, detail: String },
}

impl ProviderError {
    /// Whether the router should try the next backend after this error
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}
