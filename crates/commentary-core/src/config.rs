//! Process configuration — credentials read once at startup
//!
//! Nothing in request handling touches the environment; handlers receive
//! the config built here and nothing else.

use tracing::{info, warn};

/// Environment variable holding the Groq API key
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
/// Environment variable holding the Google Gemini API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable holding the GitHub token for GitHub Models
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Optional credentials for the three supported backends.
///
/// All of them may be absent; the service still starts and the router
/// reports no providers at call time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub groq_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub github_token: Option<String>,
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ProviderCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`; empty values count as absent
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            groq_api_key: read(GROQ_API_KEY_VAR),
            gemini_api_key: read(GEMINI_API_KEY_VAR),
            github_token: read(GITHUB_TOKEN_VAR),
        }
    }

    /// Whether at least one backend credential is present
    pub fn any_present(&self) -> bool {
        self.groq_api_key.is_some() || self.gemini_api_key.is_some() || self.github_token.is_some()
    }

    /// Log which credentials were found, for startup diagnostics only
    pub fn log_status(&self) {
        let entries = [
            ("Groq API key", self.groq_api_key.is_some()),
            ("Gemini API key", self.gemini_api_key.is_some()),
            ("GitHub token", self.github_token.is_some()),
        ];
        for (label, present) in entries {
            if present {
                info!("{label}: loaded");
            } else {
                info!("{label}: not found");
            }
        }
        if !self.any_present() {
            warn!("no LLM provider credentials found; commentary requests will be rejected");
        }
    }
}

/// Read-only configuration shared across requests
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    pub credentials: ProviderCredentials,
}

impl ServiceConfig {
    pub fn new(bind_addr: impl Into<String>, credentials: ProviderCredentials) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            credentials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        |name| map.get(name).map(|value| (*value).to_string())
    }

    #[test]
    fn test_from_lookup_all_present() {
        let env = HashMap::from([
            (GROQ_API_KEY_VAR, "gsk_test"),
            (GEMINI_API_KEY_VAR, "AIza_test"),
            (GITHUB_TOKEN_VAR, "ghp_test"),
        ]);

        let credentials = ProviderCredentials::from_lookup(lookup_from(&env));
        assert_eq!(credentials.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(credentials.gemini_api_key.as_deref(), Some("AIza_test"));
        assert_eq!(credentials.github_token.as_deref(), Some("ghp_test"));
        assert!(credentials.any_present());
    }

    #[test]
    fn test_from_lookup_none_present() {
        let credentials = ProviderCredentials::from_lookup(|_| None);
        assert!(!credentials.any_present());
        assert!(credentials.groq_api_key.is_none());
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let env = HashMap::from([(GROQ_API_KEY_VAR, ""), (GEMINI_API_KEY_VAR, "   ")]);

        let credentials = ProviderCredentials::from_lookup(lookup_from(&env));
        assert!(credentials.groq_api_key.is_none());
        assert!(credentials.gemini_api_key.is_none());
        assert!(!credentials.any_present());
    }

    #[test]
    fn test_partial_credentials() {
        let env = HashMap::from([(GEMINI_API_KEY_VAR, "AIza_test")]);

        let credentials = ProviderCredentials::from_lookup(lookup_from(&env));
        assert!(credentials.groq_api_key.is_none());
        assert!(credentials.gemini_api_key.is_some());
        assert!(credentials.github_token.is_none());
        assert!(credentials.any_present());
    }

    #[test]
    fn test_debug_redacts_values() {
        let credentials = ProviderCredentials {
            groq_api_key: Some("gsk_secret".to_string()),
            gemini_api_key: None,
            github_token: None,
        };

        let debug = format!("{credentials:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("gsk_secret"));
    }

    #[test]
    fn test_service_config_new() {
        let config = ServiceConfig::new("0.0.0.0:5001", ProviderCredentials::default());
        assert_eq!(config.bind_addr, "0.0.0.0:5001");
        assert!(!config.credentials.any_present());
    }
}
