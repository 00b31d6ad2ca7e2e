//! Multi-provider LLM layer
//!
//! Backends (Groq, Google Gemini, GitHub Models) implement the
//! [`LlmProvider`] trait and are composed via [`ModelRouter`] for
//! automatic failover. Callers go through the [`LlmClient`] trait and
//! never see an individual backend.

pub mod gemini;
pub mod openai_compat;
pub mod router;
pub mod types;

pub use router::ModelRouter;
pub use types::{ChatMessage, ChatResponse, ChatRole, LlmClient, LlmProvider};
