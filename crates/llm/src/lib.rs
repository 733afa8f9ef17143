//! LaunchQuest LLM
//!
//! Provides a unified interface over the generative-text backends
//! LaunchQuest plans with:
//! - Google Gemini
//! - OpenAI (GPT, o1)
//! - Anthropic Claude
//! - DeepSeek (OpenAI-compatible endpoint)
//! - Alibaba Qwen (OpenAI-compatible endpoint)
//!
//! The five families map onto three wire dialects; the router picks the
//! dialect from the model name and resolves a credential before any network
//! call is made.

pub mod anthropic;
pub mod credentials;
pub mod google;
pub mod openai;
pub mod provider;
pub mod router;
pub mod types;

// Re-export main types
pub use anthropic::AnthropicProvider;
pub use credentials::resolve_credential;
pub use google::GoogleProvider;
pub use openai::OpenAiCompatProvider;
pub use provider::TextGenerator;
pub use router::{classify_model, route_model, DEFAULT_MODEL};
pub use types::*;
