//! LLM Types
//!
//! Core types for provider routing and text generation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported provider families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFamily {
    Google,
    OpenAi,
    Anthropic,
    DeepSeek,
    Alibaba,
}

impl ProviderFamily {
    /// Environment variable consulted when no per-request key is supplied.
    pub fn env_var(&self) -> &'static str {
        match self {
            ProviderFamily::Google => "GEMINI_API_KEY",
            ProviderFamily::OpenAi => "OPENAI_API_KEY",
            ProviderFamily::Anthropic => "ANTHROPIC_API_KEY",
            ProviderFamily::DeepSeek => "DEEPSEEK_API_KEY",
            ProviderFamily::Alibaba => "ALIBABA_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderFamily::Google => write!(f, "google"),
            ProviderFamily::OpenAi => write!(f, "openai"),
            ProviderFamily::Anthropic => write!(f, "anthropic"),
            ProviderFamily::DeepSeek => write!(f, "deepseek"),
            ProviderFamily::Alibaba => write!(f, "alibaba"),
        }
    }
}

/// Per-request credential overrides, keyed the way the HTTP body spells them.
///
/// Any key present here takes precedence over the process-wide environment
/// default for the same family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anthropic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepseek: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alibaba: Option<String>,
}

impl ApiKeyOverrides {
    /// Get the override for a provider family, if one was supplied.
    pub fn for_family(&self, family: ProviderFamily) -> Option<&str> {
        let key = match family {
            ProviderFamily::Google => self.gemini.as_deref(),
            ProviderFamily::OpenAi => self.openai.as_deref(),
            ProviderFamily::Anthropic => self.anthropic.as_deref(),
            ProviderFamily::DeepSeek => self.deepseek.as_deref(),
            ProviderFamily::Alibaba => self.alibaba.as_deref(),
        };
        key.filter(|k| !k.is_empty())
    }
}

/// Per-request generation options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier; the router classifies it into a provider family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Per-request credential overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<ApiKeyOverrides>,
}

/// Error types for LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// No usable secret for the selected provider
    #[error("API key is missing for provider: {provider}")]
    MissingCredential { provider: String },

    /// Routing produced no dialect (defensive; unreachable given the default)
    #[error("Unsupported provider for model: {model}")]
    UnsupportedProvider { model: String },

    /// Generation output not parseable as the expected shape
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Network/connection failure, passed through unchanged
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Non-200 provider reply, passed through unchanged
    #[error("Provider error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;
