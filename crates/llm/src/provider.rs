//! Text Generator Trait
//!
//! Defines the common interface all wire dialects implement.

use async_trait::async_trait;

use super::types::{LlmError, LlmResult};

/// Trait implemented once per wire dialect (google, openai-compatible,
/// anthropic).
///
/// A generator takes a rendered prompt and returns the textual payload of the
/// provider's reply, which callers parse as JSON. Adding a new backend means
/// adding one implementation, not editing a shared branch.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the dialect name for identification and logging.
    fn name(&self) -> &'static str;

    /// Returns the model the generator was routed to.
    fn model(&self) -> &str;

    /// Send the prompt and return the reply text.
    ///
    /// An empty reply normalizes to the literal string `"{}"` so callers
    /// always have something to hand to a JSON parser. Transport and
    /// provider-side errors propagate unchanged; there is no retry.
    async fn generate(&self, prompt: &str) -> LlmResult<String>;
}

/// Helper function to create an error for a missing API key
pub fn missing_credential_error(provider: &str) -> LlmError {
    LlmError::MissingCredential {
        provider: provider.to_string(),
    }
}

/// Helper function to turn a non-200 provider reply into an error
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    LlmError::Api {
        status,
        message: format!("{}: {}", provider, body),
    }
}

/// Helper function to wrap a reqwest failure
pub fn transport_error(err: reqwest::Error) -> LlmError {
    LlmError::Transport {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_error() {
        let err = missing_credential_error("anthropic");
        match err {
            LlmError::MissingCredential { provider } => {
                assert_eq!(provider, "anthropic");
            }
            _ => panic!("Expected MissingCredential"),
        }
    }

    #[test]
    fn test_parse_http_error() {
        let err = parse_http_error(429, "rate limited", "openai");
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert!(message.contains("openai"));
            }
            _ => panic!("Expected Api"),
        }
    }
}
