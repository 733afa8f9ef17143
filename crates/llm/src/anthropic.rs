//! Anthropic Claude Provider
//!
//! Implementation of the TextGenerator trait for Anthropic's Messages API.
//! Carries a fixed JSON-only system instruction and scans the typed content
//! blocks for the first plain-text block.

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{parse_http_error, transport_error, TextGenerator};
use super::types::LlmResult;

/// Default Anthropic API endpoint
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Current API version
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fixed output ceiling for generation calls
const MAX_TOKENS: u32 = 4096;

/// System instruction demanding JSON-only output
const JSON_ONLY_SYSTEM: &str = "Respond ONLY with a valid JSON document.";

/// Anthropic Claude provider
pub struct AnthropicProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider for the given model
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: ANTHROPIC_API_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": JSON_ONLY_SYSTEM,
            "messages": [{ "role": "user", "content": prompt }]
        })
    }

    /// Scan content blocks for the first text block, normalizing a reply
    /// without one to `"{}"`.
    fn extract_text(response: &MessagesResponse) -> String {
        response
            .content
            .iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } if !text.is_empty() => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_else(|| "{}".to_string())
    }
}

#[async_trait]
impl TextGenerator for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let body = self.build_request_body(prompt);

        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(transport_error)?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "anthropic"));
        }

        let parsed: MessagesResponse =
            serde_json::from_str(&body_text).map_err(|e| super::types::LlmError::Transport {
                message: format!("anthropic: unreadable response body: {}", e),
            })?;

        Ok(Self::extract_text(&parsed))
    }
}

/// Messages API response format
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// Typed content block in a Messages response
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> AnthropicProvider {
        AnthropicProvider::new("sk-ant".to_string(), "claude-3-5-sonnet".to_string())
    }

    #[test]
    fn test_provider_identity() {
        let provider = test_provider();
        assert_eq!(provider.name(), "anthropic");
        assert_eq!(provider.model(), "claude-3-5-sonnet");
    }

    #[test]
    fn test_request_carries_json_system_and_max_tokens() {
        let body = test_provider().build_request_body("simulate this task");
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["system"], JSON_ONLY_SYSTEM);
        assert_eq!(body["messages"][0]["content"], "simulate this task");
    }

    #[test]
    fn test_extract_skips_non_text_blocks() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"thinking","thinking":"hm"},{"type":"text","text":"{\"output\":\"done\"}"}]}"#,
        )
        .unwrap();
        assert_eq!(
            AnthropicProvider::extract_text(&response),
            r#"{"output":"done"}"#
        );
    }

    #[test]
    fn test_no_text_block_normalizes_to_empty_object() {
        let response: MessagesResponse =
            serde_json::from_str(r#"{"content":[{"type":"tool_use","id":"x"}]}"#).unwrap();
        assert_eq!(AnthropicProvider::extract_text(&response), "{}");
    }
}
