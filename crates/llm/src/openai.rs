//! OpenAI-Compatible Provider
//!
//! Implementation of the TextGenerator trait for the chat-completions wire
//! format. Serves native OpenAI plus the DeepSeek and Alibaba Qwen mirrors,
//! which speak the same protocol behind a different endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{parse_http_error, transport_error, TextGenerator};
use super::types::LlmResult;

/// Default OpenAI API endpoint
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// DeepSeek's OpenAI-compatible endpoint
pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// Alibaba DashScope's OpenAI-compatible endpoint
pub const ALIBABA_API_URL: &str =
    "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions";

/// OpenAI-compatible provider
pub struct OpenAiCompatProvider {
    api_key: String,
    model: String,
    base_url: Option<String>,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a provider against the native OpenAI endpoint
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: None,
            client: reqwest::Client::new(),
        }
    }

    /// Point the provider at a compatible mirror (DeepSeek, DashScope)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn endpoint(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_API_URL)
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "response_format": { "type": "json_object" }
        })
    }

    /// Take the first choice's message content, normalizing empty replies
    /// to `"{}"`.
    fn extract_text(response: &ChatResponse) -> String {
        response
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "{}".to_string())
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatProvider {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let body = self.build_request_body(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(transport_error)?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "openai-compatible"));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body_text).map_err(|e| super::types::LlmError::Transport {
                message: format!("openai-compatible: unreadable response body: {}", e),
            })?;

        Ok(Self::extract_text(&parsed))
    }
}

/// Chat-completions response format
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
