//! Google Gemini Provider
//!
//! Implementation of the TextGenerator trait for the Gemini generateContent
//! API. Requests JSON output via the response MIME type and returns the
//! first candidate's text part.

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{parse_http_error, transport_error, TextGenerator};
use super::types::LlmResult;

/// Default Gemini API base
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Gemini provider
pub struct GoogleProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GoogleProvider {
    /// Create a new Gemini provider for the given model
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        })
    }

    /// Pull the reply text out of a parsed response, normalizing empty
    /// replies to `"{}"`.
    fn extract_text(response: &GeminiResponse) -> String {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "{}".to_string())
    }
}

#[async_trait]
impl TextGenerator for GoogleProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let body = self.build_request_body(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(transport_error)?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "google"));
        }

        let parsed: GeminiResponse =
            serde_json::from_str(&body_text).map_err(|e| super::types::LlmError::Transport {
                message: format!("google: unreadable response body: {}", e),
            })?;

        Ok(Self::extract_text(&parsed))
    }
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> GoogleProvider {
        GoogleProvider::new("key".to_string(), "gemini-3-flash-preview".to_string())
    }

    #[test]
    fn test_provider_identity() {
        let provider = test_provider();
        assert_eq!(provider.name(), "google");
        assert_eq!(provider.model(), "gemini-3-flash-preview");
    }

    #[test]
    fn test_endpoint_includes_model_and_key() {
        let endpoint = test_provider().endpoint();
        assert!(endpoint.contains("gemini-3-flash-preview:generateContent"));
        assert!(endpoint.ends_with("key=key"));
    }

    #[test]
    fn test_request_body_demands_json() {
        let body = test_provider().build_request_body("plan this");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], "plan this");
    }

    #[test]
    fn test_extract_text() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"ok\":true}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(GoogleProvider::extract_text(&response), r#"{"ok":true}"#);
    }

    #[test]
    fn test_empty_reply_normalizes_to_empty_object() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(GoogleProvider::extract_text(&response), "{}");

        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        )
        .unwrap();
        assert_eq!(GoogleProvider::extract_text(&response), "{}");
    }
}
