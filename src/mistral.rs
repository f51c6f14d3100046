//! Mistral Backend
//!
//! [`CompletionBackend`] implementation for the Mistral chat-completion API.
//! Sampling parameters are fixed low for determinism-leaning output.

use async_trait::async_trait;
use serde::Deserialize;

use crate::backend::{classify_http_error, CompletionBackend};
use crate::prompt::SYSTEM_PROMPT;
use crate::types::{AnalysisError, AnalyzerResult};

/// Default Mistral API endpoint
const MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";

/// Model choice and sampling parameters for the completion call.
#[derive(Debug, Clone)]
pub struct MistralConfig {
    /// Override for the API endpoint; `None` uses the public endpoint.
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            model: "mistral-large-latest".to_string(),
            temperature: 0.1,
            max_tokens: 600,
        }
    }
}

/// Mistral completion backend
pub struct MistralBackend {
    config: MistralConfig,
    client: reqwest::Client,
}

impl MistralBackend {
    pub fn new(config: MistralConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(MISTRAL_API_URL)
    }

    /// Build the request body for the API
    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionBackend for MistralBackend {
    async fn complete(&self, prompt: &str, credential: &str) -> AnalyzerResult<String> {
        let body = self.build_request_body(prompt);

        tracing::debug!("Mistral complete POST {}", self.base_url());

        let response = self
            .client
            .post(self.base_url())
            .header("Authorization", format!("Bearer {}", credential))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!("Mistral API returned {}: {}", status, body_text);
            return Err(classify_http_error(status, &body_text));
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&body_text).map_err(|_| AnalysisError::MalformedResponse)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(AnalysisError::MalformedResponse)
    }
}

/// Mistral chat-completion response format (the subset we consume)
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
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
