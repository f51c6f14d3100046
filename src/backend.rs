//! Completion Backend Trait
//!
//! Defines the transport seam between the orchestrator and the external
//! completion API, plus the shared HTTP status classification.

use async_trait::async_trait;

use crate::types::{AnalysisError, AnalyzerResult};

/// Trait implemented by completion transports.
///
/// The orchestrator only needs one operation: send the prompt, get the
/// model's raw text reply back. Keeping this behind a trait lets tests run
/// the full pipeline against canned backends.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the analysis prompt and return the model's raw text reply.
    async fn complete(&self, prompt: &str, credential: &str) -> AnalyzerResult<String>;
}

/// Map a non-success HTTP status and body to a classified error.
///
/// The body is probed for an `{"error": {"message": ...}}` payload; when none
/// is present a generic `API Error <status>` message is used. Status codes
/// with a dedicated variant (401, 429, 5xx) win over the extracted message.
pub fn classify_http_error(status: u16, body: &str) -> AnalysisError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|payload| {
            payload["error"]["message"]
                .as_str()
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| format!("API Error {}", status));

    match status {
        401 => AnalysisError::InvalidCredential,
        429 => AnalysisError::RateLimited,
        s if s >= 500 => AnalysisError::ServiceUnavailable,
        _ => AnalysisError::ApiError(message),
    }
}
