//! Core Types
//!
//! Data model and error taxonomy for the analysis pipeline. Errors here are
//! terminal for the current call: nothing in this crate retries internally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel complexity used when nothing recoverable is found in the model output.
pub const UNKNOWN_COMPLEXITY: &str = "O(?)";

/// A single analysis request: the selected source text, the caller's language
/// hint, and the API credential.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub code: String,
    pub language_hint: String,
    pub credential: String,
}

impl AnalysisRequest {
    pub fn new(
        code: impl Into<String>,
        language_hint: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            language_hint: language_hint.into(),
            credential: credential.into(),
        }
    }
}

/// Normalized analysis result.
///
/// `complexity` is always present and non-empty; the degraded-recovery path
/// falls back to [`UNKNOWN_COMPLEXITY`] when the model output yields nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub complexity: String,
    pub space_complexity: Option<String>,
    pub language: String,
    pub explanation: String,
    pub key_operations: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Classified analysis errors.
///
/// Display strings are surfaced verbatim to the caller, so they are phrased
/// for end users rather than for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("API key not provided")]
    MissingCredential,

    #[error("Code too short or empty")]
    CodeTooShort,

    #[error("Code too long (max 8000 characters)")]
    CodeTooLong,

    #[error("Analysis already in progress")]
    AlreadyInProgress,

    #[error("Request timeout - analysis took too long")]
    Timeout,

    #[error("Invalid API key - check your Mistral API key")]
    InvalidCredential,

    #[error("Rate limit exceeded - please wait a moment")]
    RateLimited,

    #[error("Mistral API temporarily unavailable")]
    ServiceUnavailable,

    /// Non-success HTTP status that is none of the dedicated cases above;
    /// carries the server's own message when one could be extracted.
    #[error("{0}")]
    ApiError(String),

    #[error("Invalid response format from API")]
    MalformedResponse,

    #[error("Network error: {0}")]
    Network(String),
}

/// Result type alias for analysis errors
pub type AnalyzerResult<T> = Result<T, AnalysisError>;
