//! Complexity Lens
//!
//! AI-assisted Big-O complexity analysis of selected source code. A request
//! carrying the selection, a language hint, and an API credential is turned
//! into a validated, normalized analysis result by calling the Mistral
//! chat-completion API, with single-flight execution, a hard timeout, and
//! best-effort recovery when the model strays from the mandated JSON shape.
//!
//! ## Module Organization
//!
//! - `types` - Data model and error taxonomy (`AnalysisRequest`, `AnalysisResult`, `AnalysisError`)
//! - `prompt` - Deterministic instruction prompt construction
//! - `backend` - Completion transport seam (`CompletionBackend`) and HTTP error classification
//! - `mistral` - Mistral chat-completion backend
//! - `parse` - Strict JSON extraction with degraded-result recovery
//! - `orchestrator` - Validation, single-flight guard, timeout, pipeline
//! - `dispatch` - Typed command/reply contract for callers
//! - `language` - Language detection heuristics
//! - `settings` - File-backed credential store

pub mod backend;
pub mod dispatch;
pub mod language;
pub mod mistral;
pub mod orchestrator;
pub mod parse;
pub mod prompt;
pub mod settings;
pub mod types;

// Re-export main types
pub use backend::{classify_http_error, CompletionBackend};
pub use dispatch::{AnalyzerService, Command, Reply};
pub use language::{detect_language, AUTO_LANGUAGE};
pub use mistral::{MistralBackend, MistralConfig};
pub use orchestrator::AnalysisOrchestrator;
pub use parse::{degraded_result, parse_model_content};
pub use prompt::{build_analysis_prompt, SYSTEM_PROMPT};
pub use settings::{CredentialStore, SettingsError};
pub use types::{
    AnalysisError, AnalysisRequest, AnalysisResult, AnalyzerResult, UNKNOWN_COMPLEXITY,
};
