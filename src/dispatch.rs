//! Typed Command Dispatch
//!
//! Request/response contract between the orchestrator and its callers (the
//! selection-capture and presenter surfaces). Commands are a tagged union
//! deserialized from the caller's message; replies carry either the stored
//! state, a normalized result, or the error message for rendering.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::orchestrator::AnalysisOrchestrator;
use crate::types::{AnalysisRequest, AnalysisResult};

/// Inbound commands, tagged on `action`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    SetSelectedCode { code: String },
    GetSelectedCode,
    #[serde(rename_all = "camelCase")]
    AnalyzeCode {
        code: String,
        language: String,
        api_key: String,
    },
}

/// Outbound replies. Errors are surfaced as their display message; the
/// presenter owns all formatting beyond that.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Status { status: String },
    SelectedCode { code: String },
    Analysis { result: AnalysisResult },
    Error { error: String },
}

/// Command handler holding the selected-code slot and the orchestrator.
pub struct AnalyzerService {
    orchestrator: AnalysisOrchestrator,
    selected_code: Mutex<String>,
}

impl AnalyzerService {
    pub fn new(orchestrator: AnalysisOrchestrator) -> Self {
        Self {
            orchestrator,
            selected_code: Mutex::new(String::new()),
        }
    }

    pub async fn handle(&self, command: Command) -> Reply {
        match command {
            Command::SetSelectedCode { code } => {
                *self.selected_code.lock().await = code;
                Reply::Status {
                    status: "code stored".to_string(),
                }
            }
            Command::GetSelectedCode => Reply::SelectedCode {
                code: self.selected_code.lock().await.clone(),
            },
            Command::AnalyzeCode {
                code,
                language,
                api_key,
            } => {
                let request = AnalysisRequest::new(code, language, api_key);
                match self.orchestrator.analyze(request).await {
                    Ok(result) => Reply::Analysis { result },
                    Err(err) => Reply::Error {
                        error: err.to_string(),
                    },
                }
            }
        }
    }
}
