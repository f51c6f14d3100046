//! Analysis Request Orchestrator
//!
//! Turns an [`AnalysisRequest`] into a normalized [`AnalysisResult`] or a
//! classified error: validates the request, enforces single-flight execution,
//! applies the hard timeout around the completion call, and normalizes the
//! model output. No retries are performed here; callers may re-invoke after
//! failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::backend::CompletionBackend;
use crate::parse::parse_model_content;
use crate::prompt::build_analysis_prompt;
use crate::types::{AnalysisError, AnalysisRequest, AnalysisResult, AnalyzerResult};

/// Wall-clock limit on the completion call.
const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum trimmed length of the code selection.
const MIN_CODE_LEN: usize = 5;

/// Maximum raw (untrimmed) length of the code selection.
const MAX_CODE_LEN: usize = 8000;

/// Orchestrates analysis requests against a completion backend.
///
/// At most one analysis is in flight per orchestrator instance; a second call
/// arriving while one is outstanding is rejected immediately with
/// [`AnalysisError::AlreadyInProgress`], without queueing.
pub struct AnalysisOrchestrator {
    backend: Arc<dyn CompletionBackend>,
    busy: AtomicBool,
    timeout: Duration,
}

impl AnalysisOrchestrator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            busy: AtomicBool::new(false),
            timeout: ANALYSIS_TIMEOUT,
        }
    }

    /// Override the completion timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an analysis is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run one analysis end to end.
    ///
    /// Validation failures exit before the single-flight flag is touched.
    /// Once acquired, the flag is released on every exit path (success, API
    /// failure, timeout) via the guard's `Drop`.
    pub async fn analyze(&self, request: AnalysisRequest) -> AnalyzerResult<AnalysisResult> {
        validate(&request)?;

        let _guard =
            BusyGuard::try_acquire(&self.busy).ok_or(AnalysisError::AlreadyInProgress)?;

        tracing::debug!(
            language = %request.language_hint,
            code_len = request.code.len(),
            "dispatching analysis request"
        );

        let prompt = build_analysis_prompt(&request.code, &request.language_hint);

        // Dropping the in-flight future on timeout aborts the HTTP request.
        let content = tokio::time::timeout(
            self.timeout,
            self.backend.complete(&prompt, &request.credential),
        )
        .await
        .map_err(|_| AnalysisError::Timeout)??;

        Ok(parse_model_content(&content, &request.language_hint))
    }
}

/// Precondition checks, in order; first failure wins.
fn validate(request: &AnalysisRequest) -> AnalyzerResult<()> {
    if request.credential.is_empty() {
        return Err(AnalysisError::MissingCredential);
    }
    if request.code.trim().len() < MIN_CODE_LEN {
        return Err(AnalysisError::CodeTooShort);
    }
    if request.code.len() > MAX_CODE_LEN {
        return Err(AnalysisError::CodeTooLong);
    }
    Ok(())
}

/// RAII token for the single-flight flag.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
