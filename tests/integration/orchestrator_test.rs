//! Orchestrator Integration Tests
//!
//! Exercises the full pipeline against canned backends: single-flight
//! rejection, timeout classification, busy-release on every exit branch, and
//! the strict/degraded result paths.

use std::sync::Arc;
use std::time::Duration;

use complexity_lens::{AnalysisError, AnalysisOrchestrator, AnalysisRequest};

use super::common::{valid_request, ErrBackend, GatedBackend, ReplyBackend, SlowBackend};

#[tokio::test]
async fn test_fenced_json_reply_normalized() {
    let backend =
        ReplyBackend::new("```json\n{\"complexity\":\"O(n)\",\"explanation\":\"linear scan\"}\n```");
    let orchestrator = AnalysisOrchestrator::new(backend);

    let result = orchestrator.analyze(valid_request()).await.unwrap();
    assert_eq!(result.complexity, "O(n)");
    assert_eq!(result.space_complexity, None);
    assert_eq!(result.language, "python");
    assert_eq!(result.explanation, "linear scan");
    assert!(result.key_operations.is_empty());
    assert!(result.suggestions.is_empty());
}

#[tokio::test]
async fn test_free_text_reply_yields_degraded_result() {
    let backend = ReplyBackend::new("The nested loops make this O(n^2) in the worst case.");
    let orchestrator = AnalysisOrchestrator::new(backend);

    let result = orchestrator.analyze(valid_request()).await.unwrap();
    assert_eq!(result.complexity, "O(n^2)");
    assert_eq!(
        result.suggestions,
        vec!["Raw AI response parsing failed - try again"]
    );
    assert!(!orchestrator.is_busy());
}

#[tokio::test]
async fn test_backend_error_propagates_and_releases_busy() {
    let backend = ErrBackend::new(AnalysisError::ServiceUnavailable);
    let orchestrator = AnalysisOrchestrator::new(backend);

    let err = orchestrator.analyze(valid_request()).await.unwrap_err();
    assert_eq!(err, AnalysisError::ServiceUnavailable);
    assert!(!orchestrator.is_busy());

    // A later call proceeds normally after the failure
    let err = orchestrator.analyze(valid_request()).await.unwrap_err();
    assert_eq!(err, AnalysisError::ServiceUnavailable);
}

#[tokio::test]
async fn test_timeout_classified_and_busy_released() {
    let backend = SlowBackend::new(Duration::from_secs(5));
    let orchestrator =
        AnalysisOrchestrator::new(backend).with_timeout(Duration::from_millis(20));

    let err = orchestrator.analyze(valid_request()).await.unwrap_err();
    assert_eq!(err, AnalysisError::Timeout);
    assert!(!orchestrator.is_busy());

    // Subsequent call is admitted (times out again rather than being
    // rejected as already in progress)
    let err = orchestrator.analyze(valid_request()).await.unwrap_err();
    assert_eq!(err, AnalysisError::Timeout);
}

#[tokio::test]
async fn test_single_flight_rejects_concurrent_call() {
    let backend = Arc::new(GatedBackend::default());
    let orchestrator = Arc::new(AnalysisOrchestrator::new(
        backend.clone() as Arc<dyn complexity_lens::CompletionBackend>
    ));

    let first = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.analyze(valid_request()).await }
    });

    // Wait until the first call is inside the backend
    backend.started.notified().await;
    assert!(orchestrator.is_busy());

    let err = orchestrator.analyze(valid_request()).await.unwrap_err();
    assert_eq!(err, AnalysisError::AlreadyInProgress);

    backend.release.notify_one();
    let result = first.await.unwrap().unwrap();
    assert_eq!(result.complexity, "O(1)");
    assert!(!orchestrator.is_busy());

    // Once resolved, a new call proceeds normally
    backend.release.notify_one();
    let second = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.analyze(valid_request()).await }
    });
    backend.started.notified().await;
    assert!(second.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_validation_skips_single_flight_guard() {
    let backend = Arc::new(GatedBackend::default());
    let orchestrator = Arc::new(AnalysisOrchestrator::new(
        backend.clone() as Arc<dyn complexity_lens::CompletionBackend>
    ));

    let in_flight = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.analyze(valid_request()).await }
    });
    backend.started.notified().await;

    // Validation failures win over the busy rejection and leave state alone
    let err = orchestrator
        .analyze(AnalysisRequest::new("ab", "python", "sk-test"))
        .await
        .unwrap_err();
    assert_eq!(err, AnalysisError::CodeTooShort);
    assert!(orchestrator.is_busy());

    backend.release.notify_one();
    in_flight.await.unwrap().unwrap();
}
