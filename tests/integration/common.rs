//! Shared test backends

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use complexity_lens::{AnalysisError, AnalysisRequest, AnalyzerResult, CompletionBackend};

/// Backend that replies immediately with a fixed string.
pub struct ReplyBackend {
    reply: String,
}

impl ReplyBackend {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
        })
    }
}

#[async_trait]
impl CompletionBackend for ReplyBackend {
    async fn complete(&self, _prompt: &str, _credential: &str) -> AnalyzerResult<String> {
        Ok(self.reply.clone())
    }
}

/// Backend that fails with a fixed error.
pub struct ErrBackend {
    error: AnalysisError,
}

impl ErrBackend {
    pub fn new(error: AnalysisError) -> Arc<Self> {
        Arc::new(Self { error })
    }
}

#[async_trait]
impl CompletionBackend for ErrBackend {
    async fn complete(&self, _prompt: &str, _credential: &str) -> AnalyzerResult<String> {
        Err(self.error.clone())
    }
}

/// Backend that sleeps longer than any test timeout before replying.
pub struct SlowBackend {
    delay: Duration,
}

impl SlowBackend {
    pub fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self { delay })
    }
}

#[async_trait]
impl CompletionBackend for SlowBackend {
    async fn complete(&self, _prompt: &str, _credential: &str) -> AnalyzerResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok(r#"{"complexity":"O(1)"}"#.to_string())
    }
}

/// Backend that blocks until released, so tests can hold a call in flight.
#[derive(Default)]
pub struct GatedBackend {
    pub started: Notify,
    pub release: Notify,
}

#[async_trait]
impl CompletionBackend for GatedBackend {
    async fn complete(&self, _prompt: &str, _credential: &str) -> AnalyzerResult<String> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(r#"{"complexity":"O(1)","explanation":"constant time"}"#.to_string())
    }
}

/// A request that passes validation.
pub fn valid_request() -> AnalysisRequest {
    AnalysisRequest::new("for i in range(n): total += i", "python", "sk-test")
}
