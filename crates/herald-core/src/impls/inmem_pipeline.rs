//! InMemoryPipelineClient - 開発・テスト用の PipelineJobClient
//!
//! 呼ばれた完了 API を `CompletionReport` として順番に記録する。
//! success / failure それぞれに失敗を仕込める（記録は失敗時も残る）。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::{CompletionReport, FailureDetails, JobId, ReporterError};
use crate::ports::PipelineJobClient;

/// 送信内容を記録する client
///
/// # 使用例
/// ```ignore
/// let client = InMemoryPipelineClient::new().failing_success("net-down");
/// client.report_success(&JobId::new("job-1")).await.unwrap_err();
/// assert_eq!(client.reports().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPipelineClient {
    reports: Mutex<Vec<CompletionReport>>,
    success_error: Option<String>,
    failure_error: Option<String>,
    /// `None` なら毎回失敗、`Some(n)` なら残り n 回だけ失敗
    failures_left: Option<AtomicUsize>,
}

impl InMemoryPipelineClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// `report_success` を常に `message` で失敗させる
    pub fn failing_success(mut self, message: impl Into<String>) -> Self {
        self.success_error = Some(message.into());
        self
    }

    /// `report_failure` を常に `message` で失敗させる
    pub fn failing_failure(mut self, message: impl Into<String>) -> Self {
        self.failure_error = Some(message.into());
        self.failures_left = None;
        self
    }

    /// `report_failure` を最初の `times` 回だけ `message` で失敗させる
    pub fn failing_failure_times(mut self, message: impl Into<String>, times: usize) -> Self {
        self.failure_error = Some(message.into());
        self.failures_left = Some(AtomicUsize::new(times));
        self
    }

    /// これまでに呼ばれた完了 API（失敗したものも含む）
    pub fn reports(&self) -> Vec<CompletionReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn failure_count(&self) -> usize {
        self.reports().iter().filter(|r| !r.is_success()).count()
    }

    fn record(&self, report: CompletionReport) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report);
    }
}

#[async_trait]
impl PipelineJobClient for InMemoryPipelineClient {
    async fn report_success(&self, job_id: &JobId) -> Result<(), ReporterError> {
        self.record(CompletionReport::success(job_id));
        match &self.success_error {
            Some(message) => Err(ReporterError::pipeline(message.clone())),
            None => Ok(()),
        }
    }

    async fn report_failure(
        &self,
        job_id: &JobId,
        details: &FailureDetails,
    ) -> Result<(), ReporterError> {
        self.record(CompletionReport::failure(job_id, details.clone()));
        let Some(message) = &self.failure_error else {
            return Ok(());
        };
        if let Some(left) = &self.failures_left
            && left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_err()
        {
            return Ok(());
        }
        Err(ReporterError::pipeline(message.clone()))
    }
}
