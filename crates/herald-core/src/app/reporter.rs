//! JobReporter - unit of work を実行して結果を CodePipeline に返す
//!
//! # フロー
//! 1. event から job_id を取り出す
//! 2. UnitOfWork を実行
//! 3. 成功なら PutJobSuccessResult
//!    - これが失敗したら、そのエラーで PutJobFailureResult（上位には成功に見える）
//! 4. 2 か 3 の fallback が失敗したら PutJobFailureResult
//! 5. "Completed successfully" / "An error occurred" を 1 行ログに出す
//!
//! 4 の失敗レポート自体が失敗したら `HandlerError` を返して invocation を失敗させる。
//! リトライはしない。

use std::sync::Arc;

use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::domain::{
    FailureDetails, HandlerError, InvocationContext, InvocationEvent, JobId, Outcome,
    ReporterError,
};
use crate::ports::{PipelineJobClient, UnitOfWork};

/// 1 invocation = 1 `handle` 呼び出し。invocation 間で共有する状態は持たない。
pub struct JobReporter {
    client: Arc<dyn PipelineJobClient>,
    work: Arc<dyn UnitOfWork>,
}

impl JobReporter {
    pub fn new(client: Arc<dyn PipelineJobClient>, work: Arc<dyn UnitOfWork>) -> Self {
        Self { client, work }
    }

    /// Run the work for `event` and report its outcome.
    ///
    /// First-tier failures become a failure report and `Ok(Outcome::Errored)`.
    /// `Err` only when the failure report itself could not be delivered.
    pub async fn handle(
        &self,
        event: &InvocationEvent,
        ctx: &InvocationContext,
    ) -> Result<Outcome, HandlerError> {
        let job_id = event.job_id();
        let span = info_span!(
            "job_report",
            job_id = %job_id,
            invocation_id = %ctx.invocation_id,
        );
        self.handle_job(job_id, event, ctx).instrument(span).await
    }

    async fn handle_job(
        &self,
        job_id: &JobId,
        event: &InvocationEvent,
        ctx: &InvocationContext,
    ) -> Result<Outcome, HandlerError> {
        let outcome = match self.work_then_succeed(job_id, event, ctx).await {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                warn!(error = %err, "job did not complete, sending failure report");
                if let Err(source) = self.put_job_failure(job_id, &err, ctx).await {
                    error!(error = %source, "failure report was not delivered");
                    return Err(HandlerError::FailureNotReported {
                        job_id: job_id.clone(),
                        source,
                    });
                }
                Outcome::Errored
            }
        };

        match outcome {
            Outcome::Completed => info!("{}", outcome.log_line()),
            Outcome::Errored => error!("{}", outcome.log_line()),
        }
        Ok(outcome)
    }

    async fn work_then_succeed(
        &self,
        job_id: &JobId,
        event: &InvocationEvent,
        ctx: &InvocationContext,
    ) -> Result<(), ReporterError> {
        let summary = self.work.run(event).await?;
        debug!(summary = %summary, "unit of work finished");
        self.put_job_success(job_id, ctx).await
    }

    /// 成功レポート。失敗したらそのエラーで失敗レポートに切り替える。
    async fn put_job_success(
        &self,
        job_id: &JobId,
        ctx: &InvocationContext,
    ) -> Result<(), ReporterError> {
        match self.client.report_success(job_id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "success report rejected, sending failure report");
                self.put_job_failure(job_id, &err, ctx).await
            }
        }
    }

    async fn put_job_failure(
        &self,
        job_id: &JobId,
        err: &ReporterError,
        ctx: &InvocationContext,
    ) -> Result<(), ReporterError> {
        let details = FailureDetails::job_failed(err, &ctx.invocation_id);
        self.client.report_failure(job_id, &details).await
    }
}
