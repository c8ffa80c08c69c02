//! PipelineJobClient port - CodePipeline の完了 API
//!
//! # 実装
//! - `CodePipelineClient`: aws-sdk-codepipeline（本番用）
//! - `InMemoryPipelineClient`: 送信内容を記録する（テスト・ローカル用）

use async_trait::async_trait;

use crate::domain::{FailureDetails, JobId, ReporterError};

/// job の結果を CodePipeline に返す
///
/// job_id は closure で捕まえず、毎回引数で渡す。
#[async_trait]
pub trait PipelineJobClient: Send + Sync {
    /// `PutJobSuccessResult`
    async fn report_success(&self, job_id: &JobId) -> Result<(), ReporterError>;

    /// `PutJobFailureResult`
    async fn report_failure(
        &self,
        job_id: &JobId,
        details: &FailureDetails,
    ) -> Result<(), ReporterError>;
}
