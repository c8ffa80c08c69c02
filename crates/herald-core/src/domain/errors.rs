//! Errors - エラー型と分類
//!
//! # 分類
//! - `ReporterError`: 一段目のエラー。handler 内で失敗レポートに変換される。
//! - `HandlerError`: 失敗レポート自体が送れなかった場合。invocation を失敗させる。

use thiserror::Error;

use super::ids::JobId;

/// 一段目のエラー
///
/// Display はメッセージそのもの。失敗レポートの message はこれを JSON 化したもの。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReporterError {
    /// unit of work が失敗した
    #[error("{0}")]
    Work(String),

    /// CodePipeline への完了 API 呼び出しが失敗した
    #[error("{0}")]
    Pipeline(String),
}

impl ReporterError {
    pub fn work(message: impl Into<String>) -> Self {
        Self::Work(message.into())
    }

    pub fn pipeline(message: impl Into<String>) -> Self {
        Self::Pipeline(message.into())
    }
}

/// `JobReporter::handle` から外に出る唯一のエラー
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to report job failure for {job_id}: {source}")]
    FailureNotReported {
        job_id: JobId,
        #[source]
        source: ReporterError,
    },
}
