//! UnitOfWork port - job ごとに実行する処理

use async_trait::async_trait;

use crate::domain::{InvocationEvent, ReporterError};

/// job に対して一回だけ実行される処理
///
/// 戻り値の String は成功時の要約（ログにだけ出す）。
/// 失敗は `ReporterError::Work` で返す。
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn run(&self, event: &InvocationEvent) -> Result<String, ReporterError>;
}
