//! PlaceholderWork - 実処理が入るまでの仮実装

use async_trait::async_trait;

use crate::domain::{InvocationEvent, ReporterError};
use crate::ports::UnitOfWork;

/// 何もせずに "Done" を返す
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderWork;

#[async_trait]
impl UnitOfWork for PlaceholderWork {
    async fn run(&self, _event: &InvocationEvent) -> Result<String, ReporterError> {
        Ok("Done".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn placeholder_always_succeeds() {
        let out = PlaceholderWork
            .run(&InvocationEvent::new("job-1"))
            .await
            .unwrap();
        assert_eq!(out, "Done");
    }
}
