//! Lambda event -> JobReporter の橋渡し

use herald_core::JobReporter;
use herald_core::domain::{InvocationContext, InvocationEvent};
use lambda_runtime::{Context, Error, LambdaEvent};

/// Lambda の request id が CodePipeline 側の externalExecutionId になる
pub fn invocation_context(context: &Context) -> InvocationContext {
    InvocationContext::new(context.request_id.as_str())
}

/// 1 invocation 分の処理
///
/// 失敗レポートが送れなかったときだけ `Err` を返し、Lambda 側で invocation を失敗にする。
pub async fn handle(
    reporter: &JobReporter,
    event: LambdaEvent<InvocationEvent>,
) -> Result<(), Error> {
    let (payload, context) = event.into_parts();
    let ctx = invocation_context(&context);
    reporter.handle(&payload, &ctx).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::domain::{CompletionReport, JobId};
    use herald_core::impls::{InMemoryPipelineClient, PlaceholderWork};
    use herald_core::ports::PipelineJobClient;
    use std::sync::Arc;

    fn lambda_context(request_id: &str) -> Context {
        let mut context = Context::default();
        context.request_id = request_id.to_string();
        context
    }

    fn pipeline_event(job_id: &str, request_id: &str) -> LambdaEvent<InvocationEvent> {
        let payload: InvocationEvent = serde_json::from_value(serde_json::json!({
            "CodePipeline.job": { "id": job_id }
        }))
        .unwrap();
        LambdaEvent::new(payload, lambda_context(request_id))
    }

    fn reporter(client: &Arc<InMemoryPipelineClient>) -> JobReporter {
        let client: Arc<dyn PipelineJobClient> = client.clone();
        JobReporter::new(client, Arc::new(PlaceholderWork))
    }

    #[test]
    fn request_id_becomes_invocation_id() {
        let ctx = invocation_context(&lambda_context("inv-1"));
        assert_eq!(ctx.invocation_id.as_str(), "inv-1");
    }

    #[tokio::test]
    async fn handled_invocation_returns_ok() {
        let client = Arc::new(InMemoryPipelineClient::new());

        handle(&reporter(&client), pipeline_event("job-1", "inv-1"))
            .await
            .unwrap();

        assert_eq!(
            client.reports(),
            vec![CompletionReport::success(&JobId::new("job-1"))]
        );
    }

    #[tokio::test]
    async fn undeliverable_failure_report_fails_invocation() {
        let client = Arc::new(
            InMemoryPipelineClient::new()
                .failing_success("net-down")
                .failing_failure("throttled"),
        );

        let err = handle(&reporter(&client), pipeline_event("job-1", "inv-1"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("job-1"));
        assert!(err.to_string().contains("throttled"));
    }
}
