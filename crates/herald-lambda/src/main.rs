use std::sync::Arc;

use aws_config::BehaviorVersion;
use herald_core::JobReporter;
use herald_core::domain::InvocationEvent;
use herald_core::impls::{CodePipelineClient, PlaceholderWork};
use herald_core::observability::{LogFormat, init_logging};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::info;

mod invocation;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging(LogFormat::from_env());

    // client は cold start ごとに 1 回だけ作り、invocation 間で使い回す
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = CodePipelineClient::new(aws_sdk_codepipeline::Client::new(&config));
    let reporter = Arc::new(JobReporter::new(
        Arc::new(client),
        Arc::new(PlaceholderWork),
    ));
    info!(region = ?config.region(), "herald ready");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InvocationEvent>| {
        let reporter = Arc::clone(&reporter);
        async move { invocation::handle(&reporter, event).await }
    }))
    .await
}
