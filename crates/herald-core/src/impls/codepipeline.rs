//! CodePipelineClient - aws-sdk-codepipeline を使った PipelineJobClient
//!
//! SDK のエラーは `DisplayErrorContext` で文字列にしてから `ReporterError`
//! に変換する。SDK の型は このモジュールの外に出さない。

use async_trait::async_trait;
use aws_sdk_codepipeline::Client;
use aws_sdk_codepipeline::error::DisplayErrorContext;
use aws_sdk_codepipeline::types::{
    FailureDetails as SdkFailureDetails, FailureType as SdkFailureType,
};
use tracing::debug;

use crate::domain::{FailureDetails, FailureType, JobId, ReporterError};
use crate::ports::PipelineJobClient;

/// 本番用 client
///
/// credentials / region は呼び出し側が用意した SDK client に任せる。
#[derive(Debug, Clone)]
pub struct CodePipelineClient {
    client: Client,
}

impl CodePipelineClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn to_sdk_failure_type(failure_type: FailureType) -> SdkFailureType {
    match failure_type {
        FailureType::JobFailed => SdkFailureType::JobFailed,
        FailureType::ConfigurationError => SdkFailureType::ConfigurationError,
        FailureType::PermissionError => SdkFailureType::PermissionError,
        FailureType::RevisionOutOfSync => SdkFailureType::RevisionOutOfSync,
        FailureType::RevisionUnavailable => SdkFailureType::RevisionUnavailable,
        FailureType::SystemUnavailable => SdkFailureType::SystemUnavailable,
    }
}

fn to_sdk_failure_details(details: &FailureDetails) -> Result<SdkFailureDetails, ReporterError> {
    SdkFailureDetails::builder()
        .r#type(to_sdk_failure_type(details.failure_type))
        .message(details.message.as_str())
        .external_execution_id(details.external_execution_id.as_str())
        .build()
        .map_err(|e| ReporterError::pipeline(format!("invalid failure details: {e}")))
}

#[async_trait]
impl PipelineJobClient for CodePipelineClient {
    async fn report_success(&self, job_id: &JobId) -> Result<(), ReporterError> {
        debug!(job_id = %job_id, "PutJobSuccessResult");
        self.client
            .put_job_success_result()
            .job_id(job_id.as_str())
            .send()
            .await
            .map_err(|e| ReporterError::pipeline(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    async fn report_failure(
        &self,
        job_id: &JobId,
        details: &FailureDetails,
    ) -> Result<(), ReporterError> {
        debug!(
            job_id = %job_id,
            failure_type = details.failure_type.as_str(),
            "PutJobFailureResult"
        );
        let sdk_details = to_sdk_failure_details(details)?;
        self.client
            .put_job_failure_result()
            .job_id(job_id.as_str())
            .failure_details(sdk_details)
            .send()
            .await
            .map_err(|e| ReporterError::pipeline(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
