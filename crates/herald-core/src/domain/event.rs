//! Invocation input: the CodePipeline job event and the runtime context.

use serde::{Deserialize, Serialize};

use super::ids::{InvocationId, JobId};

/// Lambda に届く CodePipeline の invoke イベント
///
/// ```json
/// { "CodePipeline.job": { "id": "...", "accountId": "...", "data": { ... } } }
/// ```
///
/// `"CodePipeline.job"` が無い payload はデシリアライズの時点で失敗する
/// （ここでは追加の検証はしない）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(rename = "CodePipeline.job")]
    pub job: PipelineJob,
}

/// `"CodePipeline.job"` の中身
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineJob {
    pub id: JobId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// actionConfiguration / inputArtifacts など。中身は解釈しない。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl InvocationEvent {
    pub fn new(job_id: impl Into<JobId>) -> Self {
        Self {
            job: PipelineJob {
                id: job_id.into(),
                account_id: None,
                data: None,
            },
        }
    }

    pub fn job_id(&self) -> &JobId {
        &self.job.id
    }
}

/// 実行コンテキスト。使うのは invocation id だけ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub invocation_id: InvocationId,
}

impl InvocationContext {
    pub fn new(invocation_id: impl Into<InvocationId>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
        }
    }
}
