//! CompletionReport: what gets sent back to CodePipeline for a job.
//!
//! A report is built right before the outbound call and dropped after it.
//! Nothing here talks to AWS; `impls::codepipeline` maps these shapes onto
//! the SDK types.

use serde::{Deserialize, Serialize};

use super::errors::ReporterError;
use super::ids::{InvocationId, JobId};

/// CodePipeline rejects failure messages longer than this.
pub const MAX_FAILURE_MESSAGE_CHARS: usize = 5000;

/// Failure categories accepted by `PutJobFailureResult`.
///
/// Serialized with the exact names the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureType {
    JobFailed,
    ConfigurationError,
    PermissionError,
    RevisionOutOfSync,
    RevisionUnavailable,
    SystemUnavailable,
}

impl FailureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureType::JobFailed => "JobFailed",
            FailureType::ConfigurationError => "ConfigurationError",
            FailureType::PermissionError => "PermissionError",
            FailureType::RevisionOutOfSync => "RevisionOutOfSync",
            FailureType::RevisionUnavailable => "RevisionUnavailable",
            FailureType::SystemUnavailable => "SystemUnavailable",
        }
    }
}

/// `failureDetails` of a failure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDetails {
    pub message: String,
    #[serde(rename = "type")]
    pub failure_type: FailureType,
    pub external_execution_id: InvocationId,
}

impl FailureDetails {
    /// `JobFailed` details for `error`, tagged with the invocation that saw it.
    pub fn job_failed(error: &ReporterError, invocation_id: &InvocationId) -> Self {
        Self {
            message: failure_message(error),
            failure_type: FailureType::JobFailed,
            external_execution_id: invocation_id.clone(),
        }
    }
}

/// One of the two completion calls, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionReport {
    Success {
        job_id: JobId,
    },
    Failure {
        job_id: JobId,
        details: FailureDetails,
    },
}

impl CompletionReport {
    pub fn success(job_id: &JobId) -> Self {
        Self::Success {
            job_id: job_id.clone(),
        }
    }

    pub fn failure(job_id: &JobId, details: FailureDetails) -> Self {
        Self::Failure {
            job_id: job_id.clone(),
            details,
        }
    }

    pub fn job_id(&self) -> &JobId {
        match self {
            CompletionReport::Success { job_id } => job_id,
            CompletionReport::Failure { job_id, .. } => job_id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompletionReport::Success { .. })
    }
}

/// JSON-encoded error message, e.g. `boom` -> `"boom"`.
///
/// The raw message is cut on a char boundary so that the encoded form fits
/// in [`MAX_FAILURE_MESSAGE_CHARS`].
pub fn failure_message(error: &ReporterError) -> String {
    let chars: Vec<char> = error.to_string().chars().collect();
    let encode = |n: usize| serde_json::Value::String(chars[..n].iter().collect()).to_string();
    let fits = |s: &str| s.chars().count() <= MAX_FAILURE_MESSAGE_CHARS;

    let full = encode(chars.len());
    if fits(&full) {
        return full;
    }

    // 符号化後の長さは n に対して単調増加なので二分探索
    let (mut lo, mut hi) = (0, chars.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits(&encode(mid)) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    encode(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn failure_message_is_json_encoded() {
        assert_eq!(failure_message(&ReporterError::work("boom")), "\"boom\"");
    }

    #[test]
    fn failure_message_escapes_quotes_and_newlines() {
        let err = ReporterError::pipeline("bad \"token\"\nretry later");
        assert_eq!(failure_message(&err), r#""bad \"token\"\nretry later""#);
    }

    #[rstest]
    #[case::ascii("x")]
    #[case::multibyte("あ")]
    #[case::escaped("\"")]
    fn failure_message_is_capped(#[case] unit: &str) {
        let err = ReporterError::work(unit.repeat(MAX_FAILURE_MESSAGE_CHARS * 2));
        let msg = failure_message(&err);
        assert!(msg.chars().count() <= MAX_FAILURE_MESSAGE_CHARS);
        assert!(msg.starts_with('"') && msg.ends_with('"'));
        let decoded: String = serde_json::from_str(&msg).unwrap();
        assert!(!decoded.is_empty());
    }

    #[test]
    fn job_failed_details_carry_invocation_id() {
        let details =
            FailureDetails::job_failed(&ReporterError::work("boom"), &InvocationId::new("inv-1"));
        assert_eq!(details.failure_type, FailureType::JobFailed);
        assert_eq!(details.failure_type.as_str(), "JobFailed");
        assert_eq!(details.external_execution_id.as_str(), "inv-1");
        assert_eq!(details.message, "\"boom\"");
    }

    #[test]
    fn failure_details_use_api_field_names() {
        let details =
            FailureDetails::job_failed(&ReporterError::work("boom"), &InvocationId::new("inv-1"));
        let v = serde_json::to_value(&details).unwrap();
        assert_eq!(v["type"], "JobFailed");
        assert_eq!(v["externalExecutionId"], "inv-1");
        assert_eq!(v["message"], "\"boom\"");
    }

    #[test]
    fn report_accessors() {
        let job = JobId::new("job-1");
        let ok = CompletionReport::success(&job);
        assert!(ok.is_success());
        assert_eq!(ok.job_id(), &job);

        let details =
            FailureDetails::job_failed(&ReporterError::work("boom"), &InvocationId::new("inv-1"));
        let ng = CompletionReport::failure(&job, details);
        assert!(!ng.is_success());
        assert_eq!(ng.job_id(), &job);
    }
}
