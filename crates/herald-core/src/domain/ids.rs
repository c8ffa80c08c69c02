//! Domain identifiers (strongly-typed IDs).
//!
//! CodePipeline の job id と Lambda の invocation id はどちらも文字列ですが、
//! 取り違えると別の job に結果を返してしまうので型で区別します。
//!
//! ## Phantom Type パターン
//! `Id<T>` で共通実装を持ち、`T` はコンパイル時だけ使うマーカー型です。
//! Display は値そのもの（AWS API にそのまま渡すため prefix なし）。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// IdMarker は各 ID 型のマーカー trait
pub trait IdMarker: Send + Sync + 'static {
    /// ログやエラーで使う名前（例: "job_id"）
    fn label() -> &'static str;
}

/// 文字列ベースのジェネリック ID 型
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T: IdMarker> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", T::label(), self.value)
    }
}

impl<T: IdMarker> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// CodePipeline job のマーカー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobMarker {}

impl IdMarker for JobMarker {
    fn label() -> &'static str {
        "job_id"
    }
}

/// Lambda invocation のマーカー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InvocationMarker {}

impl IdMarker for InvocationMarker {
    fn label() -> &'static str {
        "invocation_id"
    }
}

/// CodePipeline が払い出した job の ID
pub type JobId = Id<JobMarker>;

/// Lambda ランタイムが払い出した invocation (request) の ID
pub type InvocationId = Id<InvocationMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_value() {
        let id = JobId::new("11111111-2222-3333-4444-555555555555");
        assert_eq!(id.to_string(), "11111111-2222-3333-4444-555555555555");
    }

    #[test]
    fn debug_names_the_id_kind() {
        let job = JobId::new("job-1");
        let inv = InvocationId::new("inv-1");
        assert_eq!(format!("{job:?}"), "job_id(job-1)");
        assert_eq!(format!("{inv:?}"), "invocation_id(inv-1)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = JobId::new("job-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"job-1\"");

        let back: JobId = serde_json::from_str("\"job-1\"").unwrap();
        assert_eq!(back, id);
    }
}
