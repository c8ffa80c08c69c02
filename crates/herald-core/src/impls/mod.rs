//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **CodePipelineClient**: aws-sdk-codepipeline を使う本番用 client
//! - **InMemoryPipelineClient**: 送信内容を記録する開発・テスト用 client
//! - **PlaceholderWork**: 常に成功する仮の unit of work

pub mod codepipeline;
pub mod inmem_pipeline;
pub mod placeholder_work;

pub use self::codepipeline::CodePipelineClient;
pub use self::inmem_pipeline::InMemoryPipelineClient;
pub use self::placeholder_work::PlaceholderWork;
