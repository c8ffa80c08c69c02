//! Ports - 抽象化レイヤー
//!
//! JobReporter が外の世界と話すための trait を定義します。
//! 本番では CodePipeline の SDK client、テストでは in-memory 実装を差し込みます。

pub mod pipeline;
pub mod work;

pub use self::pipeline::PipelineJobClient;
pub use self::work::UnitOfWork;
