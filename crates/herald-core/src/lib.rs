//! herald-core
//!
//! Lambda から CodePipeline の job 結果を返すための部品。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, event, report, outcome, errors）
//! - **ports**: 抽象化レイヤー（PipelineJobClient, UnitOfWork）
//! - **app**: JobReporter（1 invocation 分の処理）
//! - **impls**: 実装（CodePipelineClient, InMemoryPipelineClient, PlaceholderWork）
//! - **observability**: ログ初期化

pub mod app;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;

pub use app::JobReporter;
