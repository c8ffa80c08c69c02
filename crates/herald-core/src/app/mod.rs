//! App - アプリケーション層
//!
//! ports を組み合わせて 1 invocation 分の処理を組み立てます。

pub mod reporter;

pub use self::reporter::JobReporter;
