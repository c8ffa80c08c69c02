//! Logging setup.
//!
//! One `tracing-subscriber` registry per process. Lambda ships stdout to
//! CloudWatch, so JSON (one event per line) is the default.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Env var selecting the log format (`json` | `pretty`).
pub const LOG_FORMAT_ENV: &str = "HERALD_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logs.
    #[default]
    Json,
    /// Pretty-printed logs (for local runs).
    Pretty,
}

impl LogFormat {
    /// Unknown values fall back to the default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    /// Reads [`LOG_FORMAT_ENV`].
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initializes the logging subsystem.
///
/// `RUST_LOG` controls levels (default `info`). Later calls are no-ops.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        match format {
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json().with_current_span(true).without_time())
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().pretty())
                    .init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::json("json", LogFormat::Json)]
    #[case::pretty("pretty", LogFormat::Pretty)]
    #[case::mixed_case(" Pretty ", LogFormat::Pretty)]
    #[case::unknown("yaml", LogFormat::Json)]
    #[case::empty("", LogFormat::Json)]
    fn parses_log_format(#[case] value: &str, #[case] expected: LogFormat) {
        assert_eq!(LogFormat::parse(value), expected);
    }
}
