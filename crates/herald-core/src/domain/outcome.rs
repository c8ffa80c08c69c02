//! Outcome of one invocation as the top level saw it.

use serde::{Deserialize, Serialize};

/// Which of the two fixed log lines the invocation emitted.
///
/// `Completed` can still mean a failure report was sent: when the success
/// call fails and the fallback failure report goes through, the top level
/// never sees the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Completed,
    Errored,
}

impl Outcome {
    pub const COMPLETED_LINE: &'static str = "Completed successfully";
    pub const ERRORED_LINE: &'static str = "An error occurred";

    pub fn log_line(&self) -> &'static str {
        match self {
            Outcome::Completed => Self::COMPLETED_LINE,
            Outcome::Errored => Self::ERRORED_LINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lines_are_fixed() {
        assert_eq!(Outcome::Completed.log_line(), "Completed successfully");
        assert_eq!(Outcome::Errored.log_line(), "An error occurred");
    }

    #[test]
    fn outcome_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Outcome::Completed).unwrap(),
            "\"COMPLETED\""
        );
        assert_eq!(serde_json::to_string(&Outcome::Errored).unwrap(), "\"ERRORED\"");
    }
}
