//! Run outcome and serialization

use serde::{Deserialize, Serialize};

use crate::core::types::Step;

/// Notice emitted when the step budget runs out with pieces left
pub const UNFINISHED_NOTICE: &str = "The walker has not yet eaten all of the pieces";

/// Result of a single walker run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub lattice_size: usize,
    pub piece_count: usize,
    pub max_steps: Step,
    /// Seed the run's generator was built from, when known
    pub seed: Option<u64>,
    /// Reported step count; equals `max_steps` when the run did not finish
    pub steps: Step,
    /// Steps on which the walker could not move
    pub traps: Step,
    pub pieces_remaining: usize,
    pub completed: bool,
}

impl RunOutcome {
    pub fn failed(&self) -> bool {
        !self.completed
    }

    pub fn to_json(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "N={}, M={}, max_steps={}\nSteps taken: {}\nFailed to finish: {}",
            self.lattice_size,
            self.piece_count,
            self.max_steps,
            self.steps,
            self.failed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunOutcome {
        RunOutcome {
            lattice_size: 10,
            piece_count: 5,
            max_steps: 1000,
            seed: Some(42),
            steps: 87,
            traps: 0,
            pieces_remaining: 0,
            completed: true,
        }
    }

    #[test]
    fn test_summary_lines() {
        let summary = sample().summary();
        assert!(summary.contains("N=10, M=5, max_steps=1000"));
        assert!(summary.contains("Steps taken: 87"));
        assert!(summary.contains("Failed to finish: false"));
    }

    #[test]
    fn test_json_fields() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["steps"], 87);
        assert_eq!(value["completed"], true);
        assert_eq!(value["seed"], 42);
    }
}
