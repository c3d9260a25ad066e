//! Planning outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::plan::Plan;

/// Result of a `solve` call.
///
/// Renders as the coarse `SUCCESS` / `FAILURE` signal; the failure variant
/// additionally records why.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Every goal was achieved and the plan was executed.
    Success(Plan),
    /// No plan was committed; the real state is untouched.
    Failure(Failure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The committed plan, if planning succeeded.
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            Outcome::Success(plan) => Some(plan),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(_) => write!(f, "SUCCESS"),
            Outcome::Failure(_) => write!(f, "FAILURE"),
        }
    }
}

/// Why a problem could not be solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// The top-level goal being planned when planning stopped.
    pub goal: Condition,
    pub reason: FailureReason,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not achieve {}: {}", self.goal, self.reason)
    }
}

/// Reason a goal could not be achieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FailureReason {
    /// The first operation adding `goal` could not be applied, or none exists.
    NoOperator { goal: Condition },

    /// `goal` depends on itself through its preconditions.
    Cycle { goal: Condition },

    /// Achieving goal `by` left earlier goal `goal` false.
    Clobbered { goal: Condition, by: Condition },

    /// The precondition chain below `goal` went deeper than allowed.
    DepthExceeded { goal: Condition, depth: usize },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NoOperator { goal } => {
                write!(f, "no operation can achieve {}", goal)
            }
            FailureReason::Cycle { goal } => {
                write!(f, "{} depends on itself", goal)
            }
            FailureReason::Clobbered { goal, by } => {
                write!(f, "achieving {} undoes {}", by, goal)
            }
            FailureReason::DepthExceeded { goal, depth } => {
                write!(f, "precondition chain for {} exceeds depth {}", goal, depth)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let success = Outcome::Success(Plan::new("test"));
        let failure = Outcome::Failure(Failure {
            goal: Condition::new("a"),
            reason: FailureReason::Cycle {
                goal: Condition::new("b"),
            },
        });
        assert_eq!(success.to_string(), "SUCCESS");
        assert_eq!(failure.to_string(), "FAILURE");
        assert!(success.plan().is_some());
        assert!(failure.failure().is_some());
    }

    #[test]
    fn test_failure_display() {
        let failure = Failure {
            goal: Condition::new("g1"),
            reason: FailureReason::Clobbered {
                goal: Condition::new("g1"),
                by: Condition::new("g2"),
            },
        };
        assert_eq!(failure.to_string(), "could not achieve G1: achieving G2 undoes G1");
    }

    #[test]
    fn test_reason_serialization() {
        let reason = FailureReason::NoOperator {
            goal: Condition::new("fly"),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "no_operator", "goal": "fly" }));
    }
}
