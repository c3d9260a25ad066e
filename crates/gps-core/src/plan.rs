//! Plans: the ordered operations committed for a solved problem.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::condition::Condition;

/// An ordered sequence of executed operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for this plan.
    pub id: Uuid,

    /// Name of the problem this plan solves.
    pub problem: String,

    /// Steps in execution order.
    pub steps: Vec<Step>,

    /// Timestamp when the plan was committed.
    pub created_at: DateTime<Utc>,
}

/// One executed operation and the top-level goal it was planned for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub goal: Condition,
    pub action: String,
}

impl Plan {
    /// Create an empty plan for the named problem.
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            problem: problem.into(),
            steps: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a step.
    pub fn push(&mut self, goal: Condition, action: impl Into<String>) {
        self.steps.push(Step {
            goal,
            action: action.into(),
        });
    }

    /// The action names in execution order.
    pub fn actions(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.action.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Hash of the ordered `(goal, action)` steps.
    ///
    /// Two plans with the same steps share a fingerprint regardless of their
    /// ids or timestamps.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for step in &self.steps {
            hasher.update(step.goal.name().as_bytes());
            hasher.update([0u8]);
            hasher.update(step.action.as_bytes());
            hasher.update([0xffu8]);
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:>3}. {}", i + 1, step.action.to_uppercase())?;
        }
        Ok(())
    }
}
