//! Problem definitions.
//!
//! A Problem bundles an ordered goal sequence, the starting state and the
//! allowable operations. The planner copies what it needs and never mutates
//! the caller's Problem.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::condition::{Condition, State};
use crate::error::{GpsError, Result};
use crate::operation::Operation;

fn default_name() -> String {
    "unnamed".to_string()
}

/// A problem which can be solved by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Human readable name, used when rendering.
    #[serde(default = "default_name")]
    pub name: String,

    /// Goals to achieve. Order determines evaluation and clobber-check order.
    pub goal: Vec<Condition>,

    /// The conditions that hold initially.
    #[serde(default)]
    pub state: State,

    /// Allowable operations, in the order they are tried.
    #[serde(default)]
    pub ops: Vec<Operation>,
}

impl Problem {
    /// Create an unnamed problem.
    pub fn new(
        goal: impl IntoIterator<Item = Condition>,
        state: impl IntoIterator<Item = Condition>,
        ops: impl IntoIterator<Item = Operation>,
    ) -> Self {
        Self {
            name: default_name(),
            goal: goal.into_iter().collect(),
            state: state.into_iter().collect(),
            ops: ops.into_iter().collect(),
        }
    }

    /// Set the problem name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Look up an operation by action name.
    pub fn operation(&self, action: &str) -> Option<&Operation> {
        self.ops.iter().find(|op| op.action() == action)
    }

    /// Validate the problem.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| GpsError::InvalidProblem {
            problem: self.name.clone(),
            message,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("problem name cannot be empty".to_string()));
        }

        if let Some(blank) = self
            .goal
            .iter()
            .chain(self.state.iter())
            .find(|c| c.name().trim().is_empty())
        {
            return Err(invalid(format!("condition name cannot be empty ({:?})", blank.name())));
        }

        let mut actions = HashSet::new();
        for op in &self.ops {
            op.validate()?;
            if !actions.insert(op.action()) {
                return Err(invalid(format!("operation '{}' is defined twice", op.action())));
            }
        }

        Ok(())
    }

    /// Calculate a hash of the problem content.
    pub fn content_hash(&self) -> String {
        let content = serde_json::json!({
            "name": self.name,
            "goal": self.goal,
            "state": self.state,
            "ops": self.ops,
        });

        let mut hasher = Sha256::new();
        hasher.update(content.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("{} PROBLEM", self.name.to_uppercase());
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        writeln!(f, "\nGoal:")?;
        for condition in &self.goal {
            writeln!(f, "    {}", condition)?;
        }

        writeln!(f, "\nState:")?;
        for condition in &self.state {
            writeln!(f, "    {}", condition)?;
        }

        write!(f, "\nAllowable Operations:")?;
        for op in &self.ops {
            write!(f, "\n    {}", op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> Problem {
        let op = Operation::builder("look-up-number")
            .requires("have-phone-book")
            .adds("know-phone-number")
            .build()
            .unwrap();
        Problem::new(
            [Condition::new("know-phone-number")],
            [Condition::new("have-phone-book")],
            [op],
        )
        .with_name("phone")
    }

    #[test]
    fn test_display() {
        let rendered = problem().to_string();
        let expected = "PHONE PROBLEM\n-------------\n\nGoal:\n    KNOW-PHONE-NUMBER\n\nState:\n    HAVE-PHONE-BOOK\n\nAllowable Operations:\n    LOOK-UP-NUMBER";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_default_name() {
        let p = Problem::new([], [], []);
        assert_eq!(p.name, "unnamed");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_actions() {
        let mut p = problem();
        p.ops.push(p.ops[0].clone());
        assert!(matches!(p.validate(), Err(GpsError::InvalidProblem { .. })));
    }

    #[test]
    fn test_content_hash_is_stable() {
        let a = problem();
        let b = problem();
        assert_eq!(a.content_hash(), b.content_hash());
        assert_eq!(a.content_hash().len(), 64);

        let renamed = problem().with_name("other");
        assert_ne!(a.content_hash(), renamed.content_hash());
    }

    #[test]
    fn test_deserialize() {
        let p: Problem = serde_json::from_value(serde_json::json!({
            "goal": ["know-phone-number"],
            "state": ["have-phone-book"],
            "ops": [{
                "action": "look-up-number",
                "preconditions": ["have-phone-book"],
                "add": ["know-phone-number"]
            }]
        }))
        .unwrap();
        assert_eq!(p.name, "unnamed");
        assert_eq!(p.operation("look-up-number").unwrap().add_effects().len(), 1);
    }
}
