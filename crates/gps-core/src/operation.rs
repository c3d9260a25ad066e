//! Operations: the means to an end.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, State};
use crate::error::{GpsError, Result};
use crate::execution::{ActionHandler, LogHandler};

/// A named action with preconditions, additive effects and subtractive
/// effects.
///
/// Immutable once built. Applying an operation mutates a [`State`], never the
/// operation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OperationDefinition")]
pub struct Operation {
    action: String,
    preconditions: Vec<Condition>,
    #[serde(rename = "add")]
    add_effects: Vec<Condition>,
    #[serde(rename = "remove")]
    remove_effects: Vec<Condition>,
}

/// Wire shape of an operation before validation.
#[derive(Debug, Deserialize)]
struct OperationDefinition {
    action: String,
    #[serde(default)]
    preconditions: Vec<Condition>,
    #[serde(default, alias = "add_list")]
    add: Vec<Condition>,
    #[serde(default, alias = "del_list")]
    remove: Vec<Condition>,
}

impl TryFrom<OperationDefinition> for Operation {
    type Error = GpsError;

    fn try_from(def: OperationDefinition) -> Result<Self> {
        OperationBuilder {
            action: def.action,
            preconditions: def.preconditions,
            add_effects: def.add,
            remove_effects: def.remove,
        }
        .build()
    }
}

impl Operation {
    /// Start building an operation for `action`.
    pub fn builder(action: impl Into<String>) -> OperationBuilder {
        OperationBuilder::new(action)
    }

    /// The action performed by this operation.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Conditions that must hold before the operation applies, in declared
    /// order.
    pub fn preconditions(&self) -> &[Condition] {
        &self.preconditions
    }

    /// Conditions made true by applying the operation.
    pub fn add_effects(&self) -> &[Condition] {
        &self.add_effects
    }

    /// Conditions made false by applying the operation.
    pub fn remove_effects(&self) -> &[Condition] {
        &self.remove_effects
    }

    /// Check the invariants every built operation satisfies: a non-blank
    /// action, non-blank condition names, and no condition both added and
    /// removed.
    pub fn validate(&self) -> Result<()> {
        check(
            &self.action,
            &self.preconditions,
            &self.add_effects,
            &self.remove_effects,
        )
    }

    /// An operation is appropriate for a goal iff it adds that goal.
    pub fn is_appropriate_for(&self, goal: &Condition) -> bool {
        self.add_effects.contains(goal)
    }

    /// Check whether every precondition holds in `state`.
    pub fn is_applicable(&self, state: &State) -> bool {
        self.preconditions.iter().all(|c| state.contains(c))
    }

    /// Apply the operation's effects to `state` without performing the
    /// action. Preconditions are not checked.
    pub fn simulate(&self, state: &mut State) {
        self.apply(state);
    }

    /// Apply the operation's effects to `state` and perform the action with
    /// the default [`LogHandler`].
    pub fn execute(&self, state: &mut State) {
        self.execute_with(state, &mut LogHandler);
    }

    /// Apply the operation's effects to `state` and perform the action
    /// through `handler`.
    pub fn execute_with<H: ActionHandler + ?Sized>(&self, state: &mut State, handler: &mut H) {
        handler.perform(self);
        self.apply(state);
    }

    fn apply(&self, state: &mut State) {
        for condition in &self.remove_effects {
            state.remove(condition);
        }
        state.extend(self.add_effects.iter().cloned());
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action.to_uppercase())
    }
}

/// Builder for creating Operations with a fluent API.
#[derive(Debug, Default)]
pub struct OperationBuilder {
    action: String,
    preconditions: Vec<Condition>,
    add_effects: Vec<Condition>,
    remove_effects: Vec<Condition>,
}

impl OperationBuilder {
    /// Create a new OperationBuilder.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    /// Add a precondition.
    pub fn requires(mut self, condition: impl Into<Condition>) -> Self {
        self.preconditions.push(condition.into());
        self
    }

    /// Add several preconditions, keeping their order.
    pub fn requires_all<I, C>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        self.preconditions.extend(conditions.into_iter().map(Into::into));
        self
    }

    /// Add an additive effect.
    pub fn adds(mut self, condition: impl Into<Condition>) -> Self {
        self.add_effects.push(condition.into());
        self
    }

    pub fn adds_all<I, C>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        self.add_effects.extend(conditions.into_iter().map(Into::into));
        self
    }

    /// Add a subtractive effect.
    pub fn removes(mut self, condition: impl Into<Condition>) -> Self {
        self.remove_effects.push(condition.into());
        self
    }

    pub fn removes_all<I, C>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        self.remove_effects.extend(conditions.into_iter().map(Into::into));
        self
    }

    /// Build the Operation.
    pub fn build(self) -> Result<Operation> {
        check(
            &self.action,
            &self.preconditions,
            &self.add_effects,
            &self.remove_effects,
        )?;

        Ok(Operation {
            preconditions: dedup(self.preconditions),
            add_effects: dedup(self.add_effects),
            remove_effects: dedup(self.remove_effects),
            action: self.action,
        })
    }
}

fn check(
    action: &str,
    preconditions: &[Condition],
    add_effects: &[Condition],
    remove_effects: &[Condition],
) -> Result<()> {
    let invalid = |message: String| GpsError::InvalidOperation {
        action: action.to_string(),
        message,
    };

    if action.trim().is_empty() {
        return Err(invalid("action name cannot be empty".to_string()));
    }

    let mut all = preconditions.iter().chain(add_effects).chain(remove_effects);
    if let Some(blank) = all.find(|c| c.name().trim().is_empty()) {
        return Err(invalid(format!("condition name cannot be empty ({:?})", blank.name())));
    }

    if let Some(both) = add_effects.iter().find(|c| remove_effects.contains(c)) {
        return Err(invalid(format!("{} is both added and removed", both)));
    }

    Ok(())
}

/// Drop repeated conditions, keeping the first occurrence.
fn dedup(conditions: Vec<Condition>) -> Vec<Condition> {
    let mut unique: Vec<Condition> = Vec::with_capacity(conditions.len());
    for condition in conditions {
        if !unique.contains(&condition) {
            unique.push(condition);
        }
    }
    unique
}
