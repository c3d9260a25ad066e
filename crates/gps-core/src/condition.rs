//! Conditions and world state.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An atomic, named fact about the world.
///
/// Identity is the name: two conditions with the same name are
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition {
    name: String,
}

impl Condition {
    /// Create a condition with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The unique name of the condition.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.to_uppercase())
    }
}

impl From<&str> for Condition {
    fn from(name: &str) -> Self {
        Condition::new(name)
    }
}

impl From<String> for Condition {
    fn from(name: String) -> Self {
        Condition::new(name)
    }
}

/// The set of conditions that currently hold.
///
/// Backed by an ordered set so iteration (and everything derived from it,
/// such as rendering and hashing) is deterministic. Cloning produces an
/// independent value; scratch states never alias the state they were copied
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    conditions: BTreeSet<Condition>,
}

impl State {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a condition holds.
    pub fn contains(&self, condition: &Condition) -> bool {
        self.conditions.contains(condition)
    }

    /// Make a condition hold. Returns false if it already held.
    pub fn insert(&mut self, condition: Condition) -> bool {
        self.conditions.insert(condition)
    }

    /// Make a condition absent. Returns false if it was not present.
    pub fn remove(&mut self, condition: &Condition) -> bool {
        self.conditions.remove(condition)
    }

    /// Iterate the conditions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl FromIterator<Condition> for State {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Condition> for State {
    fn extend<I: IntoIterator<Item = Condition>>(&mut self, iter: I) {
        self.conditions.extend(iter);
    }
}

impl IntoIterator for State {
    type Item = Condition;
    type IntoIter = std::collections::btree_set::IntoIter<Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.into_iter()
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Condition;
    type IntoIter = std::collections::btree_set::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}
