//! Planner trait, configuration and solution bookkeeping.

use gps_core::{Condition, Operation, Outcome, Plan, Problem, State};
use serde::{Deserialize, Serialize};

/// Configuration for the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum depth of a precondition chain below a top-level goal.
    pub max_depth: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

/// Trait for planning engines.
///
/// Planners are synchronous and hold per-call state, so one instance must not
/// serve concurrent `solve` calls.
pub trait Planner {
    /// Solve `problem`, executing the resulting plan against the planner's
    /// real state on success.
    fn solve(&mut self, problem: &Problem) -> Outcome;

    /// Check that `plan` can be replayed from the problem's starting state
    /// with every precondition holding, and that it ends with every goal true.
    fn validate_plan(&self, plan: &Plan, problem: &Problem) -> bool;

    /// Get the planner configuration.
    fn config(&self) -> &PlannerConfig;

    /// Update the planner configuration.
    fn set_config(&mut self, config: PlannerConfig);
}

/// How one goal was achieved during search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSolution {
    /// Scratch state at the moment the goal was satisfied.
    pub state: State,

    /// Operations simulated to reach it, in order.
    pub operations: Vec<Operation>,
}

/// Per-solve record of every achieved goal, in goal order.
#[derive(Debug, Clone, Default)]
pub struct SolutionHistory {
    entries: Vec<(Condition, GoalSolution)>,
}

impl SolutionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the solution for `goal`, replacing any earlier entry in place.
    pub fn record(&mut self, goal: Condition, solution: GoalSolution) {
        match self.entries.iter_mut().find(|(g, _)| *g == goal) {
            Some((_, existing)) => *existing = solution,
            None => self.entries.push((goal, solution)),
        }
    }

    pub fn get(&self, goal: &Condition) -> Option<&GoalSolution> {
        self.entries
            .iter()
            .find(|(g, _)| g == goal)
            .map(|(_, solution)| solution)
    }

    /// Recorded goals in the order they were achieved.
    pub fn goals(&self) -> impl Iterator<Item = &Condition> {
        self.entries.iter().map(|(g, _)| g)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Condition, &GoalSolution)> {
        self.entries.iter().map(|(g, s)| (g, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
