//! # GPS Planner
//!
//! Means-ends analysis planning engine: recursive goal achievement with
//! precondition expansion, simulated state mutation, clobber detection and a
//! goal-in-progress guard against cyclic preconditions.

pub mod means_ends;
pub mod planner;

pub use means_ends::MeansEndsPlanner;
pub use planner::{GoalSolution, Planner, PlannerConfig, SolutionHistory};
