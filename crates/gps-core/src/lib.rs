//! # GPS Core
//!
//! Core primitives for the GPS means-ends analysis planner.
//!
//! This crate provides the data model the planner works on:
//! - [`Condition`] and [`State`] - facts about the world
//! - [`Operation`] - a means to an end
//! - [`Problem`] - goals, starting state and allowable operations
//! - [`Plan`] and [`Outcome`] - what a solve produces
//! - [`GpsError`] - error types

pub mod condition;
pub mod error;
pub mod execution;
pub mod operation;
pub mod plan;
pub mod problem;
pub mod types;

// Re-exports for convenience
pub use condition::{Condition, State};
pub use error::{GpsError, Result};
pub use execution::{ActionHandler, LogHandler, RecordingHandler};
pub use operation::{Operation, OperationBuilder};
pub use plan::{Plan, Step};
pub use problem::Problem;
pub use types::{Failure, FailureReason, Outcome};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::condition::{Condition, State};
    pub use crate::error::{GpsError, Result};
    pub use crate::execution::{ActionHandler, LogHandler, RecordingHandler};
    pub use crate::operation::Operation;
    pub use crate::plan::Plan;
    pub use crate::problem::Problem;
    pub use crate::types::{Failure, FailureReason, Outcome};
}
