//! # GPS Problems
//!
//! Problem sources for the GPS planner: a registry of named problem
//! factories, the classic built-in domains, and a JSON file loader.

pub mod domains;
pub mod loader;
pub mod registry;

pub use loader::{load_problem, parse_problem};
pub use registry::{ProblemFactory, ProblemRegistry};
