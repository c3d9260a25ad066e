//! Registry of named problem factories.

use std::collections::BTreeMap;
use std::path::Path;

use gps_core::{GpsError, Problem, Result};
use tracing::debug;

use crate::domains::{drive_to_school, monkey_and_bananas};
use crate::loader::load_problem;

/// Builds a fresh problem on every call.
pub type ProblemFactory = fn() -> Result<Problem>;

/// Named problems available to a driver.
#[derive(Debug, Clone, Default)]
pub struct ProblemRegistry {
    factories: BTreeMap<String, ProblemFactory>,
}

impl ProblemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in domains.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(drive_to_school::NAME, drive_to_school::problem);
        registry.register(monkey_and_bananas::NAME, monkey_and_bananas::problem);
        registry
    }

    /// Register a factory, replacing any previous one with the same name.
    pub fn register(&mut self, name: impl Into<String>, factory: ProblemFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the named problem.
    pub fn get(&self, name: &str) -> Result<Problem> {
        let factory = self.factories.get(name).ok_or_else(|| GpsError::NotFound {
            resource_type: "problem".to_string(),
            id: name.to_string(),
        })?;
        factory()
    }

    /// Resolve a driver argument: a registered name, else a problem file path.
    pub fn resolve(&self, source: &str) -> Result<Problem> {
        if self.contains(source) {
            debug!("Resolved '{}' from the registry", source);
            return self.get(source);
        }
        load_problem(Path::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Result<Problem> {
        Ok(Problem::new([], [], []).with_name("tiny"))
    }

    #[test]
    fn test_builtins() {
        let registry = ProblemRegistry::with_builtins();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["drive-to-school", "monkey-and-bananas"]);

        for name in names {
            let problem = registry.get(name).unwrap();
            assert_eq!(problem.name, name);
            assert!(problem.validate().is_ok());
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ProblemRegistry::new();
        registry.register("tiny", tiny);
        assert!(registry.contains("tiny"));
        assert_eq!(registry.get("tiny").unwrap().name, "tiny");
    }

    #[test]
    fn test_get_unknown() {
        let registry = ProblemRegistry::new();
        let err = registry.get("towers-of-hanoi").unwrap_err();
        assert_eq!(err.status_code(), 2);
    }

    #[test]
    fn test_resolve_falls_back_to_files() {
        let registry = ProblemRegistry::with_builtins();
        let err = registry.resolve("not-a-problem.txt").unwrap_err();
        assert!(matches!(err, GpsError::UnsupportedFormat { .. }));

        let data = concat!(env!("CARGO_MANIFEST_DIR"), "/data/phone.json");
        let problem = registry.resolve(data).unwrap();
        assert_eq!(problem.name, "phone");
    }
}
