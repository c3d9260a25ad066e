//! Loading problem definitions from JSON files.
//!
//! ```json
//! {
//!   "name": "phone",
//!   "goal": ["know-phone-number"],
//!   "state": ["have-phone-book"],
//!   "ops": [
//!     { "action": "look-up-number",
//!       "preconditions": ["have-phone-book"],
//!       "add": ["know-phone-number"],
//!       "remove": [] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use gps_core::{GpsError, Problem, Result};
use tracing::info;

/// Parse and validate a problem from a JSON document.
pub fn parse_problem(json: &str) -> Result<Problem> {
    let problem: Problem = serde_json::from_str(json)?;
    problem.validate()?;
    Ok(problem)
}

/// Load a problem from a `.json` file.
///
/// A problem without a name is named after the file stem.
pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(GpsError::UnsupportedFormat { path: shown });
    }

    if !path.is_file() {
        return Err(GpsError::NotFound {
            resource_type: "problem file".to_string(),
            id: shown,
        });
    }

    info!("Loading problem from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let problem: Problem = serde_json::from_str(&contents)?;

    let problem = match path.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) if problem.name == "unnamed" => problem.with_name(stem),
        _ => problem,
    };
    problem.validate()?;

    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PHONE: &str = r#"{
        "goal": ["know-phone-number"],
        "state": ["have-phone-book"],
        "ops": [
            { "action": "look-up-number",
              "preconditions": ["have-phone-book"],
              "add": ["know-phone-number"] }
        ]
    }"#;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_problem() {
        let problem = parse_problem(PHONE).unwrap();
        assert_eq!(problem.goal.len(), 1);
        assert_eq!(problem.ops[0].action(), "look-up-number");
    }

    #[test]
    fn test_load_names_problem_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "phone.json", PHONE);

        let problem = load_problem(&path).unwrap();
        assert_eq!(problem.name, "phone");
    }

    #[test]
    fn test_load_keeps_explicit_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "p.JSON", r#"{ "name": "calls", "goal": [] }"#);

        let problem = load_problem(&path).unwrap();
        assert_eq!(problem.name, "calls");
    }

    #[test]
    fn test_load_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "phone.py", PHONE);

        let err = load_problem(&path).unwrap_err();
        assert!(matches!(err, GpsError::UnsupportedFormat { .. }));
        assert_eq!(err.status_code(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_problem(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GpsError::NotFound { .. }));
        assert_eq!(err.status_code(), 2);
    }

    #[test]
    fn test_load_rejects_invalid_operation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "bad.json",
            r#"{ "goal": ["x"], "ops": [ { "action": "", "add": ["x"] } ] }"#,
        );

        let err = load_problem(&path).unwrap_err();
        assert!(matches!(err, GpsError::SerializationError(_)));
        assert_eq!(err.status_code(), 3);
    }
}
