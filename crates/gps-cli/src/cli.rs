//! Command-line arguments.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gps_planner::PlannerConfig;

/// Solve problems using means-ends analysis.
#[derive(Debug, Parser)]
#[command(name = "gps", version)]
pub struct Args {
    /// Name of a built-in problem, or path of a .json problem definition
    #[arg(required_unless_present = "list")]
    pub problem: Option<String>,

    /// Print verbose output to the console
    #[arg(short, long)]
    pub verbose: bool,

    /// List the built-in problems and exit
    #[arg(long)]
    pub list: bool,

    /// Planner configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum precondition chain depth (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Build the planner configuration from the config file and flags.
    pub fn planner_config(&self) -> anyhow::Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&contents)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => PlannerConfig::default(),
        };

        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_required_unless_listing() {
        assert!(Args::try_parse_from(["gps"]).is_err());

        let args = Args::try_parse_from(["gps", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.problem.is_none());
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::try_parse_from(["gps", "-v", "drive-to-school"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.problem.as_deref(), Some("drive-to-school"));
    }

    #[test]
    fn test_default_config() {
        let args = Args::try_parse_from(["gps", "drive-to-school"]).unwrap();
        assert_eq!(args.planner_config().unwrap(), PlannerConfig::default());
    }

    #[test]
    fn test_config_file_with_flag_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");
        fs::write(&path, r#"{ "max_depth": 8 }"#).unwrap();
        let path = path.to_str().unwrap();

        let args = Args::try_parse_from(["gps", "--config", path, "x"]).unwrap();
        assert_eq!(args.planner_config().unwrap().max_depth, 8);

        let args = Args::try_parse_from(["gps", "--config", path, "--max-depth", "3", "x"]).unwrap();
        assert_eq!(args.planner_config().unwrap().max_depth, 3);
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");
        fs::write(&path, "max_depth = 8").unwrap();

        let args = Args::try_parse_from(["gps", "--config", path.to_str().unwrap(), "x"]).unwrap();
        assert!(args.planner_config().is_err());
    }
}
