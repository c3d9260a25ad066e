//! # GPS
//!
//! Command-line driver: resolve a problem, solve it, report the outcome.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use gps_core::{GpsError, Outcome, Problem};
use gps_planner::{MeansEndsPlanner, Planner};
use gps_problems::ProblemRegistry;
use tracing::{error, info};

mod cli;
mod logging;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<GpsError>()
                .map_or(3, GpsError::status_code);
            ExitCode::from(code)
        }
    }
}

/// Run the driver for parsed arguments.
fn run(args: &Args) -> anyhow::Result<()> {
    let registry = ProblemRegistry::with_builtins();
    let mut stdout = io::stdout().lock();

    if args.list {
        for name in registry.names() {
            writeln!(stdout, "{}", name)?;
        }
        return Ok(());
    }

    let Some(source) = args.problem.as_deref() else {
        anyhow::bail!("no problem given");
    };

    let config = args.planner_config()?;
    info!("Attempting to load problem from {}", source);
    let problem = registry.resolve(source)?;

    let mut planner = MeansEndsPlanner::with_config(config);
    let outcome = planner.solve(&problem);

    report(&mut stdout, args, &problem, &outcome)?;
    Ok(())
}

/// Write the outcome of a solve to `out`.
fn report(out: &mut impl Write, args: &Args, problem: &Problem, outcome: &Outcome) -> anyhow::Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, outcome)?;
        writeln!(out)?;
        return Ok(());
    }

    if args.verbose {
        writeln!(out, "{}\n", problem)?;
    }

    writeln!(out, "{}", outcome)?;
    match outcome {
        Outcome::Success(plan) if !plan.is_empty() => writeln!(out, "{}", plan)?,
        Outcome::Success(_) => {}
        Outcome::Failure(failure) => writeln!(out, "{}", failure)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let problem = ProblemRegistry::with_builtins()
            .resolve(args.problem.as_deref().unwrap())
            .unwrap();
        let outcome = MeansEndsPlanner::new().solve(&problem);

        let mut out = Vec::new();
        report(&mut out, &args, &problem, &outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_success() {
        let text = render(&["gps", "monkey-and-bananas"]);
        assert!(text.starts_with("SUCCESS\n"));
        assert!(text.contains("  1. PUSH-CHAIR-FROM-DOOR-TO-MIDDLE-ROOM"));
        assert!(text.contains("  5. EAT-BANANAS"));
    }

    #[test]
    fn test_report_verbose_includes_problem() {
        let text = render(&["gps", "-v", "drive-to-school"]);
        assert!(text.starts_with("DRIVE-TO-SCHOOL PROBLEM\n"));
        assert!(text.contains("\nSUCCESS\n"));
    }

    #[test]
    fn test_report_json() {
        let text = render(&["gps", "--json", "drive-to-school"]);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["outcome"], "success");
        assert_eq!(value["steps"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_report_failure() {
        let args = Args::try_parse_from(["gps", "x"]).unwrap();
        let problem = Problem::new([gps_core::Condition::new("fly")], [], []);
        let outcome = MeansEndsPlanner::new().solve(&problem);

        let mut out = Vec::new();
        report(&mut out, &args, &problem, &outcome).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "FAILURE\ncould not achieve FLY: no operation can achieve FLY\n");
    }

    #[test]
    fn test_missing_problem_status_code() {
        let args = Args::try_parse_from(["gps", "towers-of-hanoi.json"]).unwrap();
        let err = run(&args).unwrap_err();
        assert_eq!(err.downcast_ref::<GpsError>().map(GpsError::status_code), Some(2));
    }
}
