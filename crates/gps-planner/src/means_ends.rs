//! Means-ends analysis planner implementation.

use std::time::Instant;

use gps_core::{
    ActionHandler, Condition, Failure, FailureReason, LogHandler, Operation, Outcome, Plan,
    Problem, State,
};
use tracing::{debug, info, warn};

use crate::planner::{GoalSolution, Planner, PlannerConfig, SolutionHistory};

/// Means-ends analysis planner.
///
/// Each goal is searched independently against a scratch copy of the real
/// state. Once every goal has a solution and none of them undoes an earlier
/// goal, the recorded operations are executed against the real state in goal
/// order. Nothing is executed if any goal fails.
pub struct MeansEndsPlanner<H = LogHandler> {
    config: PlannerConfig,
    /// Real state; mutated only when a plan is committed.
    state: State,
    ops: Vec<Operation>,
    history: SolutionHistory,
    handler: H,
}

/// Recursive search for a single top-level goal.
struct GoalSearch<'a> {
    ops: &'a [Operation],
    max_depth: usize,
    scratch: State,
    /// Goals being pursued on the active recursion path.
    in_progress: Vec<Condition>,
    simulated: Vec<&'a Operation>,
}

impl<'a> GoalSearch<'a> {
    fn new(ops: &'a [Operation], max_depth: usize, baseline: State) -> Self {
        Self {
            ops,
            max_depth,
            scratch: baseline,
            in_progress: Vec::new(),
            simulated: Vec::new(),
        }
    }

    fn achieve(&mut self, goal: &Condition, depth: usize) -> Result<(), FailureReason> {
        if self.scratch.contains(goal) {
            debug!("{} already holds", goal);
            return Ok(());
        }

        if self.in_progress.contains(goal) {
            debug!("{} is already being pursued", goal);
            return Err(FailureReason::Cycle { goal: goal.clone() });
        }

        if depth >= self.max_depth {
            return Err(FailureReason::DepthExceeded {
                goal: goal.clone(),
                depth: self.max_depth,
            });
        }

        self.in_progress.push(goal.clone());
        let result = self.apply_first_appropriate(goal, depth);
        // Popped on every exit path, success or failure.
        let popped = self.in_progress.pop();
        debug_assert_eq!(popped.as_ref(), Some(goal));

        result
    }

    /// Try the first operation that adds `goal`. Later appropriate operations
    /// are never considered.
    fn apply_first_appropriate(&mut self, goal: &Condition, depth: usize) -> Result<(), FailureReason> {
        let ops = self.ops;
        let Some(op) = ops.iter().find(|op| op.is_appropriate_for(goal)) else {
            debug!("No operation adds {}", goal);
            return Err(FailureReason::NoOperator { goal: goal.clone() });
        };

        debug!("Trying {} for {} at depth {}", op, goal, depth);
        for precondition in op.preconditions() {
            self.achieve(precondition, depth + 1)?;
        }

        op.simulate(&mut self.scratch);
        self.simulated.push(op);
        Ok(())
    }

    fn finish(self) -> GoalSolution {
        GoalSolution {
            state: self.scratch,
            operations: self.simulated.into_iter().cloned().collect(),
        }
    }
}

impl MeansEndsPlanner<LogHandler> {
    /// Create a new planner with default configuration.
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Create a new planner with custom configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self::with_handler(config, LogHandler)
    }
}

impl Default for MeansEndsPlanner<LogHandler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ActionHandler> MeansEndsPlanner<H> {
    /// Create a planner that performs executed actions through `handler`.
    pub fn with_handler(config: PlannerConfig, handler: H) -> Self {
        Self {
            config,
            state: State::new(),
            ops: Vec::new(),
            history: SolutionHistory::new(),
            handler,
        }
    }

    /// The real state as left by the last `solve`.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Per-goal solutions recorded by the last `solve`.
    pub fn history(&self) -> &SolutionHistory {
        &self.history
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    fn search(&self, goal: &Condition) -> Result<GoalSolution, FailureReason> {
        let mut search = GoalSearch::new(&self.ops, self.config.max_depth, self.state.clone());
        search.achieve(goal, 0)?;
        Ok(search.finish())
    }

    /// Execute every recorded operation against the real state, in goal order.
    fn commit(&mut self, problem: &str) -> Plan {
        let mut plan = Plan::new(problem);
        if self.history.is_empty() {
            debug!("No goals recorded, nothing to execute");
        }
        for (goal, solution) in self.history.iter() {
            for op in &solution.operations {
                op.execute_with(&mut self.state, &mut self.handler);
                plan.push(goal.clone(), op.action());
            }
        }
        plan
    }
}

impl<H: ActionHandler> Planner for MeansEndsPlanner<H> {
    fn solve(&mut self, problem: &Problem) -> Outcome {
        let start_time = Instant::now();

        info!(
            "Solving '{}': {} goals, {} operations",
            problem.name,
            problem.goal.len(),
            problem.ops.len()
        );

        self.state = problem.state.clone();
        self.ops = problem.ops.clone();
        self.history.clear();

        for (idx, goal) in problem.goal.iter().enumerate() {
            let solution = match self.search(goal) {
                Ok(solution) => solution,
                Err(reason) => {
                    warn!("Planning failed for {}: {}", goal, reason);
                    return Outcome::Failure(Failure {
                        goal: goal.clone(),
                        reason,
                    });
                }
            };

            debug!("{} achieved with {} operations", goal, solution.operations.len());

            // Every earlier entry in the goal list, repeats included, must
            // still hold once this goal is achieved.
            let clobbered = problem.goal[..idx]
                .iter()
                .find(|earlier| !solution.state.contains(earlier))
                .cloned();
            // A repeated goal replaces its earlier solution, so it is executed once.
            self.history.record(goal.clone(), solution);

            if let Some(earlier) = clobbered {
                let reason = FailureReason::Clobbered {
                    goal: earlier,
                    by: goal.clone(),
                };
                warn!("Planning failed for {}: {}", goal, reason);
                return Outcome::Failure(Failure {
                    goal: goal.clone(),
                    reason,
                });
            }
        }

        let plan = self.commit(&problem.name);
        info!(
            "Solved '{}' with {} steps in {}ms",
            problem.name,
            plan.len(),
            start_time.elapsed().as_millis()
        );
        Outcome::Success(plan)
    }

    fn validate_plan(&self, plan: &Plan, problem: &Problem) -> bool {
        let mut state = problem.state.clone();

        for step in &plan.steps {
            match problem.operation(&step.action) {
                Some(op) if op.is_applicable(&state) => op.simulate(&mut state),
                Some(op) => {
                    debug!("Preconditions of {} do not hold during plan validation", op);
                    return false;
                }
                None => {
                    debug!("Unknown action {} in plan validation", step.action);
                    return false;
                }
            }
        }

        problem.goal.iter().all(|goal| state.contains(goal))
    }

    fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn set_config(&mut self, config: PlannerConfig) {
        self.config = config;
    }
}
