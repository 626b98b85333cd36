//! Non-preemptive schedulers: FCFS and SJF.
//!
//! # Algorithm
//!
//! 1. Validate the snapshot.
//! 2. Order processes with a dispatching rule chain.
//! 3. Run them back-to-back from t=0: each process starts exactly when the
//!    previous one completes, and runs to completion.
//!
//! FCFS and SJF share the timing mechanics and differ only in ordering and
//! report order.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1-5.3.2

use log::debug;

use super::{prepare, sort_by_id, Policy};
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::error::SimulationError;
use crate::models::{
    ExecutionInterval, ProcessDescriptor, ProcessResult, SimulationOutcome, Timeline,
};

/// First-Come-First-Served.
///
/// Runs processes in ascending arrival order (registry insertion order).
/// Results are reported sorted by process ID.
///
/// # Errors
/// [`SimulationError::InvalidInput`] for an empty list, an empty or
/// duplicate ID, or a non-positive burst time.
///
/// # Example
/// ```
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::scheduler::run_fcfs;
///
/// let processes = vec![
///     ProcessDescriptor::new("A", 5),
///     ProcessDescriptor::new("B", 3).with_arrival_time(1),
/// ];
/// let outcome = run_fcfs(&processes).unwrap();
/// assert_eq!(outcome.timeline.intervals[1].start, 5);
/// assert_eq!(outcome.result_for("B").unwrap().waiting_time, 5);
/// ```
pub fn run_fcfs(processes: &[ProcessDescriptor]) -> Result<SimulationOutcome, SimulationError> {
    let policy = Policy::Fcfs;
    prepare(&policy, processes)?;

    let engine = RuleEngine::new().with_rule(rules::Fifo);
    let mut outcome = run_in_order(&policy, processes, &engine);
    sort_by_id(&mut outcome.results);
    Ok(outcome)
}

/// Shortest-Job-First, non-preemptive.
///
/// Ignores arrival and runs processes by ascending burst time, breaking
/// ties by process ID. Results are reported in execution order.
///
/// # Errors
/// Same as [`run_fcfs`].
pub fn run_sjf(processes: &[ProcessDescriptor]) -> Result<SimulationOutcome, SimulationError> {
    let policy = Policy::Sjf;
    prepare(&policy, processes)?;

    let engine = RuleEngine::new()
        .with_rule(rules::Spt)
        .with_final_tie_breaker(TieBreaker::ById);
    Ok(run_in_order(&policy, processes, &engine))
}

/// Runs processes back-to-back in the order chosen by `engine`.
///
/// Results come out in execution order.
fn run_in_order(
    policy: &Policy,
    processes: &[ProcessDescriptor],
    engine: &RuleEngine,
) -> SimulationOutcome {
    let order = engine.sort_indices(processes);
    let mut timeline = Timeline::new();
    let mut results = Vec::with_capacity(order.len());
    let mut now = 0;

    for idx in order {
        let process = &processes[idx];
        let start = now;
        let completion = start + process.burst_time;

        timeline.push(ExecutionInterval::new(&process.id, start, completion));
        results.push(ProcessResult::completed(
            &process.id,
            process.burst_time,
            completion,
        ));

        debug!("{}: {} ran [{start}, {completion})", policy.name(), process.id);
        now = completion;
    }

    SimulationOutcome {
        policy_name: policy.name().to_string(),
        timeline,
        results,
    }
}
