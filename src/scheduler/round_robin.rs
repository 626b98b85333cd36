//! Preemptive Round-Robin scheduler.
//!
//! # Algorithm
//!
//! All processes are ready at t=0 and sit in a FIFO ready queue seeded in
//! input order. Repeatedly:
//!
//! 1. Pop the head of the queue.
//! 2. Run it for `slice = min(quantum, remaining)`.
//! 3. If nothing remains, record its completion; otherwise push it to the
//!    tail of the queue.
//!
//! Remaining burst is a local working copy; the input descriptors are
//! never modified.
//!
//! # Complexity
//! O(Σ ceil(burst / quantum)) slices.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};

use super::{prepare, sort_by_id, Policy};
use crate::error::SimulationError;
use crate::models::{
    ExecutionInterval, ProcessDescriptor, ProcessResult, SimulationOutcome, Timeline,
};

/// A queued process with its outstanding work.
#[derive(Debug)]
struct ReadyEntry<'a> {
    process: &'a ProcessDescriptor,
    remaining: i64,
}

/// Round-Robin with a fixed time quantum.
///
/// Results are reported sorted by process ID.
///
/// # Errors
/// [`SimulationError::InvalidInput`] for a non-positive quantum, an empty
/// list, an empty or duplicate ID, or a non-positive burst time.
///
/// # Example
/// ```
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::scheduler::run_round_robin;
///
/// let processes = vec![ProcessDescriptor::new("A", 3), ProcessDescriptor::new("B", 2)];
/// let outcome = run_round_robin(&processes, 2).unwrap();
/// // A[0,2) B[2,4) A[4,5)
/// assert_eq!(outcome.timeline.len(), 3);
/// assert_eq!(outcome.result_for("A").unwrap().completion_time, 5);
/// ```
pub fn run_round_robin(
    processes: &[ProcessDescriptor],
    quantum: i64,
) -> Result<SimulationOutcome, SimulationError> {
    let policy = Policy::RoundRobin { quantum };
    prepare(&policy, processes)?;

    let mut queue: VecDeque<ReadyEntry<'_>> = processes
        .iter()
        .map(|process| ReadyEntry {
            process,
            remaining: process.burst_time,
        })
        .collect();

    let mut timeline = Timeline::new();
    let mut results = Vec::with_capacity(processes.len());
    let mut now = 0;

    while let Some(mut entry) = queue.pop_front() {
        let slice = quantum.min(entry.remaining);
        let start = now;
        now += slice;
        entry.remaining -= slice;

        timeline.push(ExecutionInterval::new(&entry.process.id, start, now));
        trace!(
            "RR: {} ran [{start}, {now}), {} remaining",
            entry.process.id,
            entry.remaining
        );

        if entry.remaining == 0 {
            debug!("RR: {} completed at {now}", entry.process.id);
            results.push(ProcessResult::completed(
                &entry.process.id,
                entry.process.burst_time,
                now,
            ));
        } else {
            queue.push_back(entry);
        }
    }

    sort_by_id(&mut results);
    Ok(SimulationOutcome {
        policy_name: policy.name().to_string(),
        timeline,
        results,
    })
}
