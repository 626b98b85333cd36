//! Per-process results and run outcome.

use serde::{Deserialize, Serialize};

use super::Timeline;

/// Metrics for one completed process.
///
/// Arrivals are normalised to the start of the simulation, so turnaround
/// equals completion time and waiting is turnaround minus burst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub process_id: String,
    /// Total CPU time the process required.
    pub burst_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
    /// Completion minus arrival (arrival normalised to 0).
    pub turnaround_time: i64,
    /// Turnaround minus burst; never negative.
    pub waiting_time: i64,
}

impl ProcessResult {
    /// Derives the metrics of a process that finished at `completion_time`.
    pub fn completed(process_id: impl Into<String>, burst_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time;
        Self {
            process_id: process_id.into(),
            burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - burst_time,
        }
    }
}

/// Everything a single scheduling run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Short policy name ("FCFS", "SJF", "Round Robin").
    pub policy_name: String,
    /// Execution timeline.
    pub timeline: Timeline,
    /// Per-process results in the policy's report order.
    pub results: Vec<ProcessResult>,
}

impl SimulationOutcome {
    /// Result for a given process.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.process_id == process_id)
    }

    /// Process ids in report order.
    pub fn result_ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.process_id.as_str()).collect()
    }
}
