//! Scheduling engines and metrics.
//!
//! One pure function per policy maps a process snapshot to a timeline and
//! per-process results. Nothing is shared between runs: every call takes
//! an immutable slice and returns freshly built values.
//!
//! | Policy | Entry point | Preemptive | Report order |
//! |--------|-------------|-----------|--------------|
//! | FCFS | [`run_fcfs`] | no | by ID |
//! | SJF | [`run_sjf`] | no | execution |
//! | Round-Robin | [`run_round_robin`] | yes | by ID |
//!
//! [`Simulator`] dispatches a serde-loadable [`SimulationRequest`] to the
//! right engine.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod metrics;
mod round_robin;
mod sequential;

pub use metrics::{aggregate, Averages};
pub use round_robin::run_round_robin;
pub use sequential::{run_fcfs, run_sjf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;
use crate::models::{ProcessDescriptor, ProcessResult, SimulationOutcome};
use crate::validation::{validate_processes, validate_quantum};

/// Scheduling policy selection.
///
/// Serialized with an internal tag, e.g. `{"policy": "round_robin", "quantum": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks a process runs before being preempted.
        quantum: i64,
    },
}

/// Order in which a policy reports its per-process results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOrder {
    /// Sorted by process ID.
    ById,
    /// Order in which processes ran.
    Execution,
}

impl Policy {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// How results of this policy are ordered.
    pub fn report_order(&self) -> ReportOrder {
        match self {
            Self::Sjf => ReportOrder::Execution,
            Self::Fcfs | Self::RoundRobin { .. } => ReportOrder::ById,
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (quantum={quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Input container for one simulation run.
///
/// # Example
/// ```
/// use cpu_schedule::scheduler::{Policy, SimulationRequest, Simulator};
/// use cpu_schedule::models::ProcessDescriptor;
///
/// let request = SimulationRequest::new(vec![
///     ProcessDescriptor::new("A", 4),
///     ProcessDescriptor::new("B", 1),
/// ])
/// .with_policy(Policy::RoundRobin { quantum: 2 });
///
/// let outcome = Simulator::new().run(&request).unwrap();
/// assert_eq!(outcome.timeline.makespan(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Process snapshot to simulate.
    pub processes: Vec<ProcessDescriptor>,
    /// Policy to apply (defaults to FCFS).
    #[serde(default = "default_policy")]
    pub policy: Policy,
}

fn default_policy() -> Policy {
    Policy::Fcfs
}

impl SimulationRequest {
    /// Creates an FCFS request.
    pub fn new(processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            processes,
            policy: default_policy(),
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}

/// Dispatches requests to the engine matching their policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Runs `processes` under `policy`.
    pub fn simulate(
        &self,
        processes: &[ProcessDescriptor],
        policy: Policy,
    ) -> Result<SimulationOutcome, SimulationError> {
        match policy {
            Policy::Fcfs => run_fcfs(processes),
            Policy::Sjf => run_sjf(processes),
            Policy::RoundRobin { quantum } => run_round_robin(processes, quantum),
        }
    }

    /// Runs a request.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationOutcome, SimulationError> {
        self.simulate(&request.processes, request.policy)
    }
}

/// Validates a run's inputs before any output is produced.
///
/// Reports the first problem found; all of them are logged.
fn prepare(policy: &Policy, processes: &[ProcessDescriptor]) -> Result<(), SimulationError> {
    if let Err(errors) = validate_processes(processes) {
        for e in &errors {
            warn!("{policy}: {e}");
        }
        if let Some(first) = errors.into_iter().next() {
            return Err(first.into());
        }
    }
    if let Policy::RoundRobin { quantum } = policy {
        validate_quantum(*quantum).map_err(|e| {
            warn!("{policy}: {e}");
            SimulationError::from(e)
        })?;
    }
    debug!("{policy}: simulating {} processes", processes.len());
    Ok(())
}

fn sort_by_id(results: &mut [ProcessResult]) {
    results.sort_by(|a, b| a.process_id.cmp(&b.process_id));
}
