//! Schedule quality metrics.
//!
//! Averages per-process waiting and turnaround times produced by any
//! scheduling policy.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting | Σ(turnaround − burst) / n |
//! | Average Turnaround | Σ(completion − arrival) / n |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimulationError;
use crate::models::ProcessResult;

/// Average waiting and turnaround times of one run.
///
/// Values are kept at full precision; [`Display`](fmt::Display) renders
/// them with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean waiting time (ticks).
    pub average_waiting: f64,
    /// Mean turnaround time (ticks).
    pub average_turnaround: f64,
}

impl fmt::Display for Averages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average Waiting Time: {:.2}  |  Average Turnaround Time: {:.2}",
            self.average_waiting, self.average_turnaround
        )
    }
}

/// Computes average waiting and turnaround times.
///
/// # Errors
/// [`SimulationError::EmptyInput`] if `results` is empty.
///
/// # Example
/// ```
/// use cpu_schedule::models::ProcessResult;
/// use cpu_schedule::scheduler::aggregate;
///
/// let results = vec![
///     ProcessResult::completed("A", 5, 5),
///     ProcessResult::completed("B", 3, 8),
/// ];
/// let averages = aggregate(&results).unwrap();
/// assert!((averages.average_waiting - 2.5).abs() < 1e-10);
/// assert_eq!(averages.to_string(), "Average Waiting Time: 2.50  |  Average Turnaround Time: 6.50");
/// ```
pub fn aggregate(results: &[ProcessResult]) -> Result<Averages, SimulationError> {
    if results.is_empty() {
        return Err(SimulationError::EmptyInput);
    }

    // Summed as f64: n completion times near the clock limit overflow i64.
    let n = results.len() as f64;
    let total_waiting: f64 = results.iter().map(|r| r.waiting_time as f64).sum();
    let total_turnaround: f64 = results.iter().map(|r| r.turnaround_time as f64).sum();

    Ok(Averages {
        average_waiting: total_waiting / n,
        average_turnaround: total_turnaround / n,
    })
}
