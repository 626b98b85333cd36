//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessDescriptor;

/// First In First Out.
///
/// Prioritizes processes that arrived earlier. Arrival is the registry
/// insertion index, so this reproduces entry order.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        process.arrival_time as f64
    }

    fn exact_key(&self, process: &ProcessDescriptor) -> Option<i64> {
        Some(process.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with shorter burst time.
/// Minimizes average waiting time on a single processor.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        process.burst_time as f64
    }

    fn exact_key(&self, process: &ProcessDescriptor) -> Option<i64> {
        Some(process.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}
