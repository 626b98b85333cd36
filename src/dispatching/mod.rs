//! Dispatching rules and rule engine for process ordering.
//!
//! Non-preemptive policies differ only in the order they run processes.
//! That order is expressed as a chain of dispatching rules evaluated by a
//! [`RuleEngine`]:
//!
//! | Policy | Rule chain |
//! |--------|-----------|
//! | FCFS | `Fifo`, stable on ties |
//! | SJF | `Spt`, then `TieBreaker::ById` |
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine, TieBreaker};
//! use cpu_schedule::models::ProcessDescriptor;
//!
//! let processes = vec![
//!     ProcessDescriptor::new("B", 3),
//!     ProcessDescriptor::new("A", 3),
//!     ProcessDescriptor::new("C", 1),
//! ];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! assert_eq!(engine.sort_indices(&processes), vec![2, 1, 0]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore;

    /// Exact integer key, when the rule has one.
    ///
    /// The engine compares these instead of [`evaluate`](Self::evaluate)
    /// scores when both processes provide one.
    fn exact_key(&self, _process: &ProcessDescriptor) -> Option<i64> {
        None
    }

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
