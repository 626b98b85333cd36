//! Process descriptor model.
//!
//! A process descriptor is the durable, user-entered description of a
//! unit of CPU work: an identifier and the total CPU time it needs.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

/// A process to be simulated.
///
/// # Time Representation
/// All times are abstract integer ticks relative to the start of the
/// simulation (t=0).
///
/// # Arrival
/// Arrival time is derived, not user-supplied: the registry assigns the
/// insertion index (0, 1, 2, …). FCFS orders by it, SJF ignores it and
/// Round-Robin treats every process as ready at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier (non-empty).
    pub id: String,
    /// Total CPU time required (ticks, > 0).
    pub burst_time: i64,
    /// Arrival order (ticks, >= 0).
    #[serde(default)]
    pub arrival_time: i64,
}

impl ProcessDescriptor {
    /// Creates a process arriving at t=0.
    pub fn new(id: impl Into<String>, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            burst_time,
            arrival_time: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }
}
