//! Process registry.
//!
//! Holds the ordered set of processes entered during one editing session.
//! The registry owns the durable descriptors; the scheduling engine only
//! ever receives a [`snapshot`](ProcessRegistry::snapshot) and never
//! writes back to it.

use log::debug;
use std::collections::HashSet;

use crate::error::SimulationError;
use crate::models::ProcessDescriptor;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Ordered collection of process descriptors.
///
/// Arrival time is assigned on insertion as the process's index
/// (0, 1, 2, …).
///
/// # Example
/// ```
/// use cpu_schedule::registry::ProcessRegistry;
///
/// let mut registry = ProcessRegistry::new();
/// registry.add("P1", 4).unwrap();
/// registry.add("P2", 2).unwrap();
/// assert_eq!(registry.get("P2").unwrap().arrival_time, 1);
/// assert!(registry.add("P1", 3).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<ProcessDescriptor>,
    ids: HashSet<String>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a process.
    ///
    /// The ID is trimmed. Rejects empty IDs, duplicate IDs and
    /// non-positive burst times with [`SimulationError::InvalidInput`].
    pub fn add(&mut self, id: &str, burst_time: i64) -> Result<&ProcessDescriptor, SimulationError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Process ID cannot be empty",
            )
            .into());
        }
        if burst_time <= 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{id}' has invalid burst time {burst_time}"),
            )
            .into());
        }
        if self.ids.contains(id) {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {id}"),
            )
            .into());
        }

        let arrival = self.processes.len() as i64;
        self.ids.insert(id.to_string());
        self.processes
            .push(ProcessDescriptor::new(id, burst_time).with_arrival_time(arrival));
        debug!("registered process {id} (burst={burst_time}, arrival={arrival})");

        let index = self.processes.len() - 1;
        Ok(&self.processes[index])
    }

    /// Finds a process by ID.
    pub fn get(&self, id: &str) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Iterates processes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessDescriptor> {
        self.processes.iter()
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Immutable copy of the current processes, for handing to the engine.
    pub fn snapshot(&self) -> Vec<ProcessDescriptor> {
        self.processes.clone()
    }

    /// Removes every process.
    pub fn clear(&mut self) {
        debug!("clearing {} registered processes", self.processes.len());
        self.processes.clear();
        self.ids.clear();
    }

    /// One display line per process: `PID: <id> | Burst: <burst>`.
    ///
    /// The ID is left-aligned to 10 columns and the burst to 3, so short
    /// values line up in a monospace list.
    pub fn summary_lines(&self) -> Vec<String> {
        self.processes
            .iter()
            .map(|p| format!("PID: {:<10} | Burst: {:<3}", p.id, p.burst_time))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_insertion_order() {
        let mut r = ProcessRegistry::new();
        r.add("A", 5).unwrap();
        r.add("B", 3).unwrap();
        r.add("C", 8).unwrap();

        let arrivals: Vec<i64> = r.iter().map(|p| p.arrival_time).collect();
        assert_eq!(arrivals, vec![0, 1, 2]);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_add_trims_id() {
        let mut r = ProcessRegistry::new();
        let p = r.add("  P1 ", 2).unwrap();
        assert_eq!(p.id, "P1");
        assert!(r.get("P1").is_some());
    }

    #[test]
    fn test_rejects_empty_id() {
        let mut r = ProcessRegistry::new();
        let err = r.add("  ", 2).unwrap_err();
        assert_eq!(err.kind(), Some(ValidationErrorKind::EmptyId));
        assert!(r.is_empty());
    }

    #[test]
    fn test_rejects_non_positive_burst() {
        let mut r = ProcessRegistry::new();
        assert_eq!(
            r.add("A", 0).unwrap_err().kind(),
            Some(ValidationErrorKind::NonPositiveBurst)
        );
        assert!(r.add("A", -2).is_err());
        assert!(r.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut r = ProcessRegistry::new();
        r.add("A", 1).unwrap();
        assert_eq!(
            r.add("A", 4).unwrap_err().kind(),
            Some(ValidationErrorKind::DuplicateId)
        );
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut r = ProcessRegistry::new();
        r.add("A", 5).unwrap();
        let mut snapshot = r.snapshot();
        snapshot[0].burst_time = 99;
        assert_eq!(r.get("A").unwrap().burst_time, 5);
    }

    #[test]
    fn test_clear_resets_arrivals_and_ids() {
        let mut r = ProcessRegistry::new();
        r.add("A", 5).unwrap();
        r.add("B", 5).unwrap();
        r.clear();
        assert!(r.is_empty());

        let p = r.add("A", 1).unwrap();
        assert_eq!(p.arrival_time, 0);
    }

    #[test]
    fn test_summary_lines() {
        let mut r = ProcessRegistry::new();
        r.add("A", 5).unwrap();
        r.add("LongerName01", 1234).unwrap();
        assert_eq!(
            r.summary_lines(),
            vec![
                "PID: A          | Burst: 5  ".to_string(),
                "PID: LongerName01 | Burst: 1234".to_string(),
            ]
        );
    }
}
