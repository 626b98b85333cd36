//! Timeline (Gantt chart) model.
//!
//! A timeline is the ordered sequence of execution intervals produced by a
//! scheduling run. Renderers consume it directly: they colour each process
//! and label interval boundaries.
//!
//! # Contiguity
//! Every built-in policy produces gap-free timelines starting at t=0. The
//! format itself allows gaps (e.g. future idle time), which is why the
//! boundary-label helpers compare neighbouring intervals instead of
//! assuming contiguity.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single stretch of processor time given to one process.
///
/// Covers the half-open interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process occupying the processor.
    pub process_id: String,
    /// Start tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered sequence of execution intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals in chronological order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterates intervals in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Latest end time across all intervals.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Sum of all interval durations.
    pub fn total_busy_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// Whether the timeline starts at 0 and has no gaps or overlaps.
    ///
    /// An empty timeline is trivially contiguous.
    pub fn is_contiguous(&self) -> bool {
        match self.intervals.first() {
            None => true,
            Some(first) if first.start != 0 => false,
            Some(_) => self
                .intervals
                .windows(2)
                .all(|w| w[0].end == w[1].start),
        }
    }

    /// All intervals given to a process, in chronological order.
    pub fn intervals_for(&self, process_id: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Completion time of a process (end of its last interval).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.intervals_for(process_id)
            .iter()
            .map(|i| i.end)
            .max()
    }

    /// Whether a renderer should draw the start label of interval `index`.
    ///
    /// True for the first interval and whenever the previous interval does
    /// not end where this one starts. Returns `false` for out-of-range indices.
    pub fn shows_start_label(&self, index: usize) -> bool {
        match self.intervals.get(index) {
            None => false,
            Some(_) if index == 0 => true,
            Some(current) => self.intervals[index - 1].end != current.start,
        }
    }

    /// Whether a renderer should draw the end label of interval `index`.
    ///
    /// True for the last interval and whenever the next interval does not
    /// start where this one ends. Returns `false` for out-of-range indices.
    pub fn shows_end_label(&self, index: usize) -> bool {
        match self.intervals.get(index) {
            None => false,
            Some(current) => match self.intervals.get(index + 1) {
                None => true,
                Some(next) => next.start != current.end,
            },
        }
    }

    /// Assigns each process a palette slot in order of first appearance.
    ///
    /// Slots wrap modulo `palette_len`. Returns an empty map when
    /// `palette_len` is zero.
    pub fn color_slots(&self, palette_len: usize) -> HashMap<String, usize> {
        let mut slots: HashMap<String, usize> = HashMap::new();
        if palette_len == 0 {
            return slots;
        }
        for interval in &self.intervals {
            if !slots.contains_key(&interval.process_id) {
                let slot = slots.len() % palette_len;
                slots.insert(interval.process_id.clone(), slot);
            }
        }
        slots
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(ExecutionInterval::new("A", 0, 2));
        t.push(ExecutionInterval::new("B", 2, 4));
        t.push(ExecutionInterval::new("A", 4, 7));
        t
    }

    #[test]
    fn test_interval_duration() {
        assert_eq!(ExecutionInterval::new("A", 3, 8).duration(), 5);
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 7);
        assert_eq!(t.total_busy_time(), 7);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_contiguity() {
        assert!(sample_timeline().is_contiguous());
        assert!(Timeline::new().is_contiguous());

        let mut gap = sample_timeline();
        gap.push(ExecutionInterval::new("C", 9, 10));
        assert!(!gap.is_contiguous());

        let mut late_start = Timeline::new();
        late_start.push(ExecutionInterval::new("A", 1, 3));
        assert!(!late_start.is_contiguous());
    }

    #[test]
    fn test_intervals_for_and_completion() {
        let t = sample_timeline();
        assert_eq!(t.intervals_for("A").len(), 2);
        assert_eq!(t.completion_time("A"), Some(7));
        assert_eq!(t.completion_time("B"), Some(4));
        assert_eq!(t.completion_time("Z"), None);
    }

    #[test]
    fn test_boundary_labels_contiguous() {
        let t = sample_timeline();
        assert!(t.shows_start_label(0));
        assert!(!t.shows_start_label(1));
        assert!(!t.shows_start_label(2));
        assert!(!t.shows_end_label(0));
        assert!(!t.shows_end_label(1));
        assert!(t.shows_end_label(2));
        assert!(!t.shows_start_label(3));
        assert!(!t.shows_end_label(3));
    }

    #[test]
    fn test_boundary_labels_with_gap() {
        let mut t = Timeline::new();
        t.push(ExecutionInterval::new("A", 0, 2));
        t.push(ExecutionInterval::new("B", 5, 6));
        assert!(t.shows_end_label(0));
        assert!(t.shows_start_label(1));
    }

    #[test]
    fn test_color_slots_first_appearance() {
        let mut t = sample_timeline();
        t.push(ExecutionInterval::new("C", 7, 8));
        let slots = t.color_slots(2);
        assert_eq!(slots["A"], 0);
        assert_eq!(slots["B"], 1);
        assert_eq!(slots["C"], 0); // wraps
        assert!(t.color_slots(0).is_empty());
    }
}
