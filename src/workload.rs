//! Random workload generation.
//!
//! Produces reproducible process sets for demos, benchmarks and
//! property-style tests. IDs are `P1..Pn`, burst times are drawn uniformly
//! from an inclusive range and arrival times follow insertion order, the
//! same way the registry assigns them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessDescriptor;

/// Seeded generator of random process sets.
///
/// # Example
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5)
///     .with_burst_range(2, 6)
///     .with_seed(42)
///     .generate();
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (2..=6).contains(&p.burst_time)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    min_burst: i64,
    max_burst: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with bursts in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            min_burst: 1,
            max_burst: 10,
            seed: 0,
        }
    }

    /// Sets the inclusive burst range.
    ///
    /// Bounds are clamped to at least 1 and swapped if given in reverse.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        let (lo, hi) = if min_burst <= max_burst {
            (min_burst, max_burst)
        } else {
            (max_burst, min_burst)
        };
        self.min_burst = lo.max(1);
        self.max_burst = hi.max(1);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set.
    pub fn generate(&self) -> Vec<ProcessDescriptor> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.count)
            .map(|i| {
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                ProcessDescriptor::new(format!("P{}", i + 1), burst).with_arrival_time(i as i64)
            })
            .collect()
    }
}
