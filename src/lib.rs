//! Single-processor CPU scheduling simulator.
//!
//! Simulates how a set of processes shares one processor under a chosen
//! scheduling policy and reports the resulting execution timeline plus
//! per-process waiting and turnaround times. The simulation is purely
//! computational: no real processes, no wall-clock timing.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `ExecutionInterval`,
//!   `Timeline`, `ProcessResult`, `SimulationOutcome`
//! - **`registry`**: Ordered process registry for one editing session
//! - **`validation`**: Input integrity checks (empty list, ids, burst times)
//! - **`dispatching`**: Composable ordering rules (FIFO, SPT) and rule engine
//! - **`scheduler`**: FCFS, SJF and Round-Robin engines, metrics aggregation
//! - **`workload`**: Seeded random workloads for demos and property tests
//!
//! # Example
//!
//! ```
//! use cpu_schedule::registry::ProcessRegistry;
//! use cpu_schedule::scheduler::{aggregate, run_fcfs};
//!
//! let mut registry = ProcessRegistry::new();
//! registry.add("A", 5).unwrap();
//! registry.add("B", 3).unwrap();
//! registry.add("C", 8).unwrap();
//!
//! let outcome = run_fcfs(&registry.snapshot()).unwrap();
//! assert_eq!(outcome.timeline.makespan(), 16);
//!
//! let averages = aggregate(&outcome.results).unwrap();
//! assert!((averages.average_waiting - 13.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod registry;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
