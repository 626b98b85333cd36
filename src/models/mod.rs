//! CPU scheduling domain models.
//!
//! Provides the value types exchanged between the process registry, the
//! scheduling engine and whatever renders the results.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Durable input: id, burst time, arrival order |
//! | `ExecutionInterval` | One `[start, end)` slice of processor time |
//! | `Timeline` | Ordered intervals (Gantt chart data) |
//! | `ProcessResult` | Completion, turnaround and waiting time |
//! | `SimulationOutcome` | Timeline + results of one run |

mod process;
mod result;
mod timeline;

pub use process::ProcessDescriptor;
pub use result::{ProcessResult, SimulationOutcome};
pub use timeline::{ExecutionInterval, Timeline};
