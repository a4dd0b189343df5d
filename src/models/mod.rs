//! CPU scheduling domain models.
//!
//! Provides the data types for describing a simulation input (processes
//! and configuration) and its output (timeline and metrics).
//!
//! | Type | Role |
//! |------|------|
//! | Process | Burst and arrival time of one process |
//! | ProcessSet | Processes plus context switch cost and time quantum |
//! | Timeline | Ordered Arrival / Execution / ContextSwitch events |
//! | Metrics | Waiting, turnaround and response time per process |

mod algorithm;
mod metrics;
mod process;
mod timeline;

pub use algorithm::{Algorithm, ParseAlgorithmError, SimulationResult};
pub use metrics::{Metrics, ProcessMetrics};
pub use process::{Process, ProcessId, ProcessSet, DEFAULT_TIME_QUANTUM};
pub use timeline::{Event, EventKind, Timeline};
