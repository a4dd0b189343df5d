//! Deterministic CPU scheduling simulator.
//!
//! Simulates how a set of processes, each with a burst time and an arrival
//! time, executes under five classic disciplines, and reports a timeline of
//! scheduling events plus per-process waiting, turnaround and response
//! times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessSet`, `Event`,
//!   `Timeline`, `Metrics`, `Algorithm`, `SimulationResult`
//! - **`validation`**: Input integrity checks (empty sets, bad bursts,
//!   arrivals, switch cost, quantum)
//! - **`dispatching`**: Selection rules (FCFS, SPN, HRRN, SRTF) and the
//!   rule engine that applies them
//! - **`scheduler`**: The five simulation engines, `simulate_all`, and KPIs
//! - **`generator`**: Seeded random workloads
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::{Algorithm, ProcessSet};
//!
//! let set = ProcessSet::from_pairs(&[(7, 0), (4, 2)]);
//! let result = Algorithm::Srtf.simulate(&set).unwrap();
//! assert_eq!(result.timeline.executions().len(), 3);
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (dispatch decisions, idle jumps,
//! completions, rejected input) and never installs a subscriber.
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles"
//! - Silberschatz et al. (2018), "Operating System Concepts"

pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
pub use scheduler::{simulate, simulate_all, SimulationKpi};
