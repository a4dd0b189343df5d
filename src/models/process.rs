//! Process and process-set models.
//!
//! A process is a unit of CPU work identified by its position in the
//! input list. A process set bundles the processes with the global
//! simulation configuration (context switch cost, time quantum).
//!
//! # Time Representation
//! All times are integer ticks relative to a simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier: the index of the process in its [`ProcessSet`].
pub type ProcessId = usize;

/// Default Round Robin time quantum (ticks).
pub const DEFAULT_TIME_QUANTUM: i64 = 5;

/// A process to be scheduled.
///
/// Carries only input data. Remaining time and completion state are
/// owned by the simulation run, never by the process itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Total CPU time required (ticks). Must be positive.
    pub burst_time: i64,
    /// Time at which the process becomes ready (ticks). Must be non-negative.
    pub arrival_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(burst_time: i64, arrival_time: i64) -> Self {
        Self {
            burst_time,
            arrival_time,
        }
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival_time <= clock
    }
}

impl From<(i64, i64)> for Process {
    /// Builds a process from a `(burst_time, arrival_time)` pair.
    fn from((burst_time, arrival_time): (i64, i64)) -> Self {
        Self::new(burst_time, arrival_time)
    }
}

/// Input container for a simulation run.
///
/// The process id of each process is its index in `processes`.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessSet;
///
/// let set = ProcessSet::from_pairs(&[(5, 0), (3, 1), (8, 2)])
///     .with_context_switch_time(1)
///     .with_time_quantum(2);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.total_burst_time(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    /// Processes, indexed by process id.
    pub processes: Vec<Process>,
    /// Cost charged when the running process changes (ticks).
    pub context_switch_time: i64,
    /// Round Robin time quantum (ticks).
    pub time_quantum: i64,
}

impl ProcessSet {
    /// Creates a process set with default configuration.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            context_switch_time: 0,
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }

    /// Creates a process set from `(burst_time, arrival_time)` pairs.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        Self::new(pairs.iter().copied().map(Process::from).collect())
    }

    /// Sets the context switch cost.
    pub fn with_context_switch_time(mut self, context_switch_time: i64) -> Self {
        self.context_switch_time = context_switch_time;
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Appends a process; its id is the previous length.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst_time(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Earliest arrival time, or `None` for an empty set.
    pub fn earliest_arrival(&self) -> Option<i64> {
        self.processes.iter().map(|p| p.arrival_time).min()
    }
}
