//! Per-process performance metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// Metrics for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Time the process finished (ticks).
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Derives metrics from a process and its completion/first-dispatch times.
    pub fn from_run(process: &Process, first_dispatch: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            completion_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
            response_time: first_dispatch - process.arrival_time,
        }
    }
}

/// Metrics table indexed by process id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// One entry per process, indexed by process id.
    pub per_process: Vec<ProcessMetrics>,
}

impl Metrics {
    /// Metrics for one process.
    pub fn get(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.per_process.get(process_id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.per_process.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.per_process.is_empty()
    }

    /// Iterates over `(process_id, metrics)`.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, &ProcessMetrics)> + '_ {
        self.per_process.iter().enumerate()
    }

    /// Waiting times by process id.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.per_process.iter().map(|m| m.waiting_time).collect()
    }

    /// Turnaround times by process id.
    pub fn turnaround_times(&self) -> Vec<i64> {
        self.per_process.iter().map(|m| m.turnaround_time).collect()
    }

    /// Response times by process id.
    pub fn response_times(&self) -> Vec<i64> {
        self.per_process.iter().map(|m| m.response_time).collect()
    }
}
