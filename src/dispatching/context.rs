//! Simulation state passed to selection rules.

use crate::models::ProcessId;

/// Runtime state visible to selection rules at a decision point.
///
/// Borrowed from the running simulation; rules never mutate it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionContext<'a> {
    /// Current simulation clock (ticks).
    pub current_time: i64,
    /// Remaining CPU time per process id. Empty when the algorithm does
    /// not track partial execution.
    pub remaining_time: &'a [i64],
}

impl<'a> SelectionContext<'a> {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self {
            current_time,
            remaining_time: &[],
        }
    }

    /// Sets the remaining-time table.
    pub fn with_remaining_time(mut self, remaining_time: &'a [i64]) -> Self {
        self.remaining_time = remaining_time;
        self
    }

    /// Remaining time of a process, if tracked.
    pub fn remaining(&self, id: ProcessId) -> Option<i64> {
        self.remaining_time.get(id).copied()
    }
}
