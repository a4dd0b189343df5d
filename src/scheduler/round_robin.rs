//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit arrived processes to the tail of a FIFO ready queue.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived up to the end of the slice.
//! 5. Re-enqueue the preempted process behind them if it has time left.
//!
//! Step 4 before step 5 fixes the tie-break: a process arriving at the
//! same tick a slice ends is queued ahead of the process it preempts.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::SimulationError;
use crate::models::{Algorithm, Process, ProcessId, SimulationResult};
use crate::validation::validate_with_quantum;

use super::run::SimulationRun;

/// Simulates Round Robin scheduling with a fixed time quantum.
///
/// # Errors
/// [`SimulationError::InvalidInput`] if the processes, context switch cost
/// or time quantum fail validation.
pub fn simulate(
    processes: &[Process],
    context_switch_time: i64,
    time_quantum: i64,
) -> Result<SimulationResult, SimulationError> {
    validate_with_quantum(processes, context_switch_time, time_quantum)?;

    let mut run = SimulationRun::new(Algorithm::RoundRobin, processes, context_switch_time);
    let mut queue: VecDeque<ProcessId> = VecDeque::new();
    let mut clock = run.start_time();
    queue.extend(run.admit_arrivals(clock));

    while !run.all_complete() {
        let Some(id) = queue.pop_front() else {
            clock = run.idle_until(clock);
            queue.extend(run.admit_arrivals(clock));
            continue;
        };

        let start = run.dispatch(id, clock);
        let slice = time_quantum.min(run.remaining(id));
        clock = run.execute(id, start, slice);

        queue.extend(run.admit_arrivals(clock));
        if !run.is_complete(id) {
            debug!(process = id, at = clock, remaining = run.remaining(id), "Quantum expired");
            queue.push_back(id);
        }
    }

    Ok(run.finish())
}
