//! Shared driver for non-preemptive disciplines.
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival.
//! 2. Admit every process that has arrived by the clock.
//! 3. If nothing is ready, jump to the next arrival.
//! 4. Otherwise let the rule engine pick one ready process and run it to
//!    completion (paying a context switch first when one is due).
//!
//! # Complexity
//! O(n² · r) where n = processes and r = rules in the engine.

use crate::dispatching::{RuleEngine, SelectionContext};
use crate::models::{Algorithm, Process, SimulationResult};

use super::run::SimulationRun;

/// Runs validated input under `engine`, one process at a time.
pub(crate) fn run_to_completion(
    algorithm: Algorithm,
    processes: &[Process],
    context_switch_time: i64,
    engine: &RuleEngine,
) -> SimulationResult {
    let mut run = SimulationRun::new(algorithm, processes, context_switch_time);
    let mut clock = run.start_time();

    while !run.all_complete() {
        run.admit_arrivals(clock);

        let context = SelectionContext::at_time(clock);
        let Some(id) = engine.select_best(run.processes(), run.ready(), &context) else {
            clock = run.idle_until(clock);
            continue;
        };

        let start = run.dispatch(id, clock);
        clock = run.execute(id, start, processes[id].burst_time);
    }

    run.finish()
}
