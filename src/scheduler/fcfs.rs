//! First-Come, First-Served.
//!
//! Non-preemptive. Processes run to completion in order of arrival, ties
//! broken by process id. When the next process has not arrived yet the
//! CPU idles until it does.

use crate::dispatching::{rules, RuleEngine};
use crate::error::SimulationError;
use crate::models::{Algorithm, Process, SimulationResult};
use crate::validation::validate_processes;

use super::nonpreemptive::run_to_completion;

/// Simulates FCFS scheduling.
///
/// # Errors
/// [`SimulationError::InvalidInput`] if the processes or context switch
/// cost fail validation.
pub fn simulate(
    processes: &[Process],
    context_switch_time: i64,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes, context_switch_time)?;

    let engine = RuleEngine::new().with_rule(rules::Fcfs);
    Ok(run_to_completion(
        Algorithm::Fcfs,
        processes,
        context_switch_time,
        &engine,
    ))
}
