//! Shortest Process Next (non-preemptive SJF).
//!
//! At each decision point, picks the ready process with the smallest burst
//! time (ties → lower process id) and runs it to completion.

use crate::dispatching::{rules, RuleEngine};
use crate::error::SimulationError;
use crate::models::{Algorithm, Process, SimulationResult};
use crate::validation::validate_processes;

use super::nonpreemptive::run_to_completion;

/// Simulates SPN scheduling.
///
/// # Errors
/// [`SimulationError::InvalidInput`] if the processes or context switch
/// cost fail validation.
pub fn simulate(
    processes: &[Process],
    context_switch_time: i64,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes, context_switch_time)?;

    let engine = RuleEngine::new().with_rule(rules::Spn);
    Ok(run_to_completion(
        Algorithm::Spn,
        processes,
        context_switch_time,
        &engine,
    ))
}
