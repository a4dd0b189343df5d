//! Highest Response Ratio Next.
//!
//! Non-preemptive. At each decision point every ready process is scored
//! with `(waited + burst) / burst`; the highest ratio runs to completion
//! (ties → lower process id). Ratios are only recomputed when the CPU
//! frees up.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use crate::dispatching::{rules, RuleEngine};
use crate::error::SimulationError;
use crate::models::{Algorithm, Process, SimulationResult};
use crate::validation::validate_processes;

use super::nonpreemptive::run_to_completion;

/// Simulates HRRN scheduling.
///
/// # Errors
/// [`SimulationError::InvalidInput`] if the processes or context switch
/// cost fail validation.
pub fn simulate(
    processes: &[Process],
    context_switch_time: i64,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes, context_switch_time)?;

    let engine = RuleEngine::new().with_rule(rules::Hrrn);
    Ok(run_to_completion(
        Algorithm::Hrrn,
        processes,
        context_switch_time,
        &engine,
    ))
}
