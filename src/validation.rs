//! Input validation for simulation runs.
//!
//! Checks a process set before any algorithm touches it. Detects:
//! - Empty process sets
//! - Non-positive burst times
//! - Negative arrival times
//! - Negative context switch cost
//! - Non-positive time quantum (Round Robin only)
//! - Inputs whose run could pass `i64::MAX`
//!
//! All problems are collected, not just the first one, so a caller can
//! report every offending process in one pass.

use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::models::{Process, ProcessId, ProcessSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process, when the error concerns a single process.
    pub process_id: Option<ProcessId>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process has `burst_time <= 0`.
    NonPositiveBurstTime,
    /// A process has `arrival_time < 0`.
    NegativeArrivalTime,
    /// The context switch cost is negative.
    NegativeContextSwitchTime,
    /// The Round Robin quantum is not positive.
    NonPositiveTimeQuantum,
    /// The latest reachable clock value does not fit in `i64`.
    TimeOverflow,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            ValidationErrorKind::EmptyProcessSet => "processes",
            ValidationErrorKind::NonPositiveBurstTime => "burst_time",
            ValidationErrorKind::NegativeArrivalTime => "arrival_time",
            ValidationErrorKind::NegativeContextSwitchTime => "context_switch_time",
            ValidationErrorKind::NonPositiveTimeQuantum => "time_quantum",
            ValidationErrorKind::TimeOverflow => "horizon",
        };
        f.write_str(field)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            process_id: None,
            message: message.into(),
        }
    }

    fn for_process(
        kind: ValidationErrorKind,
        process_id: ProcessId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id: Some(process_id),
            message: message.into(),
        }
    }
}

/// Validates processes and the context switch cost.
///
/// Checks:
/// 1. At least one process
/// 2. Every `burst_time > 0`
/// 3. Every `arrival_time >= 0`
/// 4. `context_switch_time >= 0`
/// 5. The run cannot push the clock past `i64::MAX`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], context_switch_time: i64) -> ValidationResult {
    finish(process_errors(processes, context_switch_time))
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(time_quantum: i64) -> ValidationResult {
    finish(quantum_error(time_quantum).into_iter().collect())
}

/// Validates processes, the context switch cost and a Round Robin quantum.
///
/// The horizon check also bounds the switches Round Robin can make with
/// this quantum.
pub fn validate_with_quantum(
    processes: &[Process],
    context_switch_time: i64,
    time_quantum: i64,
) -> ValidationResult {
    let mut errors = process_errors(processes, context_switch_time);
    match quantum_error(time_quantum) {
        Some(error) => errors.push(error),
        None if errors.is_empty() => {
            let switches = match processes.len() {
                1 => Some(0),
                _ => round_robin_slices(processes, time_quantum).map(|s| s - 1),
            };
            errors.extend(overflow_error(processes, context_switch_time, switches));
        }
        None => {}
    }
    finish(errors)
}

/// Validates a whole process set, including the time quantum.
///
/// Use [`validate_processes`] when Round Robin is not going to run.
pub fn validate_process_set(set: &ProcessSet) -> ValidationResult {
    validate_with_quantum(&set.processes, set.context_switch_time, set.time_quantum)
}

fn process_errors(processes: &[Process], context_switch_time: i64) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    for (id, p) in processes.iter().enumerate() {
        if p.burst_time <= 0 {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::NonPositiveBurstTime,
                id,
                format!("Process {id} has non-positive burst time {}", p.burst_time),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::NegativeArrivalTime,
                id,
                format!("Process {id} has negative arrival time {}", p.arrival_time),
            ));
        }
    }

    if context_switch_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeContextSwitchTime,
            format!("Context switch time {context_switch_time} is negative"),
        ));
    }

    if errors.is_empty() {
        // Non-preemptive runs switch at most n - 1 times; SRTF preempts
        // only on arrivals, so at most 2(n - 1).
        let switches = i64::try_from(processes.len())
            .ok()
            .and_then(|n| (n - 1).checked_mul(2));
        errors.extend(overflow_error(processes, context_switch_time, switches));
    }

    errors
}

fn quantum_error(time_quantum: i64) -> Option<ValidationError> {
    (time_quantum <= 0).then(|| {
        ValidationError::new(
            ValidationErrorKind::NonPositiveTimeQuantum,
            format!("Time quantum {time_quantum} must be positive"),
        )
    })
}

/// Number of quantum slices Round Robin needs before coalescing.
fn round_robin_slices(processes: &[Process], time_quantum: i64) -> Option<i64> {
    processes.iter().try_fold(0i64, |acc, p| {
        let slices = p.burst_time / time_quantum + i64::from(p.burst_time % time_quantum != 0);
        acc.checked_add(slices)
    })
}

/// Latest clock value a run can reach: the last arrival, plus every
/// burst, plus `switches` context switches. `None` if it overflows.
///
/// The CPU only idles until an arrival, so nothing after the last
/// arrival is idle time.
fn horizon(processes: &[Process], context_switch_time: i64, switches: i64) -> Option<i64> {
    let last_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let work = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time))?;
    let overhead = context_switch_time.checked_mul(switches)?;
    last_arrival.checked_add(work)?.checked_add(overhead)
}

fn overflow_error(
    processes: &[Process],
    context_switch_time: i64,
    switches: Option<i64>,
) -> Option<ValidationError> {
    match switches.and_then(|n| horizon(processes, context_switch_time, n)) {
        Some(_) => None,
        None => Some(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Process set can run past the largest representable time",
        )),
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        warn!(count = errors.len(), first = %errors[0], "Rejected simulation input");
        Err(errors)
    }
}
