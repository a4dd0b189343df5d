//! Scheduling simulation engines and KPI evaluation.
//!
//! Each discipline is a pure function of its input: it borrows the
//! processes, builds its own working state, and returns a fresh
//! [`SimulationResult`]. Independent callers may run them in parallel.
//!
//! | Module | Discipline | Preemptive |
//! |--------|-----------|------------|
//! | `fcfs` | First-Come, First-Served | no |
//! | `spn` | Shortest Process Next | no |
//! | `hrrn` | Highest Response Ratio Next | no |
//! | `round_robin` | Round Robin | yes (quantum) |
//! | `srtf` | Shortest Remaining Time First | yes (per tick) |
//!
//! # Shared Contract
//!
//! - The clock starts at the earliest arrival.
//! - With nothing ready, the clock jumps straight to the next arrival.
//! - Each process gets exactly one arrival marker, at admission.
//! - A context switch precedes every execution except the first, unless
//!   the cost is zero or (preemptive only) the same process continues.
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod fcfs;
pub mod hrrn;
mod kpi;
mod nonpreemptive;
pub mod round_robin;
mod run;
pub mod spn;
pub mod srtf;

pub use kpi::SimulationKpi;
pub use srtf::{BlockState, ExecutionBlock, Transition};

use tracing::info;

use crate::error::SimulationError;
use crate::models::{Algorithm, ProcessSet, SimulationResult};
use crate::validation::validate_process_set;

impl Algorithm {
    /// Runs this algorithm over a process set.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_sched::models::{Algorithm, ProcessSet};
    ///
    /// let set = ProcessSet::from_pairs(&[(4, 0), (3, 0)]).with_time_quantum(2);
    /// let result = Algorithm::RoundRobin.simulate(&set).unwrap();
    /// assert_eq!(result.metrics.response_times(), vec![0, 2]);
    /// ```
    pub fn simulate(&self, set: &ProcessSet) -> Result<SimulationResult, SimulationError> {
        simulate(*self, set)
    }
}

/// Runs one algorithm over a process set.
///
/// The time quantum is only read (and validated) for Round Robin.
pub fn simulate(
    algorithm: Algorithm,
    set: &ProcessSet,
) -> Result<SimulationResult, SimulationError> {
    let processes = &set.processes;
    let cs = set.context_switch_time;

    let result = match algorithm {
        Algorithm::Fcfs => fcfs::simulate(processes, cs),
        Algorithm::Spn => spn::simulate(processes, cs),
        Algorithm::Hrrn => hrrn::simulate(processes, cs),
        Algorithm::RoundRobin => round_robin::simulate(processes, cs, set.time_quantum),
        Algorithm::Srtf => srtf::simulate(processes, cs),
    }?;

    info!(
        algorithm = %algorithm,
        processes = processes.len(),
        events = result.timeline.len(),
        "Simulation finished"
    );
    Ok(result)
}

/// Runs all five algorithms, in [`Algorithm::ALL`] order.
///
/// The whole set (time quantum included) is validated once up front, so
/// either every algorithm runs or none does.
pub fn simulate_all(set: &ProcessSet) -> Result<Vec<SimulationResult>, SimulationError> {
    validate_process_set(set)?;
    Algorithm::ALL
        .iter()
        .map(|algorithm| simulate(*algorithm, set))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample_set() -> ProcessSet {
        ProcessSet::from_pairs(&[(5, 0), (3, 1), (8, 2)]).with_time_quantum(2)
    }

    #[test]
    fn test_dispatch_matches_modules() {
        let set = sample_set();
        assert_eq!(
            simulate(Algorithm::Spn, &set).unwrap(),
            spn::simulate(&set.processes, 0).unwrap()
        );
        assert_eq!(
            Algorithm::RoundRobin.simulate(&set).unwrap(),
            round_robin::simulate(&set.processes, 0, 2).unwrap()
        );
    }

    #[test]
    fn test_result_carries_algorithm() {
        let set = sample_set();
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.simulate(&set).unwrap().algorithm, algorithm);
        }
    }

    #[test]
    fn test_simulate_all_order() {
        let results = simulate_all(&sample_set()).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.algorithm.name()).collect();
        assert_eq!(names, vec!["FCFS", "SPN", "HRRN", "RR", "SRTF"]);
    }

    #[test]
    fn test_quantum_ignored_outside_round_robin() {
        let set = sample_set().with_time_quantum(0);
        assert!(simulate(Algorithm::Fcfs, &set).is_ok());
        assert!(simulate(Algorithm::Srtf, &set).is_ok());
        assert!(simulate(Algorithm::RoundRobin, &set).is_err());
    }

    #[test]
    fn test_simulate_all_rejects_bad_quantum() {
        let err = simulate_all(&sample_set().with_time_quantum(-1)).unwrap_err();
        assert_eq!(err.errors()[0].kind, ValidationErrorKind::NonPositiveTimeQuantum);
    }

    #[test]
    fn test_input_not_mutated() {
        let set = sample_set();
        let before = set.clone();
        simulate_all(&set).unwrap();
        assert_eq!(set, before);
    }
}
