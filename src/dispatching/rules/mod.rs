//! Built-in selection rules.
//!
//! | Rule | Score | Preemptive use |
//! |------|-------|----------------|
//! | FCFS | arrival time | no |
//! | SPN | burst time | no |
//! | HRRN | -(wait + burst) / burst, exact | no |
//! | SRTF | remaining time | yes |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::{Process, ProcessId};

/// First-Come, First-Served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SelectionRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(
        &self,
        _id: ProcessId,
        process: &Process,
        _context: &SelectionContext<'_>,
    ) -> RuleScore {
        RuleScore::new(process.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

/// Shortest Process Next.
///
/// Prioritizes processes with shorter total burst time. Minimizes mean
/// waiting time among non-preemptive policies, at the risk of starving
/// long processes.
#[derive(Debug, Clone, Copy)]
pub struct Spn;

impl SelectionRule for Spn {
    fn name(&self) -> &'static str {
        "SPN"
    }

    fn evaluate(
        &self,
        _id: ProcessId,
        process: &Process,
        _context: &SelectionContext<'_>,
    ) -> RuleScore {
        RuleScore::new(process.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest Process Next"
    }
}

/// Highest Response Ratio Next.
///
/// `ratio = (waited + burst) / burst` where `waited = now - arrival`.
/// Short processes are favored, but waiting raises a long process's ratio
/// until it is eventually dispatched.
#[derive(Debug, Clone, Copy)]
pub struct Hrrn;

impl Hrrn {
    /// Response ratio of a process at `current_time`, kept as an exact
    /// fraction.
    pub fn response_ratio(process: &Process, current_time: i64) -> RuleScore {
        let waited = (current_time as i128 - process.arrival_time as i128).max(0);
        let burst = process.burst_time as i128;
        RuleScore::ratio(waited + burst, burst)
    }
}

impl SelectionRule for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(
        &self,
        _id: ProcessId,
        process: &Process,
        context: &SelectionContext<'_>,
    ) -> RuleScore {
        -Self::response_ratio(process, context.current_time)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

/// Shortest Remaining Time First.
///
/// Uses `context.remaining_time`, falling back to the full burst for
/// processes the context does not track.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl SelectionRule for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(
        &self,
        id: ProcessId,
        process: &Process,
        context: &SelectionContext<'_>,
    ) -> RuleScore {
        RuleScore::new(context.remaining(id).unwrap_or(process.burst_time))
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}
