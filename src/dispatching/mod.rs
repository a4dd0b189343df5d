//! Selection rules and rule engine for CPU dispatching.
//!
//! A selection rule scores each ready process; the engine dispatches the
//! process with the lowest score. Remaining ties go to the lower process
//! id, which keeps every simulation deterministic.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine, SelectionContext};
//! use cpu_sched::models::Process;
//!
//! let processes = [Process::new(8, 0), Process::new(3, 0)];
//! let engine = RuleEngine::new().with_rule(rules::Spn);
//! let ctx = SelectionContext::at_time(0);
//! assert_eq!(engine.select_best(&processes, [0, 1], &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod context;
mod engine;
pub mod rules;
mod score;

pub use context::SelectionContext;
pub use engine::RuleEngine;
pub use score::RuleScore;

use crate::models::{Process, ProcessId};
use std::fmt::Debug;

/// A selection rule that evaluates which ready process runs next.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that prefer larger values
/// (e.g., HRRN's response ratio) negate them.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPN", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process given the current simulation state.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(
        &self,
        id: ProcessId,
        process: &Process,
        context: &SelectionContext<'_>,
    ) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
