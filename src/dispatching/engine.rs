//! Rule engine for dispatch decisions.
//!
//! Composes selection rules sequentially: the primary rule decides, later
//! rules only break its ties, and the lower process id breaks whatever
//! ties remain.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{SelectionContext, SelectionRule};
use crate::models::{Process, ProcessId};

/// A composable rule engine for dispatch decisions.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Spn)
///     .with_rule(rules::Fcfs);
/// assert_eq!(engine.rule_names(), vec!["SPN", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, the lowest id wins.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. The first rule is primary; later rules break ties.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the candidate to dispatch next, or `None` if there are none.
    ///
    /// `candidates` are process ids indexing into `processes`.
    pub fn select_best<I>(
        &self,
        processes: &[Process],
        candidates: I,
        context: &SelectionContext<'_>,
    ) -> Option<ProcessId>
    where
        I: IntoIterator<Item = ProcessId>,
    {
        candidates.into_iter().fold(None, |best, id| match best {
            Some(b) if self.compare(processes, id, b, context) != Ordering::Less => Some(b),
            _ => Some(id),
        })
    }

    fn compare(
        &self,
        processes: &[Process],
        a: ProcessId,
        b: ProcessId,
        context: &SelectionContext<'_>,
    ) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, &processes[a], context);
            let score_b = rule.evaluate(b, &processes[b], context);

            match score_a.cmp(&score_b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        // All rules tied → lower process id
        a.cmp(&b)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn processes() -> Vec<Process> {
        vec![
            Process::new(5, 0),
            Process::new(3, 1),
            Process::new(8, 2),
            Process::new(3, 0),
        ]
    }

    #[test]
    fn test_spn_selection() {
        let ps = processes();
        let ctx = SelectionContext::at_time(5);
        let engine = RuleEngine::new().with_rule(rules::Spn);
        // P1 and P3 both have burst 3 → lower id wins
        assert_eq!(engine.select_best(&ps, 0..ps.len(), &ctx), Some(1));
    }

    #[test]
    fn test_candidate_order_does_not_matter() {
        let ps = processes();
        let ctx = SelectionContext::at_time(5);
        let engine = RuleEngine::new().with_rule(rules::Spn);
        assert_eq!(engine.select_best(&ps, [3, 2, 1, 0], &ctx), Some(1));
    }

    #[test]
    fn test_secondary_rule_breaks_ties() {
        let ps = processes();
        let ctx = SelectionContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::Spn)
            .with_rule(rules::Fcfs);
        // P1 (arrival 1) vs P3 (arrival 0) → FCFS picks P3
        assert_eq!(engine.select_best(&ps, [1, 3], &ctx), Some(3));
    }

    #[test]
    fn test_fcfs_exact_beyond_f64() {
        let big = 1i64 << 53;
        let ps = vec![
            Process::new(1, big + 1),
            Process::new(1, big),
            Process::new(20, big - 10),
        ];
        let ctx = SelectionContext::at_time(big + 1);
        let engine = RuleEngine::new().with_rule(rules::Fcfs);
        assert_eq!(engine.select_best(&ps, [0, 1], &ctx), Some(1));
        assert_eq!(engine.select_best(&ps, 0..ps.len(), &ctx), Some(2));
    }

    #[test]
    fn test_empty_candidates() {
        let ps = processes();
        let ctx = SelectionContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::Spn);
        assert_eq!(engine.select_best(&ps, std::iter::empty(), &ctx), None);
    }

    #[test]
    fn test_no_rules_lowest_id() {
        let ps = processes();
        let ctx = SelectionContext::at_time(0);
        assert_eq!(RuleEngine::new().select_best(&ps, [2, 1], &ctx), Some(1));
    }
}
