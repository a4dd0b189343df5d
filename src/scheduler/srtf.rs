//! Shortest Remaining Time First (preemptive SJF).
//!
//! The driver re-evaluates every tick: the arrived, incomplete process
//! with the least remaining time (ties → lower process id) runs for one
//! tick. Events are not emitted per tick. An [`ExecutionBlock`] state
//! machine tracks the process occupying the CPU and emits one execution
//! event per contiguous block, on preemption or completion.
//!
//! # Complexity
//! O(T · n) where T = simulated ticks and n = processes.

use tracing::trace;

use crate::dispatching::{rules, RuleEngine, SelectionContext};
use crate::error::SimulationError;
use crate::models::{Algorithm, Event, Process, ProcessId, SimulationResult};
use crate::validation::validate_processes;

use super::run::SimulationRun;

/// State of the CPU's current execution block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    /// No block is open.
    #[default]
    Idle,
    /// `process_id` has been running since `block_start`.
    Executing {
        process_id: ProcessId,
        block_start: i64,
    },
}

/// Outcome of feeding a scheduling decision to an [`ExecutionBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The selected process is already running; the block grows.
    Continue,
    /// The CPU was idle; a new block must be opened.
    Start,
    /// Another process was running; its block closed as this event.
    Preempt(Event),
}

/// Coalesces per-tick decisions into execution events.
///
/// Events leave the machine only on transitions out of `Executing`.
#[derive(Debug, Clone, Default)]
pub struct ExecutionBlock {
    state: BlockState,
}

impl ExecutionBlock {
    /// Creates an idle block tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Process occupying the CPU, if any.
    pub fn running(&self) -> Option<ProcessId> {
        match self.state {
            BlockState::Idle => None,
            BlockState::Executing { process_id, .. } => Some(process_id),
        }
    }

    /// Applies the decision "`process_id` runs at `clock`".
    ///
    /// On `Start` or `Preempt` the machine is left `Idle`; the caller
    /// opens the new block with [`open`](Self::open) once it knows the
    /// start time (after any context switch).
    pub fn select(&mut self, process_id: ProcessId, clock: i64) -> Transition {
        match self.state {
            BlockState::Executing {
                process_id: running,
                ..
            } if running == process_id => Transition::Continue,
            BlockState::Executing { .. } => match self.close(clock) {
                Some(closed) => Transition::Preempt(closed),
                None => Transition::Start,
            },
            BlockState::Idle => Transition::Start,
        }
    }

    /// Opens a block for `process_id` starting at `start`.
    pub fn open(&mut self, process_id: ProcessId, start: i64) {
        debug_assert_eq!(self.state, BlockState::Idle, "block already open");
        self.state = BlockState::Executing {
            process_id,
            block_start: start,
        };
    }

    /// Closes the open block at `clock`, returning its execution event.
    ///
    /// Returns `None` when idle or when the block is still empty.
    pub fn close(&mut self, clock: i64) -> Option<Event> {
        match std::mem::take(&mut self.state) {
            BlockState::Executing {
                process_id,
                block_start,
            } if clock > block_start => Some(Event::execution(process_id, block_start, clock)),
            _ => None,
        }
    }
}

/// Simulates SRTF scheduling.
///
/// # Errors
/// [`SimulationError::InvalidInput`] if the processes or context switch
/// cost fail validation.
pub fn simulate(
    processes: &[Process],
    context_switch_time: i64,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes, context_switch_time)?;

    let engine = RuleEngine::new().with_rule(rules::Srtf);
    let mut run = SimulationRun::new(Algorithm::Srtf, processes, context_switch_time);
    let mut block = ExecutionBlock::new();
    let mut clock = run.start_time();

    while !run.all_complete() {
        run.admit_arrivals(clock);

        let remaining = run.remaining_times();
        let context = SelectionContext::at_time(clock).with_remaining_time(&remaining);
        let Some(id) = engine.select_best(processes, run.ready(), &context) else {
            // Completion always closes the block, so the CPU is idle here.
            debug_assert_eq!(block.running(), None);
            clock = run.idle_until(clock);
            continue;
        };

        match block.select(id, clock) {
            Transition::Continue => {}
            transition => {
                if let Transition::Preempt(closed) = transition {
                    trace!(preempted = ?closed.process_id, by = id, at = clock, "Preemption");
                    run.emit(closed);
                }
                clock = run.dispatch(id, clock);
                block.open(id, clock);
            }
        }

        trace!(process = id, at = clock, remaining = remaining[id], "Tick");
        clock += 1;
        if run.consume(id, 1, clock) {
            if let Some(done) = block.close(clock) {
                run.emit(done);
            }
        }
    }

    // Completion closes blocks eagerly; flush anything still open.
    if let Some(open) = block.close(clock) {
        run.emit(open);
    }

    Ok(run.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    fn procs(pairs: &[(i64, i64)]) -> Vec<Process> {
        pairs.iter().copied().map(Process::from).collect()
    }

    fn spans(result: &SimulationResult) -> Vec<(usize, i64, i64)> {
        result
            .timeline
            .executions()
            .iter()
            .filter_map(|e| e.process_id.map(|id| (id, e.start_time, e.end_time)))
            .collect()
    }

    // ---- state machine ----

    #[test]
    fn test_block_starts_idle() {
        let block = ExecutionBlock::new();
        assert_eq!(block.state(), BlockState::Idle);
        assert_eq!(block.running(), None);
    }

    #[test]
    fn test_block_continue_same_process() {
        let mut block = ExecutionBlock::new();
        assert_eq!(block.select(0, 0), Transition::Start);
        block.open(0, 0);
        assert_eq!(block.select(0, 1), Transition::Continue);
        assert_eq!(block.select(0, 2), Transition::Continue);
        assert_eq!(block.running(), Some(0));
    }

    #[test]
    fn test_block_preempt_emits_once() {
        let mut block = ExecutionBlock::new();
        block.select(0, 0);
        block.open(0, 0);
        block.select(0, 1);

        assert_eq!(
            block.select(1, 2),
            Transition::Preempt(Event::execution(0, 0, 2))
        );
        assert_eq!(block.state(), BlockState::Idle);
        block.open(1, 2);
        assert_eq!(
            block.state(),
            BlockState::Executing {
                process_id: 1,
                block_start: 2
            }
        );
    }

    #[test]
    fn test_block_close() {
        let mut block = ExecutionBlock::new();
        assert_eq!(block.close(5), None);
        block.open(3, 5);
        assert_eq!(block.close(9), Some(Event::execution(3, 5, 9)));
        assert_eq!(block.close(10), None);
    }

    #[test]
    fn test_block_empty_close_is_dropped() {
        let mut block = ExecutionBlock::new();
        block.open(1, 4);
        assert_eq!(block.close(4), None);
        assert_eq!(block.state(), BlockState::Idle);
    }

    // ---- driver ----

    #[test]
    fn test_srtf_preemption_coalesced() {
        let result = simulate(&procs(&[(7, 0), (4, 2)]), 0).unwrap();
        assert_eq!(spans(&result), vec![(0, 0, 2), (1, 2, 6), (0, 6, 11)]);

        let p0 = result.metrics.get(0).copied().unwrap();
        assert_eq!(p0.response_time, 0);
        assert_eq!(p0.waiting_time, 4);
        assert_eq!(p0.turnaround_time, 11);
        let p1 = result.metrics.get(1).copied().unwrap();
        assert_eq!(p1.waiting_time, 0);
    }

    #[test]
    fn test_srtf_no_preemption_for_equal_remaining() {
        // At t=2, P0 has 3 left and P1 needs 3: tie → lower id keeps running
        let result = simulate(&procs(&[(5, 0), (3, 2)]), 0).unwrap();
        assert_eq!(spans(&result), vec![(0, 0, 5), (1, 5, 8)]);
    }

    #[test]
    fn test_srtf_textbook() {
        let input = procs(&[(8, 0), (4, 1), (9, 2), (5, 3)]);
        let result = simulate(&input, 0).unwrap();
        assert_eq!(
            spans(&result),
            vec![(0, 0, 1), (1, 1, 5), (3, 5, 10), (0, 10, 17), (2, 17, 26)]
        );
        assert_eq!(result.metrics.waiting_times(), vec![9, 0, 15, 2]);
        assert_eq!(result.metrics.response_times(), vec![0, 0, 15, 2]);
    }

    #[test]
    fn test_srtf_context_switch_per_preemption() {
        let result = simulate(&procs(&[(7, 0), (4, 2)]), 1).unwrap();
        // P0 [0,2], switch [2,3], P1 [3,7], switch [7,8], P0 [8,13]
        assert_eq!(spans(&result), vec![(0, 0, 2), (1, 3, 7), (0, 8, 13)]);
        assert_eq!(result.timeline.context_switches().len(), 2);
        assert_eq!(result.metrics.get(1).map(|m| m.response_time), Some(1));
    }

    #[test]
    fn test_srtf_idle_jump() {
        let result = simulate(&procs(&[(2, 0), (3, 50)]), 0).unwrap();
        assert_eq!(spans(&result), vec![(0, 0, 2), (1, 50, 53)]);
    }

    #[test]
    fn test_srtf_single_process() {
        let result = simulate(&procs(&[(6, 3)]), 4).unwrap();
        assert_eq!(
            result.timeline.events,
            vec![Event::arrival(0, 3), Event::execution(0, 3, 9)]
        );
        assert_eq!(result.metrics.waiting_times(), vec![0]);
    }

    #[test]
    fn test_srtf_event_count_is_per_block() {
        let result = simulate(&procs(&[(20, 0), (1, 5), (1, 10)]), 0).unwrap();
        assert_eq!(
            result.timeline.of_kind(EventKind::Execution).count(),
            5
        );
    }

    #[test]
    fn test_srtf_preempts_after_switch() {
        // P1 is committed at t=5; P2 arrives during the 5..7 switch and
        // preempts only at t=8, after P1's first tick.
        let result = simulate(&procs(&[(5, 0), (8, 0), (1, 6)]), 2).unwrap();
        assert_eq!(
            spans(&result),
            vec![(0, 0, 5), (1, 7, 8), (2, 10, 11), (1, 13, 20)]
        );
        assert_eq!(result.timeline.context_switches().len(), 3);
        assert_eq!(result.metrics.response_times(), vec![0, 7, 4]);
    }
}
