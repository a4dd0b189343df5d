//! Per-run working state shared by all simulation drivers.
//!
//! Owns the mutable bookkeeping (remaining time, admission, first dispatch,
//! completion) and the timeline under construction. The caller's process
//! slice is only ever borrowed.

use tracing::debug;

use crate::models::{
    Algorithm, Event, Metrics, Process, ProcessId, ProcessMetrics, SimulationResult, Timeline,
};

/// Working state of one process during a run.
#[derive(Debug, Clone)]
struct WorkingState {
    remaining: i64,
    admitted: bool,
    first_dispatch: Option<i64>,
    completion: Option<i64>,
}

/// Mutable state of a single simulation run.
#[derive(Debug)]
pub(crate) struct SimulationRun<'a> {
    algorithm: Algorithm,
    processes: &'a [Process],
    context_switch_time: i64,
    states: Vec<WorkingState>,
    timeline: Timeline,
    last_run: Option<ProcessId>,
    completed: usize,
}

impl<'a> SimulationRun<'a> {
    /// Creates a run over validated input.
    pub(crate) fn new(
        algorithm: Algorithm,
        processes: &'a [Process],
        context_switch_time: i64,
    ) -> Self {
        let states = processes
            .iter()
            .map(|p| WorkingState {
                remaining: p.burst_time,
                admitted: false,
                first_dispatch: None,
                completion: None,
            })
            .collect();

        Self {
            algorithm,
            processes,
            context_switch_time,
            states,
            timeline: Timeline::new(),
            last_run: None,
            completed: 0,
        }
    }

    /// The input processes.
    pub(crate) fn processes(&self) -> &'a [Process] {
        self.processes
    }

    /// Clock value at which the run starts: the earliest arrival.
    pub(crate) fn start_time(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.arrival_time)
            .min()
            .unwrap_or(0)
    }

    /// Whether every process has completed.
    pub(crate) fn all_complete(&self) -> bool {
        self.completed == self.processes.len()
    }

    pub(crate) fn is_complete(&self, id: ProcessId) -> bool {
        self.states[id].completion.is_some()
    }

    pub(crate) fn remaining(&self, id: ProcessId) -> i64 {
        self.states[id].remaining
    }

    /// Remaining time of every process, indexed by id.
    pub(crate) fn remaining_times(&self) -> Vec<i64> {
        self.states.iter().map(|s| s.remaining).collect()
    }

    /// Admits every process that has arrived by `clock`, emitting one
    /// arrival marker each.
    ///
    /// Returns the newly admitted ids ordered by arrival time, then id.
    pub(crate) fn admit_arrivals(&mut self, clock: i64) -> Vec<ProcessId> {
        let mut admitted: Vec<ProcessId> = (0..self.processes.len())
            .filter(|&id| !self.states[id].admitted && self.processes[id].has_arrived(clock))
            .collect();
        admitted.sort_by_key(|&id| (self.processes[id].arrival_time, id));

        for &id in &admitted {
            self.states[id].admitted = true;
            self.timeline
                .push(Event::arrival(id, self.processes[id].arrival_time));
        }
        admitted
    }

    /// Ids of admitted, incomplete processes in ascending id order.
    pub(crate) fn ready(&self) -> Vec<ProcessId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.admitted && s.completion.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Earliest arrival among processes not yet admitted.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.processes
            .iter()
            .zip(&self.states)
            .filter(|(_, s)| !s.admitted)
            .map(|(p, _)| p.arrival_time)
            .min()
    }

    /// Clock to jump to when nothing is ready at `clock`.
    ///
    /// Only valid while some process is incomplete; an incomplete run with
    /// nothing ready and nothing left to arrive is an engine bug.
    pub(crate) fn idle_until(&self, clock: i64) -> i64 {
        match self.next_arrival() {
            Some(next) => {
                debug_assert!(next > clock, "idle jump must move the clock forward");
                debug!(algorithm = %self.algorithm, from = clock, to = next, "CPU idle");
                next
            }
            None => unreachable!(
                "{}: no ready process at t={clock} and none left to arrive",
                self.algorithm
            ),
        }
    }

    /// Prepares the CPU for `id` at `clock` and returns when it starts.
    ///
    /// Charges a context switch unless this is the first dispatch of the
    /// run, the switch cost is zero, or (preemptive only) `id` is the
    /// process that ran last.
    pub(crate) fn dispatch(&mut self, id: ProcessId, clock: i64) -> i64 {
        let switching = match self.last_run {
            None => false,
            Some(last) => !(self.algorithm.is_preemptive() && last == id),
        };

        let start = if switching && self.context_switch_time > 0 {
            let end = clock + self.context_switch_time;
            self.timeline.push(Event::context_switch(clock, end));
            end
        } else {
            clock
        };

        let state = &mut self.states[id];
        if state.first_dispatch.is_none() {
            state.first_dispatch = Some(start);
        }
        self.last_run = Some(id);

        debug!(algorithm = %self.algorithm, process = id, at = start, "Dispatch");
        start
    }

    /// Runs `id` for `duration` ticks from `start`, recording the execution.
    ///
    /// Returns the end time.
    pub(crate) fn execute(&mut self, id: ProcessId, start: i64, duration: i64) -> i64 {
        let end = start + duration;
        self.timeline.push_execution(id, start, end);
        self.consume(id, duration, end);
        end
    }

    /// Consumes `ticks` of CPU for `id` without recording an event.
    ///
    /// Used by drivers that coalesce executions themselves. Returns `true`
    /// when the process completes at `now`.
    pub(crate) fn consume(&mut self, id: ProcessId, ticks: i64, now: i64) -> bool {
        let state = &mut self.states[id];
        debug_assert!(ticks > 0 && ticks <= state.remaining);
        state.remaining -= ticks;

        if state.remaining == 0 {
            state.completion = Some(now);
            self.completed += 1;
            debug!(algorithm = %self.algorithm, process = id, at = now, "Completed");
            true
        } else {
            false
        }
    }

    /// Appends a pre-built event.
    pub(crate) fn emit(&mut self, event: Event) {
        self.timeline.push(event);
    }

    /// Builds the final result.
    pub(crate) fn finish(self) -> SimulationResult {
        let per_process = self
            .processes
            .iter()
            .zip(&self.states)
            .enumerate()
            .map(|(id, (p, s))| match (s.first_dispatch, s.completion) {
                (Some(first), Some(done)) => ProcessMetrics::from_run(p, first, done),
                _ => unreachable!("{}: process {id} did not complete", self.algorithm),
            })
            .collect();

        SimulationResult {
            algorithm: self.algorithm,
            timeline: self.timeline,
            metrics: Metrics { per_process },
        }
    }
}
