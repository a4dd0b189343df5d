//! Timeline (simulation output) model.
//!
//! A timeline is the ordered record of what happened on the CPU during a
//! run: zero-width arrival markers, contiguous execution blocks, and
//! context switch gaps. Events are kept in emission order.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// Classification of timeline events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A process was admitted to the ready set (zero width).
    Arrival,
    /// A process occupied the CPU.
    Execution,
    /// Switch overhead between two executions. Has no process.
    ContextSwitch,
}

/// One entry of a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Start time (ticks).
    pub start_time: i64,
    /// End time (ticks), never before `start_time`.
    pub end_time: i64,
    /// Owning process, `None` for context switches.
    pub process_id: Option<ProcessId>,
    /// Event type.
    pub kind: EventKind,
}

impl Event {
    /// Creates an arrival marker at `time`.
    pub fn arrival(process_id: ProcessId, time: i64) -> Self {
        Self {
            start_time: time,
            end_time: time,
            process_id: Some(process_id),
            kind: EventKind::Arrival,
        }
    }

    /// Creates an execution block `[start_time, end_time)`.
    pub fn execution(process_id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            process_id: Some(process_id),
            kind: EventKind::Execution,
        }
    }

    /// Creates a context switch `[start_time, end_time)`.
    pub fn context_switch(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            process_id: None,
            kind: EventKind::ContextSwitch,
        }
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether this is an execution of `process_id`.
    #[inline]
    pub fn is_execution_of(&self, process_id: ProcessId) -> bool {
        self.kind == EventKind::Execution && self.process_id == Some(process_id)
    }
}

/// Ordered sequence of events produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Events in emission order.
    pub events: Vec<Event>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: Event) {
        debug_assert!(event.end_time >= event.start_time);
        self.events.push(event);
    }

    /// Appends an execution block, merging it into the previous execution
    /// of the same process when the two are contiguous.
    ///
    /// Trailing arrival markers do not break adjacency: they are
    /// zero-width and carry no CPU time.
    pub fn push_execution(&mut self, process_id: ProcessId, start_time: i64, end_time: i64) {
        let previous = self
            .events
            .iter_mut()
            .rev()
            .find(|e| e.kind != EventKind::Arrival);

        if let Some(last) = previous {
            if last.is_execution_of(process_id) && last.end_time == start_time {
                last.end_time = end_time;
                return;
            }
        }
        self.push(Event::execution(process_id, start_time, end_time));
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the timeline has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over events of the given kind.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Execution events, in order.
    pub fn executions(&self) -> Vec<&Event> {
        self.of_kind(EventKind::Execution).collect()
    }

    /// Arrival markers, in order.
    pub fn arrivals(&self) -> Vec<&Event> {
        self.of_kind(EventKind::Arrival).collect()
    }

    /// Context switch events, in order.
    pub fn context_switches(&self) -> Vec<&Event> {
        self.of_kind(EventKind::ContextSwitch).collect()
    }

    /// Execution events of one process.
    pub fn executions_for(&self, process_id: ProcessId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.is_execution_of(process_id))
            .collect()
    }

    /// Total CPU time spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.of_kind(EventKind::Execution).map(Event::duration).sum()
    }

    /// Total CPU time spent switching context.
    pub fn context_switch_overhead(&self) -> i64 {
        self.of_kind(EventKind::ContextSwitch)
            .map(Event::duration)
            .sum()
    }

    /// Latest end time across all events (0 for an empty timeline).
    pub fn end_time(&self) -> i64 {
        self.events.iter().map(|e| e.end_time).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(Event::arrival(0, 0));
        t.push(Event::arrival(1, 0));
        t.push_execution(0, 0, 3);
        t.push(Event::context_switch(3, 4));
        t.push_execution(1, 4, 6);
        t
    }

    #[test]
    fn test_event_duration() {
        assert_eq!(Event::execution(0, 2, 7).duration(), 5);
        assert_eq!(Event::arrival(0, 4).duration(), 0);
        assert_eq!(Event::context_switch(1, 3).process_id, None);
    }

    #[test]
    fn test_kind_queries() {
        let t = sample_timeline();
        assert_eq!(t.arrivals().len(), 2);
        assert_eq!(t.executions().len(), 2);
        assert_eq!(t.context_switches().len(), 1);
        assert_eq!(t.executions_for(1)[0].start_time, 4);
    }

    #[test]
    fn test_busy_and_overhead() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 5);
        assert_eq!(t.context_switch_overhead(), 1);
        assert_eq!(t.end_time(), 6);
    }

    #[test]
    fn test_push_execution_merges_contiguous() {
        let mut t = Timeline::new();
        t.push_execution(0, 0, 2);
        t.push_execution(0, 2, 4);
        assert_eq!(t.len(), 1);
        assert_eq!(t.events[0], Event::execution(0, 0, 4));
    }

    #[test]
    fn test_push_execution_merges_across_arrival() {
        let mut t = Timeline::new();
        t.push_execution(0, 0, 2);
        t.push(Event::arrival(1, 1));
        t.push_execution(0, 2, 5);
        assert_eq!(t.executions().len(), 1);
        assert_eq!(t.executions()[0].end_time, 5);
    }

    #[test]
    fn test_push_execution_keeps_gaps_and_switches() {
        let mut t = Timeline::new();
        t.push_execution(0, 0, 2);
        t.push_execution(0, 3, 4); // idle gap
        t.push(Event::context_switch(4, 5));
        t.push_execution(0, 5, 6); // after a switch
        t.push_execution(1, 6, 7); // other process
        assert_eq!(t.executions().len(), 4);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.end_time(), 0);
        assert_eq!(t.busy_time(), 0);
    }
}
