//! Random workload generation.
//!
//! Produces valid process sets for demos and randomized testing. Draws
//! come from a caller-supplied [`Rng`], so a seeded generator gives a
//! reproducible workload.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{Process, ProcessSet};

/// Parameters for random process sets.
///
/// # Example
///
/// ```
/// use cpu_sched::generator::WorkloadGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let set = WorkloadGenerator::new(4)
///     .with_burst_range(1, 10)
///     .with_arrival_range(0, 20)
///     .generate(&mut rng);
/// assert_eq!(set.len(), 4);
/// assert!(set.processes.iter().all(|p| p.burst_time >= 1));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    process_count: usize,
    burst_range: RangeInclusive<i64>,
    arrival_range: RangeInclusive<i64>,
    context_switch_time: i64,
    time_quantum: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `process_count` processes.
    ///
    /// Defaults: bursts in 1..=10, arrivals in 0..=10, no switch cost,
    /// quantum 2.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            burst_range: 1..=10,
            arrival_range: 0..=10,
            context_switch_time: 0,
            time_quantum: 2,
        }
    }

    /// Sets the inclusive burst time range. Values below 1 are raised to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst_range = min..=max.max(min);
        self
    }

    /// Sets the inclusive arrival time range. Values below 0 are raised to 0.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(0);
        self.arrival_range = min..=max.max(min);
        self
    }

    /// Sets the context switch cost of generated sets.
    pub fn with_context_switch_time(mut self, context_switch_time: i64) -> Self {
        self.context_switch_time = context_switch_time.max(0);
        self
    }

    /// Sets the time quantum of generated sets.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum.max(1);
        self
    }

    /// Draws a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> ProcessSet {
        let processes = (0..self.process_count.max(1))
            .map(|_| {
                Process::new(
                    rng.random_range(self.burst_range.clone()),
                    rng.random_range(self.arrival_range.clone()),
                )
            })
            .collect();

        ProcessSet::new(processes)
            .with_context_switch_time(self.context_switch_time)
            .with_time_quantum(self.time_quantum)
    }
}
