//! Simulation quality metrics (KPIs).
//!
//! Aggregates a simulation result into the summary figures a presentation
//! layer shows next to the Gantt chart.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of per-process waiting time |
//! | Avg Turnaround | Mean of per-process turnaround time |
//! | Avg Response | Mean of per-process response time |
//! | Makespan | Last completion - first arrival |
//! | Utilization | Busy time / makespan |
//! | Throughput | Processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::{Process, SimulationResult};

/// Simulation performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Time from the first arrival to the last completion.
    pub makespan: i64,
    /// Total time spent executing processes.
    pub busy_time: i64,
    /// Time within the makespan spent neither executing nor switching.
    pub idle_time: i64,
    /// Number of context switches.
    pub context_switches: usize,
    /// Total time spent switching context.
    pub context_switch_overhead: i64,
    /// Fraction of the makespan spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a result and the processes that produced it.
    ///
    /// # Arguments
    /// * `result` - A completed simulation.
    /// * `processes` - The input processes (for the first arrival).
    pub fn calculate(result: &SimulationResult, processes: &[Process]) -> Self {
        let metrics = &result.metrics;
        let count = metrics.len();

        let mean = |values: Vec<i64>| -> f64 {
            if values.is_empty() {
                0.0
            } else {
                values.iter().map(|&v| v as i128).sum::<i128>() as f64 / values.len() as f64
            }
        };

        let first_arrival = processes.iter().map(|p| p.arrival_time).min().unwrap_or(0);
        let last_completion = metrics
            .per_process
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(first_arrival);
        let makespan = last_completion - first_arrival;

        let busy_time = result.timeline.busy_time();
        let context_switch_overhead = result.timeline.context_switch_overhead();
        let idle_time = (makespan - busy_time - context_switch_overhead).max(0);

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            avg_waiting_time: mean(metrics.waiting_times()),
            avg_turnaround_time: mean(metrics.turnaround_times()),
            avg_response_time: mean(metrics.response_times()),
            makespan,
            busy_time,
            idle_time,
            context_switches: result.timeline.context_switches().len(),
            context_switch_overhead,
            cpu_utilization,
            throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Algorithm, Event, Metrics, ProcessMetrics, Timeline};

    fn procs(pairs: &[(i64, i64)]) -> Vec<Process> {
        pairs.iter().copied().map(Process::from).collect()
    }

    fn fcfs_result() -> (SimulationResult, Vec<Process>) {
        // P0 0-5, P1 5-8, P2 8-16
        let ps = procs(&[(5, 0), (3, 1), (8, 2)]);
        let mut timeline = Timeline::new();
        timeline.push_execution(0, 0, 5);
        timeline.push_execution(1, 5, 8);
        timeline.push_execution(2, 8, 16);
        let metrics = Metrics {
            per_process: vec![
                ProcessMetrics::from_run(&ps[0], 0, 5),
                ProcessMetrics::from_run(&ps[1], 5, 8),
                ProcessMetrics::from_run(&ps[2], 8, 16),
            ],
        };
        let result = SimulationResult {
            algorithm: Algorithm::Fcfs,
            timeline,
            metrics,
        };
        (result, ps)
    }

    #[test]
    fn test_kpi_averages() {
        let (result, ps) = fcfs_result();
        let kpi = SimulationKpi::calculate(&result, &ps);
        // WT 0,4,6 → 10/3; TT 5,7,14 → 26/3
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_response_time - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization() {
        let (result, ps) = fcfs_result();
        let kpi = SimulationKpi::calculate(&result, &ps);
        assert_eq!(kpi.makespan, 16);
        assert_eq!(kpi.busy_time, 16);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_and_switches() {
        let ps = procs(&[(2, 0), (2, 5)]);
        let mut timeline = Timeline::new();
        timeline.push_execution(0, 0, 2);
        timeline.push(Event::context_switch(5, 6));
        timeline.push_execution(1, 6, 8);
        let result = SimulationResult {
            algorithm: Algorithm::Fcfs,
            timeline,
            metrics: Metrics {
                per_process: vec![
                    ProcessMetrics::from_run(&ps[0], 0, 2),
                    ProcessMetrics::from_run(&ps[1], 6, 8),
                ],
            },
        };

        let kpi = SimulationKpi::calculate(&result, &ps);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.context_switches, 1);
        assert_eq!(kpi.context_switch_overhead, 1);
        assert_eq!(kpi.idle_time, 3);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let result = SimulationResult {
            algorithm: Algorithm::Srtf,
            timeline: Timeline::new(),
            metrics: Metrics::default(),
        };
        let kpi = SimulationKpi::calculate(&result, &[]);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }
}
