//! The closed set of scheduling disciplines and their results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Metrics, Timeline};

/// Supported scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served (non-preemptive).
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Process Next (non-preemptive).
    #[serde(rename = "SPN")]
    Spn,
    /// Highest Response Ratio Next (non-preemptive).
    #[serde(rename = "HRRN")]
    Hrrn,
    /// Round Robin (preemptive, fixed quantum).
    #[serde(rename = "RR")]
    RoundRobin,
    /// Shortest Remaining Time First (preemptive).
    #[serde(rename = "SRTF")]
    Srtf,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Spn,
        Algorithm::Hrrn,
        Algorithm::RoundRobin,
        Algorithm::Srtf,
    ];

    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Spn => "SPN",
            Algorithm::Hrrn => "HRRN",
            Algorithm::RoundRobin => "RR",
            Algorithm::Srtf => "SRTF",
        }
    }

    /// Long description.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Served",
            Algorithm::Spn => "Shortest Process Next",
            Algorithm::Hrrn => "Highest Response Ratio Next",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::Srtf => "Shortest Remaining Time First",
        }
    }

    /// Whether the running process can be interrupted before completion.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin | Algorithm::Srtf)
    }

    /// Whether the algorithm reads the time quantum.
    pub fn uses_time_quantum(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling algorithm: {0}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses a short name, case-insensitively. "ROUNDROBIN" and "SJF"
    /// are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SPN" | "SJF" => Ok(Algorithm::Spn),
            "HRRN" => Ok(Algorithm::Hrrn),
            "RR" | "ROUNDROBIN" => Ok(Algorithm::RoundRobin),
            "SRTF" => Ok(Algorithm::Srtf),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Output of one algorithm invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,
    /// Ordered scheduling events.
    pub timeline: Timeline,
    /// Per-process metrics.
    pub metrics: Metrics,
}
