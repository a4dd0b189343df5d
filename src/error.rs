//! Error types surfaced by simulation entry points.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulation functions.
///
/// Raised before any simulation work starts; no partial timeline is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The process set or configuration failed validation.
    #[error("invalid simulation input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// The individual validation errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
