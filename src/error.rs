//! Simulation error type.
//!
//! Two failure kinds exist: invalid caller input (surfaced by every
//! engine entry point before any output is produced) and an empty result
//! set handed to the metrics aggregator.

use std::fmt;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors returned by the scheduling engine and metrics aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The caller violated an input contract (empty list, bad id,
    /// non-positive burst or quantum).
    InvalidInput(ValidationError),
    /// Averages were requested over zero results.
    EmptyInput,
}

impl SimulationError {
    /// Validation category, if this is an input error.
    pub fn kind(&self) -> Option<ValidationErrorKind> {
        match self {
            Self::InvalidInput(e) => Some(e.kind),
            Self::EmptyInput => None,
        }
    }

    /// Whether this is an input-contract violation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::EmptyInput => f.write_str("cannot aggregate an empty result set"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<ValidationError> for SimulationError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidInput(e)
    }
}
