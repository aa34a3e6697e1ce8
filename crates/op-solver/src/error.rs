//! Error types for solver operations.

use op_core::error::OpError;
use thiserror::Error;

/// Errors reported by the strict solver entry point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Initial guess must be positive and finite, got {value}")]
    InvalidGuess { value: f64 },

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error(
        "Did not converge after {iterations} iterations (last guess = {last_guess}, residual = {residual})"
    )]
    DidNotConverge {
        last_guess: f64,
        residual: f64,
        iterations: usize,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for OpError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidGuess { value } => OpError::NonFinite {
                what: "initial guess",
                value,
            },
            SolverError::InvalidConfig { what } => OpError::InvalidArg { what },
            SolverError::DidNotConverge { .. } => OpError::NotConverged {
                what: "positive root",
            },
        }
    }
}
