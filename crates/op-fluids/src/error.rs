//! Fluid property errors.

use op_core::OpError;
use op_solver::SolverError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the validity range of the fluid tables.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Inversion hit the iteration cap.
    #[error("Convergence failed for {what} (last guess = {last_guess}, residual = {residual})")]
    ConvergenceFailed {
        what: &'static str,
        last_guess: f64,
        residual: f64,
    },

    /// Any other solver rejection.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

impl From<FluidError> for OpError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => OpError::InvalidArg { what },
            FluidError::OutOfRange { what, .. } => OpError::InvalidArg { what },
            FluidError::ConvergenceFailed { what, .. } => OpError::NotConverged { what },
            FluidError::Solver(e) => e.into(),
        }
    }
}
