//! Scalar inversion engine for equation-of-state evaluations.
//!
//! This crate provides finite-difference derivative estimates and a hybrid
//! Newton-Raphson/bisection solver that finds the smallest non-negative root
//! of a scalar function. Property layers use it to invert EoS relations, for
//! instance solving for density given temperature and a target pressure.

pub mod diff;
pub mod error;
pub mod nrb;

pub use diff::{DEFAULT_STEP, backward_diff1, central_diff1, central_diff2, forward_diff1};
pub use error::{SolverError, SolverResult};
pub use nrb::{
    NrbConfig, NrbOutcome, Termination, solve_positive_root, solve_positive_root_strict,
    solve_positive_root_with,
};
