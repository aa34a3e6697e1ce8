//! op-fluids: property inversions for openprop.
//!
//! Provides:
//! - Per-fluid constant tables (critical point, molar mass, validity range)
//! - Reduced state (τ, δ)
//! - van der Waals and ideal-gas initial guesses
//! - `EquationOfState` trait with ideal-gas and van der Waals models
//! - Density and temperature inversions built on the NRB solver
//!
//! # Example
//!
//! ```
//! use op_core::units::{k, pa};
//! use op_fluids::{R134A, VanDerWaals, default_inversion_config, density_from_pt};
//!
//! let eos = VanDerWaals::new(R134A);
//! let rho = density_from_pt(&eos, pa(1.0e6), k(450.0), &default_inversion_config()).unwrap();
//! assert!(rho.value > 0.0);
//! ```

pub mod eos;
pub mod error;
pub mod fluid;
pub mod guess;
pub mod inversion;
pub mod reduced;

// Re-exports for ergonomics
pub use eos::{EquationOfState, IdealGas, VanDerWaals};
pub use error::{FluidError, FluidResult};
pub use fluid::{FluidConstants, R134A};
pub use guess::{density_guess, pressure_guess, temperature_guess};
pub use inversion::{
    default_inversion_config, density_from_pt, density_isotherm, temperature_from_prho,
};
pub use reduced::ReducedState;
