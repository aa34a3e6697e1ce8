//! Closed-form initial guesses for the EoS inversions.
//!
//! The van der Waals relations are written in reduced form, so they only need
//! the critical constants of the fluid. They are crude away from the gas
//! region but put the NRB solver on the right branch for vapour states.
//! See W. R. Salzman, "Critical constants of the van der Waals gas".

use crate::fluid::FluidConstants;
use crate::reduced::ReducedState;
use op_core::constants::GAS_CONSTANT;
use op_core::numeric::REAL_SMALL;
use op_core::units::{Density, Pressure, Temperature, k, kg_m3, pa};

/// Reduced van der Waals pressure p/pc at (τ, δ). Singular at δ = 3.
#[inline]
pub fn vdw_reduced_pressure(r: ReducedState) -> f64 {
    let ReducedState { tau, delta } = r;
    delta * (-3.0 * (delta * delta) + 9.0 * delta - 8.0 * tau) / (delta - 3.0)
}

/// van der Waals pressure from temperature and density.
pub fn pressure_guess(fluid: &FluidConstants, t: Temperature, rho: Density) -> Pressure {
    let r = ReducedState::new(fluid, t, rho);
    pa(fluid.critical_pressure_pa * vdw_reduced_pressure(r))
}

/// van der Waals temperature from pressure and density.
///
/// Meaningless (zero or negative) once δ >= 3.
pub fn temperature_guess(fluid: &FluidConstants, p: Pressure, rho: Density) -> Temperature {
    let p_r = p.value / fluid.critical_pressure_pa;
    let delta = rho.value / fluid.critical_density_kg_m3;
    let tau = -(delta - 3.0) * (p_r + 3.0 * (delta * delta)) / (8.0 * delta + REAL_SMALL);
    k(fluid.critical_temperature_k * tau)
}

/// Ideal-gas density from temperature and pressure.
pub fn density_guess(fluid: &FluidConstants, t: Temperature, p: Pressure) -> Density {
    kg_m3(p.value * fluid.molar_mass_kg_mol / (GAS_CONSTANT * t.value + REAL_SMALL))
}
