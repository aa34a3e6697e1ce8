//! Reduced state (τ, δ) relative to the critical point.

use crate::fluid::FluidConstants;
use op_core::units::{Density, Temperature};

/// τ = T/Tc, δ = ρ/ρc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReducedState {
    pub tau: f64,
    pub delta: f64,
}

impl ReducedState {
    pub fn new(fluid: &FluidConstants, t: Temperature, rho: Density) -> Self {
        Self::from_si(fluid, t.value, rho.value)
    }

    /// Same as [`ReducedState::new`] on raw kelvin and kg/m³.
    #[inline]
    pub fn from_si(fluid: &FluidConstants, t_k: f64, rho_kg_m3: f64) -> Self {
        Self {
            tau: t_k / fluid.critical_temperature_k,
            delta: rho_kg_m3 / fluid.critical_density_kg_m3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluid::R134A;
    use op_core::units::{k, kg_m3};

    #[test]
    fn critical_point_is_unity() {
        let r = ReducedState::new(&R134A, R134A.critical_temperature(), R134A.critical_density());
        assert_eq!(r, ReducedState { tau: 1.0, delta: 1.0 });
    }

    #[test]
    fn scales_linearly() {
        let r = ReducedState::new(&R134A, k(2.0 * 374.083), kg_m3(0.5 * 509.0));
        assert!((r.tau - 2.0).abs() < 1e-15);
        assert!((r.delta - 0.5).abs() < 1e-15);
    }
}
