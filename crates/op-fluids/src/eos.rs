//! Equation-of-state abstraction used by the inversions.

use crate::fluid::FluidConstants;
use crate::guess::vdw_reduced_pressure;
use crate::reduced::ReducedState;
use op_core::constants::GAS_CONSTANT;
use op_core::units::{Density, Pressure, Temperature, pa};

/// Thermal equation of state p(T, ρ) for one fluid.
///
/// Implementations must be thread-safe (Send + Sync) so batched inversions can
/// run in parallel. `pressure_pa` is the hot path the solver closes over, so
/// it takes and returns raw SI values.
pub trait EquationOfState: Send + Sync {
    fn constants(&self) -> &FluidConstants;

    /// Pressure [Pa] from temperature [K] and density [kg/m³].
    fn pressure_pa(&self, t_k: f64, rho_kg_m3: f64) -> f64;

    fn pressure(&self, t: Temperature, rho: Density) -> Pressure {
        pa(self.pressure_pa(t.value, rho.value))
    }
}

/// p = ρRT/M.
#[derive(Debug, Clone, Copy)]
pub struct IdealGas {
    fluid: FluidConstants,
}

impl IdealGas {
    pub fn new(fluid: FluidConstants) -> Self {
        Self { fluid }
    }
}

impl EquationOfState for IdealGas {
    fn constants(&self) -> &FluidConstants {
        &self.fluid
    }

    fn pressure_pa(&self, t_k: f64, rho_kg_m3: f64) -> f64 {
        rho_kg_m3 * GAS_CONSTANT * t_k / self.fluid.molar_mass_kg_mol
    }
}

/// Reduced van der Waals EoS built from the critical constants alone.
///
/// Non-monotonic in ρ below Tc (the van der Waals loop), which makes it a
/// useful stand-in for the stiffer multiparameter forms.
#[derive(Debug, Clone, Copy)]
pub struct VanDerWaals {
    fluid: FluidConstants,
}

impl VanDerWaals {
    pub fn new(fluid: FluidConstants) -> Self {
        Self { fluid }
    }
}

impl EquationOfState for VanDerWaals {
    fn constants(&self) -> &FluidConstants {
        &self.fluid
    }

    fn pressure_pa(&self, t_k: f64, rho_kg_m3: f64) -> f64 {
        let r = ReducedState::from_si(&self.fluid, t_k, rho_kg_m3);
        self.fluid.critical_pressure_pa * vdw_reduced_pressure(r)
    }
}
