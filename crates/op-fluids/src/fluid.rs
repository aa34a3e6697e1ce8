//! Per-fluid constant tables.

use crate::error::{FluidError, FluidResult};
use op_core::units::{Density, MolarMass, Pressure, Temperature, k, kg_m3, kg_mol, pa};

/// Critical point, molar mass and validity limits of a pure fluid.
///
/// All values are stored in SI base units so tables can be `const`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FluidConstants {
    pub name: &'static str,
    /// Critical temperature [K]
    pub critical_temperature_k: f64,
    /// Critical pressure [Pa]
    pub critical_pressure_pa: f64,
    /// Critical density [kg/m³]
    pub critical_density_kg_m3: f64,
    /// Triple point temperature [K]
    pub triple_temperature_k: f64,
    /// Normal boiling point (at 1 atm) [K]
    pub normal_boiling_temperature_k: f64,
    /// Molar mass [kg/mol]
    pub molar_mass_kg_mol: f64,
    pub acentric_factor: f64,
    /// Validity range of the fluid's EoS
    pub t_min_k: f64,
    pub t_max_k: f64,
    pub p_min_pa: f64,
    pub p_max_pa: f64,
}

/// 1,1,1,2-tetrafluoroethane.
pub const R134A: FluidConstants = FluidConstants {
    name: "R134a",
    critical_temperature_k: 374.083,
    critical_pressure_pa: 4.048e6,
    critical_density_kg_m3: 509.0,
    triple_temperature_k: 169.85,
    normal_boiling_temperature_k: 247.076,
    molar_mass_kg_mol: 0.102_031,
    acentric_factor: 0.327,
    t_min_k: 169.85,
    t_max_k: 455.0,
    // triple point pressure
    p_min_pa: 389.56,
    p_max_pa: 70.0e6,
};

impl FluidConstants {
    pub fn critical_temperature(&self) -> Temperature {
        k(self.critical_temperature_k)
    }

    pub fn critical_pressure(&self) -> Pressure {
        pa(self.critical_pressure_pa)
    }

    pub fn critical_density(&self) -> Density {
        kg_m3(self.critical_density_kg_m3)
    }

    pub fn normal_boiling_temperature(&self) -> Temperature {
        k(self.normal_boiling_temperature_k)
    }

    pub fn molar_mass(&self) -> MolarMass {
        kg_mol(self.molar_mass_kg_mol)
    }

    /// Check that `(t, p)` lies inside the range the EoS was fitted over.
    pub fn validate_tp(&self, t: Temperature, p: Pressure) -> FluidResult<()> {
        let t_k = t.value;
        if !(self.t_min_k..=self.t_max_k).contains(&t_k) {
            return Err(FluidError::OutOfRange {
                what: "temperature",
                value: t_k,
            });
        }
        let p_pa = p.value;
        if !(p_pa >= self.p_min_pa && p_pa <= self.p_max_pa) {
            return Err(FluidError::OutOfRange {
                what: "pressure",
                value: p_pa,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r134a_accessors_use_si() {
        assert_eq!(R134A.critical_temperature().value, 374.083);
        assert_eq!(R134A.critical_pressure().value, 4.048e6);
        assert_eq!(R134A.critical_density().value, 509.0);
        assert_eq!(R134A.molar_mass().value, 0.102_031);
        assert_eq!(R134A.normal_boiling_temperature().value, 247.076);
    }

    #[test]
    fn validity_range() {
        assert!(R134A.validate_tp(k(300.0), pa(1.0e5)).is_ok());
        assert!(matches!(
            R134A.validate_tp(k(100.0), pa(1.0e5)),
            Err(FluidError::OutOfRange {
                what: "temperature",
                ..
            })
        ));
        assert!(matches!(
            R134A.validate_tp(k(300.0), pa(1.0e9)),
            Err(FluidError::OutOfRange { what: "pressure", .. })
        ));
        assert!(matches!(
            R134A.validate_tp(k(300.0), pa(100.0)),
            Err(FluidError::OutOfRange { what: "pressure", .. })
        ));
        assert!(R134A.validate_tp(k(300.0), pa(R134A.p_min_pa)).is_ok());
        assert!(R134A.validate_tp(k(f64::NAN), pa(1.0e5)).is_err());
    }

    #[test]
    fn reference_temperatures_are_ordered() {
        assert!(R134A.triple_temperature_k < R134A.normal_boiling_temperature_k);
        assert!(R134A.normal_boiling_temperature_k < R134A.critical_temperature_k);
        assert!(R134A.critical_temperature_k < R134A.t_max_k);
    }
}
