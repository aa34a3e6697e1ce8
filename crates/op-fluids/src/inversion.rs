//! Property inversions on top of the NRB solver.
//!
//! Each inversion closes the EoS over the known variable and solves the
//! normalised residual `p(T, ρ) / p_target - 1` for the unknown. Normalising
//! keeps the acceptance tolerance independent of the pressure level.

use crate::eos::EquationOfState;
use crate::error::{FluidError, FluidResult};
use crate::guess::{density_guess, temperature_guess};
use op_core::numeric::ensure_positive;
use op_core::units::{Density, Pressure, Temperature, k, kg_m3};
use op_solver::{NrbConfig, SolverError, solve_positive_root_strict};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Solver settings used by the inversions when the caller has no opinion.
pub fn default_inversion_config() -> NrbConfig {
    NrbConfig::default().with_tolerance(1e-10)
}

fn positive(v: f64, what: &'static str) -> FluidResult<f64> {
    ensure_positive(v, what).map_err(|_| FluidError::NonPhysical { what })
}

fn map_solver_error(e: SolverError, what: &'static str) -> FluidError {
    match e {
        SolverError::DidNotConverge {
            last_guess,
            residual,
            iterations,
        } => {
            warn!(what, last_guess, residual, iterations, "inversion did not converge");
            FluidError::ConvergenceFailed {
                what,
                last_guess,
                residual,
            }
        }
        other => FluidError::Solver(other),
    }
}

/// Density at the given pressure and temperature.
///
/// Starts from the ideal-gas density, so vapour-side roots are found first.
/// `(p, T)` must lie inside the fluid's validity range.
pub fn density_from_pt(
    eos: &dyn EquationOfState,
    p: Pressure,
    t: Temperature,
    config: &NrbConfig,
) -> FluidResult<Density> {
    let p_pa = positive(p.value, "pressure must be positive and finite")?;
    let t_k = positive(t.value, "temperature must be positive and finite")?;
    eos.constants().validate_tp(t, p)?;

    let guess = density_guess(eos.constants(), t, p).value;
    let residual = |rho: f64| eos.pressure_pa(t_k, rho) / p_pa - 1.0;

    let outcome = solve_positive_root_strict(residual, guess, config)
        .map_err(|e| map_solver_error(e, "density from (p, T)"))?;

    debug!(
        fluid = eos.constants().name,
        p_pa,
        t_k,
        rho = outcome.root,
        iterations = outcome.iterations,
        "density_from_pt"
    );
    Ok(kg_m3(outcome.root))
}

/// Temperature at the given pressure and density.
///
/// Starts from the van der Waals temperature, falling back to the critical
/// temperature where that guess is not physical. A converged temperature
/// outside the fluid's validity range is reported as out of range.
pub fn temperature_from_prho(
    eos: &dyn EquationOfState,
    p: Pressure,
    rho: Density,
    config: &NrbConfig,
) -> FluidResult<Temperature> {
    let p_pa = positive(p.value, "pressure must be positive and finite")?;
    let rho_kg_m3 = positive(rho.value, "density must be positive and finite")?;

    let vdw = temperature_guess(eos.constants(), p, rho).value;
    let guess = if vdw.is_finite() && vdw > 0.0 {
        vdw
    } else {
        eos.constants().critical_temperature_k
    };
    let residual = |t: f64| eos.pressure_pa(t, rho_kg_m3) / p_pa - 1.0;

    let outcome = solve_positive_root_strict(residual, guess, config)
        .map_err(|e| map_solver_error(e, "temperature from (p, rho)"))?;

    debug!(
        fluid = eos.constants().name,
        p_pa,
        rho_kg_m3,
        t_k = outcome.root,
        iterations = outcome.iterations,
        "temperature_from_prho"
    );
    let t = k(outcome.root);
    eos.constants().validate_tp(t, p)?;
    Ok(t)
}

/// Densities along an isotherm, one independent inversion per pressure.
///
/// Points are solved in parallel; results keep the input order and a failed
/// point does not affect the others.
pub fn density_isotherm(
    eos: &dyn EquationOfState,
    t: Temperature,
    pressures: &[Pressure],
    config: &NrbConfig,
) -> Vec<FluidResult<Density>> {
    pressures
        .par_iter()
        .map(|&p| density_from_pt(eos, p, t, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eos::{IdealGas, VanDerWaals};
    use crate::fluid::R134A;
    use op_core::units::pa;

    #[test]
    fn ideal_gas_density_is_the_guess() {
        let eos = IdealGas::new(R134A);
        let rho = density_from_pt(&eos, pa(1.0e5), k(300.0), &default_inversion_config()).unwrap();
        let expected = density_guess(&R134A, k(300.0), pa(1.0e5)).value;
        assert!((rho.value / expected - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vdw_density_matches_target_pressure() {
        let eos = VanDerWaals::new(R134A);
        let p = pa(1.0e6);
        let t = k(450.0);
        let rho = density_from_pt(&eos, p, t, &default_inversion_config()).unwrap();

        assert!(rho.value > 0.0);
        let p_back = eos.pressure(t, rho).value;
        assert!((p_back / 1.0e6 - 1.0).abs() < 1e-9, "p = {p_back}");
    }

    #[test]
    fn vdw_temperature_matches_target_pressure() {
        let eos = VanDerWaals::new(R134A);
        let rho = kg_m3(41.0);
        let t = temperature_from_prho(&eos, pa(1.0e6), rho, &default_inversion_config()).unwrap();
        let p_back = eos.pressure(t, rho).value;
        assert!((p_back / 1.0e6 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ideal_gas_temperature_from_vdw_guess() {
        // The vdW guess is off for an ideal gas; the solver has to do the work.
        let eos = IdealGas::new(R134A);
        let rho = density_guess(&R134A, k(300.0), pa(1.0e5));
        let t = temperature_from_prho(&eos, pa(1.0e5), rho, &default_inversion_config()).unwrap();
        assert!((t.value - 300.0).abs() < 1e-6, "T = {}", t.value);
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let eos = VanDerWaals::new(R134A);
        let cfg = default_inversion_config();
        assert!(matches!(
            density_from_pt(&eos, pa(-1.0), k(300.0), &cfg),
            Err(FluidError::NonPhysical { .. })
        ));
        assert!(matches!(
            density_from_pt(&eos, pa(1.0e5), k(f64::NAN), &cfg),
            Err(FluidError::NonPhysical { .. })
        ));
        assert!(matches!(
            temperature_from_prho(&eos, pa(1.0e5), kg_m3(0.0), &cfg),
            Err(FluidError::NonPhysical { .. })
        ));
    }

    #[test]
    fn density_outside_validity_range_is_rejected() {
        let eos = VanDerWaals::new(R134A);
        let cfg = default_inversion_config();
        assert!(matches!(
            density_from_pt(&eos, pa(1.0e6), k(500.0), &cfg),
            Err(FluidError::OutOfRange {
                what: "temperature",
                ..
            })
        ));
        assert!(matches!(
            density_from_pt(&eos, pa(80.0e6), k(400.0), &cfg),
            Err(FluidError::OutOfRange { what: "pressure", .. })
        ));
        assert!(matches!(
            density_from_pt(&eos, pa(100.0), k(400.0), &cfg),
            Err(FluidError::OutOfRange { what: "pressure", .. })
        ));
    }

    #[test]
    fn temperature_outside_validity_range_is_rejected() {
        // Solves to roughly 1750 K, far above the R134a table limit.
        let eos = VanDerWaals::new(R134A);
        let cfg = default_inversion_config();
        match temperature_from_prho(&eos, pa(5.0e6), kg_m3(50.0), &cfg) {
            Err(FluidError::OutOfRange { what, value }) => {
                assert_eq!(what, "temperature");
                assert!(value > R134A.t_max_k);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn bad_config_surfaces_as_solver_error() {
        let eos = IdealGas::new(R134A);
        let cfg = NrbConfig::default().with_step_size(0.0);
        assert!(matches!(
            density_from_pt(&eos, pa(1.0e5), k(300.0), &cfg),
            Err(FluidError::Solver(SolverError::InvalidConfig { .. }))
        ));
    }
}
