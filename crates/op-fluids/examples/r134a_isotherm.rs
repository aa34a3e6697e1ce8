//! Print a van der Waals R134a isotherm by inverting p(T, ρ).
//!
//! Run with `RUST_LOG=debug` to see per-point solver logs.

use op_core::units::{k, pa};
use op_fluids::{R134A, VanDerWaals, default_inversion_config, density_guess, density_isotherm};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let eos = VanDerWaals::new(R134A);
    let t = k(450.0);
    let pressures: Vec<_> = [1.0e5, 5.0e5, 1.0e6, 2.0e6, 5.0e6]
        .into_iter()
        .map(pa)
        .collect();

    let results = density_isotherm(&eos, t, &pressures, &default_inversion_config());

    println!("{} isotherm at {} K", R134A.name, t.value);
    for (p, rho) in pressures.iter().zip(results) {
        let ideal = density_guess(&R134A, t, *p).value;
        match rho {
            Ok(rho) => println!(
                "  p = {:>10.0} Pa  rho = {:>9.4} kg/m³  (ideal gas {:>9.4})",
                p.value, rho.value, ideal
            ),
            Err(e) => println!("  p = {:>10.0} Pa  failed: {}", p.value, e),
        }
    }
}
