//! Positive Newton-Raphson-bisection (NRB) root solver.
//!
//! Finds a root `x > 0` of a scalar function starting from a physically
//! motivated guess (an ideal-gas density, say). Newton steps use a forward
//! difference so each iteration costs two evaluations; any step that leaves
//! the current bracket is replaced by the bracket midpoint.
//!
//! Two entry styles exist:
//! - fast ([`solve_positive_root`], [`solve_positive_root_with`]) never fails
//!   and hands back the best guess when the iteration cap is reached;
//! - strict ([`solve_positive_root_strict`]) reports that case as
//!   [`SolverError::DidNotConverge`].

use crate::diff::{DEFAULT_STEP, forward_diff1};
use crate::error::{SolverError, SolverResult};
use op_core::numeric::{REAL_BIG, REAL_SMALL, Real};
use tracing::{debug, trace};

/// NRB solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NrbConfig {
    /// Forward difference step for the Newton slope
    pub step_size: Real,
    /// Accept a guess once |f(guess)| drops below this
    pub tolerance: Real,
    /// Hard ceiling on iterations
    pub max_iterations: usize,
    /// Lower end of the admissible domain
    pub lower_bound: Real,
    /// Upper end of the admissible domain
    pub upper_bound: Real,
    /// Track f at the lower bracket end as it moves. Off reproduces the
    /// legacy behaviour where f is only sampled at the initial lower bound.
    pub refresh_lower_residual: bool,
}

impl Default for NrbConfig {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP,
            tolerance: 1e-12,
            max_iterations: 1000,
            lower_bound: REAL_SMALL,
            upper_bound: REAL_BIG,
            refresh_lower_residual: true,
        }
    }
}

impl NrbConfig {
    /// Override the finite difference step.
    pub fn with_step_size(mut self, step_size: Real) -> Self {
        self.step_size = step_size;
        self
    }

    /// Override the acceptance threshold on |f|.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Restrict the search domain. Fast mode clips these to the positive line.
    pub fn with_bounds(mut self, lower_bound: Real, upper_bound: Real) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Choose between tracked and legacy stale lower-end residual.
    pub fn with_refresh_lower_residual(mut self, refresh: bool) -> Self {
        self.refresh_lower_residual = refresh;
        self
    }

    /// Domain actually searched in fast mode: the configured bounds clipped to
    /// `[REAL_SMALL, REAL_BIG]`, or the full positive line when that leaves
    /// nothing.
    pub fn effective_bounds(&self) -> (Real, Real) {
        // NaN.max(x) is x, so a NaN lower bound falls back to REAL_SMALL
        let lo = self.lower_bound.max(REAL_SMALL);
        let hi = if self.upper_bound.is_finite() {
            self.upper_bound
        } else {
            REAL_BIG
        };
        if lo < hi { (lo, hi) } else { (REAL_SMALL, REAL_BIG) }
    }

    /// Check the knobs the strict entry point relies on.
    pub fn validate(&self) -> SolverResult<()> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(SolverError::InvalidConfig {
                what: "step_size must be positive and finite",
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SolverError::InvalidConfig {
                what: "tolerance must be positive and finite",
            });
        }
        if !(self.lower_bound > 0.0
            && self.upper_bound.is_finite()
            && self.lower_bound < self.upper_bound)
        {
            return Err(SolverError::InvalidConfig {
                what: "bounds must satisfy 0 < lower_bound < upper_bound < inf",
            });
        }
        Ok(())
    }
}

/// How a solve ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// |f(root)| < tolerance with root > 0
    Accepted,
    /// Iteration cap reached; `root` is a best effort
    BudgetExhausted,
}

/// NRB solve result.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NrbOutcome {
    /// Last guess (the accepted root when converged)
    pub root: Real,
    /// f(root)
    pub residual: Real,
    /// Completed Newton/bisection iterations
    pub iterations: usize,
    pub termination: Termination,
}

impl NrbOutcome {
    /// True when the root was accepted rather than left at the cap.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Accepted
    }
}

/// Interval assumed to contain the sign change, plus f at its lower end.
#[derive(Clone, Copy, Debug)]
struct Bracket {
    lo: Real,
    hi: Real,
    f_lo: Real,
}

impl Bracket {
    /// Shrink towards `x`: if f changes sign between `lo` and `x` the root is
    /// below `x`, otherwise assume it lies beyond.
    fn tighten(&mut self, x: Real, fx: Real, refresh: bool) {
        if fx * self.f_lo < 0.0 {
            self.hi = x;
        } else {
            self.lo = x;
            if refresh {
                self.f_lo = fx;
            }
        }
    }

    /// NaN counts as outside.
    fn contains(&self, x: Real) -> bool {
        (self.hi - x) * (x - self.lo) >= 0.0
    }

    fn midpoint(&self) -> Real {
        self.lo + 0.5 * (self.hi - self.lo)
    }
}

fn accepts(x: Real, fx: Real, tolerance: Real) -> bool {
    fx.abs() < tolerance && x > 0.0
}

/// Solve with the default configuration and return the root estimate.
///
/// Non-convergence is silent: check `|f(x)|` yourself, or use
/// [`solve_positive_root_strict`].
///
/// ```
/// use op_solver::solve_positive_root;
///
/// let root = solve_positive_root(|x| x * x - 2.0, 10.0);
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn solve_positive_root<F>(f: F, guess: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    solve_positive_root_with(f, guess, &NrbConfig::default()).root
}

/// Fast-mode solve with explicit configuration. Never fails.
///
/// The search runs over [`NrbConfig::effective_bounds`]. A guess that is not
/// positive and finite starts at the lower end, any other guess is clamped
/// into the domain, and the returned root always lies inside it.
///
/// When the budget runs out the result is whatever the last bisection left,
/// which for a function without a positive root is often the upper end
/// itself (`f64::MAX` by default) with an infinite residual.
pub fn solve_positive_root_with<F>(f: F, guess: Real, config: &NrbConfig) -> NrbOutcome
where
    F: Fn(Real) -> Real,
{
    let (lo, hi) = config.effective_bounds();
    let mut x = if guess.is_finite() && guess > 0.0 {
        guess.clamp(lo, hi)
    } else {
        lo
    };

    let mut fx = f(x);
    if accepts(x, fx, config.tolerance) {
        debug!(root = x, residual = fx, "NRB: initial guess accepted");
        return NrbOutcome {
            root: x,
            residual: fx,
            iterations: 0,
            termination: Termination::Accepted,
        };
    }

    let mut bracket = Bracket {
        lo,
        hi,
        f_lo: f(lo),
    };

    for iter in 0..config.max_iterations {
        bracket.tighten(x, fx, config.refresh_lower_residual);

        // Newton step
        x -= fx / forward_diff1(&f, x, fx, config.step_size);

        // Bisection fallback
        if !bracket.contains(x) {
            x = bracket.midpoint();
        }

        fx = f(x);
        trace!(
            iter,
            x,
            fx,
            lo = bracket.lo,
            hi = bracket.hi,
            "NRB iteration"
        );

        if accepts(x, fx, config.tolerance) {
            debug!(root = x, residual = fx, iterations = iter + 1, "NRB: converged");
            return NrbOutcome {
                root: x,
                residual: fx,
                iterations: iter + 1,
                termination: Termination::Accepted,
            };
        }
    }

    debug!(
        last_guess = x,
        residual = fx,
        iterations = config.max_iterations,
        "NRB: iteration budget exhausted"
    );
    NrbOutcome {
        root: x,
        residual: fx,
        iterations: config.max_iterations,
        termination: Termination::BudgetExhausted,
    }
}

/// Strict-mode solve: reject bad input and report non-convergence.
pub fn solve_positive_root_strict<F>(
    f: F,
    guess: Real,
    config: &NrbConfig,
) -> SolverResult<NrbOutcome>
where
    F: Fn(Real) -> Real,
{
    config.validate()?;
    if !guess.is_finite() || guess <= 0.0 {
        return Err(SolverError::InvalidGuess { value: guess });
    }

    let outcome = solve_positive_root_with(f, guess, config);
    match outcome.termination {
        Termination::Accepted => Ok(outcome),
        Termination::BudgetExhausted => Err(SolverError::DidNotConverge {
            last_guess: outcome.root,
            residual: outcome.residual,
            iterations: outcome.iterations,
        }),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn result_is_never_negative(
            neg in 0.01_f64..100.0,
            pos in 0.01_f64..100.0,
            guess in 0.01_f64..1000.0,
        ) {
            // Roots at -neg and +pos
            let f = |x: Real| (x + neg) * (x - pos);
            let config = NrbConfig::default().with_max_iterations(200);
            let outcome = solve_positive_root_with(f, guess, &config);
            prop_assert!(outcome.root >= 0.0);
            prop_assert!(outcome.root.is_finite());
        }
    }
}
