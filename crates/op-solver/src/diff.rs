//! Finite difference derivative estimates for scalar functions.
//!
//! Every denominator carries [`REAL_SMALL`] so a zero or vanishing step gives
//! a huge but finite quotient instead of a division fault. Nothing here
//! fails: degenerate inputs surface as IEEE inf/NaN in the result.

use op_core::numeric::{REAL_SMALL, Real};

/// Default finite difference step.
pub const DEFAULT_STEP: Real = 1e-7;

/// First derivative by central differences, O(h²), two evaluations.
pub fn central_diff1<F>(f: F, x: Real, h: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    (f(x + h) - f(x - h)) / (2.0 * h + REAL_SMALL)
}

/// First derivative by forward differences, O(h), one evaluation.
///
/// `fx` must be `f(x)`; the caller usually has it already, which is why the
/// root solver prefers this form.
pub fn forward_diff1<F>(f: F, x: Real, fx: Real, h: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    (f(x + h) - fx) / (h + REAL_SMALL)
}

/// First derivative by backward differences, O(h), one evaluation.
pub fn backward_diff1<F>(f: F, x: Real, fx: Real, h: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    (fx - f(x - h)) / (h + REAL_SMALL)
}

/// Second derivative by central differences, O(h²), two evaluations.
///
/// Cancellation grows like `eps / h²`, so steps around 1e-4 work better here
/// than [`DEFAULT_STEP`].
pub fn central_diff2<F>(f: F, x: Real, fx: Real, h: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    (f(x + h) - 2.0 * fx + f(x - h)) / (h * h + REAL_SMALL)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linear_slope_recovered(x in 0.1_f64..10.0, h in 1e-8_f64..1e-3) {
            let f = |v: Real| v;
            prop_assert!((central_diff1(f, x, h) - 1.0).abs() < 1e-5);
            prop_assert!((forward_diff1(f, x, x, h) - 1.0).abs() < 1e-5);
            prop_assert!((backward_diff1(f, x, x, h) - 1.0).abs() < 1e-5);
        }
    }
}
