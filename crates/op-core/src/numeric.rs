use crate::OpError;

/// Floating point type used throughout system
pub type Real = f64;

/// Smallest positive normal value. Added to denominators so a zero step
/// still divides to a finite (if huge) number.
pub const REAL_SMALL: Real = Real::MIN_POSITIVE;

/// Largest finite value; upper end of the admissible non-negative line.
pub const REAL_BIG: Real = Real::MAX;

/// Reject NaN and infinities.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, OpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OpError::NonFinite { what, value: v })
    }
}

/// Like [`ensure_finite`], but also rejects zero and negative values.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, OpError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(OpError::InvalidArg { what })
    }
}
