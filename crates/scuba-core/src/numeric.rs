//! Numeric helpers and the rounding policies used by the dive formulas.
//!
//! The formulas deliberately use different policies (truncation, rounding to
//! whole units, rounding to hundredths, truncating percentages down), so each
//! one is a separate named function here rather than a single knob.

use crate::{DiveError, DiveResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> DiveResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DiveError::NonFinite { what, value: v })
    }
}

/// Reject a zero divisor before it turns into inf/NaN.
pub fn ensure_nonzero(v: Real, what: &'static str) -> DiveResult<Real> {
    if v == 0.0 {
        Err(DiveError::DivisionByZero { what })
    } else {
        Ok(v)
    }
}

/// Truncate toward zero and narrow to `i32`.
pub fn truncate_to_i32(v: Real, what: &'static str) -> DiveResult<i32> {
    let t = ensure_finite(v, what)?.trunc();
    if t < i32::MIN as Real || t > i32::MAX as Real {
        return Err(DiveError::OutOfRange { what });
    }
    Ok(t as i32)
}

/// Round to `places` decimals, halves away from zero (`f64::round`).
///
/// This is not banker's rounding: a midpoint such as 34.5 becomes 35, where a
/// round-half-to-even implementation (e.g. .NET `Math.Round`) would give 34.
pub fn round_to_places(v: Real, places: u32) -> Real {
    if places == 0 {
        return v.round();
    }
    let scale = 10_f64.powi(places as i32);
    (v * scale).round() / scale
}

/// Round to the nearest whole unit (halves away from zero) and narrow to `i32`.
pub fn round_to_i32(v: Real, what: &'static str) -> DiveResult<i32> {
    let r = round_to_places(ensure_finite(v, what)?, 0);
    truncate_to_i32(r, what)
}

/// Drop everything below whole-percent granularity; never rounds up.
///
/// `0.3275` becomes `0.32`. Negative fractions truncate toward zero.
pub fn truncate_percent(fraction: Real) -> Real {
    (fraction * 100.0).trunc() / 100.0
}

/// Largest multiple of `multiple` that is `<= value` (mathematical floor).
pub fn floor_to_multiple(value: i64, multiple: i64) -> DiveResult<i64> {
    if multiple == 0 {
        return Err(DiveError::DivisionByZero {
            what: "rounding multiple",
        });
    }
    Ok(value.div_euclid(multiple) * multiple)
}
