//! Tank pressure rounding for the rule of thirds.

use scuba_core::{DiveError, DiveResult, floor_to_multiple};

/// Round a tank pressure down so it splits evenly into thirds.
///
/// The pressure is first floored to the hundred, then lowered by
/// `(hundreds % 3) * 100` so the result is a multiple of 300:
/// 3469 -> 3400 -> 3300.
///
/// Negative pressures are floored the same way (toward negative infinity).
pub fn round_pressure_for_thirds(pressure: i32) -> DiveResult<i32> {
    let rounded = floor_to_multiple(i64::from(pressure), 100)?;
    let remainder = rounded.rem_euclid(3);
    let adjusted = rounded - remainder * 100;
    i32::try_from(adjusted).map_err(|_| DiveError::OutOfRange {
        what: "thirds pressure",
    })
}
