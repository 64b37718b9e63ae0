//! Maximum operating depth (MOD).

use crate::depth::ata_to_depth;
use scuba_core::{DiveError, DiveResult, Real, ensure_finite};
use tracing::{debug, warn};

/// Deepest depth at which a mix keeps ppO2 at or below `ppo2`.
///
/// `P = Pg / Fg`, then converted with [`ata_to_depth`], so the result is
/// truncated: 1.4 on EAN32 in saltwater is 111.375 ft, reported as 111.
pub fn max_operating_depth(ppo2: Real, o2_percent: i32, depth_per_ata: i32) -> DiveResult<i32> {
    if o2_percent == 0 {
        debug!(ppo2, "max_operating_depth called with zero oxygen");
        return Err(DiveError::DivisionByZero {
            what: "oxygen percent",
        });
    }
    let ata = ensure_finite(ppo2 / (Real::from(o2_percent) / 100.0), "ambient pressure")?;
    ata_to_depth(ata, depth_per_ata)
}

/// MOD from oxygen and helium fractions.
///
/// There is no agreed formula for this yet, so it always reports
/// `DiveError::NotImplemented` instead of a depth.
pub fn max_operating_depth_trimix(o2_percent: i32, helium_percent: i32) -> DiveResult<i32> {
    warn!(
        o2_percent,
        helium_percent, "trimix maximum operating depth is not implemented"
    );
    Err(DiveError::NotImplemented {
        what: "maximum operating depth from oxygen and helium fractions",
    })
}
