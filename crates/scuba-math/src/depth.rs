//! Conversions between depth and absolute pressure.

use scuba_core::{DiveError, DiveResult, Real, round_to_places, truncate_to_i32};
use tracing::debug;

/// Convert atmospheres absolute to depth.
///
/// `depth = (ata - 1) * depth_per_ata`, truncated toward zero, so
/// `ata_to_depth(1.5, FSW)` is 16, not 17.
pub fn ata_to_depth(ata: Real, depth_per_ata: i32) -> DiveResult<i32> {
    let depth = (ata - 1.0) * Real::from(depth_per_ata);
    truncate_to_i32(depth, "depth")
}

/// Convert depth to atmospheres absolute, rounded to hundredths.
pub fn depth_to_ata(depth: i32, depth_per_ata: i32) -> DiveResult<Real> {
    if depth_per_ata == 0 {
        debug!(depth, "depth_to_ata called with zero depth per ATA");
        return Err(DiveError::DivisionByZero {
            what: "depth per ATA",
        });
    }
    let ata = Real::from(depth) / Real::from(depth_per_ata) + 1.0;
    Ok(round_to_places(ata, 2))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn depth_round_trip_within_one_unit(d in 0_i32..1_000, dpa in 1_i32..100) {
            let ata = depth_to_ata(d, dpa).unwrap();
            let back = ata_to_depth(ata, dpa).unwrap();
            // Hundredths rounding moves the depth by at most dpa / 200 < 0.5.
            prop_assert!((back - d).abs() <= 1, "d={} back={} dpa={}", d, back, dpa);
        }

        #[test]
        fn surface_always_one(dpa in 1_i32..1_000) {
            prop_assert_eq!(depth_to_ata(0, dpa).unwrap(), 1.0);
        }
    }
}
