//! Breathing gas mixes: best mix, equivalent air depth, equivalent nitrogen depth.

use crate::depth::depth_to_ata;
use crate::operating_depth::{max_operating_depth, max_operating_depth_trimix};
use core::fmt;
use scuba_core::{
    DiveError, DiveResult, Real, ensure_finite, ensure_nonzero, round_to_i32, truncate_percent,
};
use tracing::debug;

/// Inert (nitrogen) fraction of air used by the EAD formula.
pub const AIR_INERT_FRACTION: Real = 0.79;

/// Best oxygen fraction for a planned depth without exceeding `ppo2`.
///
/// `Fg = Pg / P`, truncated down to whole percent so the mix never carries
/// more oxygen than the limit allows: 0.3475 becomes 0.34, never 0.35.
pub fn best_o2_mix(depth: i32, ppo2: Real, depth_per_ata: i32) -> DiveResult<Real> {
    let ata = ensure_nonzero(depth_to_ata(depth, depth_per_ata)?, "ambient pressure")
        .inspect_err(|_| debug!(depth, depth_per_ata, "ambient pressure rounds to zero"))?;
    let o2 = ensure_finite(ppo2 / ata, "oxygen fraction")?;
    Ok(truncate_percent(o2))
}

/// Equivalent air depth of an enriched-oxygen (nitrox) mix.
///
/// `EAD = ((1 - o2/100) * (depth + dpa) / 0.79) - dpa`, rounded to the
/// nearest whole unit.
pub fn equivalent_air_depth(o2_percent: i32, depth: i32, depth_per_ata: i32) -> DiveResult<i32> {
    let inert = 1.0 - Real::from(o2_percent) / 100.0;
    let dpa = Real::from(depth_per_ata);
    let ead = inert * (Real::from(depth) + dpa) / AIR_INERT_FRACTION - dpa;
    round_to_i32(ead, "equivalent air depth")
}

/// Equivalent nitrogen depth of a mix containing helium.
///
/// `END = (1 - he/100) * (depth + dpa) - dpa`, rounded to the nearest whole unit.
pub fn equivalent_nitrogen_depth(
    helium_percent: i32,
    depth: i32,
    depth_per_ata: i32,
) -> DiveResult<i32> {
    let narcotic = 1.0 - Real::from(helium_percent) / 100.0;
    let dpa = Real::from(depth_per_ata);
    let end = narcotic * (Real::from(depth) + dpa) - dpa;
    round_to_i32(end, "equivalent nitrogen depth")
}

/// A validated breathing gas, in whole percent.
///
/// The free functions above accept any integers; this type is for callers
/// that want fractions checked once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GasMix {
    o2_percent: i32,
    he_percent: i32,
}

impl GasMix {
    pub fn air() -> Self {
        Self {
            o2_percent: 21,
            he_percent: 0,
        }
    }

    /// Oxygen/nitrogen mix.
    pub fn nitrox(o2_percent: i32) -> DiveResult<Self> {
        Self::trimix(o2_percent, 0)
    }

    /// Oxygen/helium/nitrogen mix; nitrogen makes up the balance.
    ///
    /// Both fractions must be in 0..=100 and sum to at most 100, and the mix
    /// must contain some oxygen.
    pub fn trimix(o2_percent: i32, he_percent: i32) -> DiveResult<Self> {
        if !(1..=100).contains(&o2_percent) {
            return Err(DiveError::InvalidArg {
                what: "oxygen percent must be in 1..=100",
            });
        }
        if !(0..=100).contains(&he_percent) {
            return Err(DiveError::InvalidArg {
                what: "helium percent must be in 0..=100",
            });
        }
        if o2_percent + he_percent > 100 {
            return Err(DiveError::InvalidArg {
                what: "oxygen and helium sum above 100 percent",
            });
        }
        Ok(Self {
            o2_percent,
            he_percent,
        })
    }

    pub fn o2_percent(&self) -> i32 {
        self.o2_percent
    }

    pub fn he_percent(&self) -> i32 {
        self.he_percent
    }

    pub fn n2_percent(&self) -> i32 {
        100 - self.o2_percent - self.he_percent
    }

    /// See [`equivalent_air_depth`]. Only the oxygen fraction is used.
    pub fn ead(&self, depth: i32, depth_per_ata: i32) -> DiveResult<i32> {
        equivalent_air_depth(self.o2_percent, depth, depth_per_ata)
    }

    /// See [`equivalent_nitrogen_depth`].
    pub fn end(&self, depth: i32, depth_per_ata: i32) -> DiveResult<i32> {
        equivalent_nitrogen_depth(self.he_percent, depth, depth_per_ata)
    }

    /// See [`max_operating_depth`].
    pub fn mod_depth(&self, ppo2: Real, depth_per_ata: i32) -> DiveResult<i32> {
        max_operating_depth(ppo2, self.o2_percent, depth_per_ata)
    }

    /// See [`max_operating_depth_trimix`].
    pub fn mod_depth_trimix(&self) -> DiveResult<i32> {
        max_operating_depth_trimix(self.o2_percent, self.he_percent)
    }
}

impl fmt::Display for GasMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.o2_percent, self.he_percent) {
            (21, 0) => write!(f, "Air"),
            (100, 0) => write!(f, "Oxygen"),
            (o2, 0) => write!(f, "EAN{o2}"),
            (o2, he) => write!(f, "Tx {o2}/{he}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scuba_core::{FSW, MFW, MSW, Tolerances, nearly_equal};

    fn close(a: Real, b: Real) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn best_mix_truncates_down() {
        // ata = 4.03, 1.4 / 4.03 = 0.3473...
        assert!(close(best_o2_mix(100, 1.4, FSW).unwrap(), 0.34));
        // ata = 4.0, 1.4 / 4.0 = 0.35 exactly
        assert!(close(best_o2_mix(30, 1.4, MSW).unwrap(), 0.35));
        // ata = 2.0, 1.6 / 2.0 = 0.8
        assert!(close(best_o2_mix(33, 1.6, FSW).unwrap(), 0.8));
    }

    #[test]
    fn best_mix_at_surface_passes_through() {
        // Over 100 % is physically meaningless but not rejected.
        assert!(close(best_o2_mix(0, 1.4, FSW).unwrap(), 1.4));
    }

    #[test]
    fn best_mix_zero_divisors() {
        assert!(matches!(
            best_o2_mix(100, 1.4, MFW),
            Err(DiveError::DivisionByZero { .. })
        ));
        // -33 fsw is zero absolute pressure
        assert_eq!(
            best_o2_mix(-33, 1.4, FSW),
            Err(DiveError::DivisionByZero {
                what: "ambient pressure"
            })
        );
    }

    #[test]
    fn ead_examples() {
        // EAN32 at 100 fsw: 0.68 * 133 / 0.79 - 33 = 81.48
        assert_eq!(equivalent_air_depth(32, 100, FSW).unwrap(), 81);
        // EAN36 at 30 msw: 0.64 * 40 / 0.79 - 10 = 22.41
        assert_eq!(equivalent_air_depth(36, 30, MSW).unwrap(), 22);
        // Air is its own equivalent
        assert_eq!(equivalent_air_depth(21, 100, FSW).unwrap(), 100);
    }

    #[test]
    fn end_examples() {
        // Tx 21/35 at 150 fsw: 0.65 * 183 - 33 = 85.95
        assert_eq!(equivalent_nitrogen_depth(35, 150, FSW).unwrap(), 86);
        // 30 % helium at 60 msw: 0.7 * 70 - 10 = 39
        assert_eq!(equivalent_nitrogen_depth(30, 60, MSW).unwrap(), 39);
        // 0.5 * 135 - 33 = 34.5, a midpoint: rounds away from zero
        assert_eq!(equivalent_nitrogen_depth(50, 102, FSW).unwrap(), 35);
        // No helium leaves the depth unchanged
        assert_eq!(equivalent_nitrogen_depth(0, 120, FSW).unwrap(), 120);
    }

    #[test]
    fn gas_mix_validation() {
        assert!(GasMix::nitrox(32).is_ok());
        assert!(GasMix::nitrox(0).is_err());
        assert!(GasMix::nitrox(101).is_err());
        assert!(GasMix::trimix(21, -1).is_err());
        assert!(GasMix::trimix(50, 60).is_err());

        let tx = GasMix::trimix(18, 45).unwrap();
        assert_eq!(tx.n2_percent(), 37);
    }

    #[test]
    fn gas_mix_delegates() {
        let ean32 = GasMix::nitrox(32).unwrap();
        assert_eq!(ean32.ead(100, FSW).unwrap(), 81);
        assert_eq!(ean32.mod_depth(1.4, FSW).unwrap(), 111);

        let tx = GasMix::trimix(21, 35).unwrap();
        assert_eq!(tx.end(150, FSW).unwrap(), 86);
        assert!(matches!(
            tx.mod_depth_trimix(),
            Err(DiveError::NotImplemented { .. })
        ));
    }

    #[test]
    fn gas_mix_display() {
        assert_eq!(GasMix::air().to_string(), "Air");
        assert_eq!(GasMix::nitrox(32).unwrap().to_string(), "EAN32");
        assert_eq!(GasMix::nitrox(100).unwrap().to_string(), "Oxygen");
        assert_eq!(GasMix::trimix(18, 45).unwrap().to_string(), "Tx 18/45");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn best_mix_never_rounds_up(depth in 0_i32..400, ppo2 in 0.16_f64..1.6, dpa in 1_i32..40) {
            let ata = depth_to_ata(depth, dpa).unwrap();
            let raw = ppo2 / ata;
            let mix = best_o2_mix(depth, ppo2, dpa).unwrap();
            prop_assert!(mix <= raw + 1e-12);
            prop_assert!(raw - mix < 0.01 + 1e-12);
        }

        #[test]
        fn richer_nitrox_is_shallower_ead(o2 in 21_i32..=40, depth in 0_i32..200) {
            let air = equivalent_air_depth(21, depth, 33).unwrap();
            let nitrox = equivalent_air_depth(o2, depth, 33).unwrap();
            prop_assert!(nitrox <= air);
        }
    }
}
