//! scuba-math: gas and depth physics for dive planning.
//!
//! Provides:
//! - Depth <-> ATA (atmospheres absolute) conversions
//! - Best oxygen mix for a depth and ppO2 limit
//! - Equivalent air depth (EAD) and equivalent nitrogen depth (END)
//! - Maximum operating depth (MOD)
//! - Tank pressure rounding for the rule of thirds
//!
//! Most of these derive from the pressure formula `Pg = Fg * P`: partial
//! pressure of a gas equals its fraction times the absolute pressure, and
//! `depth = (P - 1) * depth_per_ata`.
//!
//! Every function is pure and takes the depth-per-ATA constant of the water
//! being dived (see [`scuba_core::water`]). Zero divisors come back as
//! [`DiveError::DivisionByZero`](scuba_core::DiveError); physically
//! meaningless but computable inputs (negative depths, fractions over 100 %)
//! are passed through unvalidated. Use [`GasMix`] for validated mixes.
//!
//! # Example
//!
//! ```
//! use scuba_core::FSW;
//! use scuba_math::{best_o2_mix, max_operating_depth};
//!
//! let mix = best_o2_mix(100, 1.4, FSW).unwrap();
//! assert!((mix - 0.34).abs() < 1e-9);
//!
//! let mod_ft = max_operating_depth(1.4, 32, FSW).unwrap();
//! assert_eq!(mod_ft, 111);
//! ```

pub mod depth;
pub mod gas;
pub mod operating_depth;
pub mod thirds;

// Re-exports for ergonomics
pub use depth::{ata_to_depth, depth_to_ata};
pub use gas::{GasMix, best_o2_mix, equivalent_air_depth, equivalent_nitrogen_depth};
pub use operating_depth::{max_operating_depth, max_operating_depth_trimix};
pub use thirds::round_pressure_for_thirds;
