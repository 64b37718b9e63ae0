//! scuba-core: stable foundation for the dive calculation crates.
//!
//! Contains:
//! - error (shared error type)
//! - numeric (Real + tolerances + the rounding policies the formulas use)
//! - water (depth-per-atmosphere constants and water types)
//! - units (uom SI types + constructors for depths and pressures)

pub mod error;
pub mod numeric;
pub mod units;
pub mod water;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DiveError, DiveResult};
pub use numeric::*;
pub use water::{DepthUnit, FFW, FSW, MFW, MSW, WaterType};
