//! One dive calculation captured as data.

use crate::turn::{ThirdsCommand, ThirdsInputs, ThirdsMethod};
use core::fmt;
use scuba_core::{DepthUnit, DiveResult, Real, WaterType};
use serde::{Deserialize, Serialize};

/// A calculation and its arguments, ready to run later.
///
/// Serialized with a `kind` tag, e.g.
///
/// ```yaml
/// kind: max_operating_depth
/// ppo2: 1.4
/// o2_percent: 32
/// water: fsw
/// ```
///
/// `water` defaults to saltwater feet when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    AtaToDepth {
        ata: Real,
        #[serde(default)]
        water: WaterType,
    },
    DepthToAta {
        depth: i32,
        #[serde(default)]
        water: WaterType,
    },
    BestO2Mix {
        depth: i32,
        ppo2: Real,
        #[serde(default)]
        water: WaterType,
    },
    EquivalentAirDepth {
        o2_percent: i32,
        depth: i32,
        #[serde(default)]
        water: WaterType,
    },
    EquivalentNitrogenDepth {
        helium_percent: i32,
        depth: i32,
        #[serde(default)]
        water: WaterType,
    },
    MaxOperatingDepth {
        ppo2: Real,
        o2_percent: i32,
        #[serde(default)]
        water: WaterType,
    },
    MaxOperatingDepthTrimix {
        o2_percent: i32,
        helium_percent: i32,
    },
    RoundPressureForThirds {
        pressure: i32,
    },
    TurnPressure {
        volume: Real,
        pressure: i32,
        baseline: Real,
        tank_count: i32,
        #[serde(default)]
        method: ThirdsMethod,
    },
}

/// Result of running a `Calculation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Depth { value: i32, unit: DepthUnit },
    Ata(Real),
    Fraction(Real),
    Pressure(i32),
}

impl Calculation {
    /// Stable snake_case name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Calculation::AtaToDepth { .. } => "ata_to_depth",
            Calculation::DepthToAta { .. } => "depth_to_ata",
            Calculation::BestO2Mix { .. } => "best_o2_mix",
            Calculation::EquivalentAirDepth { .. } => "equivalent_air_depth",
            Calculation::EquivalentNitrogenDepth { .. } => "equivalent_nitrogen_depth",
            Calculation::MaxOperatingDepth { .. } => "max_operating_depth",
            Calculation::MaxOperatingDepthTrimix { .. } => "max_operating_depth_trimix",
            Calculation::RoundPressureForThirds { .. } => "round_pressure_for_thirds",
            Calculation::TurnPressure { .. } => "turn_pressure",
        }
    }

    pub fn run(&self) -> DiveResult<Outcome> {
        match *self {
            Calculation::AtaToDepth { ata, water } => {
                let d = scuba_math::ata_to_depth(ata, water.depth_per_ata())?;
                Ok(depth_outcome(d, water))
            }
            Calculation::DepthToAta { depth, water } => {
                scuba_math::depth_to_ata(depth, water.depth_per_ata()).map(Outcome::Ata)
            }
            Calculation::BestO2Mix { depth, ppo2, water } => {
                scuba_math::best_o2_mix(depth, ppo2, water.depth_per_ata()).map(Outcome::Fraction)
            }
            Calculation::EquivalentAirDepth {
                o2_percent,
                depth,
                water,
            } => {
                let d = scuba_math::equivalent_air_depth(o2_percent, depth, water.depth_per_ata())?;
                Ok(depth_outcome(d, water))
            }
            Calculation::EquivalentNitrogenDepth {
                helium_percent,
                depth,
                water,
            } => {
                let d = scuba_math::equivalent_nitrogen_depth(
                    helium_percent,
                    depth,
                    water.depth_per_ata(),
                )?;
                Ok(depth_outcome(d, water))
            }
            Calculation::MaxOperatingDepth {
                ppo2,
                o2_percent,
                water,
            } => {
                let d = scuba_math::max_operating_depth(ppo2, o2_percent, water.depth_per_ata())?;
                Ok(depth_outcome(d, water))
            }
            Calculation::MaxOperatingDepthTrimix {
                o2_percent,
                helium_percent,
            } => {
                let d = scuba_math::max_operating_depth_trimix(o2_percent, helium_percent)?;
                Ok(depth_outcome(d, WaterType::default()))
            }
            Calculation::RoundPressureForThirds { pressure } => {
                scuba_math::round_pressure_for_thirds(pressure).map(Outcome::Pressure)
            }
            Calculation::TurnPressure {
                volume,
                pressure,
                baseline,
                tank_count,
                method,
            } => {
                let inputs = ThirdsInputs {
                    volume,
                    pressure,
                    baseline,
                    tank_count,
                };
                ThirdsCommand::new(inputs, method)
                    .execute()
                    .map(Outcome::Pressure)
            }
        }
    }
}

fn depth_outcome(value: i32, water: WaterType) -> Outcome {
    Outcome::Depth {
        value,
        unit: water.depth_unit(),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Depth { value, unit } => write!(f, "{} {}", value, unit.abbrev()),
            Outcome::Ata(ata) => write!(f, "{ata:.2} ATA"),
            Outcome::Fraction(fr) => write!(f, "{:.2} ({:.0}% O2)", fr, fr * 100.0),
            Outcome::Pressure(p) => write!(f, "{p}"),
        }
    }
}
