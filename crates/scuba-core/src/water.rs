//! Water types and their depth-per-atmosphere constants.
//!
//! Every formula takes an integer "depth per ATA": how many depth units of
//! water add one atmosphere of pressure.

use crate::{DiveError, DiveResult};
use core::fmt;
use core::str::FromStr;

/// Feet of freshwater per atmosphere.
pub const FFW: i32 = 34;
/// Feet of saltwater per atmosphere.
pub const FSW: i32 = 33;
/// Meters of saltwater per atmosphere.
pub const MSW: i32 = 10;
/// Meters of freshwater per atmosphere.
///
/// Unverified placeholder carried over as-is. Any formula that divides by it
/// reports `DiveError::DivisionByZero`; use `WaterType::Custom` for a real
/// freshwater metric value.
pub const MFW: i32 = 0;

/// Length unit a depth is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DepthUnit {
    Feet,
    Meters,
}

impl DepthUnit {
    pub fn abbrev(self) -> &'static str {
        match self {
            DepthUnit::Feet => "ft",
            DepthUnit::Meters => "m",
        }
    }
}

/// Water type selecting the depth-per-ATA constant.
///
/// With the `serde` feature it serializes to its string form (`"fsw"`,
/// `"35ft"`, ...) and deserializes from that text or from a bare integer,
/// which is taken as feet like `FromStr` does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WaterTypeRepr", into = "String"))]
pub enum WaterType {
    FeetFreshwater,
    #[default]
    FeetSaltwater,
    MetersSaltwater,
    MetersFreshwater,
    /// Site-specific value, e.g. the denser water of the Red Sea.
    Custom { depth_per_ata: i32, unit: DepthUnit },
}

impl WaterType {
    pub fn depth_per_ata(self) -> i32 {
        match self {
            WaterType::FeetFreshwater => FFW,
            WaterType::FeetSaltwater => FSW,
            WaterType::MetersSaltwater => MSW,
            WaterType::MetersFreshwater => MFW,
            WaterType::Custom { depth_per_ata, .. } => depth_per_ata,
        }
    }

    pub fn depth_unit(self) -> DepthUnit {
        match self {
            WaterType::FeetFreshwater | WaterType::FeetSaltwater => DepthUnit::Feet,
            WaterType::MetersSaltwater | WaterType::MetersFreshwater => DepthUnit::Meters,
            WaterType::Custom { unit, .. } => unit,
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterType::FeetFreshwater => write!(f, "ffw"),
            WaterType::FeetSaltwater => write!(f, "fsw"),
            WaterType::MetersSaltwater => write!(f, "msw"),
            WaterType::MetersFreshwater => write!(f, "mfw"),
            WaterType::Custom {
                depth_per_ata,
                unit,
            } => write!(f, "{}{}", depth_per_ata, unit.abbrev()),
        }
    }
}

/// Parses `ffw`, `fsw`, `msw`, `mfw` (any case), or a custom value such as
/// `35`, `35ft` or `11m`. A bare number is taken as feet.
impl FromStr for WaterType {
    type Err = DiveError;

    fn from_str(s: &str) -> DiveResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "ffw" => return Ok(WaterType::FeetFreshwater),
            "fsw" => return Ok(WaterType::FeetSaltwater),
            "msw" => return Ok(WaterType::MetersSaltwater),
            "mfw" => return Ok(WaterType::MetersFreshwater),
            _ => {}
        }

        let (digits, unit) = if let Some(d) = s.strip_suffix("ft") {
            (d, DepthUnit::Feet)
        } else if let Some(d) = s.strip_suffix('m') {
            (d, DepthUnit::Meters)
        } else {
            (s.as_str(), DepthUnit::Feet)
        };

        let depth_per_ata = digits.parse::<i32>().map_err(|_| DiveError::InvalidArg {
            what: "water type (expected ffw, fsw, msw, mfw or a number)",
        })?;

        Ok(WaterType::Custom {
            depth_per_ata,
            unit,
        })
    }
}

impl TryFrom<String> for WaterType {
    type Error = DiveError;

    fn try_from(s: String) -> DiveResult<Self> {
        s.parse()
    }
}

/// Wire form accepted when deserializing a `WaterType`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum WaterTypeRepr {
    Number(i32),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<WaterTypeRepr> for WaterType {
    type Error = DiveError;

    fn try_from(repr: WaterTypeRepr) -> DiveResult<Self> {
        match repr {
            WaterTypeRepr::Number(depth_per_ata) => Ok(WaterType::Custom {
                depth_per_ata,
                unit: DepthUnit::Feet,
            }),
            WaterTypeRepr::Text(s) => s.try_into(),
        }
    }
}

impl From<WaterType> for String {
    fn from(water: WaterType) -> Self {
        water.to_string()
    }
}
