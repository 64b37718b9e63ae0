// scuba-core/src/units.rs

use crate::water::DepthUnit;
use uom::si::f64::{Length as UomLength, Pressure as UomPressure};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::pound_force_per_square_inch;
    Pressure::new::<pound_force_per_square_inch>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

/// Integer depth in the given unit as a length quantity.
pub fn depth_length(depth: i32, unit: DepthUnit) -> Length {
    match unit {
        DepthUnit::Feet => ft(f64::from(depth)),
        DepthUnit::Meters => m(f64::from(depth)),
    }
}

/// Absolute ambient pressure for an ATA value.
#[inline]
pub fn ata_pressure(ata: f64) -> Pressure {
    atm(ata)
}
