//! Import uom si system and add unit constants
//! Zero values should be created using standard uom syntax ($Quantity::ZERO) after adding "use crate::imports::*" (or `uom::ConstZero`)
//! Non-zero values should be created using standard uom syntax ($Quantity::new::<$unit>($value)) or multiplication syntax ($value * $UNIT_CONSTANT)

use uom::si;

pub use si::f64::{Length, Mass, Power, Ratio, Velocity};
pub use si::length::{foot, kilometer, meter};
pub use si::mass::{kilogram, megagram};
pub use si::power::{kilowatt, megawatt, watt};
pub use si::ratio::{percent, ratio};
pub use si::velocity::{kilometer_per_hour, meter_per_second, mile_per_hour};
