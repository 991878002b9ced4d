//! FixTools Units - Unit Conversion
//!
//! The conversion core behind the FixTools converter widgets: pure,
//! table-driven conversion of a numeric value between two named units of a
//! fixed dimension. Values are routed input unit -> base unit -> output
//! unit; temperature is affine through Kelvin, every other dimension is a
//! plain scale factor.
//!
//! Dimensions:
//! - Mass (kg, g, lb, oz, etc.)
//! - Volume (L, mL, gal, cup, etc.)
//! - Area (m², acre, ft², etc.)
//! - Bit/byte (bit, byte, MB, GiB, etc.)
//! - Power (W, kW, hp, etc.)
//! - Time (s, min, h, d, etc.)
//! - Temperature (K, C, F, R)
//! - Pressure (Pa, bar, psi, etc.)
//! - Length (m, km, ft, mi, etc.)
//! - Energy (J, cal, kWh, etc.)
//! - Speed (m/s, km/h, mph, etc.)
//! - Fuel economy (km/L, mpg, etc.)
//! - Plane angle (rad, deg, etc.)
//!
//! Unit names are matched case-sensitively against each dimension's alias
//! table; the legacy FixTools spellings remain accepted. Unrecognized names
//! surface as [`ConversionError::UnrecognizedUnit`], never as a sentinel
//! value.

mod dimension;
mod unit;
mod quantity;
mod convert;
mod parse;
mod units;

pub use dimension::Dimension;
pub use unit::{ConversionError, Unit};
pub use quantity::Quantity;
pub use convert::{base_unit, convert, resolve, to_base, units_of};
pub use parse::{parse_conversion, parse_quantity};
pub use units::{UnitRegistry, UNITS};
