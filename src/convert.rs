//! Top-level conversion entry points
//!
//! Two-phase dispatch: resolve each unit name against the dimension's
//! alias table, then route the value through the dimension's base unit.
//! Adding a unit means adding one factor entry, not N pairwise formulas.

use crate::unit::{ConversionError, Unit};
use crate::units::UNITS;
use crate::Dimension;

/// Convert `value` from `from` to `to` within `dimension`.
///
/// Unit names are matched case-sensitively against the dimension's symbol
/// and alias tables. NaN and infinity propagate per IEEE 754.
pub fn convert(
    dimension: Dimension,
    from: &str,
    to: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let from_unit = resolve(dimension, from)?;
    let to_unit = resolve(dimension, to)?;
    from_unit.convert_to(value, to_unit)
}

/// Convert `value` from `unit` to the dimension's base unit.
pub fn to_base(dimension: Dimension, unit: &str, value: f64) -> Result<f64, ConversionError> {
    Ok(resolve(dimension, unit)?.to_base(value))
}

/// Look up a unit by canonical symbol or alias.
pub fn resolve(dimension: Dimension, name: &str) -> Result<&'static Unit, ConversionError> {
    UNITS
        .get(dimension, name)
        .ok_or_else(|| ConversionError::UnrecognizedUnit {
            dimension,
            name: name.to_string(),
        })
}

/// All units registered for a dimension, for unit pickers and listings.
pub fn units_of(dimension: Dimension) -> Vec<&'static Unit> {
    UNITS.by_dimension(dimension)
}

/// The unit conversions within `dimension` are routed through.
pub fn base_unit(dimension: Dimension) -> &'static Unit {
    UNITS.base_unit(dimension)
}
