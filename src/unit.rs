//! Unit representation with conversion factors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Dimension;

/// A unit of measurement.
///
/// Conversion to the dimension's base unit is affine:
/// `base = value * factor + offset`. Every dimension except temperature
/// uses a zero offset, making the mapping a plain scale factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Canonical symbol (e.g. "kg", "L", "degC")
    pub symbol: String,
    /// Display name rendered next to results (e.g. "kilogram")
    pub name: String,
    /// The dimension this unit belongs to
    pub dimension: Dimension,
    /// How many base units equal 1 of this unit
    pub factor: f64,
    /// Additive shift applied after scaling (temperature scales only)
    pub offset: f64,
}

impl Unit {
    /// Create a unit with a proportional conversion (no offset)
    pub fn new(symbol: &str, name: &str, dimension: Dimension, factor: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            factor,
            offset: 0.0,
        }
    }

    /// Create a unit with an offset (temperature scales)
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        factor: f64,
        offset: f64,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            factor,
            offset,
        }
    }

    /// Check if this is the dimension's base unit
    pub fn is_base(&self) -> bool {
        self.factor == 1.0 && self.offset == 0.0
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        self.offset != 0.0
    }

    /// Check if two units can be converted between
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Convert a value from this unit to the dimension's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    /// Convert a value from the dimension's base unit to this unit
    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.factor
    }

    /// Convert a value from this unit to another unit
    ///
    /// NaN and infinity propagate through the arithmetic unchecked.
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dimension: self.dimension,
                to_dimension: target.dimension,
            });
        }

        // Same canonical unit: identity, bit-exact even for offset units.
        if self.symbol == target.symbol {
            return Ok(value);
        }

        Ok(target.from_base(self.to_base(value)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors surfaced by unit resolution, conversion, and parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The name matched neither a symbol nor an alias of the dimension
    #[error("unrecognized {dimension} unit: {name:?}")]
    UnrecognizedUnit { dimension: Dimension, name: String },

    /// Units belong to different dimensions
    #[error("cannot convert {from} ({from_dimension}) to {to} ({to_dimension})")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dimension: Dimension,
        to_dimension: Dimension,
    },

    /// The string is not one of the dimension identifiers
    #[error("unknown dimension: {0:?}")]
    UnknownDimension(String),

    /// A quantity string with no parsable number or unit part
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// A conversion spec without a recognized "from -> to" separator
    #[error("invalid conversion spec {0:?}, expected \"from -> to\"")]
    InvalidConversionSpec(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("m", "meter", Dimension::Length, 1.0)
    }

    fn kilometer() -> Unit {
        Unit::new("km", "kilometer", Dimension::Length, 1000.0)
    }

    fn second() -> Unit {
        Unit::new("s", "second", Dimension::Time, 1.0)
    }

    fn celsius() -> Unit {
        Unit::with_offset("degC", "celsius", Dimension::Temperature, 1.0, 273.15)
    }

    #[test]
    fn test_base_unit() {
        assert!(meter().is_base());
        assert!(!kilometer().is_base());
        assert!(!celsius().is_base());
    }

    #[test]
    fn test_has_offset() {
        assert!(celsius().has_offset());
        assert!(!kilometer().has_offset());
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&second()));
    }

    #[test]
    fn test_to_base() {
        assert_eq!(kilometer().to_base(5.0), 5000.0);
        assert_eq!(celsius().to_base(0.0), 273.15);
    }

    #[test]
    fn test_from_base() {
        assert_eq!(kilometer().from_base(5000.0), 5.0);
        assert_eq!(celsius().from_base(273.15), 0.0);
    }

    #[test]
    fn test_convert_to() {
        let converted = meter().convert_to(5000.0, &kilometer()).unwrap();
        assert_eq!(converted, 5.0);
    }

    #[test]
    fn test_convert_to_same_unit_is_identity() {
        let c = celsius();
        assert_eq!(c.convert_to(36.6, &c).unwrap(), 36.6);
        assert_eq!(meter().convert_to(-0.0, &meter()).unwrap(), 0.0);
    }

    #[test]
    fn test_convert_to_incompatible() {
        let result = meter().convert_to(1.0, &second());
        assert!(matches!(
            result,
            Err(ConversionError::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn test_nan_propagates() {
        let converted = meter().convert_to(f64::NAN, &kilometer()).unwrap();
        assert!(converted.is_nan());
    }

    #[test]
    fn test_infinity_propagates() {
        let converted = kilometer().convert_to(f64::INFINITY, &meter()).unwrap();
        assert!(converted.is_infinite());
    }

    #[test]
    fn test_error_display() {
        let err = ConversionError::UnrecognizedUnit {
            dimension: Dimension::Volume,
            name: "lightyear".to_string(),
        };
        assert_eq!(format!("{}", err), "unrecognized volume unit: \"lightyear\"");
    }
}
