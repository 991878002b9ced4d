//! Quantity type - a value paired with its unit

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::resolve;
use crate::unit::ConversionError;
use crate::units::UNITS;
use crate::{Dimension, Unit};

/// A numeric value with the unit it is expressed in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    /// The numeric value
    pub value: f64,
    /// The unit of measurement
    pub unit: Unit,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Get the dimension of this quantity
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    /// Check if two quantities can be converted between
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// The value expressed in the dimension's base unit
    pub fn base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Convert to the dimension's base unit
    pub fn to_base(&self) -> Quantity {
        let base = UNITS.base_unit(self.dimension());
        Quantity::new(self.base_value(), base.clone())
    }

    /// Convert to another unit
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, ConversionError> {
        let converted = self.unit.convert_to(self.value, target)?;
        Ok(Quantity::new(converted, target.clone()))
    }

    /// Convert to a unit named by symbol or alias within this dimension
    pub fn in_unit(&self, name: &str) -> Result<Quantity, ConversionError> {
        let target = resolve(self.dimension(), name)?;
        self.convert_to(target)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        // Compare base-unit values; incompatible quantities are never equal
        self.is_compatible(other) && self.base_value() == other.base_value()
    }
}
