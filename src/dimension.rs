//! Measurement dimensions
//!
//! Every unit belongs to exactly one dimension, and conversion is only
//! defined between units of the same dimension. The string identifiers are
//! stable: `Display`, `FromStr`, and serde all use the same camelCase form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::unit::ConversionError;

/// The closed set of dimensions FixTools converts within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Mass,
    Volume,
    Area,
    BitByte,
    Power,
    Time,
    Temperature,
    Pressure,
    Length,
    Energy,
    Speed,
    FuelEconomy,
    PlaneAngle,
}

impl Dimension {
    /// Every dimension, in declaration order.
    pub const ALL: [Dimension; 13] = [
        Dimension::Mass,
        Dimension::Volume,
        Dimension::Area,
        Dimension::BitByte,
        Dimension::Power,
        Dimension::Time,
        Dimension::Temperature,
        Dimension::Pressure,
        Dimension::Length,
        Dimension::Energy,
        Dimension::Speed,
        Dimension::FuelEconomy,
        Dimension::PlaneAngle,
    ];

    /// Stable string identifier, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Area => "area",
            Dimension::BitByte => "bitByte",
            Dimension::Power => "power",
            Dimension::Time => "time",
            Dimension::Temperature => "temperature",
            Dimension::Pressure => "pressure",
            Dimension::Length => "length",
            Dimension::Energy => "energy",
            Dimension::Speed => "speed",
            Dimension::FuelEconomy => "fuelEconomy",
            Dimension::PlaneAngle => "planeAngle",
        }
    }

    /// Symbol of the base unit conversions within this dimension are
    /// routed through.
    pub fn base_symbol(&self) -> &'static str {
        match self {
            Dimension::Mass => "kg",
            Dimension::Volume => "L",
            Dimension::Area => "m2",
            Dimension::BitByte => "bit",
            Dimension::Power => "W",
            Dimension::Time => "s",
            Dimension::Temperature => "K",
            Dimension::Pressure => "Pa",
            Dimension::Length => "m",
            Dimension::Energy => "J",
            Dimension::Speed => "m/s",
            Dimension::FuelEconomy => "km/L",
            Dimension::PlaneAngle => "rad",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ConversionError::UnknownDimension(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_distinct() {
        for (i, a) in Dimension::ALL.iter().enumerate() {
            for b in &Dimension::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for dim in Dimension::ALL {
            let parsed: Dimension = dim.as_str().parse().unwrap();
            assert_eq!(parsed, dim);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let result = "voltage".parse::<Dimension>();
        assert!(matches!(result, Err(ConversionError::UnknownDimension(_))));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Mass".parse::<Dimension>().is_err());
        assert!("fueleconomy".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for dim in Dimension::ALL {
            let json = serde_json::to_string(&dim).unwrap();
            assert_eq!(json, format!("\"{}\"", dim.as_str()));

            let back: Dimension = serde_json::from_str(&json).unwrap();
            assert_eq!(back, dim);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::BitByte), "bitByte");
        assert_eq!(format!("{}", Dimension::FuelEconomy), "fuelEconomy");
        assert_eq!(format!("{}", Dimension::Mass), "mass");
    }
}
