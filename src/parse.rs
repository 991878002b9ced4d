//! Input-string parsing for the form layer
//!
//! Parses quantity strings like "5 kg" and conversion specs like
//! "kg -> lb". Surrounding whitespace is structural and stripped; the
//! unit names themselves are still matched exactly, case-sensitively.

use crate::convert::resolve;
use crate::quantity::Quantity;
use crate::unit::{ConversionError, Unit};
use crate::Dimension;

/// Parse a quantity string like "5 kg", "3.5km", or "-1.5e3 mL"
pub fn parse_quantity(dimension: Dimension, s: &str) -> Result<Quantity, ConversionError> {
    let s = s.trim();

    let split = number_prefix_len(s);
    if split == 0 {
        return Err(ConversionError::InvalidQuantity(s.to_string()));
    }

    let value: f64 = s[..split]
        .parse()
        .map_err(|_| ConversionError::InvalidQuantity(s.to_string()))?;

    let unit_str = s[split..].trim();
    if unit_str.is_empty() {
        return Err(ConversionError::InvalidQuantity(s.to_string()));
    }

    let unit = resolve(dimension, unit_str)?;
    Ok(Quantity::new(value, unit.clone()))
}

/// Parse a conversion spec like "kg -> lb", "C → F", or "km to mi"
pub fn parse_conversion(
    dimension: Dimension,
    s: &str,
) -> Result<(&'static Unit, &'static Unit), ConversionError> {
    let parts: Vec<&str> = if s.contains("->") {
        s.splitn(2, "->").collect()
    } else if s.contains('→') {
        s.splitn(2, '→').collect()
    } else if s.contains(" to ") {
        s.splitn(2, " to ").collect()
    } else if s.contains(" in ") {
        s.splitn(2, " in ").collect()
    } else {
        return Err(ConversionError::InvalidConversionSpec(s.to_string()));
    };

    let from = resolve(dimension, parts[0].trim())?;
    let to = resolve(dimension, parts[1].trim())?;
    Ok((from, to))
}

/// Length of the leading number in `s`, in bytes.
///
/// Accepts sign, decimal point, and exponent forms; an 'e'/'E' only counts
/// as an exponent marker when a digit came before it and a digit or sign
/// follows, so unit names starting with 'e' split correctly.
fn number_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    let mut seen_digit = false;

    while i < b.len() {
        match b[i] {
            b'0'..=b'9' => {
                seen_digit = true;
                i += 1;
            }
            b'.' => i += 1,
            b'+' | b'-' if i == 0 || matches!(b[i - 1], b'e' | b'E') => i += 1,
            b'e' | b'E'
                if seen_digit
                    && i + 1 < b.len()
                    && matches!(b[i + 1], b'0'..=b'9' | b'+' | b'-') =>
            {
                i += 1;
            }
            _ => break,
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_with_space() {
        let q = parse_quantity(Dimension::Length, "5 m").unwrap();
        assert_eq!(q.value, 5.0);
        assert_eq!(q.unit.symbol, "m");
    }

    #[test]
    fn test_parse_quantity_without_space() {
        let q = parse_quantity(Dimension::Mass, "100kg").unwrap();
        assert_eq!(q.value, 100.0);
        assert_eq!(q.unit.symbol, "kg");
    }

    #[test]
    fn test_parse_quantity_signed_and_decimal() {
        let q = parse_quantity(Dimension::PlaneAngle, "-3.14 rad").unwrap();
        assert_eq!(q.value, -3.14);
        assert_eq!(q.unit.symbol, "rad");

        let q = parse_quantity(Dimension::Temperature, "+40 celcius").unwrap();
        assert_eq!(q.value, 40.0);
        assert_eq!(q.unit.symbol, "degC");
    }

    #[test]
    fn test_parse_quantity_scientific() {
        let q = parse_quantity(Dimension::Volume, "-1.5e3 mL").unwrap();
        assert_eq!(q.value, -1500.0);
        assert_eq!(q.unit.symbol, "mL");

        let q = parse_quantity(Dimension::Volume, "2E-2L").unwrap();
        assert_eq!(q.value, 0.02);
        assert_eq!(q.unit.symbol, "L");
    }

    #[test]
    fn test_parse_quantity_unit_starting_with_e() {
        let q = parse_quantity(Dimension::Energy, "5 eV").unwrap();
        assert_eq!(q.value, 5.0);
        assert_eq!(q.unit.symbol, "eV");
    }

    #[test]
    fn test_parse_quantity_multi_word_unit() {
        let q = parse_quantity(Dimension::FuelEconomy, "42 miles per gallon").unwrap();
        assert_eq!(q.value, 42.0);
        assert_eq!(q.unit.symbol, "mpg");
    }

    #[test]
    fn test_parse_quantity_invalid() {
        assert!(matches!(
            parse_quantity(Dimension::Length, "five meters"),
            Err(ConversionError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parse_quantity(Dimension::Length, "5"),
            Err(ConversionError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parse_quantity(Dimension::Length, "1.2.3 m"),
            Err(ConversionError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parse_quantity(Dimension::Length, "5 lightyears"),
            Err(ConversionError::UnrecognizedUnit { .. })
        ));
    }

    #[test]
    fn test_parse_conversion_arrow() {
        let (from, to) = parse_conversion(Dimension::Length, "km -> mi").unwrap();
        assert_eq!(from.symbol, "km");
        assert_eq!(to.symbol, "mi");
    }

    #[test]
    fn test_parse_conversion_unicode_arrow() {
        let (from, to) = parse_conversion(Dimension::Temperature, "C → F").unwrap();
        assert_eq!(from.symbol, "degC");
        assert_eq!(to.symbol, "degF");
    }

    #[test]
    fn test_parse_conversion_word_forms() {
        let (from, to) = parse_conversion(Dimension::Length, "meter to feet").unwrap();
        assert_eq!(from.symbol, "m");
        assert_eq!(to.symbol, "ft");

        let (from, to) = parse_conversion(Dimension::Volume, "gallons in liters").unwrap();
        assert_eq!(from.symbol, "gal");
        assert_eq!(to.symbol, "L");
    }

    #[test]
    fn test_parse_conversion_multi_word_units() {
        // "short ton" contains no standalone "to" word
        let (from, to) = parse_conversion(Dimension::Mass, "short ton -> tonne").unwrap();
        assert_eq!(from.symbol, "ton");
        assert_eq!(to.symbol, "t");
    }

    #[test]
    fn test_parse_conversion_invalid() {
        assert!(matches!(
            parse_conversion(Dimension::Length, "km mi"),
            Err(ConversionError::InvalidConversionSpec(_))
        ));
        assert!(matches!(
            parse_conversion(Dimension::Length, "km -> lightyear"),
            Err(ConversionError::UnrecognizedUnit { .. })
        ));
    }
}
