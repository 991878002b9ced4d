//! Unit tables - the dimension's units and their accepted spellings
//!
//! Factors are expressed relative to each dimension's base unit and use the
//! exact international definitions of the imperial/US units. Lookup is
//! case-sensitive and exact; the legacy FixTools spellings (including the
//! historical "celcius"/"farenheit" misspellings and the "usGallon" alias
//! set) are registered alongside the standard symbols.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::{Dimension, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

#[derive(Default)]
struct DimensionTable {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

/// Registry of all known units, keyed per dimension
pub struct UnitRegistry {
    tables: HashMap<Dimension, DimensionTable>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tables: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by canonical symbol or alias. Case-sensitive.
    pub fn get(&self, dimension: Dimension, name: &str) -> Option<&Unit> {
        let table = self.tables.get(&dimension)?;
        // Try direct lookup first
        if let Some(unit) = table.units.get(name) {
            return Some(unit);
        }
        // Try alias lookup
        let canonical = table.aliases.get(name)?;
        table.units.get(canonical)
    }

    /// All units registered for a dimension
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&Unit> {
        self.tables
            .get(&dimension)
            .map(|t| t.units.values().collect())
            .unwrap_or_default()
    }

    /// Canonical symbols registered for a dimension
    pub fn symbols(&self, dimension: Dimension) -> Vec<&str> {
        self.tables
            .get(&dimension)
            .map(|t| t.units.keys().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Accepted spellings (aliases, not symbols) for a dimension
    pub fn aliases(&self, dimension: Dimension) -> Vec<&str> {
        self.tables
            .get(&dimension)
            .map(|t| t.aliases.keys().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// The unit conversions within a dimension are routed through
    pub fn base_unit(&self, dimension: Dimension) -> &Unit {
        self.get(dimension, dimension.base_symbol())
            .expect("base unit is registered for every dimension")
    }

    fn register(&mut self, unit: Unit) {
        let table = self.tables.entry(unit.dimension).or_default();
        table.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, dimension: Dimension, alias: &str, symbol: &str) {
        let table = self.tables.entry(dimension).or_default();
        table.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_mass_units();
        self.register_volume_units();
        self.register_area_units();
        self.register_bit_byte_units();
        self.register_power_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_pressure_units();
        self.register_length_units();
        self.register_energy_units();
        self.register_speed_units();
        self.register_fuel_economy_units();
        self.register_plane_angle_units();
    }

    fn register_mass_units(&mut self) {
        const MASS: Dimension = Dimension::Mass;

        // SI mass units
        self.register(Unit::new("kg", "kilogram", MASS, 1.0));
        self.register(Unit::new("g", "gram", MASS, 0.001));
        self.register(Unit::new("mg", "milligram", MASS, 0.000001));
        self.register(Unit::new("t", "tonne", MASS, 1000.0));

        // Imperial/US mass units
        self.register(Unit::new("lb", "pound", MASS, 0.45359237));
        self.register(Unit::new("oz", "ounce", MASS, 0.028349523125));
        self.register(Unit::new("st", "stone", MASS, 6.35029318));
        self.register(Unit::new("ton", "short ton", MASS, 907.18474));
        self.register(Unit::new("lton", "long ton", MASS, 1016.0469088));

        // Other mass units
        self.register(Unit::new("ct", "carat", MASS, 0.0002));
        self.register(Unit::new("gr", "grain", MASS, 0.00006479891));

        self.alias(MASS, "kilogram", "kg");
        self.alias(MASS, "kilograms", "kg");
        self.alias(MASS, "gram", "g");
        self.alias(MASS, "grams", "g");
        self.alias(MASS, "milligram", "mg");
        self.alias(MASS, "milligrams", "mg");
        self.alias(MASS, "tonne", "t");
        self.alias(MASS, "tonnes", "t");
        self.alias(MASS, "metric ton", "t");
        self.alias(MASS, "pound", "lb");
        self.alias(MASS, "pounds", "lb");
        self.alias(MASS, "lbs", "lb");
        self.alias(MASS, "ounce", "oz");
        self.alias(MASS, "ounces", "oz");
        self.alias(MASS, "stone", "st");
        self.alias(MASS, "stones", "st");
        self.alias(MASS, "short ton", "ton");
        self.alias(MASS, "US ton", "ton");
        self.alias(MASS, "usTon", "ton");
        self.alias(MASS, "long ton", "lton");
        self.alias(MASS, "imperial ton", "lton");
        self.alias(MASS, "imperialTon", "lton");
        self.alias(MASS, "carat", "ct");
        self.alias(MASS, "carats", "ct");
        self.alias(MASS, "grain", "gr");
        self.alias(MASS, "grains", "gr");
    }

    fn register_volume_units(&mut self) {
        const VOLUME: Dimension = Dimension::Volume;

        // Metric volumes
        self.register(Unit::new("L", "liter", VOLUME, 1.0));
        self.register(Unit::new("mL", "milliliter", VOLUME, 0.001));
        self.register(Unit::new("cL", "centiliter", VOLUME, 0.01));
        self.register(Unit::new("dL", "deciliter", VOLUME, 0.1));
        self.register(Unit::new("m3", "cubic meter", VOLUME, 1000.0));
        self.register(Unit::new("cm3", "cubic centimeter", VOLUME, 0.001));

        // US fluid volumes
        self.register(Unit::new("gal", "US gallon", VOLUME, 3.785411784));
        self.register(Unit::new("qt", "US quart", VOLUME, 0.946352946));
        self.register(Unit::new("pt", "US pint", VOLUME, 0.473176473));
        self.register(Unit::new("cup", "US cup", VOLUME, 0.2365882365));
        self.register(Unit::new("floz", "US fluid ounce", VOLUME, 0.0295735295625));
        self.register(Unit::new("tbsp", "tablespoon", VOLUME, 0.01478676478125));
        self.register(Unit::new("tsp", "teaspoon", VOLUME, 0.00492892159375));

        // Imperial volumes
        self.register(Unit::new("impgal", "imperial gallon", VOLUME, 4.54609));
        self.register(Unit::new("imppt", "imperial pint", VOLUME, 0.56826125));
        self.register(Unit::new("impfloz", "imperial fluid ounce", VOLUME, 0.0284130625));

        self.register(Unit::new("ft3", "cubic foot", VOLUME, 28.316846592));
        self.register(Unit::new("in3", "cubic inch", VOLUME, 0.016387064));

        self.alias(VOLUME, "liter", "L");
        self.alias(VOLUME, "liters", "L");
        self.alias(VOLUME, "litre", "L");
        self.alias(VOLUME, "litres", "L");
        self.alias(VOLUME, "l", "L");
        self.alias(VOLUME, "milliliter", "mL");
        self.alias(VOLUME, "milliliters", "mL");
        self.alias(VOLUME, "ml", "mL");
        self.alias(VOLUME, "centiliter", "cL");
        self.alias(VOLUME, "centiliters", "cL");
        self.alias(VOLUME, "cl", "cL");
        self.alias(VOLUME, "deciliter", "dL");
        self.alias(VOLUME, "deciliters", "dL");
        self.alias(VOLUME, "dl", "dL");
        self.alias(VOLUME, "cubicMeter", "m3");
        self.alias(VOLUME, "cubic meter", "m3");
        self.alias(VOLUME, "cubic meters", "m3");
        self.alias(VOLUME, "m³", "m3");
        self.alias(VOLUME, "cubicCentimeter", "cm3");
        self.alias(VOLUME, "cubic centimeter", "cm3");
        self.alias(VOLUME, "cm³", "cm3");
        self.alias(VOLUME, "cc", "cm3");
        // Legacy FixTools gallon alias set
        self.alias(VOLUME, "usGallon", "gal");
        self.alias(VOLUME, "US gallon", "gal");
        self.alias(VOLUME, "gallon", "gal");
        self.alias(VOLUME, "gallons", "gal");
        self.alias(VOLUME, "gal US", "gal");
        self.alias(VOLUME, "usQuart", "qt");
        self.alias(VOLUME, "quart", "qt");
        self.alias(VOLUME, "quarts", "qt");
        self.alias(VOLUME, "usPint", "pt");
        self.alias(VOLUME, "pint", "pt");
        self.alias(VOLUME, "pints", "pt");
        self.alias(VOLUME, "usCup", "cup");
        self.alias(VOLUME, "cups", "cup");
        self.alias(VOLUME, "usFluidOunce", "floz");
        self.alias(VOLUME, "fluid ounce", "floz");
        self.alias(VOLUME, "fluid ounces", "floz");
        self.alias(VOLUME, "fl oz", "floz");
        self.alias(VOLUME, "tablespoon", "tbsp");
        self.alias(VOLUME, "tablespoons", "tbsp");
        self.alias(VOLUME, "teaspoon", "tsp");
        self.alias(VOLUME, "teaspoons", "tsp");
        self.alias(VOLUME, "imperialGallon", "impgal");
        self.alias(VOLUME, "imperial gallon", "impgal");
        self.alias(VOLUME, "gal imp", "impgal");
        self.alias(VOLUME, "imperialPint", "imppt");
        self.alias(VOLUME, "imperial pint", "imppt");
        self.alias(VOLUME, "imperialFluidOunce", "impfloz");
        self.alias(VOLUME, "imperial fluid ounce", "impfloz");
        self.alias(VOLUME, "cubicFoot", "ft3");
        self.alias(VOLUME, "cubic foot", "ft3");
        self.alias(VOLUME, "cubic feet", "ft3");
        self.alias(VOLUME, "ft³", "ft3");
        self.alias(VOLUME, "cubicInch", "in3");
        self.alias(VOLUME, "cubic inch", "in3");
        self.alias(VOLUME, "cubic inches", "in3");
        self.alias(VOLUME, "in³", "in3");
    }

    fn register_area_units(&mut self) {
        const AREA: Dimension = Dimension::Area;

        self.register(Unit::new("m2", "square meter", AREA, 1.0));
        self.register(Unit::new("km2", "square kilometer", AREA, 1_000_000.0));
        self.register(Unit::new("cm2", "square centimeter", AREA, 0.0001));
        self.register(Unit::new("mm2", "square millimeter", AREA, 0.000001));
        self.register(Unit::new("ha", "hectare", AREA, 10_000.0));
        self.register(Unit::new("ac", "acre", AREA, 4046.8564224));
        self.register(Unit::new("ft2", "square foot", AREA, 0.09290304));
        self.register(Unit::new("in2", "square inch", AREA, 0.00064516));
        self.register(Unit::new("yd2", "square yard", AREA, 0.83612736));
        self.register(Unit::new("mi2", "square mile", AREA, 2_589_988.110336));

        self.alias(AREA, "squareMeter", "m2");
        self.alias(AREA, "square meter", "m2");
        self.alias(AREA, "square meters", "m2");
        self.alias(AREA, "m²", "m2");
        self.alias(AREA, "sq m", "m2");
        self.alias(AREA, "squareKilometer", "km2");
        self.alias(AREA, "square kilometer", "km2");
        self.alias(AREA, "square kilometers", "km2");
        self.alias(AREA, "km²", "km2");
        self.alias(AREA, "squareCentimeter", "cm2");
        self.alias(AREA, "square centimeter", "cm2");
        self.alias(AREA, "cm²", "cm2");
        self.alias(AREA, "squareMillimeter", "mm2");
        self.alias(AREA, "square millimeter", "mm2");
        self.alias(AREA, "mm²", "mm2");
        self.alias(AREA, "hectare", "ha");
        self.alias(AREA, "hectares", "ha");
        self.alias(AREA, "acre", "ac");
        self.alias(AREA, "acres", "ac");
        self.alias(AREA, "squareFoot", "ft2");
        self.alias(AREA, "square foot", "ft2");
        self.alias(AREA, "square feet", "ft2");
        self.alias(AREA, "ft²", "ft2");
        self.alias(AREA, "sq ft", "ft2");
        self.alias(AREA, "squareInch", "in2");
        self.alias(AREA, "square inch", "in2");
        self.alias(AREA, "square inches", "in2");
        self.alias(AREA, "in²", "in2");
        self.alias(AREA, "squareYard", "yd2");
        self.alias(AREA, "square yard", "yd2");
        self.alias(AREA, "square yards", "yd2");
        self.alias(AREA, "yd²", "yd2");
        self.alias(AREA, "squareMile", "mi2");
        self.alias(AREA, "square mile", "mi2");
        self.alias(AREA, "square miles", "mi2");
        self.alias(AREA, "mi²", "mi2");
    }

    fn register_bit_byte_units(&mut self) {
        const BIT_BYTE: Dimension = Dimension::BitByte;

        self.register(Unit::new("bit", "bit", BIT_BYTE, 1.0));
        self.register(Unit::new("byte", "byte", BIT_BYTE, 8.0));

        // Decimal (SI) multiples
        self.register(Unit::new("kbit", "kilobit", BIT_BYTE, 1000.0));
        self.register(Unit::new("kB", "kilobyte", BIT_BYTE, 8000.0));
        self.register(Unit::new("Mbit", "megabit", BIT_BYTE, 1_000_000.0));
        self.register(Unit::new("MB", "megabyte", BIT_BYTE, 8_000_000.0));
        self.register(Unit::new("Gbit", "gigabit", BIT_BYTE, 1_000_000_000.0));
        self.register(Unit::new("GB", "gigabyte", BIT_BYTE, 8_000_000_000.0));
        self.register(Unit::new("Tbit", "terabit", BIT_BYTE, 1_000_000_000_000.0));
        self.register(Unit::new("TB", "terabyte", BIT_BYTE, 8_000_000_000_000.0));

        // Binary (IEC) multiples
        self.register(Unit::new("KiB", "kibibyte", BIT_BYTE, 8192.0));
        self.register(Unit::new("MiB", "mebibyte", BIT_BYTE, 8_388_608.0));
        self.register(Unit::new("GiB", "gibibyte", BIT_BYTE, 8_589_934_592.0));
        self.register(Unit::new("TiB", "tebibyte", BIT_BYTE, 8_796_093_022_208.0));

        self.alias(BIT_BYTE, "bits", "bit");
        self.alias(BIT_BYTE, "bytes", "byte");
        self.alias(BIT_BYTE, "B", "byte");
        self.alias(BIT_BYTE, "kilobit", "kbit");
        self.alias(BIT_BYTE, "kilobits", "kbit");
        self.alias(BIT_BYTE, "kilobyte", "kB");
        self.alias(BIT_BYTE, "kilobytes", "kB");
        self.alias(BIT_BYTE, "megabit", "Mbit");
        self.alias(BIT_BYTE, "megabits", "Mbit");
        self.alias(BIT_BYTE, "megabyte", "MB");
        self.alias(BIT_BYTE, "megabytes", "MB");
        self.alias(BIT_BYTE, "gigabit", "Gbit");
        self.alias(BIT_BYTE, "gigabits", "Gbit");
        self.alias(BIT_BYTE, "gigabyte", "GB");
        self.alias(BIT_BYTE, "gigabytes", "GB");
        self.alias(BIT_BYTE, "terabit", "Tbit");
        self.alias(BIT_BYTE, "terabits", "Tbit");
        self.alias(BIT_BYTE, "terabyte", "TB");
        self.alias(BIT_BYTE, "terabytes", "TB");
        self.alias(BIT_BYTE, "kibibyte", "KiB");
        self.alias(BIT_BYTE, "kibibytes", "KiB");
        self.alias(BIT_BYTE, "mebibyte", "MiB");
        self.alias(BIT_BYTE, "mebibytes", "MiB");
        self.alias(BIT_BYTE, "gibibyte", "GiB");
        self.alias(BIT_BYTE, "gibibytes", "GiB");
        self.alias(BIT_BYTE, "tebibyte", "TiB");
        self.alias(BIT_BYTE, "tebibytes", "TiB");
    }

    fn register_power_units(&mut self) {
        const POWER: Dimension = Dimension::Power;

        self.register(Unit::new("W", "watt", POWER, 1.0));
        self.register(Unit::new("kW", "kilowatt", POWER, 1000.0));
        self.register(Unit::new("MW", "megawatt", POWER, 1_000_000.0));
        self.register(Unit::new("GW", "gigawatt", POWER, 1_000_000_000.0));
        self.register(Unit::new("mW", "milliwatt", POWER, 0.001));
        // 550 ft·lbf/s
        self.register(Unit::new("hp", "horsepower", POWER, 745.6998715822702));
        self.register(Unit::new("PS", "metric horsepower", POWER, 735.49875));
        self.register(Unit::new("BTU/h", "BTU per hour", POWER, 1055.05585262 / 3600.0));

        self.alias(POWER, "watt", "W");
        self.alias(POWER, "watts", "W");
        self.alias(POWER, "kilowatt", "kW");
        self.alias(POWER, "kilowatts", "kW");
        self.alias(POWER, "megawatt", "MW");
        self.alias(POWER, "megawatts", "MW");
        self.alias(POWER, "gigawatt", "GW");
        self.alias(POWER, "gigawatts", "GW");
        self.alias(POWER, "milliwatt", "mW");
        self.alias(POWER, "milliwatts", "mW");
        self.alias(POWER, "horsepower", "hp");
        self.alias(POWER, "hp US", "hp");
        self.alias(POWER, "metricHorsepower", "PS");
        self.alias(POWER, "metric horsepower", "PS");
        self.alias(POWER, "btuPerHour", "BTU/h");
        self.alias(POWER, "BTU per hour", "BTU/h");
    }

    fn register_time_units(&mut self) {
        const TIME: Dimension = Dimension::Time;

        self.register(Unit::new("s", "second", TIME, 1.0));
        self.register(Unit::new("ms", "millisecond", TIME, 0.001));
        self.register(Unit::new("us", "microsecond", TIME, 0.000001));
        self.register(Unit::new("ns", "nanosecond", TIME, 0.000000001));
        self.register(Unit::new("min", "minute", TIME, 60.0));
        self.register(Unit::new("h", "hour", TIME, 3600.0));
        self.register(Unit::new("d", "day", TIME, 86_400.0));
        self.register(Unit::new("wk", "week", TIME, 604_800.0));
        self.register(Unit::new("mo", "month", TIME, 2_629_746.0)); // average
        self.register(Unit::new("yr", "year", TIME, 31_556_952.0)); // average

        self.alias(TIME, "second", "s");
        self.alias(TIME, "seconds", "s");
        self.alias(TIME, "sec", "s");
        self.alias(TIME, "millisecond", "ms");
        self.alias(TIME, "milliseconds", "ms");
        self.alias(TIME, "microsecond", "us");
        self.alias(TIME, "microseconds", "us");
        self.alias(TIME, "μs", "us");
        self.alias(TIME, "nanosecond", "ns");
        self.alias(TIME, "nanoseconds", "ns");
        self.alias(TIME, "minute", "min");
        self.alias(TIME, "minutes", "min");
        self.alias(TIME, "hour", "h");
        self.alias(TIME, "hours", "h");
        self.alias(TIME, "hr", "h");
        self.alias(TIME, "day", "d");
        self.alias(TIME, "days", "d");
        self.alias(TIME, "week", "wk");
        self.alias(TIME, "weeks", "wk");
        self.alias(TIME, "month", "mo");
        self.alias(TIME, "months", "mo");
        self.alias(TIME, "year", "yr");
        self.alias(TIME, "years", "yr");
        self.alias(TIME, "y", "yr");
    }

    fn register_temperature_units(&mut self) {
        const TEMPERATURE: Dimension = Dimension::Temperature;

        // Kelvin is the affine anchor
        self.register(Unit::new("K", "kelvin", TEMPERATURE, 1.0));

        // Celsius: K = C + 273.15
        self.register(Unit::with_offset(
            "degC",
            "celsius",
            TEMPERATURE,
            1.0,
            273.15,
        ));

        // Fahrenheit: K = (F + 459.67) * 5/9
        self.register(Unit::with_offset(
            "degF",
            "fahrenheit",
            TEMPERATURE,
            5.0 / 9.0,
            459.67 * 5.0 / 9.0,
        ));

        // Rankine: K = R * 5/9
        self.register(Unit::new("R", "rankine", TEMPERATURE, 5.0 / 9.0));

        self.alias(TEMPERATURE, "kelvin", "K");
        self.alias(TEMPERATURE, "C", "degC");
        self.alias(TEMPERATURE, "celsius", "degC");
        self.alias(TEMPERATURE, "celcius", "degC"); // legacy FixTools spelling
        self.alias(TEMPERATURE, "°C", "degC");
        self.alias(TEMPERATURE, "F", "degF");
        self.alias(TEMPERATURE, "fahrenheit", "degF");
        self.alias(TEMPERATURE, "farenheit", "degF"); // legacy FixTools spelling
        self.alias(TEMPERATURE, "°F", "degF");
        self.alias(TEMPERATURE, "rankine", "R");
        self.alias(TEMPERATURE, "°R", "R");
    }

    fn register_pressure_units(&mut self) {
        const PRESSURE: Dimension = Dimension::Pressure;

        self.register(Unit::new("Pa", "pascal", PRESSURE, 1.0));
        self.register(Unit::new("kPa", "kilopascal", PRESSURE, 1000.0));
        self.register(Unit::new("MPa", "megapascal", PRESSURE, 1_000_000.0));
        self.register(Unit::new("hPa", "hectopascal", PRESSURE, 100.0));
        self.register(Unit::new("bar", "bar", PRESSURE, 100_000.0));
        self.register(Unit::new("mbar", "millibar", PRESSURE, 100.0));
        self.register(Unit::new("atm", "atmosphere", PRESSURE, 101_325.0));
        self.register(Unit::new("psi", "pounds per square inch", PRESSURE, 6894.757293168));
        self.register(Unit::new("torr", "torr", PRESSURE, 101_325.0 / 760.0));
        self.register(Unit::new("mmHg", "millimeter of mercury", PRESSURE, 133.322387415));
        self.register(Unit::new("inHg", "inch of mercury", PRESSURE, 3386.389));

        self.alias(PRESSURE, "pascal", "Pa");
        self.alias(PRESSURE, "pascals", "Pa");
        self.alias(PRESSURE, "kilopascal", "kPa");
        self.alias(PRESSURE, "kilopascals", "kPa");
        self.alias(PRESSURE, "megapascal", "MPa");
        self.alias(PRESSURE, "megapascals", "MPa");
        self.alias(PRESSURE, "hectopascal", "hPa");
        self.alias(PRESSURE, "hectopascals", "hPa");
        self.alias(PRESSURE, "bars", "bar");
        self.alias(PRESSURE, "millibar", "mbar");
        self.alias(PRESSURE, "millibars", "mbar");
        self.alias(PRESSURE, "atmosphere", "atm");
        self.alias(PRESSURE, "atmospheres", "atm");
        self.alias(PRESSURE, "pounds per square inch", "psi");
        self.alias(PRESSURE, "millimeter of mercury", "mmHg");
        self.alias(PRESSURE, "inch of mercury", "inHg");
    }

    fn register_length_units(&mut self) {
        const LENGTH: Dimension = Dimension::Length;

        // SI length units
        self.register(Unit::new("m", "meter", LENGTH, 1.0));
        self.register(Unit::new("km", "kilometer", LENGTH, 1000.0));
        self.register(Unit::new("cm", "centimeter", LENGTH, 0.01));
        self.register(Unit::new("mm", "millimeter", LENGTH, 0.001));
        self.register(Unit::new("um", "micrometer", LENGTH, 0.000001));
        self.register(Unit::new("nm", "nanometer", LENGTH, 0.000000001));

        // Imperial/US length units
        self.register(Unit::new("in", "inch", LENGTH, 0.0254));
        self.register(Unit::new("ft", "foot", LENGTH, 0.3048));
        self.register(Unit::new("yd", "yard", LENGTH, 0.9144));
        self.register(Unit::new("mi", "mile", LENGTH, 1609.344));
        self.register(Unit::new("nmi", "nautical mile", LENGTH, 1852.0));

        self.alias(LENGTH, "meter", "m");
        self.alias(LENGTH, "meters", "m");
        self.alias(LENGTH, "metre", "m");
        self.alias(LENGTH, "metres", "m");
        self.alias(LENGTH, "kilometer", "km");
        self.alias(LENGTH, "kilometers", "km");
        self.alias(LENGTH, "kilometre", "km");
        self.alias(LENGTH, "kilometres", "km");
        self.alias(LENGTH, "centimeter", "cm");
        self.alias(LENGTH, "centimeters", "cm");
        self.alias(LENGTH, "millimeter", "mm");
        self.alias(LENGTH, "millimeters", "mm");
        self.alias(LENGTH, "micrometer", "um");
        self.alias(LENGTH, "micrometers", "um");
        self.alias(LENGTH, "μm", "um");
        self.alias(LENGTH, "micron", "um");
        self.alias(LENGTH, "nanometer", "nm");
        self.alias(LENGTH, "nanometers", "nm");
        self.alias(LENGTH, "inch", "in");
        self.alias(LENGTH, "inches", "in");
        self.alias(LENGTH, "foot", "ft");
        self.alias(LENGTH, "feet", "ft");
        self.alias(LENGTH, "yard", "yd");
        self.alias(LENGTH, "yards", "yd");
        self.alias(LENGTH, "mile", "mi");
        self.alias(LENGTH, "miles", "mi");
        self.alias(LENGTH, "nauticalMile", "nmi");
        self.alias(LENGTH, "nautical mile", "nmi");
        self.alias(LENGTH, "nautical miles", "nmi");
    }

    fn register_energy_units(&mut self) {
        const ENERGY: Dimension = Dimension::Energy;

        self.register(Unit::new("J", "joule", ENERGY, 1.0));
        self.register(Unit::new("kJ", "kilojoule", ENERGY, 1000.0));
        self.register(Unit::new("MJ", "megajoule", ENERGY, 1_000_000.0));
        self.register(Unit::new("cal", "calorie", ENERGY, 4.184));
        self.register(Unit::new("kcal", "kilocalorie", ENERGY, 4184.0));
        self.register(Unit::new("Wh", "watt-hour", ENERGY, 3600.0));
        self.register(Unit::new("kWh", "kilowatt-hour", ENERGY, 3_600_000.0));
        self.register(Unit::new("eV", "electronvolt", ENERGY, 1.602176634e-19));
        self.register(Unit::new("BTU", "British thermal unit", ENERGY, 1055.05585262));
        self.register(Unit::new("ftlb", "foot-pound", ENERGY, 1.3558179483314004));
        self.register(Unit::new("erg", "erg", ENERGY, 0.0000001));

        self.alias(ENERGY, "joule", "J");
        self.alias(ENERGY, "joules", "J");
        self.alias(ENERGY, "kilojoule", "kJ");
        self.alias(ENERGY, "kilojoules", "kJ");
        self.alias(ENERGY, "megajoule", "MJ");
        self.alias(ENERGY, "megajoules", "MJ");
        self.alias(ENERGY, "calorie", "cal");
        self.alias(ENERGY, "calories", "cal");
        self.alias(ENERGY, "kilocalorie", "kcal");
        self.alias(ENERGY, "kilocalories", "kcal");
        self.alias(ENERGY, "Cal", "kcal");
        self.alias(ENERGY, "wattHour", "Wh");
        self.alias(ENERGY, "watt-hour", "Wh");
        self.alias(ENERGY, "kilowattHour", "kWh");
        self.alias(ENERGY, "kilowatt-hour", "kWh");
        self.alias(ENERGY, "electronvolt", "eV");
        self.alias(ENERGY, "electron volt", "eV");
        self.alias(ENERGY, "btu", "BTU");
        self.alias(ENERGY, "British thermal unit", "BTU");
        self.alias(ENERGY, "footPound", "ftlb");
        self.alias(ENERGY, "foot-pound", "ftlb");
        self.alias(ENERGY, "ergs", "erg");
    }

    fn register_speed_units(&mut self) {
        const SPEED: Dimension = Dimension::Speed;

        self.register(Unit::new("m/s", "meter per second", SPEED, 1.0));
        self.register(Unit::new("km/h", "kilometer per hour", SPEED, 1.0 / 3.6));
        self.register(Unit::new("mph", "mile per hour", SPEED, 0.44704));
        self.register(Unit::new("ft/s", "foot per second", SPEED, 0.3048));
        self.register(Unit::new("kn", "knot", SPEED, 1852.0 / 3600.0));
        self.register(Unit::new("mach", "mach", SPEED, 340.29)); // at sea level
        self.register(Unit::new("c", "speed of light", SPEED, 299_792_458.0));

        self.alias(SPEED, "meterPerSecond", "m/s");
        self.alias(SPEED, "meters per second", "m/s");
        self.alias(SPEED, "mps", "m/s");
        self.alias(SPEED, "kilometerPerHour", "km/h");
        self.alias(SPEED, "kilometers per hour", "km/h");
        self.alias(SPEED, "kph", "km/h");
        self.alias(SPEED, "kmh", "km/h");
        self.alias(SPEED, "milePerHour", "mph");
        self.alias(SPEED, "miles per hour", "mph");
        self.alias(SPEED, "footPerSecond", "ft/s");
        self.alias(SPEED, "feet per second", "ft/s");
        self.alias(SPEED, "fps", "ft/s");
        self.alias(SPEED, "knot", "kn");
        self.alias(SPEED, "knots", "kn");
        self.alias(SPEED, "speed of light", "c");
    }

    fn register_fuel_economy_units(&mut self) {
        const FUEL_ECONOMY: Dimension = Dimension::FuelEconomy;

        // 1 mi = 1.609344 km; 1 US gal = 3.785411784 L; 1 imp gal = 4.54609 L
        self.register(Unit::new("km/L", "kilometer per liter", FUEL_ECONOMY, 1.0));
        self.register(Unit::new(
            "mpg",
            "mile per gallon (US)",
            FUEL_ECONOMY,
            1.609344 / 3.785411784,
        ));
        self.register(Unit::new(
            "impmpg",
            "mile per gallon (imperial)",
            FUEL_ECONOMY,
            1.609344 / 4.54609,
        ));
        self.register(Unit::new("mi/L", "mile per liter", FUEL_ECONOMY, 1.609344));
        self.register(Unit::new(
            "km/gal",
            "kilometer per gallon (US)",
            FUEL_ECONOMY,
            1.0 / 3.785411784,
        ));

        self.alias(FUEL_ECONOMY, "kilometerPerLiter", "km/L");
        self.alias(FUEL_ECONOMY, "kilometers per liter", "km/L");
        self.alias(FUEL_ECONOMY, "kmpl", "km/L");
        self.alias(FUEL_ECONOMY, "milesPerGallon", "mpg");
        self.alias(FUEL_ECONOMY, "miles per gallon", "mpg");
        self.alias(FUEL_ECONOMY, "miles per gallon (US)", "mpg");
        self.alias(FUEL_ECONOMY, "mpg US", "mpg");
        self.alias(FUEL_ECONOMY, "miles per gallon (imperial)", "impmpg");
        self.alias(FUEL_ECONOMY, "imperial miles per gallon", "impmpg");
        self.alias(FUEL_ECONOMY, "mpg imp", "impmpg");
        self.alias(FUEL_ECONOMY, "milesPerLiter", "mi/L");
        self.alias(FUEL_ECONOMY, "miles per liter", "mi/L");
        self.alias(FUEL_ECONOMY, "kilometersPerGallon", "km/gal");
        self.alias(FUEL_ECONOMY, "kilometers per gallon", "km/gal");
    }

    fn register_plane_angle_units(&mut self) {
        const PLANE_ANGLE: Dimension = Dimension::PlaneAngle;

        self.register(Unit::new("rad", "radian", PLANE_ANGLE, 1.0));
        self.register(Unit::new("mrad", "milliradian", PLANE_ANGLE, 0.001));
        self.register(Unit::new("deg", "degree", PLANE_ANGLE, PI / 180.0));
        self.register(Unit::new("grad", "gradian", PLANE_ANGLE, PI / 200.0));
        self.register(Unit::new("arcmin", "arcminute", PLANE_ANGLE, PI / 10_800.0));
        self.register(Unit::new("arcsec", "arcsecond", PLANE_ANGLE, PI / 648_000.0));
        self.register(Unit::new("turn", "turn", PLANE_ANGLE, 2.0 * PI));

        self.alias(PLANE_ANGLE, "radian", "rad");
        self.alias(PLANE_ANGLE, "radians", "rad");
        self.alias(PLANE_ANGLE, "milliradian", "mrad");
        self.alias(PLANE_ANGLE, "milliradians", "mrad");
        self.alias(PLANE_ANGLE, "degree", "deg");
        self.alias(PLANE_ANGLE, "degrees", "deg");
        self.alias(PLANE_ANGLE, "°", "deg");
        self.alias(PLANE_ANGLE, "gradian", "grad");
        self.alias(PLANE_ANGLE, "gradians", "grad");
        self.alias(PLANE_ANGLE, "gon", "grad");
        self.alias(PLANE_ANGLE, "arcminute", "arcmin");
        self.alias(PLANE_ANGLE, "arcminutes", "arcmin");
        self.alias(PLANE_ANGLE, "arcsecond", "arcsec");
        self.alias(PLANE_ANGLE, "arcseconds", "arcsec");
        self.alias(PLANE_ANGLE, "turns", "turn");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_registry() {
        let reg = UnitRegistry::new();

        // Symbol lookup
        assert!(reg.get(Dimension::Length, "m").is_some());
        assert!(reg.get(Dimension::Mass, "kg").is_some());
        assert!(reg.get(Dimension::Time, "s").is_some());

        // Alias lookup
        assert!(reg.get(Dimension::Length, "meter").is_some());
        assert!(reg.get(Dimension::Length, "meters").is_some());
        assert!(reg.get(Dimension::Mass, "kilogram").is_some());

        // Unknown unit
        assert!(reg.get(Dimension::Volume, "lightyear").is_none());
    }

    #[test]
    fn test_lookup_is_dimension_scoped() {
        let reg = UnitRegistry::new();

        // "mile" is a length, not a speed or a volume
        assert!(reg.get(Dimension::Length, "mile").is_some());
        assert!(reg.get(Dimension::Speed, "mile").is_none());
        assert!(reg.get(Dimension::Volume, "mile").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let reg = UnitRegistry::new();

        assert!(reg.get(Dimension::Length, "Meter").is_none());
        assert!(reg.get(Dimension::Mass, "KG").is_none());
        assert!(reg.get(Dimension::Volume, "usgallon").is_none());
    }

    #[test]
    fn test_every_dimension_has_units() {
        let reg = UnitRegistry::new();

        for dim in Dimension::ALL {
            assert!(
                reg.by_dimension(dim).len() >= 4,
                "dimension {} has too few units",
                dim
            );
        }
    }

    #[test]
    fn test_base_units() {
        let reg = UnitRegistry::new();

        for dim in Dimension::ALL {
            let base = reg.base_unit(dim);
            assert_eq!(base.symbol, dim.base_symbol());
            assert_eq!(base.factor, 1.0, "base unit of {} must have factor 1", dim);
            assert_eq!(base.offset, 0.0, "base unit of {} must have offset 0", dim);
        }
    }

    #[test]
    fn test_offsets_only_in_temperature() {
        let reg = UnitRegistry::new();

        for dim in Dimension::ALL {
            for unit in reg.by_dimension(dim) {
                if dim != Dimension::Temperature {
                    assert!(!unit.has_offset(), "{} must not carry an offset", unit.symbol);
                }
            }
        }
    }

    #[test]
    fn test_every_alias_resolves() {
        let reg = UnitRegistry::new();

        for dim in Dimension::ALL {
            for alias in reg.aliases(dim) {
                let unit = reg.get(dim, alias);
                assert!(unit.is_some(), "alias {:?} of {} does not resolve", alias, dim);
            }
        }
    }

    #[test]
    fn test_no_alias_shadows_a_symbol() {
        let reg = UnitRegistry::new();

        for dim in Dimension::ALL {
            let symbols: Vec<&str> = reg.symbols(dim);
            for alias in reg.aliases(dim) {
                assert!(
                    !symbols.contains(&alias),
                    "alias {:?} shadows a canonical symbol of {}",
                    alias,
                    dim
                );
            }
        }
    }

    #[test]
    fn test_legacy_spellings_resolve() {
        let reg = UnitRegistry::new();

        assert_eq!(reg.get(Dimension::Temperature, "celcius").unwrap().symbol, "degC");
        assert_eq!(reg.get(Dimension::Temperature, "farenheit").unwrap().symbol, "degF");
        assert_eq!(reg.get(Dimension::Volume, "usGallon").unwrap().symbol, "gal");
        assert_eq!(reg.get(Dimension::Volume, "US gallon").unwrap().symbol, "gal");
        assert_eq!(reg.get(Dimension::Volume, "gal US").unwrap().symbol, "gal");
        assert_eq!(
            reg.get(Dimension::FuelEconomy, "miles per gallon (imperial)")
                .unwrap()
                .symbol,
            "impmpg"
        );
    }

    #[test]
    fn test_temperature_factors() {
        let reg = UnitRegistry::new();

        let c = reg.get(Dimension::Temperature, "C").unwrap();
        assert_eq!(c.to_base(0.0), 273.15);

        let f = reg.get(Dimension::Temperature, "F").unwrap();
        let freezing = f.to_base(32.0);
        assert!((freezing - 273.15).abs() < 1e-9);
    }
}
