//! Temperature units and conversion formulas

use std::fmt;

/// The three supported temperature units, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    pub const ALL: [TempUnit; 3] = [TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin];

    pub fn label(self) -> &'static str {
        match self {
            TempUnit::Celsius => "Celsius",
            TempUnit::Fahrenheit => "Fahrenheit",
            TempUnit::Kelvin => "Kelvin",
        }
    }

    /// Lowest physically valid temperature in this unit.
    pub fn absolute_zero(self) -> f64 {
        match self {
            TempUnit::Celsius => -273.15,
            TempUnit::Fahrenheit => -459.67,
            TempUnit::Kelvin => 0.0,
        }
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert `value` between units and round to two decimal places.
///
/// Fixed linear formulas for the six ordered pairs; converting a unit to
/// itself returns the value unchanged (the interactive flow never asks
/// for it).
pub fn convert(from: TempUnit, to: TempUnit, value: f64) -> f64 {
    use TempUnit::*;
    let result = match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value,
    };
    round2(result)
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
