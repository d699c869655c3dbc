//! Display units. All geometry is computed in meters; a unit only scales what
//! is shown (lengths by `factor`, areas by `factor²`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown unit `{0}` (expected m or ft)")]
pub struct UnknownUnit(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Meters,
    Feet,
}

impl Unit {
    /// Display units per meter.
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            Unit::Meters => 1.0,
            Unit::Feet => 3.28084,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Meters => "m",
            Unit::Feet => "ft",
        }
    }

    pub fn squared_label(self) -> &'static str {
        match self {
            Unit::Meters => "m²",
            Unit::Feet => "sqft",
        }
    }

    #[inline]
    pub fn to_meters(self, value: f64) -> f64 {
        value / self.factor()
    }

    #[inline]
    pub fn from_meters(self, meters: f64) -> f64 {
        meters * self.factor()
    }

    pub fn toggled(self) -> Self {
        match self {
            Unit::Meters => Unit::Feet,
            Unit::Feet => Unit::Meters,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(Unit::Meters),
            "ft" | "foot" | "feet" => Ok(Unit::Feet),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_round_trip_through_meters() {
        let ft = Unit::Feet;
        assert!((ft.from_meters(1.0) - 3.28084).abs() < 1e-12);
        assert!((ft.to_meters(ft.from_meters(4.2)) - 4.2).abs() < 1e-12);
        assert_eq!(Unit::Meters.toggled(), Unit::Feet);
        assert_eq!(Unit::Feet.squared_label(), "sqft");
    }

    #[test]
    fn parses_labels() {
        assert_eq!("ft".parse::<Unit>(), Ok(Unit::Feet));
        assert_eq!(" Meters ".parse::<Unit>(), Ok(Unit::Meters));
        assert!("yards".parse::<Unit>().is_err());
    }
}
