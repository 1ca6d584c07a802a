// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Unit handling for the web form inputs.
//!
//! Durations are normalised to days and temperatures to Celsius. Both
//! conversions are exhaustive over closed enums, so they cannot fail; the only
//! fallible step is parsing a unit tag from a string.

use crate::error::AgeingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mean Gregorian year (accounts for leap years).
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Mean Gregorian month (365.2425 / 12).
pub const DAYS_PER_MONTH: f64 = 30.436875;
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Absolute zero in Celsius.
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Day,
    Week,
    Month,
    #[default]
    Year,
}

impl DurationUnit {
    /// Length of one unit in days.
    pub fn days(self) -> f64 {
        match self {
            DurationUnit::Day => 1.0,
            DurationUnit::Week => DAYS_PER_WEEK,
            DurationUnit::Month => DAYS_PER_MONTH,
            DurationUnit::Year => DAYS_PER_YEAR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DurationUnit::Day => "day",
            DurationUnit::Week => "week",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

/// Distance unit the EV consumption is quoted in (energy per 100 units).
/// Carried as a label only; it never rescales the numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

impl DistanceUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "miles",
        }
    }
}

/// Converts `value` expressed in `unit` to a day count.
pub fn day_duration(value: f64, unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Day => value,
        _ => value * unit.days(),
    }
}

/// Converts a temperature to Celsius.
pub fn celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value + ABSOLUTE_ZERO_C,
    }
}

impl FromStr for DurationUnit {
    type Err = AgeingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(DurationUnit::Day),
            "week" => Ok(DurationUnit::Week),
            "month" => Ok(DurationUnit::Month),
            "year" => Ok(DurationUnit::Year),
            other => Err(AgeingError::UnsupportedUnit {
                kind: "duration",
                unit: other.to_string(),
            }),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = AgeingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(TemperatureUnit::Celsius),
            "F" => Ok(TemperatureUnit::Fahrenheit),
            "K" => Ok(TemperatureUnit::Kelvin),
            other => Err(AgeingError::UnsupportedUnit {
                kind: "temperature",
                unit: other.to_string(),
            }),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = AgeingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "km" => Ok(DistanceUnit::Km),
            "miles" => Ok(DistanceUnit::Miles),
            other => Err(AgeingError::UnsupportedUnit {
                kind: "distance",
                unit: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_duration_factors() {
        assert_eq!(day_duration(1.0, DurationUnit::Day), 1.0);
        assert_eq!(day_duration(1.0, DurationUnit::Week), 7.0);
        assert_eq!(day_duration(1.0, DurationUnit::Month), 30.436875);
        assert_eq!(day_duration(1.0, DurationUnit::Year), 365.25);
    }

    #[test]
    fn test_twelve_months_are_a_gregorian_year() {
        // Month and year use different means; twelve months fall 0.0075 d short.
        let months = day_duration(12.0, DurationUnit::Month);
        assert!((months - 365.2425).abs() < 1e-9, "got {}", months);
        assert!(months < day_duration(1.0, DurationUnit::Year));
    }

    #[test]
    fn test_celsius_fixed_points() {
        assert_eq!(celsius(32.0, TemperatureUnit::Fahrenheit), 0.0);
        assert_eq!(celsius(212.0, TemperatureUnit::Fahrenheit), 100.0);
        assert_eq!(celsius(273.15, TemperatureUnit::Kelvin), 0.0);
        assert_eq!(celsius(-40.0, TemperatureUnit::Fahrenheit), -40.0);
        assert_eq!(celsius(21.5, TemperatureUnit::Celsius), 21.5);
    }

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("week".parse::<DurationUnit>().unwrap(), DurationUnit::Week);
        assert_eq!("K".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
        assert_eq!("miles".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
    }

    #[test]
    fn test_parse_unknown_tag_is_unsupported() {
        let err = "fortnight".parse::<DurationUnit>().unwrap_err();
        assert!(matches!(
            err,
            AgeingError::UnsupportedUnit { kind: "duration", ref unit } if unit == "fortnight"
        ));
        assert!("R".parse::<TemperatureUnit>().is_err());
        // Tags are case sensitive, like the form values.
        assert!("c".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn test_serde_tags_match_form_values() {
        let unit: TemperatureUnit = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Fahrenheit);
        assert_eq!(serde_json::to_string(&DurationUnit::Month).unwrap(), "\"month\"");
        assert_eq!(DistanceUnit::Km.to_string(), "km");
    }
}
