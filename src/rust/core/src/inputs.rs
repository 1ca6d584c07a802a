// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Usage inputs as sent by the web form (JSON, camelCase).
//!
//! Every field has a form default so partial JSON is accepted.

use crate::science::chemistry::Chemistry;
use crate::units::{DistanceUnit, DurationUnit, TemperatureUnit};
use serde::{Deserialize, Serialize};

/// Electric vehicle usage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvUsageInput {
    pub chemistry: Chemistry,
    pub cycle_count_to_80: u32,
    pub duration: f64,
    pub duration_unit: DurationUnit,
    /// Distance driven per `distance_unit` period.
    pub distance: f64,
    pub distance_unit: DurationUnit,
    /// Energy per 100 `consumption_unit` (kWh).
    pub consumption: f64,
    pub consumption_unit: DistanceUnit,
    pub gross_capacity: f64, // kWh
    pub net_capacity: f64,   // kWh
    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,
    pub soc: u8, // mean, percent
}

impl Default for EvUsageInput {
    fn default() -> Self {
        Self {
            chemistry: Chemistry::Lfp,
            cycle_count_to_80: 3000,
            duration: 10.0,
            duration_unit: DurationUnit::Year,
            distance: 1200.0,
            distance_unit: DurationUnit::Month,
            consumption: 17.0,
            consumption_unit: DistanceUnit::Km,
            gross_capacity: 44.0,
            net_capacity: 42.0,
            temperature: 15.0,
            temperature_unit: TemperatureUnit::Celsius,
            soc: 50,
        }
    }
}

/// Stationary (home solar) storage usage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolarUsageInput {
    pub chemistry: Chemistry,
    pub cycle_count_to_80: u32,
    pub duration: f64,
    pub duration_unit: DurationUnit,
    /// Equivalent full cycles per `cycle_count_unit` period.
    pub cycle_count: f64,
    pub cycle_count_unit: DurationUnit,
    pub gross_capacity: f64,
    pub net_capacity: f64,
    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,
    pub soc: u8,
}

impl Default for SolarUsageInput {
    fn default() -> Self {
        Self {
            chemistry: Chemistry::Lfp,
            cycle_count_to_80: 3000,
            duration: 10.0,
            duration_unit: DurationUnit::Year,
            cycle_count: 1.0,
            cycle_count_unit: DurationUnit::Day,
            gross_capacity: 2.0,
            net_capacity: 1.8,
            temperature: 20.0,
            temperature_unit: TemperatureUnit::Celsius,
            soc: 50,
        }
    }
}

/// Tagged request used by the CLI: `{"kind": "ev", ...}` or `{"kind": "solar", ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SimulationRequest {
    Ev(EvUsageInput),
    Solar(SolarUsageInput),
}
