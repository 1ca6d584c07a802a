// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Closed-form Battery Ageing Formulas
//!
//! These are pure mathematical functions operating on scalar values.
//! They form the foundation of the calendar and cycle ageing engines and are
//! exported to the web form as-is.
//!
//! No guards: degenerate arguments (zero capacities, zero cycle ratings)
//! propagate as `NaN`/`Infinity` through IEEE-754 arithmetic.

use crate::units::{self, DurationUnit, TemperatureUnit};
use wasm_bindgen::prelude::*;

/// Capacity fraction left after `cycle_count_to_80` cycles by definition.
pub const END_OF_LIFE_FRACTION: f64 = 0.8;

// ============================================================================
// UNIT CONVERSION
// ============================================================================

/// Duration in days for a form value and unit tag (`day|week|month|year`).
#[wasm_bindgen]
pub fn day_duration(value: f64, unit: &str) -> Result<f64, JsValue> {
    let unit: DurationUnit = unit.parse()?;
    Ok(units::day_duration(value, unit))
}

/// Temperature in °C for a form value and unit tag (`C|F|K`).
#[wasm_bindgen]
pub fn celsius(value: f64, unit: &str) -> Result<f64, JsValue> {
    let unit: TemperatureUnit = unit.parse()?;
    Ok(units::celsius(value, unit))
}

// ============================================================================
// CALENDAR AGEING
// ============================================================================

/// Empirical calendar ageing power law
///
/// Q_loss = a0 * exp(b * T) * t^k
///
/// # Arguments
/// * `a0` - Pre-exponential factor
/// * `b` - Temperature sensitivity (1/°C)
/// * `celsius_temperature` - Mean cell temperature in °C
/// * `days` - Elapsed time in days
/// * `exponent` - SOC dependent time exponent k
///
/// # Returns
/// Fraction of gross capacity lost to calendar ageing.
/// `days = 0` follows `powf`: 0 for k > 0, 1 for k = 0.
#[wasm_bindgen]
pub fn calendar_power_law(a0: f64, b: f64, celsius_temperature: f64, days: f64, exponent: f64) -> f64 {
    a0 * (b * celsius_temperature).exp() * days.powf(exponent)
}

// ============================================================================
// CYCLE AGEING
// ============================================================================

/// Capacity loss per equivalent full cycle, in percent
///
/// d = 100 * (1 - 0.8^(1/N80))
///
/// Inverts the rating "N80 cycles to reach 80 % capacity".
#[wasm_bindgen]
pub fn single_cycle_degradation(cycle_count_to_80: f64) -> f64 {
    100.0 * (1.0 - END_OF_LIFE_FRACTION.powf(1.0 / cycle_count_to_80))
}

/// Compounded cycling loss over `cycle_count` (fractional allowed) cycles
///
/// D = 1 - (1 - d/100)^n
///
/// # Returns
/// Fraction in [0, 1), increasing in `cycle_count`.
#[wasm_bindgen]
pub fn compound_cycling_degradation(single_cycle_degradation: f64, cycle_count: f64) -> f64 {
    1.0 - (1.0 - single_cycle_degradation / 100.0).powf(cycle_count)
}

// ============================================================================
// CAPACITY & HEALTH
// ============================================================================

/// Mean capacity over a period with linear calendar fade
///
/// C_mean = C_gross * (1 - Q_cal / 2)
#[wasm_bindgen]
pub fn mean_calendar_capacity(gross_capacity: f64, calendar_degradation: f64) -> f64 {
    gross_capacity - gross_capacity * calendar_degradation / 2.0
}

/// Remaining capacity with calendar and cycling losses combined multiplicatively
#[wasm_bindgen]
pub fn end_capacity(gross_capacity: f64, calendar_degradation: f64, cycling_degradation: f64) -> f64 {
    gross_capacity * ((1.0 - calendar_degradation) * (1.0 - cycling_degradation))
}

/// Capacity lost relative to gross capacity, in percent
#[wasm_bindgen]
pub fn degradation_percent(gross_capacity: f64, end_capacity: f64) -> f64 {
    (gross_capacity - end_capacity) / gross_capacity * 100.0
}

/// State of health against net (usable) capacity, capped at 100 %
///
/// `NaN` passes through the cap (`f64::min` would swallow it).
#[wasm_bindgen]
pub fn state_of_health(net_capacity: f64, end_capacity: f64) -> f64 {
    let soh = 100.0 - (net_capacity - end_capacity) / net_capacity * 100.0;
    if soh > 100.0 {
        100.0
    } else {
        soh
    }
}

/// One trapezoid step of cumulative energy throughput (kWh)
///
/// E_i = E_{i-1} + Δn * ((SOH_i + SOH_{i-1}) / 2 / 100) * C_net
#[wasm_bindgen]
pub fn throughput_step(
    previous_throughput: f64,
    cycle_count_delta: f64,
    previous_soh: f64,
    soh: f64,
    net_capacity: f64,
) -> f64 {
    let mean_soh = (soh + previous_soh) / 2.0 / 100.0;
    previous_throughput + cycle_count_delta * mean_soh * net_capacity
}

// ============================================================================
// TESTS
// ============================================================================
