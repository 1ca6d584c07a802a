// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::error::AgeingError;
use crate::inputs::{EvUsageInput, SolarUsageInput};
use crate::units::{celsius, ABSOLUTE_ZERO_C};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// What to do with inputs that make the model divide by zero
/// (zero capacities, zero cycle rating).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Refuse them with `AgeingError::InvalidInput`.
    #[default]
    Reject,
    /// Evaluate anyway and let `NaN`/`Infinity` flow into the results.
    Propagate,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub allowed: bool,
    pub violations: Vec<String>,
}

impl ValidationReport {
    fn from_violations(violations: Vec<String>) -> Self {
        ValidationReport {
            allowed: violations.is_empty(),
            violations,
        }
    }

    pub fn into_result(self) -> Result<(), AgeingError> {
        if self.allowed {
            Ok(())
        } else {
            Err(AgeingError::InvalidInput(self.violations))
        }
    }
}

/// Range checks mirroring the web form schema.
#[wasm_bindgen]
pub struct InputGuard {
    policy: DegeneratePolicy,
}

#[wasm_bindgen]
impl InputGuard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> InputGuard {
        InputGuard {
            policy: DegeneratePolicy::Reject,
        }
    }

    /// Validate an EV input given as JSON. Returns a `ValidationReport`.
    pub fn validate_ev(&self, input_json: &str) -> Result<JsValue, JsValue> {
        let input: EvUsageInput = serde_json::from_str(input_json).map_err(AgeingError::from)?;
        Ok(serde_wasm_bindgen::to_value(&self.check_ev(&input))?)
    }

    /// Validate a solar input given as JSON. Returns a `ValidationReport`.
    pub fn validate_solar(&self, input_json: &str) -> Result<JsValue, JsValue> {
        let input: SolarUsageInput = serde_json::from_str(input_json).map_err(AgeingError::from)?;
        Ok(serde_wasm_bindgen::to_value(&self.check_solar(&input))?)
    }
}

impl Default for InputGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl InputGuard {
    pub fn with_policy(policy: DegeneratePolicy) -> InputGuard {
        InputGuard { policy }
    }

    pub fn check_ev(&self, input: &EvUsageInput) -> ValidationReport {
        let mut violations = Vec::new();
        non_negative(&mut violations, "duration", input.duration);
        non_negative(&mut violations, "distance", input.distance);
        non_negative(&mut violations, "consumption", input.consumption);
        self.check_common(
            &mut violations,
            Common {
                cycle_count_to_80: input.cycle_count_to_80,
                gross_capacity: input.gross_capacity,
                net_capacity: input.net_capacity,
                celsius_temperature: celsius(input.temperature, input.temperature_unit),
                soc: input.soc,
            },
        );
        ValidationReport::from_violations(violations)
    }

    pub fn check_solar(&self, input: &SolarUsageInput) -> ValidationReport {
        let mut violations = Vec::new();
        non_negative(&mut violations, "duration", input.duration);
        non_negative(&mut violations, "cycleCount", input.cycle_count);
        self.check_common(
            &mut violations,
            Common {
                cycle_count_to_80: input.cycle_count_to_80,
                gross_capacity: input.gross_capacity,
                net_capacity: input.net_capacity,
                celsius_temperature: celsius(input.temperature, input.temperature_unit),
                soc: input.soc,
            },
        );
        ValidationReport::from_violations(violations)
    }

    fn check_common(&self, violations: &mut Vec<String>, common: Common) {
        non_negative(violations, "grossCapacity", common.gross_capacity);
        non_negative(violations, "netCapacity", common.net_capacity);

        if !common.celsius_temperature.is_finite() {
            violations.push("temperature must be finite".to_string());
        } else if common.celsius_temperature < ABSOLUTE_ZERO_C {
            violations.push(format!(
                "temperature below absolute zero: {:.2} C",
                common.celsius_temperature
            ));
        }

        if common.soc > 100 {
            violations.push(format!("soc must be within 0-100, got {}", common.soc));
        }

        if common.net_capacity > common.gross_capacity {
            violations.push(format!(
                "netCapacity ({}) exceeds grossCapacity ({})",
                common.net_capacity, common.gross_capacity
            ));
        }

        if self.policy == DegeneratePolicy::Reject {
            if common.cycle_count_to_80 == 0 {
                violations.push("cycleCountTo80 must be positive".to_string());
            }
            if common.gross_capacity == 0.0 {
                violations.push("grossCapacity must be positive".to_string());
            }
            if common.net_capacity == 0.0 {
                violations.push("netCapacity must be positive".to_string());
            }
        }
    }
}

struct Common {
    cycle_count_to_80: u32,
    gross_capacity: f64,
    net_capacity: f64,
    celsius_temperature: f64,
    soc: u8,
}

fn non_negative(violations: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() {
        violations.push(format!("{} must be finite", field));
    } else if value < 0.0 {
        violations.push(format!("{} must be non-negative, got {}", field, value));
    }
}
