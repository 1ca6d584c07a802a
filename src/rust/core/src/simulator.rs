// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// BatteryLifeKernel: EV and stationary storage ageing pipelines
//
// ============================================================================
// The web form calls ONLY this module. Every evaluation is a pure function of
// (input, duration); trajectories are independent sweeps over the point model.
// ============================================================================

use crate::error::AgeingError;
use crate::formulas::{degradation_percent, end_capacity, state_of_health, END_OF_LIFE_FRACTION};
use crate::guard::{DegeneratePolicy, InputGuard};
use crate::inputs::{EvUsageInput, SolarUsageInput};
use crate::science::calendar::CalendarAgeingEngine;
use crate::science::cycling::CyclingEngine;
use crate::science::usage::UsageEstimator;
use crate::trajectory::{ev_trajectory, solar_trajectory, Trajectory};
use crate::units::{celsius, day_duration};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KernelConfig {
    /// Trajectory samples per unit of the input duration (12 → monthly for years).
    pub samples_per_unit: u32,
    /// Upper bound on trajectory intervals.
    pub max_samples: u32,
    pub degenerate_inputs: DegeneratePolicy,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            samples_per_unit: 12,
            max_samples: 500,
            degenerate_inputs: DegeneratePolicy::Reject,
        }
    }
}

/// Point result of one pipeline evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Cumulative distance (EV only).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance: Option<f64>,
    pub cycle_count: f64,  // equivalent full cycles
    pub degradation: f64,  // % of gross capacity
    pub end_capacity: f64, // kWh
    pub soh: f64,          // % of net capacity, ≤ 100
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub trajectory: Trajectory,
    pub events: Vec<SimulationEvent>,
}

#[wasm_bindgen]
pub struct BatteryLifeKernel;

#[wasm_bindgen]
impl BatteryLifeKernel {
    /// EV trajectory from the form JSON, default config.
    ///
    /// # Returns
    /// JSON `SimulationResponse`, or `{"error": "..."}`.
    pub fn simulate_ev_json(input_json: &str) -> String {
        Self::respond(
            serde_json::from_str::<EvUsageInput>(input_json)
                .map_err(AgeingError::from)
                .and_then(|input| Self::simulate_ev(&input, &KernelConfig::default())),
        )
    }

    /// EV trajectory with an explicit `KernelConfig` JSON (missing fields default).
    pub fn simulate_ev_json_with_config(input_json: &str, config_json: &str) -> String {
        Self::respond(Self::parse_pair::<EvUsageInput>(input_json, config_json).and_then(
            |(input, config)| Self::simulate_ev(&input, &config),
        ))
    }

    /// Solar storage trajectory from the form JSON, default config.
    pub fn simulate_solar_json(input_json: &str) -> String {
        Self::respond(
            serde_json::from_str::<SolarUsageInput>(input_json)
                .map_err(AgeingError::from)
                .and_then(|input| Self::simulate_solar(&input, &KernelConfig::default())),
        )
    }

    pub fn simulate_solar_json_with_config(input_json: &str, config_json: &str) -> String {
        Self::respond(Self::parse_pair::<SolarUsageInput>(input_json, config_json).and_then(
            |(input, config)| Self::simulate_solar(&input, &config),
        ))
    }

    /// Single validated EV evaluation (object in, object out).
    pub fn evaluate_ev_value(input: JsValue) -> Result<JsValue, JsValue> {
        let input: EvUsageInput = serde_wasm_bindgen::from_value(input)?;
        InputGuard::new().check_ev(&input).into_result()?;
        Ok(serde_wasm_bindgen::to_value(&Self::evaluate_ev(&input))?)
    }

    /// Single validated solar evaluation (object in, object out).
    pub fn evaluate_solar_value(input: JsValue) -> Result<JsValue, JsValue> {
        let input: SolarUsageInput = serde_wasm_bindgen::from_value(input)?;
        InputGuard::new().check_solar(&input).into_result()?;
        Ok(serde_wasm_bindgen::to_value(&Self::evaluate_solar(&input))?)
    }
}

/// Pure Rust Implementation (Non-WASM-Bindgen)
impl BatteryLifeKernel {
    /// EV pipeline at `input.duration`. No validation; degenerate inputs
    /// yield non-finite fields.
    pub fn evaluate_ev(input: &EvUsageInput) -> SimulationResult {
        // 1. Canonical units
        let days = day_duration(input.duration, input.duration_unit);
        let celsius_temperature = celsius(input.temperature, input.temperature_unit);

        // 2. Energy per day
        let daily_energy = UsageEstimator::daily_energy(input.distance, input.distance_unit, input.consumption);

        // 3. Calendar fade over the period
        let calendar = CalendarAgeingEngine::degradation(
            input.chemistry,
            days,
            celsius_temperature,
            f64::from(input.soc),
        );

        // 4-6. Energy moved → equivalent cycles on the mean faded capacity → cycle fade
        let cycle_count = UsageEstimator::equivalent_cycles(days, daily_energy, input.gross_capacity, calendar);
        let cycling = CyclingEngine::degradation(input.cycle_count_to_80, cycle_count);

        // 7-10. Combine and report
        let end = end_capacity(input.gross_capacity, calendar, cycling);
        let distance = days * UsageEstimator::daily_distance(input.distance, input.distance_unit);

        SimulationResult {
            distance: Some(distance),
            cycle_count,
            degradation: degradation_percent(input.gross_capacity, end),
            end_capacity: end,
            soh: state_of_health(input.net_capacity, end),
        }
    }

    /// Stationary pipeline at `input.duration`: cycling is given as a rate.
    pub fn evaluate_solar(input: &SolarUsageInput) -> SimulationResult {
        let days = day_duration(input.duration, input.duration_unit);
        let cycle_count = UsageEstimator::daily_cycle_rate(input.cycle_count, input.cycle_count_unit) * days;
        let celsius_temperature = celsius(input.temperature, input.temperature_unit);

        let calendar = CalendarAgeingEngine::degradation(
            input.chemistry,
            days,
            celsius_temperature,
            f64::from(input.soc),
        );
        let cycling = CyclingEngine::degradation(input.cycle_count_to_80, cycle_count);

        let end = end_capacity(input.gross_capacity, calendar, cycling);

        SimulationResult {
            distance: None,
            cycle_count,
            degradation: degradation_percent(input.gross_capacity, end),
            end_capacity: end,
            soh: state_of_health(input.net_capacity, end),
        }
    }

    /// Validate, sweep and annotate an EV trajectory.
    pub fn simulate_ev(input: &EvUsageInput, config: &KernelConfig) -> Result<SimulationResponse, AgeingError> {
        InputGuard::with_policy(config.degenerate_inputs)
            .check_ev(input)
            .into_result()?;

        let trajectory = ev_trajectory(input, config);
        log::debug!(
            "ev trajectory: {} samples in {:.3} ms",
            trajectory.points.len(),
            trajectory.compute_time_ms
        );
        Ok(Self::annotate(trajectory))
    }

    /// Validate, sweep and annotate a stationary storage trajectory.
    pub fn simulate_solar(input: &SolarUsageInput, config: &KernelConfig) -> Result<SimulationResponse, AgeingError> {
        InputGuard::with_policy(config.degenerate_inputs)
            .check_solar(input)
            .into_result()?;

        let trajectory = solar_trajectory(input, config);
        log::debug!(
            "solar trajectory: {} samples in {:.3} ms",
            trajectory.points.len(),
            trajectory.compute_time_ms
        );
        Ok(Self::annotate(trajectory))
    }

    fn annotate(trajectory: Trajectory) -> SimulationResponse {
        let mut events = Vec::new();

        let non_finite = trajectory.non_finite_samples();
        if let Some(first) = non_finite.first() {
            log::warn!("{} non-finite samples, first at index {}", non_finite.len(), first);
            events.push(SimulationEvent {
                topic: "MODEL.DEGENERATE".to_string(),
                message: format!(
                    "{} of {} samples are not finite (first at index {})",
                    non_finite.len(),
                    trajectory.points.len(),
                    first
                ),
                severity: Severity::Warning,
            });
        }

        if let Some(first) = trajectory.points.iter().find(|p| p.capacity < 0.0) {
            log::warn!("capacity negative from t={:.3}", first.time);
            events.push(SimulationEvent {
                topic: "MODEL.OUT_OF_RANGE".to_string(),
                message: format!(
                    "Calendar ageing law exceeds 100% loss from {:.1}% of the horizon; results past this point are not physical",
                    first.time * 100.0
                ),
                severity: Severity::Warning,
            });
        }

        if let Some(last) = trajectory.last() {
            if last.soh < END_OF_LIFE_FRACTION * 100.0 {
                events.push(SimulationEvent {
                    topic: "MODEL.END_OF_LIFE".to_string(),
                    message: format!("SOH ends at {:.1}%, below the 80% end-of-life line", last.soh),
                    severity: Severity::Info,
                });
            }
        }

        SimulationResponse { trajectory, events }
    }

    fn parse_pair<T>(input_json: &str, config_json: &str) -> Result<(T, KernelConfig), AgeingError>
    where
        T: serde::de::DeserializeOwned,
    {
        Ok((serde_json::from_str(input_json)?, serde_json::from_str(config_json)?))
    }

    fn respond(result: Result<SimulationResponse, AgeingError>) -> String {
        match result {
            Ok(response) => serde_json::to_string(&response).unwrap_or_default(),
            Err(e) => {
                log::warn!("simulation rejected: {}", e);
                serde_json::to_string(&serde_json::json!({ "error": e.to_string() })).unwrap_or_default()
            }
        }
    }
}
