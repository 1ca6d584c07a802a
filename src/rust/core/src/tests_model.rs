// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Battery Life Model Tests
//!
//! End-to-end scenarios through the kernel: monotonic fade, bounds and the
//! day-zero boundary, starting from form JSON as the web UI sends it.

use crate::guard::DegeneratePolicy;
use crate::inputs::{EvUsageInput, SolarUsageInput};
use crate::science::chemistry::Chemistry;
use crate::simulator::{BatteryLifeKernel, KernelConfig};
use crate::units::DurationUnit;
use serde_json::json;

fn ev_form() -> EvUsageInput {
    serde_json::from_value(json!({
        "chemistry": "LFP",
        "cycleCountTo80": 3000,
        "duration": 10,
        "durationUnit": "year",
        "distance": 1200,
        "distanceUnit": "month",
        "consumption": 17,
        "consumptionUnit": "km",
        "grossCapacity": 44,
        "netCapacity": 42,
        "temperature": 15,
        "temperatureUnit": "C",
        "soc": 50
    }))
    .unwrap()
}

fn solar_form() -> SolarUsageInput {
    serde_json::from_value(json!({
        "chemistry": "LFP",
        "cycleCountTo80": 3000,
        "duration": 0,
        "durationUnit": "year",
        "cycleCount": 1,
        "cycleCountUnit": "day",
        "grossCapacity": 2,
        "netCapacity": 1.8,
        "temperature": 20,
        "temperatureUnit": "C",
        "soc": 50
    }))
    .unwrap()
}

#[test]
fn test_ev_scenario_monotonic_from_zero() {
    println!(" Checking EV scenario (LFP, 44/42 kWh, 1200 km/month)");

    let response = BatteryLifeKernel::simulate_ev(&ev_form(), &KernelConfig::default()).unwrap();
    let points = &response.trajectory.points;
    assert_eq!(points.len(), 121);

    let first = &points[0];
    assert_eq!(first.cycle_count, 0.0, "cycle count at t=0");
    assert_eq!(first.degradation, 0.0, "degradation at t=0");

    for pair in points.windows(2) {
        assert!(
            pair[1].degradation >= pair[0].degradation,
            "Degradation decreased between t={} and t={}",
            pair[0].time,
            pair[1].time
        );
        assert!(pair[1].cycle_count >= pair[0].cycle_count);
        assert!(pair[1].distance >= pair[0].distance);
    }

    let last = points.last().unwrap();
    assert!(last.degradation > 0.0, "No fade after 10 years");
    println!(" Degradation after 10y: {:.2}%  SOH: {:.2}%", last.degradation, last.soh);
}

#[test]
fn test_solar_scenario_origin() {
    println!(" Checking solar origin (duration = 0)");

    let result = BatteryLifeKernel::evaluate_solar(&solar_form());
    assert_eq!(result.end_capacity, 2.0);
    assert_eq!(result.degradation, 0.0);
    assert_eq!(result.soh, 100.0);
    assert_eq!(result.cycle_count, 0.0);
}

#[test]
fn test_bounds_hold_across_inputs() {
    println!(" Checking SOH cap and end-capacity bounds");

    for chemistry in Chemistry::ALL {
        for soc in [0u8, 20, 50, 80, 100] {
            for temperature in [-10.0, 0.0, 25.0] {
                for duration in [0.0, 0.5, 3.0, 10.0] {
                    let ev = EvUsageInput {
                        chemistry,
                        soc,
                        temperature,
                        duration,
                        ..ev_form()
                    };
                    let result = BatteryLifeKernel::evaluate_ev(&ev);
                    assert!(result.soh <= 100.0, "EV soh {} > 100", result.soh);
                    assert!(
                        result.end_capacity >= 0.0 && result.end_capacity <= ev.gross_capacity,
                        "EV end capacity {} out of bounds ({} soc={} T={} d={})",
                        result.end_capacity,
                        chemistry,
                        soc,
                        temperature,
                        duration
                    );
                    assert!(result.degradation >= 0.0);

                    let solar = SolarUsageInput {
                        chemistry,
                        soc,
                        temperature,
                        duration,
                        ..solar_form()
                    };
                    let result = BatteryLifeKernel::evaluate_solar(&solar);
                    assert!(result.soh <= 100.0, "Solar soh {} > 100", result.soh);
                    assert!(result.end_capacity >= 0.0 && result.end_capacity <= solar.gross_capacity);
                    assert!(result.degradation >= 0.0);
                }
            }
        }
    }
}

#[test]
fn test_monotonic_in_duration_for_both_pipelines() {
    for chemistry in Chemistry::ALL {
        let mut previous_ev = -1.0;
        let mut previous_solar = -1.0;
        for step in 0..=40 {
            let duration = step as f64 * 0.5;
            let ev = BatteryLifeKernel::evaluate_ev(&EvUsageInput {
                chemistry,
                duration,
                ..ev_form()
            });
            let solar = BatteryLifeKernel::evaluate_solar(&SolarUsageInput {
                chemistry,
                duration,
                ..solar_form()
            });
            assert!(ev.degradation >= previous_ev, "{} EV at {}y", chemistry, duration);
            assert!(solar.degradation >= previous_solar, "{} solar at {}y", chemistry, duration);
            previous_ev = ev.degradation;
            previous_solar = solar.degradation;
        }
    }
}

#[test]
fn test_idempotent_evaluation() {
    let input = ev_form();
    assert_eq!(
        BatteryLifeKernel::evaluate_ev(&input),
        BatteryLifeKernel::evaluate_ev(&input)
    );

    let config = KernelConfig::default();
    let a = BatteryLifeKernel::simulate_solar(&SolarUsageInput::default(), &config).unwrap();
    let b = BatteryLifeKernel::simulate_solar(&SolarUsageInput::default(), &config).unwrap();
    assert_eq!(a.trajectory.points, b.trajectory.points);
    assert_eq!(a.events, b.events);
}

#[test]
fn test_duration_unit_equivalence() {
    // 52 weeks = 364 days, evaluated either way
    let weeks = BatteryLifeKernel::evaluate_ev(&EvUsageInput {
        duration: 52.0,
        duration_unit: DurationUnit::Week,
        ..ev_form()
    });
    let days = BatteryLifeKernel::evaluate_ev(&EvUsageInput {
        duration: 364.0,
        duration_unit: DurationUnit::Day,
        ..ev_form()
    });
    assert_eq!(weeks, days);
}

#[test]
fn test_heavier_driving_ages_faster() {
    let light = BatteryLifeKernel::evaluate_ev(&EvUsageInput {
        distance: 500.0,
        ..ev_form()
    });
    let heavy = BatteryLifeKernel::evaluate_ev(&EvUsageInput {
        distance: 4000.0,
        ..ev_form()
    });
    assert!(heavy.cycle_count > light.cycle_count);
    assert!(heavy.degradation > light.degradation);
    assert!(heavy.soh < light.soh);
}

#[test]
fn test_degenerate_policies_end_to_end() {
    println!(" Checking zero cycle rating under both policies");

    let input = EvUsageInput {
        cycle_count_to_80: 0,
        ..ev_form()
    };

    let rejected = BatteryLifeKernel::simulate_ev(&input, &KernelConfig::default());
    assert!(rejected.is_err());

    let config = KernelConfig {
        degenerate_inputs: DegeneratePolicy::Propagate,
        ..KernelConfig::default()
    };
    let response = BatteryLifeKernel::simulate_ev(&input, &config).unwrap();
    // Zero rating: the first cycle takes the whole pack
    let last = response.trajectory.last().unwrap();
    assert_eq!(last.capacity, 0.0);
    assert!(response.events.iter().any(|e| e.topic == "MODEL.END_OF_LIFE"));
}

#[test]
fn test_calendar_law_beyond_its_range_is_flagged() {
    println!(" Checking LMO-NMC at 45C / SOC 100 for 15 years");

    // The power law passes 100 % calendar loss here; the kernel reports it
    // instead of clamping.
    let input = SolarUsageInput {
        chemistry: Chemistry::LmoNmc,
        soc: 100,
        temperature: 45.0,
        duration: 15.0,
        ..solar_form()
    };
    let response = BatteryLifeKernel::simulate_solar(&input, &KernelConfig::default()).unwrap();
    assert!(response.trajectory.last().unwrap().capacity < 0.0);
    assert!(response.events.iter().any(|e| e.topic == "MODEL.OUT_OF_RANGE"));
}

#[test]
fn test_json_round_through_wasm_surface() {
    let output = BatteryLifeKernel::simulate_ev_json(&json!({ "duration": 1 }).to_string());
    let response: serde_json::Value = serde_json::from_str(&output).unwrap();
    let points = response["trajectory"]["points"].as_array().unwrap();
    assert_eq!(points.len(), 13);
    assert_eq!(response["trajectory"]["distanceUnit"], "km");
    assert!(points[12]["distance"].as_f64().unwrap() > 14_000.0);
    assert!(points[0].get("throughput").is_none());
}
