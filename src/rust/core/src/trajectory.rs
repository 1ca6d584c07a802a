// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Trajectory sampling for the chart.
//!
//! The point model is evaluated at `N + 1` evenly spaced durations from 0 to
//! the requested horizon. Nothing carries between points except the solar
//! energy throughput, which is a trapezoid integral over the samples.

use crate::formulas::throughput_step;
use crate::inputs::{EvUsageInput, SolarUsageInput};
use crate::simulator::{BatteryLifeKernel, KernelConfig, SimulationResult};
use crate::units::DistanceUnit;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryPoint {
    pub time: f64,     // fraction of the horizon, 0..1
    pub duration: f64, // in the input's duration unit
    pub capacity: f64, // kWh
    pub degradation: f64,
    pub cycle_count: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub throughput: Option<f64>, // kWh delivered since t = 0
    pub soh: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    pub points: Vec<TrajectoryPoint>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance_unit: Option<DistanceUnit>,
    pub compute_time_ms: f64,
}

impl Trajectory {
    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// Indices of samples with any non-finite output.
    pub fn non_finite_samples(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                ![p.capacity, p.degradation, p.cycle_count, p.soh]
                    .iter()
                    .chain(p.distance.iter())
                    .chain(p.throughput.iter())
                    .all(|v| v.is_finite())
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// Number of intervals `N` for a horizon of `duration` units.
///
/// `floor(duration * samples_per_unit)` clamped to `1..=max_samples`; the
/// lower bound keeps a zero horizon from sampling at 0/0.
pub fn sample_count(duration: f64, config: &KernelConfig) -> usize {
    let max = config.max_samples.max(1) as usize;
    let requested = (duration * f64::from(config.samples_per_unit)).floor();
    if requested >= max as f64 {
        max
    } else if requested >= 1.0 {
        requested as usize
    } else {
        1
    }
}

/// `(time, duration)` for each of the `intervals + 1` samples.
pub fn sample_points(duration: f64, intervals: usize) -> impl Iterator<Item = (f64, f64)> {
    let n = intervals as f64;
    (0..=intervals).map(move |i| {
        let i = i as f64;
        (i / n, i * duration / n)
    })
}

fn sweep<F>(duration: f64, config: &KernelConfig, evaluate: F) -> Vec<TrajectoryPoint>
where
    F: Fn(f64) -> SimulationResult,
{
    sample_points(duration, sample_count(duration, config))
        .map(|(time, at)| {
            let result = evaluate(at);
            TrajectoryPoint {
                time,
                duration: at,
                capacity: result.end_capacity,
                degradation: result.degradation,
                cycle_count: result.cycle_count,
                distance: result.distance,
                throughput: None,
                soh: result.soh,
            }
        })
        .collect()
}

/// Cumulative delivered energy: Δcycles × mean SOH × net capacity, from 0.
pub fn accumulate_throughput(points: &mut [TrajectoryPoint], net_capacity: f64) {
    let mut previous: Option<(f64, f64, f64)> = None; // (throughput, cycles, soh)
    for point in points.iter_mut() {
        let throughput = match previous {
            None => 0.0,
            Some((energy, cycles, soh)) => {
                throughput_step(energy, point.cycle_count - cycles, soh, point.soh, net_capacity)
            }
        };
        point.throughput = Some(throughput);
        previous = Some((throughput, point.cycle_count, point.soh));
    }
}

pub fn ev_trajectory(input: &EvUsageInput, config: &KernelConfig) -> Trajectory {
    let start = instant::Instant::now();
    let points = sweep(input.duration, config, |at| {
        BatteryLifeKernel::evaluate_ev(&EvUsageInput {
            duration: at,
            ..input.clone()
        })
    });

    Trajectory {
        points,
        distance_unit: Some(input.consumption_unit),
        compute_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}

pub fn solar_trajectory(input: &SolarUsageInput, config: &KernelConfig) -> Trajectory {
    let start = instant::Instant::now();
    let mut points = sweep(input.duration, config, |at| {
        BatteryLifeKernel::evaluate_solar(&SolarUsageInput {
            duration: at,
            ..input.clone()
        })
    });
    accumulate_throughput(&mut points, input.net_capacity);

    Trajectory {
        points,
        distance_unit: None,
        compute_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}
