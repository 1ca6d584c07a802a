// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// UsageEstimator: EV driving pattern → energy per day → equivalent cycles

use crate::formulas::mean_calendar_capacity;
use crate::units::{day_duration, DurationUnit};

pub struct UsageEstimator;

impl UsageEstimator {
    /// Energy drawn per day (kWh).
    ///
    /// `distance` is driven per `distance_period`, `consumption` is energy per
    /// 100 distance units.
    pub fn daily_energy(distance: f64, distance_period: DurationUnit, consumption: f64) -> f64 {
        distance * consumption / 100.0 / day_duration(1.0, distance_period)
    }

    /// Distance driven per day.
    pub fn daily_distance(distance: f64, distance_period: DurationUnit) -> f64 {
        distance / day_duration(1.0, distance_period)
    }

    /// Equivalent full cycles over `days`.
    ///
    /// Energy moved divided by the mean capacity of the period, which couples
    /// usage to calendar fade: a faded pack cycles more for the same energy.
    pub fn equivalent_cycles(days: f64, daily_energy: f64, gross_capacity: f64, calendar_degradation: f64) -> f64 {
        (days * daily_energy) / mean_calendar_capacity(gross_capacity, calendar_degradation)
    }

    /// Cycles per day for a stationary pack cycled `cycle_count` times per `period`.
    pub fn daily_cycle_rate(cycle_count: f64, period: DurationUnit) -> f64 {
        cycle_count / day_duration(1.0, period)
    }
}
