// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CalendarAgeingEngine: capacity loss from elapsed time alone

use crate::formulas::calendar_power_law;
use crate::science::chemistry::Chemistry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarAgeingResult {
    pub degradation: f64,  // fraction of gross capacity
    pub soc_exponent: f64, // k(SOC), time exponent actually used
}

pub struct CalendarAgeingEngine;

impl CalendarAgeingEngine {
    /// Calendar loss over `days` at a mean temperature and SOC
    ///
    /// Q_cal = a0 * exp(b * T) * days^k(SOC)
    ///
    /// `days = 0` keeps IEEE `powf` semantics. For SOC in 0-100 both
    /// chemistries give k > 0, so day zero is exactly zero loss.
    pub fn compute(chemistry: Chemistry, days: f64, celsius_temperature: f64, soc: f64) -> CalendarAgeingResult {
        let profile = chemistry.profile();
        let soc_exponent = profile.soc_exponent(soc);

        CalendarAgeingResult {
            degradation: calendar_power_law(profile.a0, profile.b, celsius_temperature, days, soc_exponent),
            soc_exponent,
        }
    }

    /// Shortcut returning the loss fraction only.
    pub fn degradation(chemistry: Chemistry, days: f64, celsius_temperature: f64, soc: f64) -> f64 {
        Self::compute(chemistry, days, celsius_temperature, soc).degradation
    }
}
