// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// CyclingEngine: capacity loss from equivalent full cycles

use crate::formulas::{compound_cycling_degradation, single_cycle_degradation};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CyclingResult {
    pub single_cycle_degradation: f64, // % per cycle
    pub degradation: f64,              // fraction after `cycle_count` cycles
}

pub struct CyclingEngine;

impl CyclingEngine {
    /// Loss after `cycle_count` equivalent cycles for a cell rated
    /// `cycle_count_to_80` cycles to 80 % capacity.
    ///
    /// A zero rating is not guarded here (see `guard::InputGuard`).
    pub fn compute(cycle_count_to_80: u32, cycle_count: f64) -> CyclingResult {
        let per_cycle = single_cycle_degradation(f64::from(cycle_count_to_80));
        CyclingResult {
            single_cycle_degradation: per_cycle,
            degradation: compound_cycling_degradation(per_cycle, cycle_count),
        }
    }

    pub fn degradation(cycle_count_to_80: u32, cycle_count: f64) -> f64 {
        Self::compute(cycle_count_to_80, cycle_count).degradation
    }
}
