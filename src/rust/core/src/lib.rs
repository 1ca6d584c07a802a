// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// batlife — Battery Life Estimator
// Calendar & cycle ageing core for EV and home storage packs
//

pub mod error;
pub mod formulas;
pub mod guard;
pub mod inputs;
pub mod logging;
pub mod science;
pub mod simulator;
pub mod trajectory;
pub mod units;
#[cfg(test)]
pub mod tests_model;

// Re-export core types
pub use error::AgeingError;
pub use guard::{DegeneratePolicy, InputGuard, ValidationReport};
pub use inputs::{EvUsageInput, SimulationRequest, SolarUsageInput};
pub use science::chemistry::{Chemistry, ChemistryProfile};
pub use simulator::{BatteryLifeKernel, KernelConfig, SimulationEvent, SimulationResponse, SimulationResult};
pub use trajectory::{Trajectory, TrajectoryPoint};
pub use units::{DistanceUnit, DurationUnit, TemperatureUnit};
