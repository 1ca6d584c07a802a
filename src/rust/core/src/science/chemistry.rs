// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Chemistry profiles: empirical calendar ageing coefficients per cell family.

use crate::error::AgeingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chemistry {
    /// Lithium iron phosphate
    #[default]
    #[serde(rename = "LFP")]
    Lfp,
    /// Lithium manganese oxide / nickel manganese cobalt blend
    #[serde(rename = "LMO-NMC")]
    LmoNmc,
}

/// Calendar ageing coefficients for one chemistry.
///
/// `k_soc` maps mean SOC (percent, 0-100) to the time exponent of the power law.
#[derive(Clone, Copy, Debug)]
pub struct ChemistryProfile {
    pub a0: f64,
    pub b: f64,
    pub k_soc: fn(f64) -> f64,
}

fn lfp_k_soc(soc: f64) -> f64 {
    1.14e-6 * soc.powi(3) - 0.000215 * soc.powi(2) + 0.0137 * soc + 0.281
}

fn lmo_nmc_k_soc(soc: f64) -> f64 {
    -2.67e-5 * soc.powi(2) + 0.00793 * soc + 0.301
}

pub const LFP_PROFILE: ChemistryProfile = ChemistryProfile {
    a0: 8.856e-4,
    b: 0.0266,
    k_soc: lfp_k_soc,
};

pub const LMO_NMC_PROFILE: ChemistryProfile = ChemistryProfile {
    a0: 1.4565e-4,
    b: 0.0741,
    k_soc: lmo_nmc_k_soc,
};

impl Chemistry {
    pub const ALL: [Chemistry; 2] = [Chemistry::Lfp, Chemistry::LmoNmc];

    pub fn profile(self) -> &'static ChemistryProfile {
        match self {
            Chemistry::Lfp => &LFP_PROFILE,
            Chemistry::LmoNmc => &LMO_NMC_PROFILE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Chemistry::Lfp => "LFP",
            Chemistry::LmoNmc => "LMO-NMC",
        }
    }
}

impl ChemistryProfile {
    /// Time exponent for a mean SOC in percent.
    pub fn soc_exponent(&self, soc: f64) -> f64 {
        (self.k_soc)(soc)
    }
}

impl FromStr for Chemistry {
    type Err = AgeingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LFP" => Ok(Chemistry::Lfp),
            "LMO-NMC" => Ok(Chemistry::LmoNmc),
            other => Err(AgeingError::UnsupportedChemistry(other.to_string())),
        }
    }
}

impl fmt::Display for Chemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
