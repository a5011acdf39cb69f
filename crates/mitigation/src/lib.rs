//! Deflection strategy model.
//!
//! Scores a mitigation strategy from the impact energy (megatons) and the
//! warning time before impact. Success curves are step functions of the
//! warning time in years, degraded linearly by energy up to 1000 MT.

use impact_core::time::days_to_years;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Success probability never reported above this percentage.
pub const MAX_SUCCESS_PERCENT: f64 = 95.0;
/// Success probability never reported below this percentage.
pub const MIN_SUCCESS_PERCENT: f64 = 5.0;
/// Energy at which every strategy's energy factor reaches zero (MT).
pub const ENERGY_CEILING_MT: f64 = 1_000.0;

/// Deflection approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Kinetic,
    Nuclear,
    Gravity,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Kinetic, Strategy::Nuclear, Strategy::Gravity];

    /// Base success percentage for the given warning time, before energy scaling.
    pub fn base_success(self, time_years: f64) -> f64 {
        match self {
            Self::Kinetic => {
                if time_years > 5.0 {
                    85.0
                } else if time_years > 2.0 {
                    60.0
                } else if time_years > 1.0 {
                    35.0
                } else {
                    10.0
                }
            }
            Self::Nuclear => {
                if time_years > 3.0 {
                    90.0
                } else if time_years > 1.0 {
                    70.0
                } else if time_years > 0.5 {
                    45.0
                } else {
                    20.0
                }
            }
            Self::Gravity => {
                if time_years > 10.0 {
                    95.0
                } else if time_years > 5.0 {
                    50.0
                } else {
                    15.0
                }
            }
        }
    }

    /// One-line summary of the technique.
    pub fn description(self) -> &'static str {
        match self {
            Self::Kinetic => "Launch spacecraft to collide with asteroid, changing its momentum",
            Self::Nuclear => "Detonate nuclear device near asteroid to vaporize surface material",
            Self::Gravity => {
                "Position spacecraft near asteroid to gradually alter trajectory via gravity"
            }
        }
    }

    /// Lowercase identifier used in configs and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Kinetic => "kinetic",
            Self::Nuclear => "nuclear",
            Self::Gravity => "gravity",
        }
    }

    /// Display name, pros, and cons of the strategy.
    pub fn profile(self) -> StrategyProfile {
        match self {
            Self::Kinetic => StrategyProfile {
                strategy: self,
                name: "Kinetic Impact",
                pros: &["Proven technology", "No nuclear material", "Predictable results"],
                cons: &["Requires years of warning", "Less effective on large asteroids"],
            },
            Self::Nuclear => StrategyProfile {
                strategy: self,
                name: "Nuclear Deflection",
                pros: &[
                    "Most powerful option",
                    "Effective on large asteroids",
                    "Faster than alternatives",
                ],
                cons: &[
                    "Political challenges",
                    "Risk of fragmentation",
                    "Radioactive concerns",
                ],
            },
            Self::Gravity => StrategyProfile {
                strategy: self,
                name: "Gravity Tractor",
                pros: &[
                    "Gentle and controlled",
                    "No fragmentation risk",
                    "Precise adjustments",
                ],
                cons: &[
                    "Requires decades of warning",
                    "Only works on smaller asteroids",
                ],
            },
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kinetic" => Ok(Self::Kinetic),
            "nuclear" => Ok(Self::Nuclear),
            "gravity" => Ok(Self::Gravity),
            other => Err(format!(
                "unknown strategy '{other}' (expected kinetic, nuclear, or gravity)"
            )),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive metadata for presenting a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyProfile {
    pub strategy: Strategy,
    pub name: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

/// Outcome of evaluating one strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MitigationResult {
    /// Required trajectory change in degrees.
    pub deflection_needed: f64,
    /// Percent chance of success, always within [5, 95].
    pub success_probability: f64,
    pub description: &'static str,
}

impl MitigationResult {
    pub fn tier(&self) -> SuccessTier {
        SuccessTier::from_probability(self.success_probability)
    }
}

/// Coarse banding of a success probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuccessTier {
    High,
    Moderate,
    Low,
}

impl SuccessTier {
    pub fn from_probability(percent: f64) -> Self {
        if percent >= 70.0 {
            Self::High
        } else if percent >= 40.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MitigationError {
    #[error("warning time must be positive (got {0} days)")]
    InvalidWarningTime(f64),
    #[error("impact energy must be non-negative (got {0} MT)")]
    InvalidEnergy(f64),
}

/// Score `strategy` against an impact of `energy_mt` megatons with `days_before_impact` of warning.
///
/// `days_before_impact` must be positive; zero warning yields an infinite
/// `deflection_needed`. See [`evaluate_mitigation_checked`] for a validating variant.
pub fn evaluate_mitigation(
    energy_mt: f64,
    days_before_impact: f64,
    strategy: Strategy,
) -> MitigationResult {
    let time_years = days_to_years(days_before_impact);
    let base_success = strategy.base_success(time_years);

    let energy_factor = (1.0 - energy_mt / ENERGY_CEILING_MT).max(0.0);
    let success = (base_success * energy_factor).min(MAX_SUCCESS_PERCENT);

    let deflection_needed = 0.0001 * energy_mt.sqrt() / time_years;

    MitigationResult {
        deflection_needed,
        success_probability: success.max(MIN_SUCCESS_PERCENT),
        description: strategy.description(),
    }
}

/// Validating wrapper around [`evaluate_mitigation`].
pub fn evaluate_mitigation_checked(
    energy_mt: f64,
    days_before_impact: f64,
    strategy: Strategy,
) -> Result<MitigationResult, MitigationError> {
    if days_before_impact.is_nan() || days_before_impact <= 0.0 {
        return Err(MitigationError::InvalidWarningTime(days_before_impact));
    }
    if energy_mt.is_nan() || energy_mt < 0.0 {
        return Err(MitigationError::InvalidEnergy(energy_mt));
    }
    Ok(evaluate_mitigation(energy_mt, days_before_impact, strategy))
}

/// Evaluate every strategy, in [`Strategy::ALL`] order.
pub fn compare_strategies(
    energy_mt: f64,
    days_before_impact: f64,
) -> Vec<(Strategy, MitigationResult)> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            (
                strategy,
                evaluate_mitigation(energy_mt, days_before_impact, strategy),
            )
        })
        .collect()
}
