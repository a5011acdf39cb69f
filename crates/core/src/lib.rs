//! Core units, constants, and shared primitives for the Impact Lab workspace.

use serde::{Deserialize, Serialize};

/// Physical constants and model coefficients expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Surface gravity used by the crater scaling law (m/s²).
    pub const G: f64 = 9.81;
    /// Divisor converting joules into the model's megaton figure.
    ///
    /// This is not 4.184e15; reports produced by the model depend on the literal value.
    pub const JOULES_PER_MEGATON: f64 = 4.184e9;
    /// Offset subtracted from `log10(E)` to obtain the seismic magnitude.
    pub const SEISMIC_OFFSET: f64 = 4.8;
    /// Fraction of the population inside the affected radius counted as casualties.
    pub const CASUALTY_FRACTION: f64 = 0.7;
    /// Population figures are spread over this reference area (m²).
    pub const POPULATION_AREA_M2: f64 = 1_000_000.0;
    /// Days per year used when converting warning times.
    pub const DAYS_PER_YEAR: f64 = 365.0;
}

/// Input ranges exposed by the parameter controls.
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const DIAMETER_M: RangeInclusive<f64> = 1.0..=1_000.0;
    pub const VELOCITY_KM_S: RangeInclusive<f64> = 10.0..=70.0;
    pub const ANGLE_DEG: RangeInclusive<f64> = 0.0..=90.0;
    pub const WARNING_DAYS: RangeInclusive<f64> = 1.0..=3_650.0;

    /// Clamp `value` into an inclusive range.
    #[inline]
    pub fn clamp(value: f64, range: &RangeInclusive<f64>) -> f64 {
        value.clamp(*range.start(), *range.end())
    }
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert degrees to radians the same way the model always has (`deg * π / 180`).
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg * std::f64::consts::PI / 180.0
    }

    /// Convert joules to model megatons.
    #[inline]
    pub fn joules_to_megatons(joules: f64) -> f64 {
        joules / super::constants::JOULES_PER_MEGATON
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::DAYS_PER_YEAR;

    /// Convert days to (365-day) years.
    #[inline]
    pub fn days_to_years(days: f64) -> f64 {
        days / DAYS_PER_YEAR
    }
}

/// Bulk composition of an impactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Rocky,
    Metallic,
    Icy,
}

impl Density {
    /// All compositions in display order.
    pub const ALL: [Density; 3] = [Density::Rocky, Density::Metallic, Density::Icy];

    /// Bulk density in kg/m³.
    pub fn kg_per_m3(self) -> f64 {
        match self {
            Self::Rocky => 3_000.0,
            Self::Metallic => 8_000.0,
            Self::Icy => 1_000.0,
        }
    }

    /// Lowercase identifier used in configs and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rocky => "rocky",
            Self::Metallic => "metallic",
            Self::Icy => "icy",
        }
    }
}

impl std::str::FromStr for Density {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rocky" => Ok(Self::Rocky),
            "metallic" => Ok(Self::Metallic),
            "icy" => Ok(Self::Icy),
            other => Err(format!("unknown density '{other}' (expected rocky, metallic, or icy)")),
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
