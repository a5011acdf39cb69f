//! Closed-form impact effects model.
//!
//! Every exponent and coefficient below is an empirical tuning constant of this
//! model, not a derived physical law. They are reproduced exactly so that
//! results stay comparable across releases.

use impact_core::constants::{CASUALTY_FRACTION, G, POPULATION_AREA_M2, SEISMIC_OFFSET};
use impact_core::ranges::{self, ANGLE_DEG, DIAMETER_M, VELOCITY_KM_S};
use impact_core::units::{deg_to_rad, joules_to_megatons, kms_to_ms};
use impact_core::Density;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Physical description of an incoming asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidParams {
    /// Diameter in metres.
    pub diameter: f64,
    /// Entry velocity in km/s.
    pub velocity: f64,
    /// Entry angle in degrees from horizontal (0 = grazing, 90 = vertical).
    pub angle: f64,
    pub density: Density,
}

impl Default for AsteroidParams {
    fn default() -> Self {
        Self {
            diameter: 100.0,
            velocity: 30.0,
            angle: 45.0,
            density: Density::Rocky,
        }
    }
}

impl AsteroidParams {
    /// Reject parameters the model cannot meaningfully evaluate.
    ///
    /// Angles are not checked; values outside [0, 90] simply flow through the sine term.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if self.diameter.is_nan() || self.diameter <= 0.0 {
            return Err(ImpactError::InvalidDiameter(self.diameter));
        }
        if self.velocity.is_nan() || self.velocity <= 0.0 {
            return Err(ImpactError::InvalidVelocity(self.velocity));
        }
        Ok(())
    }

    /// Copy of these parameters clamped to the ranges offered by the controls.
    pub fn clamped(&self) -> Self {
        Self {
            diameter: ranges::clamp(self.diameter, &DIAMETER_M),
            velocity: ranges::clamp(self.velocity, &VELOCITY_KM_S),
            angle: ranges::clamp(self.angle, &ANGLE_DEG),
            density: self.density,
        }
    }
}

/// Effects of a single impact. Distances are in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResults {
    pub mass: f64,
    pub impact_energy: f64,
    pub tnt_equivalent: f64,
    pub crater_diameter: f64,
    pub crater_depth: f64,
    pub affected_area_radius: f64,
    pub fireball: f64,
    pub thermal_radiation: f64,
    pub air_blast: f64,
    pub seismic_magnitude: f64,
    pub casualty_estimate: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ImpactError {
    #[error("asteroid diameter must be positive (got {0} m)")]
    InvalidDiameter(f64),
    #[error("asteroid velocity must be positive (got {0} km/s)")]
    InvalidVelocity(f64),
    #[error("population must be a non-negative number (got {0})")]
    InvalidPopulation(f64),
}

/// Evaluate the impact model for `params` over a site holding `population` people.
///
/// Never fails: non-positive diameters or velocities produce zero/NaN outputs
/// exactly as the formulas dictate. Use [`compute_impact_checked`] at input boundaries.
pub fn compute_impact(params: &AsteroidParams, population: f64) -> ImpactResults {
    let radius = params.diameter / 2.0;
    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    let density_value = params.density.kg_per_m3();
    let mass = volume * density_value;

    let velocity_ms = kms_to_ms(params.velocity);
    // Oblique entries transfer less energy; a 0° graze yields none.
    let impact_energy = 0.5 * mass * velocity_ms.powi(2) * deg_to_rad(params.angle).sin();
    let tnt_equivalent = joules_to_megatons(impact_energy);

    let crater_diameter = 2.0 * (impact_energy / (G * density_value)).powf(0.25);
    let crater_depth = crater_diameter / 3.0;

    let affected_area_radius = tnt_equivalent.powf(0.33) * 1_000.0;
    let fireball = tnt_equivalent.powf(0.4) * 100.0;
    let thermal_radiation = tnt_equivalent.powf(0.41) * 150.0;
    let air_blast = tnt_equivalent.powf(0.33) * 800.0;

    let seismic_magnitude = (impact_energy.log10() - SEISMIC_OFFSET).max(0.0);

    let casualty_estimate = if population > 0.0 {
        let affected_area = PI * affected_area_radius.powi(2);
        let population_density = population / POPULATION_AREA_M2;
        (affected_area * population_density * CASUALTY_FRACTION).floor() as u64
    } else {
        0
    };

    ImpactResults {
        mass,
        impact_energy,
        tnt_equivalent,
        crater_diameter,
        crater_depth,
        affected_area_radius,
        fireball,
        thermal_radiation,
        air_blast,
        seismic_magnitude,
        casualty_estimate,
    }
}

/// Validating wrapper around [`compute_impact`].
pub fn compute_impact_checked(
    params: &AsteroidParams,
    population: f64,
) -> Result<ImpactResults, ImpactError> {
    params.validate()?;
    if population.is_nan() || population < 0.0 {
        return Err(ImpactError::InvalidPopulation(population));
    }
    Ok(compute_impact(params, population))
}
