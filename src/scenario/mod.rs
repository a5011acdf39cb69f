//! Turns scenario configuration into an evaluated [`ImpactReport`].

use impact_config::{MitigationConfig, ScenarioConfig};
use impact_effects::assessment::{closest_reference_event, damage_zones, environmental_effects};
use impact_effects::population::{OPEN_AREA, population_at};
use impact_effects::{AsteroidParams, ImpactError, compute_impact_checked};
use impact_export::{ImpactReport, MitigationSummary};
use impact_mitigation::{MitigationError, Strategy, evaluate_mitigation_checked};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("impact parameters rejected: {0}")]
    Impact(#[from] ImpactError),
    #[error("mitigation parameters rejected: {0}")]
    Mitigation(#[from] MitigationError),
    #[error("{0}")]
    UnknownStrategy(String),
}

/// Where the population figure for a scenario comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub population: f64,
}

impl Site {
    /// Explicit population wins; otherwise look up the coordinates; otherwise nobody.
    pub fn resolve(population: Option<f64>, coords: Option<(f64, f64)>) -> Self {
        match (population, coords) {
            (Some(population), _) => Self {
                name: "Custom".to_string(),
                population,
            },
            (None, Some((lat, lng))) => {
                let site = population_at(lat, lng);
                Self {
                    name: site.name.to_string(),
                    population: site.population,
                }
            }
            (None, None) => Self {
                name: OPEN_AREA.to_string(),
                population: 0.0,
            },
        }
    }
}

/// Requested deflection attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MitigationRequest {
    pub strategy: Strategy,
    pub warning_days: f64,
}

impl TryFrom<&MitigationConfig> for MitigationRequest {
    type Error = ScenarioError;

    fn try_from(value: &MitigationConfig) -> Result<Self, Self::Error> {
        let strategy = value
            .strategy
            .parse::<Strategy>()
            .map_err(ScenarioError::UnknownStrategy)?;
        Ok(Self {
            strategy,
            warning_days: value.warning_days,
        })
    }
}

fn asteroid_params(value: &ScenarioConfig) -> AsteroidParams {
    AsteroidParams {
        diameter: value.diameter_m,
        velocity: value.velocity_km_s,
        angle: value.angle_deg,
        density: value.density,
    }
}

/// Evaluate one set of parameters into a full report.
pub fn evaluate(
    name: &str,
    params: AsteroidParams,
    site: Site,
    mitigation: Option<MitigationRequest>,
) -> Result<ImpactReport, ScenarioError> {
    let results = compute_impact_checked(&params, site.population)?;

    let mitigation = match mitigation {
        Some(request) => {
            let result = evaluate_mitigation_checked(
                results.tnt_equivalent,
                request.warning_days,
                request.strategy,
            )?;
            Some(MitigationSummary {
                strategy: request.strategy,
                warning_days: request.warning_days,
                result,
            })
        }
        None => None,
    };

    Ok(ImpactReport {
        scenario: name.to_string(),
        site: site.name,
        population: site.population,
        params,
        closest_event: closest_reference_event(results.tnt_equivalent),
        damage_zones: damage_zones(&results),
        environmental_effects: environmental_effects(&results),
        results,
        mitigation,
    })
}

/// Evaluate a configured scenario.
pub fn run_scenario(config: &ScenarioConfig) -> Result<ImpactReport, ScenarioError> {
    let site = Site::resolve(config.population, config.site.map(|s| (s.lat, s.lng)));
    let mitigation = config
        .mitigation
        .as_ref()
        .map(MitigationRequest::try_from)
        .transpose()?;
    evaluate(&config.name, asteroid_params(config), site, mitigation)
}
