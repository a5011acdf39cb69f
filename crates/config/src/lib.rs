//! Configuration models and loaders for Impact Lab.

use std::fs::File;
use std::path::{Path, PathBuf};

use impact_core::Density;
use impact_mitigation::Strategy;
use serde::Deserialize;
use thiserror::Error;

/// Named impact scenario parsed from scenario manifests.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    #[serde(default = "default_angle")]
    pub angle_deg: f64,
    #[serde(default)]
    pub density: Density,
    #[serde(default)]
    pub population: Option<f64>,
    #[serde(default)]
    pub site: Option<SiteConfig>,
    #[serde(default)]
    pub mitigation: Option<MitigationConfig>,
}

/// Impact location; used to look up a population when none is given.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct SiteConfig {
    pub lat: f64,
    pub lng: f64,
}

/// Deflection attempt attached to a scenario.
#[derive(Debug, Deserialize, Clone)]
pub struct MitigationConfig {
    pub strategy: String,
    pub warning_days: f64,
}

/// Settings for the near-earth-object feed and its cache.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogSettings {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            api_key: default_api_key(),
            cache_ttl_secs: default_cache_ttl_secs(),
            window_days: default_window_days(),
        }
    }
}

fn default_angle() -> f64 {
    45.0
}

fn default_feed_url() -> String {
    "https://api.nasa.gov/neo/rest/v1/feed".to_string()
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    3_600
}

fn default_window_days() -> i64 {
    7
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid scenario '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// Load impact scenarios from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let scenarios: Vec<ScenarioConfig> = load_records(path)?;
    for scenario in &scenarios {
        validate_scenario(scenario)?;
    }
    Ok(scenarios)
}

/// Find a scenario by name (case-insensitive).
pub fn find_scenario<'a>(scenarios: &'a [ScenarioConfig], name: &str) -> Option<&'a ScenarioConfig> {
    let upper = name.to_uppercase();
    scenarios.iter().find(|s| s.name.to_uppercase() == upper)
}

/// Load feed settings from a TOML file; missing keys take their defaults.
pub fn load_catalog_settings<P: AsRef<Path>>(path: P) -> Result<CatalogSettings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn validate_scenario(scenario: &ScenarioConfig) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        name: scenario.name.clone(),
        reason: reason.to_string(),
    };

    if scenario.diameter_m.is_nan() || scenario.diameter_m <= 0.0 {
        return Err(invalid("diameter_m must be positive"));
    }
    if scenario.velocity_km_s.is_nan() || scenario.velocity_km_s <= 0.0 {
        return Err(invalid("velocity_km_s must be positive"));
    }
    if let Some(population) = scenario.population {
        if population.is_nan() || population < 0.0 {
            return Err(invalid("population must be non-negative"));
        }
    }
    if let Some(mitigation) = &scenario.mitigation {
        if mitigation.warning_days.is_nan() || mitigation.warning_days <= 0.0 {
            return Err(invalid("mitigation.warning_days must be positive"));
        }
        if let Err(reason) = mitigation.strategy.parse::<Strategy>() {
            return Err(invalid(&reason));
        }
    }
    Ok(())
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
