use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use impact_lab::common::ranges;
use impact_lab::config::{find_scenario, load_scenarios};
use impact_lab::effects::assessment::crater_in_football_fields;
use impact_lab::export::{ImpactReport, csv_report, json};
use impact_lab::history::list_historical_impacts;
use impact_lab::scenario::{self, MitigationRequest, Site};
use impact_lab::{AsteroidParams, Density, Strategy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Asteroid impact effects and mitigation calculator")]
struct Cli {
    /// Asteroid diameter in metres
    #[arg(long, default_value_t = 100.0)]
    diameter: f64,

    /// Entry velocity in km/s
    #[arg(long, default_value_t = 30.0)]
    velocity: f64,

    /// Entry angle in degrees from horizontal
    #[arg(long, default_value_t = 45.0)]
    angle: f64,

    /// Bulk composition
    #[arg(long, value_enum, default_value_t = DensityArg::Rocky)]
    density: DensityArg,

    /// Population of the target area (overrides --lat/--lng lookup)
    #[arg(long)]
    population: Option<f64>,

    /// Impact latitude, used to look up a nearby city
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Impact longitude, used to look up a nearby city
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Clamp parameters into the slider ranges before evaluating
    #[arg(long, default_value_t = false)]
    clamp: bool,

    /// Named scenario to evaluate instead of the parameter flags
    #[arg(long)]
    scenario: Option<String>,

    /// Scenario catalog (YAML list, TOML file, or directory of TOML files)
    #[arg(long, default_value = "configs/scenarios.yaml")]
    scenarios: PathBuf,

    /// Mitigation strategy to evaluate against the impact energy
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Warning time before impact, in days
    #[arg(long, default_value_t = 1825.0)]
    warning_days: f64,

    /// Write a CSV report (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON report
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the historical impact reference list
    #[arg(long, default_value_t = false)]
    history: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum DensityArg {
    Rocky,
    Metallic,
    Icy,
}

impl From<DensityArg> for Density {
    fn from(value: DensityArg) -> Self {
        match value {
            DensityArg::Rocky => Density::Rocky,
            DensityArg::Metallic => Density::Metallic,
            DensityArg::Icy => Density::Icy,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum StrategyArg {
    Kinetic,
    Nuclear,
    Gravity,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Kinetic => Strategy::Kinetic,
            StrategyArg::Nuclear => Strategy::Nuclear,
            StrategyArg::Gravity => Strategy::Gravity,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report = match &cli.scenario {
        Some(name) => {
            let scenarios = load_scenarios(&cli.scenarios).with_context(|| {
                format!("loading scenarios from {}", cli.scenarios.display())
            })?;
            let config = find_scenario(&scenarios, name)
                .ok_or_else(|| anyhow::anyhow!("Scenario '{}' not found in catalog", name))?;
            info!(scenario = %config.name, "evaluating configured scenario");
            scenario::run_scenario(config)?
        }
        None => {
            let mut params = AsteroidParams {
                diameter: cli.diameter,
                velocity: cli.velocity,
                angle: cli.angle,
                density: cli.density.into(),
            };
            let mut warning_days = cli.warning_days;
            if cli.clamp {
                params = params.clamped();
                warning_days = ranges::clamp(warning_days, &ranges::WARNING_DAYS);
            }
            let site = Site::resolve(cli.population, cli.lat.zip(cli.lng));
            let mitigation = cli.strategy.map(|strategy| MitigationRequest {
                strategy: strategy.into(),
                warning_days,
            });
            scenario::evaluate("cli", params, site, mitigation)?
        }
    };

    print_report(&report);

    if let Some(path) = &cli.csv {
        let mut writer = csv_report::writer_for_path(path)?;
        csv_report::write_header(writer.as_mut())?;
        csv_report::Record::new(&report).write_to(writer.as_mut())?;
        writer.flush()?;
    }

    if let Some(path) = &cli.json {
        json::write_report(path, &report)
            .with_context(|| format!("writing JSON report to {}", path.display()))?;
    }

    if cli.history {
        print_history();
    }

    Ok(())
}

fn print_report(report: &ImpactReport) {
    let p = &report.params;
    let r = &report.results;

    println!("=== Impact Report: {} ===", report.scenario);
    println!(
        "Asteroid       : {:.0} m, {:.1} km/s, {:.0}°, {}",
        p.diameter, p.velocity, p.angle, p.density
    );
    println!("Mass           : {:.3e} kg", r.mass);
    println!(
        "Energy         : {:.3e} J ({} MT, closest to {})",
        r.impact_energy,
        format_number(r.tnt_equivalent),
        report.closest_event.name
    );
    println!(
        "Crater         : {:.0} m wide, {:.0} m deep ({:.1} football fields)",
        r.crater_diameter,
        r.crater_depth,
        crater_in_football_fields(r)
    );
    println!(
        "Radii          : affected {:.1} km, fireball {:.2} km, thermal {:.2} km, air blast {:.2} km",
        r.affected_area_radius / 1_000.0,
        r.fireball / 1_000.0,
        r.thermal_radiation / 1_000.0,
        r.air_blast / 1_000.0
    );
    if r.seismic_magnitude > 0.0 {
        println!("Seismic        : magnitude {:.1}", r.seismic_magnitude);
    } else {
        println!("Seismic        : N/A");
    }
    println!(
        "Casualties     : {} ({}, population {})",
        format_number(r.casualty_estimate as f64),
        report.site,
        format_number(report.population)
    );
    for zone in &report.damage_zones {
        println!("  zone {:<18}: {:.2} km", zone.name, zone.width_km);
    }
    for effect in &report.environmental_effects {
        println!("  - {effect}");
    }

    if let Some(m) = &report.mitigation {
        let profile = m.strategy.profile();
        println!(
            "Mitigation     : {} with {:.0} days ({:.1} years) warning",
            profile.name,
            m.warning_days,
            m.warning_days / 365.0
        );
        println!("  {}", m.result.description);
        println!(
            "  deflection needed = {:.4}°, success = {:.1}% ({})",
            m.result.deflection_needed,
            m.result.success_probability,
            m.result.tier().label()
        );
    }
}

fn print_history() {
    println!("\n=== Historical Impacts ===");
    for impact in list_historical_impacts() {
        println!(
            "{:<20} {:>16}  {:>8.0} m  {:>12} MT  {}: {}",
            impact.name,
            impact.year_label(),
            impact.diameter_m,
            format_number(impact.energy_mt),
            impact.location,
            impact.effect
        );
    }
}

fn format_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2} billion", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2} million", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2} thousand", value / 1e3)
    } else if value >= 1.0 || value == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}
