//! Fetch hazardous near-earth objects (or the offline list) and print impact estimates.

use std::path::PathBuf;

use clap::Parser;
use impact_lab::catalog::{CatalogCache, NeoFeedClient, SnapshotOrigin};
use impact_lab::compute_impact;
use impact_lab::config::{CatalogSettings, load_catalog_settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "List hazardous near-earth objects with impact estimates")]
struct Cli {
    /// Catalog settings (TOML); defaults are used when the file is absent
    #[arg(long, default_value = "configs/catalog.toml")]
    settings: PathBuf,

    /// Override the feed API key
    #[arg(long)]
    api_key: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = if cli.settings.exists() {
        load_catalog_settings(&cli.settings)?
    } else {
        CatalogSettings::default()
    };
    if let Some(key) = cli.api_key {
        settings.api_key = key;
    }

    let client = NeoFeedClient::new(&settings)?;
    let mut cache = CatalogCache::from_settings(client, &settings);
    let records = cache.get().to_vec();

    let source = match cache.origin() {
        Some(SnapshotOrigin::Feed) => "live feed",
        _ => "offline list",
    };
    println!("=== Hazardous near-earth objects ({source}) ===");
    for record in &records {
        let results = compute_impact(&record.to_params(), 0.0);
        println!(
            "{:<24} {:>6.0} m  {:>5.1} km/s  {}  miss {:>12.0} km  ~{:.3e} MT",
            record.name,
            record.diameter_m,
            record.velocity_km_s,
            record.close_approach_date,
            record.miss_distance_km,
            results.tnt_equivalent
        );
    }

    Ok(())
}
