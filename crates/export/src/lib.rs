//! Export helpers for CSV and JSON artifacts.

use impact_effects::assessment::{DamageZone, ReferenceEvent};
use impact_effects::{AsteroidParams, ImpactResults};
use impact_mitigation::{MitigationResult, Strategy};
use serde::Serialize;

/// Everything known about one evaluated scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    pub scenario: String,
    pub site: String,
    pub population: f64,
    pub params: AsteroidParams,
    pub results: ImpactResults,
    pub closest_event: ReferenceEvent,
    pub damage_zones: Vec<DamageZone>,
    pub environmental_effects: Vec<String>,
    pub mitigation: Option<MitigationSummary>,
}

/// Mitigation attempt attached to a report.
#[derive(Debug, Clone, Serialize)]
pub struct MitigationSummary {
    pub strategy: Strategy,
    pub warning_days: f64,
    #[serde(flatten)]
    pub result: MitigationResult,
}

pub mod csv_report {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use super::ImpactReport;

    const HEADER: &str = "scenario,site,population,diameter_m,velocity_km_s,angle_deg,density,mass_kg,impact_energy_j,tnt_equivalent_mt,crater_diameter_m,crater_depth_m,affected_area_radius_m,fireball_m,thermal_radiation_m,air_blast_m,seismic_magnitude,casualty_estimate,strategy,warning_days,deflection_needed_deg,success_probability_pct";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard report CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Flat CSV row for one report; mitigation columns are empty when absent.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub report: &'a ImpactReport,
    }

    impl<'a> Record<'a> {
        pub fn new(report: &'a ImpactReport) -> Self {
            Self { report }
        }

        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let r = self.report;
            let (strategy, warning_days, deflection, success) = match &r.mitigation {
                Some(m) => (
                    m.strategy.label().to_string(),
                    format!("{:.1}", m.warning_days),
                    format!("{:.6}", m.result.deflection_needed),
                    format!("{:.1}", m.result.success_probability),
                ),
                None => Default::default(),
            };
            writeln!(
                writer,
                "{},{},{:.0},{:.3},{:.3},{:.3},{},{:.6e},{:.6e},{:.6e},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{},{},{},{},{}",
                escape(&r.scenario),
                escape(&r.site),
                r.population,
                r.params.diameter,
                r.params.velocity,
                r.params.angle,
                r.params.density.label(),
                r.results.mass,
                r.results.impact_energy,
                r.results.tnt_equivalent,
                r.results.crater_diameter,
                r.results.crater_depth,
                r.results.affected_area_radius,
                r.results.fireball,
                r.results.thermal_radiation,
                r.results.air_blast,
                r.results.seismic_magnitude,
                r.results.casualty_estimate,
                strategy,
                warning_days,
                deflection,
                success,
            )
        }
    }

    fn escape(field: &str) -> String {
        if field.contains([',', '"', '\n']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

pub mod json {
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use super::ImpactReport;

    /// Write a pretty-printed JSON report, creating parent directories as needed.
    pub fn write_report(path: &Path, report: &ImpactReport) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, report)?;
        Ok(())
    }

    /// Render a report as a pretty JSON string.
    pub fn to_string(report: &ImpactReport) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }
}
