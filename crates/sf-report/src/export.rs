//! CSV and JSON output.

use crate::ReportResult;
use crate::distribution::DistributionPoint;
use crate::report::AirfoilReport;
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub const REGIONS_CSV_HEADER: &str =
    "Mach,density_ratio,pressure_ratio,temperature_ratio,actual pressure [atm]";
pub const DISTRIBUTION_CSV_HEADER: &str = "x_over_c,upper,lower";

/// `diamond_airfoil_at_{aoa}_AoA.csv`, with the angle printed as a float
/// (`0.0`, `2.5`).
pub fn default_regions_file_name(angle_of_attack_deg: f64) -> String {
    format!("diamond_airfoil_at_{angle_of_attack_deg:?}_AoA.csv")
}

/// One row per distinct face: stage ratios and absolute pressure, 4 decimals.
pub fn regions_csv(report: &AirfoilReport) -> String {
    let mut csv = String::from(REGIONS_CSV_HEADER);
    csv.push('\n');
    for face in report.faces() {
        csv.push_str(&format!(
            "{:.4},{:.4},{:.4},{:.4},{:.4}\n",
            face.mach,
            face.density_ratio,
            face.pressure_ratio,
            face.temperature_ratio,
            face.pressure_atm
        ));
    }
    csv
}

pub fn write_regions_csv(path: &Path, report: &AirfoilReport) -> ReportResult<()> {
    std::fs::write(path, regions_csv(report))?;
    info!(path = %path.display(), rows = report.faces().len(), "wrote region table");
    Ok(())
}

pub fn distribution_csv(points: &[DistributionPoint]) -> String {
    let mut csv = String::from(DISTRIBUTION_CSV_HEADER);
    csv.push('\n');
    for point in points {
        csv.push_str(&format!(
            "{:.2},{:.6},{:.6}\n",
            point.x_over_c, point.upper, point.lower
        ));
    }
    csv
}

pub fn write_distribution_csv(path: &Path, points: &[DistributionPoint]) -> ReportResult<()> {
    std::fs::write(path, distribution_csv(points))?;
    info!(path = %path.display(), samples = points.len(), "wrote pressure distribution");
    Ok(())
}

#[derive(Serialize)]
struct Summary<'a> {
    generated_at: String,
    generator: &'static str,
    #[serde(flatten)]
    report: &'a AirfoilReport,
}

/// Pretty JSON of the report, stamped with the current UTC time.
pub fn summary_json(report: &AirfoilReport) -> ReportResult<String> {
    let summary = Summary {
        generated_at: chrono::Utc::now().to_rfc3339(),
        generator: concat!("shockflow ", env!("CARGO_PKG_VERSION")),
        report,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

pub fn write_json(path: &Path, report: &AirfoilReport) -> ReportResult<()> {
    std::fs::write(path, summary_json(report)?)?;
    info!(path = %path.display(), "wrote json summary");
    Ok(())
}
