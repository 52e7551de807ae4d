//! sf-report: dimensional results, force coefficients and file output.
//!
//! Turns a nondimensional [`sf_airfoil::FlowField`] into absolute pressures
//! and temperatures for a given freestream, and writes the region table,
//! pressure distribution and JSON summary.

pub mod case;
pub mod distribution;
pub mod export;
pub mod freestream;
pub mod report;
pub mod stage;

pub use case::{AnalysisCase, load_case, save_case};
pub use distribution::{DistributionPoint, pressure_distribution};
pub use export::{
    default_regions_file_name, distribution_csv, regions_csv, summary_json,
    write_distribution_csv, write_json, write_regions_csv,
};
pub use freestream::Freestream;
pub use report::{AirfoilReport, RegionKind, RegionReport};
pub use stage::StageReport;

use sf_gasdyn::FlowError;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Invalid case: {what}")]
    InvalidCase { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
