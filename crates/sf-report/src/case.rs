//! Analysis case files (YAML).

use crate::freestream::Freestream;
use crate::report::AirfoilReport;
use crate::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use sf_airfoil::{AirfoilFlowFieldSolver, TrailingEdgeRule};
use sf_core::units::{atm, constants, k};
use sf_gasdyn::GasModel;
use std::path::Path;
use tracing::info;

/// One diamond-airfoil analysis with its freestream and gas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisCase {
    pub mach: f64,
    pub wedge_angle_deg: f64,
    #[serde(default)]
    pub angle_of_attack_deg: f64,
    #[serde(default = "default_pressure_atm")]
    pub pressure_atm: f64,
    #[serde(default = "default_temperature_k")]
    pub temperature_k: f64,
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    #[serde(default)]
    pub trailing_edge_rule: TrailingEdgeRule,
}

fn default_pressure_atm() -> f64 {
    constants::P_SEA_LEVEL_ATM
}

fn default_temperature_k() -> f64 {
    constants::T_SEA_LEVEL_K
}

fn default_gamma() -> f64 {
    constants::GAMMA_AIR
}

impl AnalysisCase {
    /// Case at 1 atm, sea-level temperature, air, geometric trailing edge.
    pub fn new(mach: f64, wedge_angle_deg: f64, angle_of_attack_deg: f64) -> Self {
        Self {
            mach,
            wedge_angle_deg,
            angle_of_attack_deg,
            pressure_atm: default_pressure_atm(),
            temperature_k: default_temperature_k(),
            gamma: default_gamma(),
            trailing_edge_rule: TrailingEdgeRule::default(),
        }
    }

    /// Check field ranges without solving anything.
    pub fn validate(&self) -> ReportResult<()> {
        let checks = [
            (self.mach.is_finite() && self.mach > 1.0, "mach must be supersonic"),
            (
                self.wedge_angle_deg > 0.0 && self.wedge_angle_deg < 90.0,
                "wedge_angle_deg must be between 0 and 90",
            ),
            (
                self.angle_of_attack_deg.is_finite(),
                "angle_of_attack_deg must be finite",
            ),
            (
                self.pressure_atm.is_finite() && self.pressure_atm > 0.0,
                "pressure_atm must be positive",
            ),
            (
                self.temperature_k.is_finite() && self.temperature_k > 0.0,
                "temperature_k must be positive",
            ),
            (self.gamma.is_finite() && self.gamma > 1.0, "gamma must exceed 1"),
        ];
        match checks.into_iter().find(|(ok, _)| !ok) {
            Some((_, what)) => Err(ReportError::InvalidCase {
                what: what.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn freestream(&self) -> ReportResult<Freestream> {
        Freestream::new(self.mach, atm(self.pressure_atm), k(self.temperature_k))
    }

    pub fn solver(&self) -> ReportResult<AirfoilFlowFieldSolver> {
        let gas = GasModel::new(self.gamma)?;
        Ok(AirfoilFlowFieldSolver::new(gas).with_trailing_edge_rule(self.trailing_edge_rule))
    }

    pub fn run(&self) -> ReportResult<AirfoilReport> {
        self.validate()?;
        let report = self
            .freestream()?
            .analyze(&self.solver()?, self.wedge_angle_deg, self.angle_of_attack_deg)?;
        info!(
            mach = self.mach,
            wedge_angle_deg = self.wedge_angle_deg,
            angle_of_attack_deg = self.angle_of_attack_deg,
            "case complete"
        );
        Ok(report)
    }
}

pub fn load_case(path: &Path) -> ReportResult<AnalysisCase> {
    let content = std::fs::read_to_string(path)?;
    let case: AnalysisCase = serde_yaml::from_str(&content)?;
    case.validate()?;
    Ok(case)
}

pub fn save_case(path: &Path, case: &AnalysisCase) -> ReportResult<()> {
    case.validate()?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}
