//! Dimensional view of a single shock or expansion stage.

use crate::freestream::Freestream;
use crate::{ReportError, ReportResult};
use serde::Serialize;
use sf_core::units::{Pressure, Temperature, to_atm, to_kelvin};
use sf_gasdyn::GasState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageReport {
    pub upstream_mach: f64,
    pub turning_angle_deg: f64,
    pub mach: f64,
    pub density_ratio: f64,
    pub pressure_ratio: f64,
    pub temperature_ratio: f64,
    pub pressure_atm: f64,
    pub temperature_k: f64,
}

impl StageReport {
    /// Scale a stage result by the upstream static state.
    pub fn new(upstream: &Freestream, turning_angle_deg: f64, state: &GasState) -> Self {
        Self::scaled(
            upstream.mach(),
            to_atm(upstream.pressure()),
            to_kelvin(upstream.temperature()),
            turning_angle_deg,
            state,
        )
    }

    /// Scale a stage result by an upstream state that may be sonic.
    ///
    /// A Prandtl-Meyer fan accepts `M1 = 1`, which [`Freestream`] rejects.
    /// Fails with `InvalidInput` for `M1 < 1` or a non-positive pressure or
    /// temperature.
    pub fn from_upstream(
        upstream_mach: f64,
        pressure: Pressure,
        temperature: Temperature,
        turning_angle_deg: f64,
        state: &GasState,
    ) -> ReportResult<Self> {
        if !upstream_mach.is_finite() || upstream_mach < 1.0 {
            return Err(ReportError::InvalidInput {
                what: "upstream mach must be at least 1",
            });
        }
        let p = to_atm(pressure);
        if !p.is_finite() || p <= 0.0 {
            return Err(ReportError::InvalidInput {
                what: "upstream pressure must be positive",
            });
        }
        let t = to_kelvin(temperature);
        if !t.is_finite() || t <= 0.0 {
            return Err(ReportError::InvalidInput {
                what: "upstream temperature must be positive",
            });
        }
        Ok(Self::scaled(upstream_mach, p, t, turning_angle_deg, state))
    }

    fn scaled(
        upstream_mach: f64,
        pressure_atm: f64,
        temperature_k: f64,
        turning_angle_deg: f64,
        state: &GasState,
    ) -> Self {
        Self {
            upstream_mach,
            turning_angle_deg,
            mach: state.mach(),
            density_ratio: state.density_ratio(),
            pressure_ratio: state.pressure_ratio(),
            temperature_ratio: state.temperature_ratio(),
            pressure_atm: pressure_atm * state.pressure_ratio(),
            temperature_k: temperature_k * state.temperature_ratio(),
        }
    }
}
