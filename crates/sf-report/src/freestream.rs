//! Upstream conditions used to dimensionalize a flow field.

use crate::report::AirfoilReport;
use crate::{ReportError, ReportResult};
use sf_airfoil::AirfoilFlowFieldSolver;
use sf_core::units::{Pressure, Temperature, constants, to_atm, to_kelvin};

/// Freestream Mach number, static pressure and static temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Freestream {
    mach: f64,
    pressure: Pressure,
    temperature: Temperature,
}

impl Freestream {
    /// Fails with `InvalidInput` unless the Mach number is supersonic and the
    /// pressure and temperature are positive.
    pub fn new(mach: f64, pressure: Pressure, temperature: Temperature) -> ReportResult<Self> {
        if !mach.is_finite() || mach <= 1.0 {
            return Err(ReportError::InvalidInput {
                what: "freestream mach must be supersonic",
            });
        }
        let p = to_atm(pressure);
        if !p.is_finite() || p <= 0.0 {
            return Err(ReportError::InvalidInput {
                what: "freestream pressure must be positive",
            });
        }
        let t = to_kelvin(temperature);
        if !t.is_finite() || t <= 0.0 {
            return Err(ReportError::InvalidInput {
                what: "freestream temperature must be positive",
            });
        }
        Ok(Self {
            mach,
            pressure,
            temperature,
        })
    }

    /// 1 atm and sea-level temperature.
    pub fn sea_level(mach: f64) -> ReportResult<Self> {
        Self::new(
            mach,
            constants::sea_level_pressure(),
            constants::sea_level_temperature(),
        )
    }

    pub fn mach(&self) -> f64 {
        self.mach
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Run the airfoil analysis in this stream and dimensionalize the result.
    pub fn analyze(
        &self,
        solver: &AirfoilFlowFieldSolver,
        wedge_angle_deg: f64,
        angle_of_attack_deg: f64,
    ) -> ReportResult<AirfoilReport> {
        let field = solver.analyze(self.mach, wedge_angle_deg, angle_of_attack_deg)?;
        AirfoilReport::build(&field, self)
    }
}
