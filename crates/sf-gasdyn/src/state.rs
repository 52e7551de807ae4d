//! Flow state produced by one stage.

use crate::error::FlowResult;
use sf_core::ensure_positive;

/// Mach number and property ratios behind a shock or expansion fan.
///
/// Ratios are downstream/upstream for the transition that produced this
/// state. Values are validated once at construction and never change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasState {
    mach: f64,
    density_ratio: f64,
    pressure_ratio: f64,
    temperature_ratio: f64,
}

impl GasState {
    /// Create a state, rejecting non-finite or non-positive values.
    pub fn new(
        mach: f64,
        density_ratio: f64,
        pressure_ratio: f64,
        temperature_ratio: f64,
    ) -> FlowResult<Self> {
        ensure_positive(mach, "downstream mach must be positive and finite")?;
        ensure_positive(density_ratio, "density ratio must be positive and finite")?;
        ensure_positive(pressure_ratio, "pressure ratio must be positive and finite")?;
        ensure_positive(
            temperature_ratio,
            "temperature ratio must be positive and finite",
        )?;

        Ok(Self {
            mach,
            density_ratio,
            pressure_ratio,
            temperature_ratio,
        })
    }

    pub fn mach(&self) -> f64 {
        self.mach
    }

    pub fn density_ratio(&self) -> f64 {
        self.density_ratio
    }

    pub fn pressure_ratio(&self) -> f64 {
        self.pressure_ratio
    }

    pub fn temperature_ratio(&self) -> f64 {
        self.temperature_ratio
    }

    /// `|p - rho * T|`, zero for a state that satisfies the ideal-gas law.
    pub fn identity_residual(&self) -> f64 {
        (self.pressure_ratio - self.density_ratio * self.temperature_ratio).abs()
    }

    pub fn is_supersonic(&self) -> bool {
        self.mach > 1.0
    }
}
