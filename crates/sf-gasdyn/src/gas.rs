//! Calorically-perfect gas configuration.

use crate::error::FlowResult;
use sf_core::units::constants::GAMMA_AIR;
use sf_core::{Tolerances, ensure_above, nearly_equal};

/// Ideal, calorically-perfect gas described by its heat capacity ratio.
///
/// One `GasModel` is threaded through every stage of an analysis so that the
/// shock and expansion solvers can never disagree about the gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasModel {
    gamma: f64,
}

impl GasModel {
    /// Air at standard conditions (gamma = 1.4).
    pub const fn air() -> Self {
        Self { gamma: GAMMA_AIR }
    }

    /// Gas with the given heat capacity ratio.
    ///
    /// Fails with `InvalidInput` if gamma is non-finite or not above 1.
    pub fn new(gamma: f64) -> FlowResult<Self> {
        let gamma = ensure_above(gamma, 1.0, "gamma must be finite and greater than 1")?;
        Ok(Self { gamma })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// True when this gas matches the gamma = 1.4 coefficients of Hall's fit.
    pub fn is_air(&self) -> bool {
        nearly_equal(self.gamma, GAMMA_AIR, Tolerances::new(1e-9, 1e-9))
    }

    /// Stagnation-to-static temperature ratio `1 + (gamma-1)/2 M^2`.
    pub(crate) fn total_temperature_factor(&self, mach: f64) -> f64 {
        1.0 + 0.5 * (self.gamma - 1.0) * mach * mach
    }
}

impl Default for GasModel {
    fn default() -> Self {
        Self::air()
    }
}
