//! Prandtl-Meyer expansion fans.
//!
//! The forward function `nu(M)` holds for any calorically-perfect gas. The
//! inverse used by [`PrandtlMeyerExpansion::solve`] is Hall's rational
//! approximation, which is fitted for gamma = 1.4 only (max error < 1%):
//! I. M. Hall, "Inversion of the Prandtl-Meyer relation", Aeronautical
//! Journal 79, 1975.

use std::f64::consts::FRAC_PI_2;

use crate::error::{FlowError, FlowResult};
use crate::gas::GasModel;
use crate::search::{Bracket, RootSearchConfig, bisect};
use crate::state::GasState;
use sf_core::ensure_finite;
use tracing::debug;

// Hall approximation coefficients for gamma = 1.4
const HALL_A: f64 = 1.3604;
const HALL_B: f64 = 0.0962;
const HALL_C: f64 = -0.5127;
const HALL_D: f64 = -0.6722;
const HALL_E: f64 = -0.3278;

/// Upper bracket bound doublings for the exact inverse.
const MAX_BRACKET_DOUBLINGS: usize = 64;

/// Isentropic expansion (or compression) through a Prandtl-Meyer fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrandtlMeyerExpansion {
    gas: GasModel,
    config: RootSearchConfig,
}

impl PrandtlMeyerExpansion {
    pub fn new(gas: GasModel) -> Self {
        Self {
            gas,
            config: RootSearchConfig::default(),
        }
    }

    /// Replace the search limits used by [`Self::inverse_exact`].
    pub fn with_config(mut self, config: RootSearchConfig) -> FlowResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn gas(&self) -> GasModel {
        self.gas
    }

    /// Downstream state after turning the flow by `theta_deg` degrees.
    ///
    /// Positive `theta_deg` expands the flow. Fails with `InvalidInput` for
    /// `m1 < 1` and with `UnsupportedGamma` unless the gas is gamma = 1.4.
    pub fn solve(&self, m1: f64, theta_deg: f64) -> FlowResult<GasState> {
        let nu1 = self.prandtl_meyer_angle(m1)?;
        let theta_deg = ensure_finite(theta_deg, "turning angle must be finite")?;
        let nu2 = nu1 + theta_deg.to_radians();
        let m2 = self.inverse_hall(nu2)?;

        let exponent = self.gas.gamma() / (self.gas.gamma() - 1.0);
        let temperature_ratio =
            self.gas.total_temperature_factor(m1) / self.gas.total_temperature_factor(m2);
        let pressure_ratio = temperature_ratio.powf(exponent);
        let density_ratio = pressure_ratio / temperature_ratio;

        debug!(
            m1,
            theta_deg,
            nu1_deg = nu1.to_degrees(),
            nu2_deg = nu2.to_degrees(),
            m2,
            pressure_ratio,
            "prandtl-meyer expansion"
        );

        GasState::new(m2, density_ratio, pressure_ratio, temperature_ratio)
    }

    /// Prandtl-Meyer angle `nu(M)` in radians; zero at `M = 1`.
    pub fn prandtl_meyer_angle(&self, mach: f64) -> FlowResult<f64> {
        let mach = ensure_finite(mach, "mach must be finite")?;
        if mach < 1.0 {
            return Err(FlowError::InvalidInput {
                what: "mach must be at least 1 for a Prandtl-Meyer fan",
            });
        }
        Ok(self.nu(mach))
    }

    /// Largest possible turning angle (expansion to infinite Mach), radians.
    pub fn max_turning_angle(&self) -> f64 {
        let gamma = self.gas.gamma();
        FRAC_PI_2 * (((gamma + 1.0) / (gamma - 1.0)).sqrt() - 1.0)
    }

    /// Mach number for a Prandtl-Meyer angle via Hall's approximation.
    pub fn inverse_hall(&self, nu: f64) -> FlowResult<f64> {
        if !self.gas.is_air() {
            return Err(FlowError::UnsupportedGamma {
                gamma: self.gas.gamma(),
            });
        }
        let nu = self.check_angle(nu)?;

        let x = (nu / self.max_turning_angle()).powf(2.0 / 3.0);
        let numerator = 1.0 + HALL_A * x + HALL_B * x * x + HALL_C * x * x * x;
        let denominator = 1.0 + HALL_D * x + HALL_E * x * x;
        Ok(numerator / denominator)
    }

    /// Mach number for a Prandtl-Meyer angle by bisection on `nu(M)`.
    ///
    /// Valid for any gamma; slower than [`Self::inverse_hall`]. Fails with
    /// `InvalidInput` if the search does not converge within the configured
    /// iterations.
    pub fn inverse_exact(&self, nu: f64) -> FlowResult<f64> {
        let nu = self.check_angle(nu)?;
        #[allow(clippy::float_cmp)]
        if nu == 0.0 {
            return Ok(1.0);
        }

        let residual = |mach: f64| self.nu(mach) - nu;
        let mut upper = 2.0;
        let mut bracket = Bracket::new(&residual, 1.0, upper);
        for _ in 0..MAX_BRACKET_DOUBLINGS {
            if bracket.is_some() {
                break;
            }
            upper *= 2.0;
            bracket = Bracket::new(&residual, 1.0, upper);
        }
        let bracket = bracket.ok_or(FlowError::InvalidInput {
            what: "Prandtl-Meyer angle too close to the maximum turning angle",
        })?;

        let outcome = bisect(&residual, bracket, &self.config);
        if !outcome.converged {
            return Err(FlowError::InvalidInput {
                what: "inverse Prandtl-Meyer search did not converge",
            });
        }
        Ok(outcome.x)
    }

    fn check_angle(&self, nu: f64) -> FlowResult<f64> {
        let nu = ensure_finite(nu, "Prandtl-Meyer angle must be finite")?;
        if nu < 0.0 {
            return Err(FlowError::InvalidInput {
                what: "Prandtl-Meyer angle must be non-negative (flow would be subsonic)",
            });
        }
        if nu >= self.max_turning_angle() {
            return Err(FlowError::InvalidInput {
                what: "turning angle exceeds the maximum Prandtl-Meyer angle",
            });
        }
        Ok(nu)
    }

    fn nu(&self, mach: f64) -> f64 {
        let gamma = self.gas.gamma();
        let ratio = (gamma + 1.0) / (gamma - 1.0);
        let m_sq_minus_one = mach * mach - 1.0;
        ratio.sqrt() * (m_sq_minus_one / ratio).sqrt().atan() - m_sq_minus_one.sqrt().atan()
    }
}
