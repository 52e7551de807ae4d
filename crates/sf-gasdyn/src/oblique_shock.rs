//! Oblique shock relations with weak-solution wave angle selection.
//!
//! The theta-beta-M relation
//!
//! ```text
//! tan(theta) = 2 cot(beta) (M1^2 sin^2(beta) - 1) / (M1^2 (gamma + cos 2 beta) + 2)
//! ```
//!
//! is zero at the Mach angle `mu = asin(1/M1)`, rises to the detachment
//! limit and falls back to zero at `pi/2`. The weak root therefore lies in
//! `[mu, beta_peak]` and the strong root in `[beta_peak, pi/2]`; each side is
//! monotonic, so a single sign change brackets exactly one root.

use std::f64::consts::FRAC_PI_2;

use crate::error::{FlowError, FlowResult};
use crate::gas::GasModel;
use crate::search::{Bracket, RootSearchConfig, bisect, golden_section_max};
use crate::state::GasState;
use sf_core::{ensure_above, ensure_finite};
use tracing::{debug, warn};

/// Deflections below this (degrees) are treated as a Mach wave.
const MACH_WAVE_DEFLECTION_DEG: f64 = 1e-10;

/// Solves attached oblique shocks for a fixed gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueShockSolver {
    gas: GasModel,
    config: RootSearchConfig,
}

/// Peak of the theta-beta curve at one upstream Mach number.
#[derive(Debug, Clone, Copy)]
struct DeflectionPeak {
    mach_angle: f64,
    beta: f64,
    max_deflection_deg: f64,
}

impl ObliqueShockSolver {
    pub fn new(gas: GasModel) -> Self {
        Self {
            gas,
            config: RootSearchConfig::default(),
        }
    }

    /// Replace the search limits used for the wave angle.
    pub fn with_config(mut self, config: RootSearchConfig) -> FlowResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn gas(&self) -> GasModel {
        self.gas
    }

    /// Downstream state behind the weak oblique shock.
    ///
    /// `theta_deg` is the flow deflection in degrees. Fails with
    /// `InvalidInput` for `m1 <= 1` and with `NoShockSolution` when the
    /// deflection is negative, beyond the detachment limit, or the wave angle
    /// search does not converge within the configured iterations.
    pub fn solve(&self, m1: f64, theta_deg: f64) -> FlowResult<GasState> {
        let m1 = check_mach(m1)?;
        let theta_deg = ensure_finite(theta_deg, "deflection angle must be finite")?;
        let beta = self.weak_angle(m1, theta_deg)?;

        let gamma = self.gas.gamma();
        let theta = theta_deg.to_radians();
        let mn1 = m1 * beta.sin();
        let mn1_sq = mn1 * mn1;

        let mn2 = ((1.0 + 0.5 * (gamma - 1.0) * mn1_sq) / (gamma * mn1_sq - 0.5 * (gamma - 1.0)))
            .sqrt();
        let m2 = mn2 / (beta - theta).sin();

        let density_ratio = (gamma + 1.0) * mn1_sq / (2.0 + (gamma - 1.0) * mn1_sq);
        let pressure_ratio = 1.0 + 2.0 * gamma * (mn1_sq - 1.0) / (gamma + 1.0);
        let temperature_ratio = pressure_ratio / density_ratio;

        if m2 < 1.0 {
            warn!(m1, theta_deg, m2, "weak shock leaves subsonic flow");
        }
        debug!(
            m1,
            theta_deg,
            beta_deg = beta.to_degrees(),
            m2,
            pressure_ratio,
            "oblique shock"
        );

        GasState::new(m2, density_ratio, pressure_ratio, temperature_ratio)
    }

    /// Weak-solution wave angle in radians.
    pub fn wave_angle(&self, m1: f64, theta_deg: f64) -> FlowResult<f64> {
        let m1 = check_mach(m1)?;
        let theta_deg = ensure_finite(theta_deg, "deflection angle must be finite")?;
        self.weak_angle(m1, theta_deg)
    }

    /// Strong-solution wave angle in radians.
    pub fn strong_wave_angle(&self, m1: f64, theta_deg: f64) -> FlowResult<f64> {
        let m1 = check_mach(m1)?;
        let theta_deg = ensure_finite(theta_deg, "deflection angle must be finite")?;

        if is_mach_wave(theta_deg) {
            return Ok(FRAC_PI_2);
        }
        let peak = self.attached_peak(m1, theta_deg)?;
        self.root_between(m1, theta_deg, peak.beta, FRAC_PI_2, &peak)
    }

    /// Maximum deflection in degrees for which an attached shock exists.
    pub fn detachment_angle_deg(&self, m1: f64) -> FlowResult<f64> {
        let m1 = check_mach(m1)?;
        let (peak, converged) = self.peak(m1);
        if !converged {
            return Err(no_solution(m1, peak.max_deflection_deg, &peak));
        }
        Ok(peak.max_deflection_deg)
    }

    fn weak_angle(&self, m1: f64, theta_deg: f64) -> FlowResult<f64> {
        if is_mach_wave(theta_deg) {
            return Ok((1.0 / m1).asin());
        }
        let peak = self.attached_peak(m1, theta_deg)?;
        self.root_between(m1, theta_deg, peak.mach_angle, peak.beta, &peak)
    }

    /// Peak of the theta-beta curve, or `NoShockSolution` if `theta_deg`
    /// cannot be reached on it or the peak search did not converge.
    fn attached_peak(&self, m1: f64, theta_deg: f64) -> FlowResult<DeflectionPeak> {
        let (peak, converged) = self.peak(m1);
        if !converged || theta_deg < 0.0 || theta_deg > peak.max_deflection_deg {
            return Err(no_solution(m1, theta_deg, &peak));
        }
        Ok(peak)
    }

    fn root_between(
        &self,
        m1: f64,
        theta_deg: f64,
        left: f64,
        right: f64,
        peak: &DeflectionPeak,
    ) -> FlowResult<f64> {
        let target = theta_deg.to_radians().tan();
        let residual = |beta: f64| self.deflection_tangent(m1, beta) - target;

        let bracket =
            Bracket::new(&residual, left, right).ok_or_else(|| no_solution(m1, theta_deg, peak))?;
        let outcome = bisect(&residual, bracket, &self.config);
        debug!(
            m1,
            theta_deg,
            iters = outcome.iters,
            converged = outcome.converged,
            "wave angle bisection"
        );
        if !outcome.converged {
            return Err(no_solution(m1, theta_deg, peak));
        }
        Ok(outcome.x)
    }

    /// Golden-section estimate of the peak and whether it converged.
    fn peak(&self, m1: f64) -> (DeflectionPeak, bool) {
        let mach_angle = (1.0 / m1).asin();
        let curve = |beta: f64| self.deflection_tangent(m1, beta);
        let outcome = golden_section_max(&curve, mach_angle, FRAC_PI_2, &self.config);
        let peak = DeflectionPeak {
            mach_angle,
            beta: outcome.x,
            max_deflection_deg: curve(outcome.x).atan().to_degrees(),
        };
        (peak, outcome.converged)
    }

    /// `tan(theta)` produced by a shock at wave angle `beta`.
    fn deflection_tangent(&self, m1: f64, beta: f64) -> f64 {
        let gamma = self.gas.gamma();
        let m1_sq = m1 * m1;
        let sin_beta = beta.sin();
        2.0 / beta.tan() * (m1_sq * sin_beta * sin_beta - 1.0)
            / (m1_sq * (gamma + (2.0 * beta).cos()) + 2.0)
    }
}

fn check_mach(m1: f64) -> FlowResult<f64> {
    Ok(ensure_above(
        m1,
        1.0,
        "upstream mach must be supersonic (M1 > 1)",
    )?)
}

fn is_mach_wave(theta_deg: f64) -> bool {
    (0.0..MACH_WAVE_DEFLECTION_DEG).contains(&theta_deg)
}

fn no_solution(m1: f64, theta_deg: f64, peak: &DeflectionPeak) -> FlowError {
    FlowError::NoShockSolution {
        mach: m1,
        deflection_deg: theta_deg,
        max_deflection_deg: peak.max_deflection_deg,
    }
}
