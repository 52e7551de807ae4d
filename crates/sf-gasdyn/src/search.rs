//! Bounded scalar searches: bisection on a sign-change bracket and
//! golden-section maximization.
//!
//! Both run for at most `max_iters` iterations, so every search terminates
//! whether or not the tolerances are met.

use crate::error::{FlowError, FlowResult};

/// Configuration shared by the bisection and golden-section searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSearchConfig {
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
}

impl Default for RootSearchConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 1e-13,
            x_rel_tol: 1e-13,
        }
    }
}

impl RootSearchConfig {
    /// Validates that the iteration limit is positive and the tolerances are
    /// finite and non-negative.
    pub fn validate(&self) -> FlowResult<()> {
        if self.max_iters == 0 {
            return Err(FlowError::InvalidInput {
                what: "max_iters must be positive",
            });
        }
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err(FlowError::InvalidInput {
                what: "x_abs_tol must be finite and non-negative",
            });
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err(FlowError::InvalidInput {
                what: "x_rel_tol must be finite and non-negative",
            });
        }
        Ok(())
    }

    fn is_converged(&self, left: f64, right: f64) -> bool {
        let mid = 0.5 * (left + right);
        (right - left).abs() <= self.x_abs_tol + self.x_rel_tol * mid.abs()
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    pub(crate) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Interval whose endpoint residuals have opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
    right_sign: Sign,
}

impl Bracket {
    /// Evaluates `f` at both ends; `None` if the signs do not bracket a root.
    pub(crate) fn new<F: Fn(f64) -> f64>(f: &F, left: f64, right: f64) -> Option<Self> {
        let (left, right) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        let left_sign = Sign::of(f(left));
        let right_sign = Sign::of(f(right));
        if left_sign == right_sign {
            return None;
        }
        Some(Self {
            left,
            right,
            left_sign,
            right_sign,
        })
    }

    fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

/// Outcome of a bounded search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchOutcome {
    pub x: f64,
    pub iters: usize,
    pub converged: bool,
}

/// Bisection on a validated bracket.
pub(crate) fn bisect<F: Fn(f64) -> f64>(
    f: &F,
    mut bracket: Bracket,
    config: &RootSearchConfig,
) -> SearchOutcome {
    for iter in 0..config.max_iters {
        if config.is_converged(bracket.left, bracket.right) {
            return SearchOutcome {
                x: bracket.midpoint(),
                iters: iter,
                converged: true,
            };
        }
        let mid = bracket.midpoint();
        let value = f(mid);
        #[allow(clippy::float_cmp)]
        if value == 0.0 {
            return SearchOutcome {
                x: mid,
                iters: iter + 1,
                converged: true,
            };
        }
        bracket.shrink(mid, Sign::of(value));
    }

    SearchOutcome {
        x: bracket.midpoint(),
        iters: config.max_iters,
        converged: config.is_converged(bracket.left, bracket.right),
    }
}

const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Golden-section search for the maximum of a unimodal function on `[a, b]`.
pub(crate) fn golden_section_max<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    config: &RootSearchConfig,
) -> SearchOutcome {
    let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    for iter in 0..config.max_iters {
        if config.is_converged(a, b) {
            return SearchOutcome {
                x: 0.5 * (a + b),
                iters: iter,
                converged: true,
            };
        }
        if fc >= fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d);
        }
    }

    SearchOutcome {
        x: 0.5 * (a + b),
        iters: config.max_iters,
        converged: config.is_converged(a, b),
    }
}
