use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative tolerance pair for comparing solver output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    /// Passes when either the absolute or the scaled relative bound holds.
    pub fn accepts(&self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::new(1e-12, 1e-9)
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    tol.accepts(a, b)
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than `bound`.
pub fn ensure_above(v: Real, bound: Real, what: &'static str) -> CoreResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > bound {
        Ok(v)
    } else {
        Err(CoreError::InvalidArg { what })
    }
}

pub fn ensure_positive(v: Real, what: &'static str) -> CoreResult<Real> {
    ensure_above(v, 0.0, what)
}

/// Finite and inside the open interval `(min, max)`.
pub fn ensure_between(v: Real, min: Real, max: Real, what: &'static str) -> CoreResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > min && v < max {
        Ok(v)
    } else {
        Err(CoreError::OutOfRange {
            what,
            value: v,
            min,
            max,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn between_accepts_interior(min in -10.0..0.0f64, width in 0.1..10.0f64, t in 0.01..0.99f64) {
            let v = min + t * width;
            prop_assert_eq!(ensure_between(v, min, min + width, "x").unwrap(), v);
        }
    }
}
