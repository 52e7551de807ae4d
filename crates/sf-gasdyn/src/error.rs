//! Stage solver errors.

use sf_core::CoreError;
use thiserror::Error;

/// Result type for gas-dynamics operations.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors raised by the shock and expansion stages.
///
/// Every error is raised at the stage that detects it and is never
/// recovered internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// Out-of-domain scalar (subsonic Mach, non-positive angle, bad gamma).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// No attached weak-shock solution exists for this Mach and deflection.
    #[error(
        "No attached shock solution for M = {mach:.4} at {deflection_deg:.3} deg \
         (detachment limit {max_deflection_deg:.3} deg)"
    )]
    NoShockSolution {
        mach: f64,
        deflection_deg: f64,
        max_deflection_deg: f64,
    },

    /// Hall's inverse Prandtl-Meyer approximation only holds for gamma = 1.4.
    #[error("Unsupported gamma {gamma}: Hall approximation requires gamma = 1.4")]
    UnsupportedGamma { gamma: f64 },
}

impl From<CoreError> for FlowError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => FlowError::InvalidInput { what },
            CoreError::InvalidArg { what } => FlowError::InvalidInput { what },
            CoreError::OutOfRange { what, .. } => FlowError::InvalidInput { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FlowError::InvalidInput {
            what: "mach must be supersonic",
        };
        assert!(err.to_string().contains("supersonic"));

        let err = FlowError::NoShockSolution {
            mach: 1.5,
            deflection_deg: 60.0,
            max_deflection_deg: 12.11,
        };
        let msg = err.to_string();
        assert!(msg.contains("60.000"));
        assert!(msg.contains("12.110"));

        let err = FlowError::UnsupportedGamma { gamma: 1.3 };
        assert!(err.to_string().contains("1.3"));
    }

    #[test]
    fn core_error_maps_to_invalid_input() {
        let err: FlowError = CoreError::NonFinite {
            what: "mach",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, FlowError::InvalidInput { what: "mach" });
    }
}
