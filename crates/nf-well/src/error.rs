//! Error types for well model construction.

use nf_core::error::NfResult;
use thiserror::Error;

/// Errors raised while building well models.
///
/// Evaluators never return these; numerical edge cases (zero flow, table
/// extrapolation) are handled locally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WellError {
    #[error("Invalid trajectory: {what}")]
    InvalidTrajectory { what: String },

    #[error("Invalid pump curve: {what}")]
    InvalidPumpCurve { what: String },

    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: String },
}

pub type WellResult<T> = Result<T, WellError>;

impl WellError {
    pub(crate) fn trajectory(what: impl Into<String>) -> Self {
        WellError::InvalidTrajectory { what: what.into() }
    }

    pub(crate) fn pump_curve(what: impl Into<String>) -> Self {
        WellError::InvalidPumpCurve { what: what.into() }
    }

    pub(crate) fn parameter(what: impl Into<String>) -> Self {
        WellError::InvalidParameter { what: what.into() }
    }
}

/// Check a scalar parameter, mapping failures to `InvalidParameter`.
pub(crate) fn param(check: NfResult<f64>) -> WellResult<f64> {
    check.map_err(|e| WellError::parameter(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::numeric::ensure_positive;

    #[test]
    fn error_display() {
        let err = WellError::trajectory("need at least 2 waypoints, got 1");
        assert!(err.to_string().contains("Invalid trajectory"));
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn param_maps_core_error() {
        let err = param(ensure_positive(0.0, "productivity index")).unwrap_err();
        assert!(matches!(err, WellError::InvalidParameter { .. }));
        assert!(err.to_string().contains("productivity index"));
    }
}
