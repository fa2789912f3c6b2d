//! Solver settings.

use crate::error::{SolverError, SolverResult};

/// Grid search settings.
///
/// Defaults reproduce the reference field case: 200 samples over
/// 1..400 m³/h with a 3 bar acceptance gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Lowest sampled flow (m³/h)
    pub flow_min: f64,
    /// Highest sampled flow (m³/h)
    pub flow_max: f64,
    /// Number of samples, both bounds included
    pub sample_count: usize,
    /// Largest |VLP − IPR| (bar) accepted as an intersection
    pub tolerance_bar: f64,
    /// Evaluate samples on the rayon thread pool
    pub parallel: bool,
    /// Bisect between the bracketing samples after an accepted grid point
    pub refine: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            flow_min: 1.0,
            flow_max: 400.0,
            sample_count: 200,
            tolerance_bar: 3.0,
            parallel: false,
            refine: false,
        }
    }
}

impl SolveOptions {
    /// Check the sampling range, count and tolerance.
    pub fn validate(&self) -> SolverResult<()> {
        if self.sample_count == 0 {
            return Err(invalid("sample count must be positive, got 0".to_string()));
        }
        if !self.flow_min.is_finite() || !self.flow_max.is_finite() {
            return Err(invalid("flow range must be finite".to_string()));
        }
        if self.flow_min < 0.0 {
            return Err(invalid(format!(
                "minimum flow must not be negative, got {}",
                self.flow_min
            )));
        }
        if self.flow_max <= self.flow_min {
            return Err(invalid(format!(
                "flow range is empty: [{}, {}]",
                self.flow_min, self.flow_max
            )));
        }
        // Zero is allowed: nothing passes the strict gate, so the solve reports no point.
        if !(self.tolerance_bar.is_finite() && self.tolerance_bar >= 0.0) {
            return Err(invalid(format!(
                "tolerance must not be negative, got {}",
                self.tolerance_bar
            )));
        }
        Ok(())
    }
}

fn invalid(what: String) -> SolverError {
    SolverError::InvalidParameter { what }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SolveOptions::default().validate().is_ok());
    }

    #[test]
    fn single_sample_and_zero_tolerance_are_valid() {
        let base = SolveOptions::default();
        let single = SolveOptions {
            sample_count: 1,
            ..base
        };
        let exact = SolveOptions {
            tolerance_bar: 0.0,
            ..base
        };
        assert!(single.validate().is_ok());
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn rejects_bad_sampling() {
        let base = SolveOptions::default();
        let cases = [
            SolveOptions {
                sample_count: 0,
                ..base
            },
            SolveOptions {
                flow_min: 400.0,
                flow_max: 1.0,
                ..base
            },
            SolveOptions {
                flow_min: 5.0,
                flow_max: 5.0,
                ..base
            },
            SolveOptions {
                flow_min: -1.0,
                ..base
            },
            SolveOptions {
                flow_max: f64::INFINITY,
                ..base
            },
            SolveOptions {
                tolerance_bar: -3.0,
                ..base
            },
            SolveOptions {
                tolerance_bar: f64::NAN,
                ..base
            },
        ];
        for opts in cases {
            assert!(
                matches!(opts.validate(), Err(SolverError::InvalidParameter { .. })),
                "{opts:?} should be rejected"
            );
        }
    }
}
