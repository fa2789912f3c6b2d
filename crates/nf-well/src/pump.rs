//! Electric submersible pump model.

use crate::error::{WellError, WellResult, param};
use crate::fluid::FluidProperties;
use nf_core::numeric::ensure_non_negative;
use nf_core::units::{Length, m};

/// Sampled pump performance table: head rise (m of fluid) against flow (m³/h).
///
/// ## Model
///
/// Head is interpolated piecewise-linearly between samples. Outside the
/// sampled flow range the boundary head is held (flat extrapolation), so a
/// shut-in well at zero flow still sees the first table head.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCurve {
    flow: Vec<f64>,
    head: Vec<f64>,
}

impl PumpCurve {
    /// Create a pump curve from parallel flow/head samples.
    ///
    /// # Errors
    /// `InvalidPumpCurve` if the arrays differ in length, are empty, contain
    /// non-finite values, or flow is not strictly increasing.
    pub fn new(flow: Vec<f64>, head: Vec<f64>) -> WellResult<Self> {
        if flow.len() != head.len() {
            return Err(WellError::pump_curve(format!(
                "flow has {} samples but head has {}",
                flow.len(),
                head.len()
            )));
        }
        if flow.is_empty() {
            return Err(WellError::pump_curve("table is empty"));
        }
        if let Some(i) = flow
            .iter()
            .chain(head.iter())
            .position(|v| !v.is_finite())
        {
            return Err(WellError::pump_curve(format!(
                "non-finite sample at position {i}"
            )));
        }
        if let Some(i) = flow.windows(2).position(|w| w[1] <= w[0]) {
            return Err(WellError::pump_curve(format!(
                "flow must be strictly increasing (sample {} = {} after {})",
                i + 1,
                flow[i + 1],
                flow[i]
            )));
        }

        Ok(Self { flow, head })
    }

    pub fn flow_samples(&self) -> &[f64] {
        &self.flow
    }

    pub fn head_samples(&self) -> &[f64] {
        &self.head
    }

    /// Pump head (m) at the given flow (m³/h). NaN flow gives NaN head.
    pub fn head(&self, flow: f64) -> f64 {
        if flow.is_nan() {
            return f64::NAN;
        }
        let n = self.flow.len();
        if flow <= self.flow[0] {
            return self.head[0];
        }
        if flow >= self.flow[n - 1] {
            return self.head[n - 1];
        }

        // First sample strictly above `flow`; bounds above keep 1 <= hi < n.
        let hi = self.flow.partition_point(|&x| x <= flow);
        let lo = hi - 1;
        let slope = (self.head[hi] - self.head[lo]) / (self.flow[hi] - self.flow[lo]);
        slope * (flow - self.flow[lo]) + self.head[lo]
    }
}

/// An ESP installed at a fixed intake depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Esp {
    pub curve: PumpCurve,
    /// Vertical depth the accumulated traverse must reach before the pump
    /// boost is applied
    pub intake_depth: Length,
}

impl Esp {
    /// # Errors
    /// `InvalidParameter` if the intake depth is negative or non-finite.
    pub fn new(curve: PumpCurve, intake_depth_m: f64) -> WellResult<Self> {
        param(ensure_non_negative(intake_depth_m, "ESP intake depth"))?;
        Ok(Self {
            curve,
            intake_depth: m(intake_depth_m),
        })
    }

    pub fn head(&self, flow: f64) -> f64 {
        self.curve.head(flow)
    }

    /// Pressure boost (Pa) `ρ·g·head` at the given flow (m³/h).
    pub fn boost(&self, flow: f64, fluid: &FluidProperties) -> f64 {
        fluid.density.value * fluid.gravity.value * self.head(flow)
    }
}
