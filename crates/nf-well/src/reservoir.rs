//! Linear inflow performance relationship.

use crate::error::{WellResult, param};
use nf_core::numeric::{ensure_non_negative, ensure_positive};

/// Reservoir deliverability described by a constant productivity index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reservoir {
    /// Static reservoir pressure (bar)
    pub pressure_bar: f64,
    /// Productivity index (m³/h per bar of drawdown)
    pub productivity_index: f64,
}

impl Reservoir {
    /// # Errors
    /// `InvalidParameter` if the productivity index is not positive or the
    /// reservoir pressure is negative.
    pub fn new(pressure_bar: f64, productivity_index: f64) -> WellResult<Self> {
        param(ensure_non_negative(pressure_bar, "reservoir pressure"))?;
        param(ensure_positive(productivity_index, "productivity index"))?;
        Ok(Self {
            pressure_bar,
            productivity_index,
        })
    }

    /// Bottomhole pressure (bar) the reservoir sustains at `flow` (m³/h),
    /// floored at zero.
    pub fn ipr(&self, flow: f64) -> f64 {
        let pbh = self.pressure_bar - flow / self.productivity_index;
        pbh.max(0.0)
    }

    /// Flow (m³/h) at which the bottomhole pressure reaches zero.
    pub fn absolute_open_flow(&self) -> f64 {
        self.pressure_bar * self.productivity_index
    }
}
