//! Vertical lift performance: the pressure traverse from bottomhole to
//! wellhead for a single-phase liquid.

use crate::error::{WellResult, param};
use crate::fluid::FluidProperties;
use crate::friction::{friction_factor, reynolds};
use crate::pump::Esp;
use crate::trajectory::{Segment, Trajectory};
use nf_core::numeric::ensure_non_negative;
use nf_core::units::{m3ph_to_m3ps, pa_to_bar};

/// Per-segment contributions of one traverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLoss {
    /// Mean velocity (m/s), signed with the flow
    pub velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// Darcy-Weisbach frictional loss (Pa)
    pub friction_pa: f64,
    /// Hydrostatic change `ρ·g·L·sin θ` (Pa)
    pub gravity_pa: f64,
}

/// Full breakdown of one VLP evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Traverse {
    /// Flow the traverse was evaluated at (m³/h)
    pub flow: f64,
    pub segments: Vec<SegmentLoss>,
    /// Accumulated `L·sin θ` over all segments (m)
    pub vertical_depth: f64,
    /// Pump boost subtracted from the total drop (Pa), zero when not applied
    pub pump_boost_pa: f64,
    /// Net pressure drop after the pump boost (Pa)
    pub total_drop_pa: f64,
    /// VLP pressure (bar)
    pub pressure_bar: f64,
}

/// VLP evaluator for one well configuration.
///
/// ## Model
///
/// For a flow `Q` (m³/h), `q = Q/3600` and for each segment in order:
///
/// ```text
/// A = π·D²/4,  u = q/A,  Re = ρ·|u|·D/μ
/// Δp_fric = f(Re, D)·(L/D)·(ρ·u²/2)
/// Δp_grav = ρ·g·L·sin θ
/// ```
///
/// Once all segments are walked, if the accumulated `L·sin θ` reached the
/// ESP intake depth the pump boost `ρ·g·H(Q)` is subtracted a single time.
/// The pump is not placed inside a particular segment.
///
/// The result is `p_wh + Σ/1e5` in bar.
#[derive(Debug, Clone, PartialEq)]
pub struct VlpModel {
    segments: Vec<Segment>,
    fluid: FluidProperties,
    esp: Option<Esp>,
    wellhead_pressure_bar: f64,
}

impl VlpModel {
    /// Build an evaluator from a validated trajectory.
    ///
    /// # Errors
    /// `InvalidParameter` if the wellhead pressure is negative or non-finite.
    pub fn new(
        trajectory: &Trajectory,
        fluid: FluidProperties,
        esp: Option<Esp>,
        wellhead_pressure_bar: f64,
    ) -> WellResult<Self> {
        param(ensure_non_negative(wellhead_pressure_bar, "wellhead pressure"))?;

        tracing::debug!(
            segments = trajectory.segments().len(),
            vertical_depth_m = trajectory.total_vertical_depth(),
            esp_intake_m = esp.as_ref().map(|e| e.intake_depth.value),
            "VLP model built"
        );

        Ok(Self {
            segments: trajectory.segments().to_vec(),
            fluid,
            esp,
            wellhead_pressure_bar,
        })
    }

    pub fn fluid(&self) -> &FluidProperties {
        &self.fluid
    }

    pub fn esp(&self) -> Option<&Esp> {
        self.esp.as_ref()
    }

    pub fn wellhead_pressure_bar(&self) -> f64 {
        self.wellhead_pressure_bar
    }

    /// Pump head (m) at `flow`, or 0 for a well without an ESP.
    pub fn pump_head(&self, flow: f64) -> f64 {
        self.esp.as_ref().map_or(0.0, |esp| esp.head(flow))
    }

    /// VLP pressure (bar) at `flow` (m³/h).
    pub fn vlp(&self, flow: f64) -> f64 {
        let (total, _, _) = self.walk(flow, |_| {});
        self.to_bar(total)
    }

    /// Same evaluation as [`VlpModel::vlp`], keeping every contribution.
    pub fn traverse(&self, flow: f64) -> Traverse {
        let mut segments = Vec::with_capacity(self.segments.len());
        let (total, depth, boost) = self.walk(flow, |loss| segments.push(loss));
        Traverse {
            flow,
            segments,
            vertical_depth: depth,
            pump_boost_pa: boost,
            total_drop_pa: total,
            pressure_bar: self.to_bar(total),
        }
    }

    fn to_bar(&self, total_drop_pa: f64) -> f64 {
        self.wellhead_pressure_bar + pa_to_bar(total_drop_pa)
    }

    /// Returns (net drop Pa, accumulated depth m, applied boost Pa).
    fn walk(&self, flow: f64, mut visit: impl FnMut(SegmentLoss)) -> (f64, f64, f64) {
        let rho = self.fluid.density.value;
        let mu = self.fluid.viscosity.value;
        let g = self.fluid.gravity.value;
        let roughness = self.fluid.roughness.value;

        let q = m3ph_to_m3ps(flow);
        let mut dp_total = 0.0;
        let mut depth = 0.0;

        for seg in &self.segments {
            let l = seg.length.value;
            let d = seg.diameter.value;
            let sin_theta = seg.inclination.sin();

            let u = q / seg.flow_area();
            let re = reynolds(rho, u, d, mu);
            let f = friction_factor(re, d, roughness);

            let dp_fric = f * (l / d) * (rho * u.powi(2) / 2.0);
            let dp_grav = rho * g * l * sin_theta;
            dp_total += dp_fric + dp_grav;
            depth += l * sin_theta;

            visit(SegmentLoss {
                velocity: u,
                reynolds: re,
                friction_factor: f,
                friction_pa: dp_fric,
                gravity_pa: dp_grav,
            });
        }

        let mut boost = 0.0;
        if let Some(esp) = &self.esp {
            if depth >= esp.intake_depth.value {
                boost = esp.boost(flow, &self.fluid);
                dp_total -= boost;
            }
        }

        (dp_total, depth, boost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pump::PumpCurve;
    use crate::trajectory::Waypoint;

    fn reference_esp() -> Esp {
        let curve = PumpCurve::new(
            vec![0.0, 100.0, 200.0, 300.0, 400.0],
            vec![600.0, 550.0, 450.0, 300.0, 100.0],
        )
        .unwrap();
        Esp::new(curve, 500.0).unwrap()
    }

    fn reference_trajectory() -> Trajectory {
        Trajectory::new(vec![
            Waypoint::new(0.0, 0.0, 0.3397),
            Waypoint::new(500.0, 500.0, 0.2445),
            Waypoint::new(1500.0, 1500.0, 0.1778),
            Waypoint::new(2500.0, 2500.0, 0.1778),
        ])
        .unwrap()
    }

    fn reference_model() -> VlpModel {
        VlpModel::new(
            &reference_trajectory(),
            FluidProperties::water(),
            Some(reference_esp()),
            10.0,
        )
        .unwrap()
    }

    #[test]
    fn horizontal_segment_at_zero_flow_is_wellhead_pressure() {
        let t = Trajectory::new(vec![
            Waypoint::new(0.0, 0.0, 0.1778),
            Waypoint::new(800.0, 0.0, 0.1778),
        ])
        .unwrap();
        let model =
            VlpModel::new(&t, FluidProperties::water(), Some(reference_esp()), 10.0).unwrap();
        assert_eq!(model.vlp(0.0), 10.0);
    }

    #[test]
    fn zero_flow_has_no_friction_but_keeps_gravity_and_pump() {
        let model = reference_model();
        let tr = model.traverse(0.0);
        assert!(tr.segments.iter().all(|s| s.friction_pa == 0.0));
        assert!(tr.segments.iter().all(|s| s.gravity_pa > 0.0));
        // Zero flow still gets the first table head
        assert_eq!(tr.pump_boost_pa, 1000.0 * 9.81 * 600.0);
        assert_eq!(tr.pressure_bar, model.vlp(0.0));
    }

    #[test]
    fn traverse_matches_vlp_bit_for_bit() {
        let model = reference_model();
        for q in [1.0, 57.5, 199.9, 315.788_944_723_618_1, 400.0] {
            assert_eq!(model.traverse(q).pressure_bar, model.vlp(q));
        }
    }

    #[test]
    fn pump_boost_applied_when_depth_reached() {
        let model = reference_model();
        let tr = model.traverse(200.0);
        assert!(tr.vertical_depth >= 500.0);
        assert_eq!(tr.pump_boost_pa, 1000.0 * 9.81 * 450.0);
    }

    #[test]
    fn friction_grows_with_flow() {
        let model = reference_model();
        let low: f64 = model.traverse(50.0).segments.iter().map(|s| s.friction_pa).sum();
        let high: f64 = model.traverse(350.0).segments.iter().map(|s| s.friction_pa).sum();
        assert!(high > low && low > 0.0);
    }

    #[test]
    fn no_esp_means_no_boost() {
        let model =
            VlpModel::new(&reference_trajectory(), FluidProperties::water(), None, 10.0).unwrap();
        let tr = model.traverse(100.0);
        assert_eq!(tr.pump_boost_pa, 0.0);
        assert_eq!(model.pump_head(100.0), 0.0);
    }

    #[test]
    fn nan_flow_propagates_instead_of_panicking() {
        let model = reference_model();
        assert!(model.vlp(f64::NAN).is_nan());
        assert!(model.pump_head(f64::NAN).is_nan());
    }

    #[test]
    fn rejects_negative_wellhead_pressure() {
        let err = VlpModel::new(&reference_trajectory(), FluidProperties::water(), None, -1.0)
            .unwrap_err();
        assert!(matches!(err, crate::WellError::InvalidParameter { .. }));
    }
}
