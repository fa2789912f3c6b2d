//! Bisection refinement of a grid operating point.

use nf_well::{Reservoir, VlpModel};

/// Bisection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig {
    /// Maximum halvings
    pub max_iterations: usize,
    /// Stop when |VLP − IPR| falls below this (bar)
    pub abs_tol: f64,
    /// Stop when the bracket is narrower than this (m³/h)
    pub flow_tol: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-9,
            flow_tol: 1e-10,
        }
    }
}

/// Intersection located inside a sign-changing bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinedPoint {
    /// Flow (m³/h)
    pub flow: f64,
    /// VLP pressure at `flow` (bar)
    pub pressure: f64,
    /// Pump head at `flow` (m)
    pub pump_head: f64,
    /// VLP − IPR at `flow` (bar)
    pub residual: f64,
    pub iterations: usize,
}

/// Bisect VLP − IPR on `[lo, hi]`.
///
/// Returns `None` when the difference has the same sign at both ends.
pub fn bisect(
    vlp: &VlpModel,
    reservoir: &Reservoir,
    lo: f64,
    hi: f64,
    config: &BisectionConfig,
) -> Option<RefinedPoint> {
    let residual = |q: f64| vlp.vlp(q) - reservoir.ipr(q);
    let point = |q: f64, r: f64, iterations: usize| RefinedPoint {
        flow: q,
        pressure: vlp.vlp(q),
        pump_head: vlp.pump_head(q),
        residual: r,
        iterations,
    };

    let (mut a, mut b) = (lo.min(hi), lo.max(hi));
    let mut ra = residual(a);
    let rb = residual(b);

    if ra == 0.0 {
        return Some(point(a, ra, 0));
    }
    if rb == 0.0 {
        return Some(point(b, rb, 0));
    }
    if ra.signum() == rb.signum() {
        return None;
    }

    let mut mid = 0.5 * (a + b);
    let mut rm = residual(mid);
    for iter in 1..=config.max_iterations {
        mid = 0.5 * (a + b);
        rm = residual(mid);

        if rm.abs() < config.abs_tol || (b - a) < config.flow_tol {
            return Some(point(mid, rm, iter));
        }

        if rm.signum() == ra.signum() {
            a = mid;
            ra = rm;
        } else {
            b = mid;
        }
    }

    Some(point(mid, rm, config.max_iterations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_well::{FluidProperties, Trajectory, Waypoint};

    // Vertical-ish well without pump: VLP rises with flow, IPR falls.
    fn model() -> (VlpModel, Reservoir) {
        let t = Trajectory::new(vec![
            Waypoint::new(0.0, 0.0, 0.1),
            Waypoint::new(1000.0, 1000.0, 0.1),
        ])
        .unwrap();
        let vlp = VlpModel::new(&t, FluidProperties::water(), None, 10.0).unwrap();
        let reservoir = Reservoir::new(120.0, 2.0).unwrap();
        (vlp, reservoir)
    }

    #[test]
    fn finds_root_inside_bracket() {
        let (vlp, reservoir) = model();
        let p = bisect(&vlp, &reservoir, 1.0, 200.0, &BisectionConfig::default()).unwrap();
        assert!(p.flow > 1.0 && p.flow < 200.0);
        assert!(p.residual.abs() < 1e-6);
        assert!((p.pressure - reservoir.ipr(p.flow)).abs() < 1e-6);
        assert_eq!(p.pump_head, 0.0);
    }

    #[test]
    fn same_sign_has_no_bracket() {
        let (vlp, reservoir) = model();
        // IPR well above VLP at both ends of a narrow low-flow window
        assert!(bisect(&vlp, &reservoir, 1.0, 2.0, &BisectionConfig::default()).is_none());
    }
}
