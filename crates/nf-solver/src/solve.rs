//! Grid-search operating point solve.

use crate::curves::SampledCurves;
use crate::error::SolverResult;
use crate::options::SolveOptions;
use crate::refine::{BisectionConfig, RefinedPoint, bisect};
use nf_well::{Reservoir, VlpModel};

/// Outcome of the tolerance gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperatingPoint {
    /// VLP and IPR meet within tolerance at a grid sample.
    Found {
        /// Flow (m³/h)
        flow: f64,
        /// VLP pressure at that sample (bar)
        pressure: f64,
        /// Pump head at that sample (m), 0 without an ESP
        pump_head: f64,
    },
    /// No sample came within tolerance.
    NotFound,
}

impl OperatingPoint {
    pub fn is_found(&self) -> bool {
        matches!(self, OperatingPoint::Found { .. })
    }

    pub fn flow(&self) -> Option<f64> {
        match self {
            OperatingPoint::Found { flow, .. } => Some(*flow),
            OperatingPoint::NotFound => None,
        }
    }

    pub fn pressure(&self) -> Option<f64> {
        match self {
            OperatingPoint::Found { pressure, .. } => Some(*pressure),
            OperatingPoint::NotFound => None,
        }
    }
}

/// Everything one solve produces.
#[derive(Debug, Clone, PartialEq)]
pub struct NodalSolution {
    /// Sampled curves, kept for plotting and export
    pub curves: SampledCurves,
    /// Sample with the smallest |VLP − IPR|, if any gap was comparable
    pub best_index: Option<usize>,
    /// That smallest gap (bar); infinite when `best_index` is `None`
    pub min_gap: f64,
    pub operating_point: OperatingPoint,
    /// Bisection result, present only when requested and bracketed
    pub refined: Option<RefinedPoint>,
}

/// Sample both curves and pick the operating point.
///
/// # Errors
/// `InvalidParameter` if the options fail validation. A missing intersection
/// is reported as [`OperatingPoint::NotFound`].
pub fn solve(
    vlp: &VlpModel,
    reservoir: &Reservoir,
    options: &SolveOptions,
) -> SolverResult<NodalSolution> {
    options.validate()?;

    let curves = SampledCurves::sample(
        vlp,
        reservoir,
        options.flow_min,
        options.flow_max,
        options.sample_count,
        options.parallel,
    );

    let best = curves.min_gap();
    let min_gap = best.map_or(f64::INFINITY, |(_, gap)| gap);

    tracing::debug!(
        samples = curves.len(),
        best_index = best.map(|(i, _)| i),
        min_gap_bar = min_gap,
        tolerance_bar = options.tolerance_bar,
        "grid evaluated"
    );

    let operating_point = match best {
        Some((i, gap)) if gap < options.tolerance_bar => {
            let flow = curves.flow[i];
            OperatingPoint::Found {
                flow,
                pressure: curves.vlp[i],
                pump_head: vlp.pump_head(flow),
            }
        }
        _ => OperatingPoint::NotFound,
    };

    let refined = match (options.refine, operating_point, best) {
        (true, OperatingPoint::Found { .. }, Some((i, _))) => {
            refine_around(vlp, reservoir, &curves, i)
        }
        _ => None,
    };

    match operating_point {
        OperatingPoint::Found { flow, pressure, .. } => {
            tracing::info!(flow_m3h = flow, pressure_bar = pressure, "operating point found");
        }
        OperatingPoint::NotFound => {
            tracing::info!(min_gap_bar = min_gap, "no operating point within tolerance");
        }
    }

    Ok(NodalSolution {
        curves,
        best_index: best.map(|(i, _)| i),
        min_gap,
        operating_point,
        refined,
    })
}

/// Bisect towards whichever neighbour of sample `i` brackets a sign change,
/// preferring the neighbour with the smaller gap.
fn refine_around(
    vlp: &VlpModel,
    reservoir: &Reservoir,
    curves: &SampledCurves,
    i: usize,
) -> Option<RefinedPoint> {
    let d = curves.difference(i);
    let brackets = |j: usize| d == 0.0 || curves.difference(j).signum() != d.signum();

    let mut neighbours: Vec<usize> = Vec::with_capacity(2);
    if i > 0 {
        neighbours.push(i - 1);
    }
    if i + 1 < curves.len() {
        neighbours.push(i + 1);
    }
    neighbours.retain(|&j| brackets(j));
    neighbours.sort_by(|&a, &b| {
        curves
            .difference(a)
            .abs()
            .total_cmp(&curves.difference(b).abs())
    });

    let Some(&j) = neighbours.first() else {
        tracing::warn!(index = i, "no sign change next to grid point, refinement skipped");
        return None;
    };

    bisect(
        vlp,
        reservoir,
        curves.flow[i],
        curves.flow[j],
        &BisectionConfig::default(),
    )
}
