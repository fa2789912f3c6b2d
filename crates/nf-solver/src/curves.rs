//! Sampled VLP and IPR curves.

use crate::sweep::linspace;
use nf_well::{Reservoir, VlpModel};
use rayon::prelude::*;

/// Both curves evaluated on the same flow grid, in ascending flow order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurves {
    /// Flow samples (m³/h)
    pub flow: Vec<f64>,
    /// VLP pressure at each sample (bar)
    pub vlp: Vec<f64>,
    /// IPR pressure at each sample (bar)
    pub ipr: Vec<f64>,
}

impl SampledCurves {
    /// Evaluate both curves on `sample_count` points over `[flow_min, flow_max]`.
    ///
    /// With `parallel` the samples are spread over the rayon pool; values are
    /// collected back in sample order so the result is identical.
    pub fn sample(
        vlp: &VlpModel,
        reservoir: &Reservoir,
        flow_min: f64,
        flow_max: f64,
        sample_count: usize,
        parallel: bool,
    ) -> Self {
        let flow = linspace(flow_min, flow_max, sample_count);
        let eval = |q: &f64| (vlp.vlp(*q), reservoir.ipr(*q));

        let pairs: Vec<(f64, f64)> = if parallel {
            flow.par_iter().map(eval).collect()
        } else {
            flow.iter().map(eval).collect()
        };
        let (vlp, ipr) = pairs.into_iter().unzip();

        Self { flow, vlp, ipr }
    }

    pub fn len(&self) -> usize {
        self.flow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    /// Signed difference VLP − IPR (bar) at sample `i`.
    pub fn difference(&self, i: usize) -> f64 {
        self.vlp[i] - self.ipr[i]
    }

    /// Index and value of the smallest |VLP − IPR|.
    ///
    /// The lowest-flow sample wins ties. NaN gaps never win; `None` if no
    /// sample has a comparable gap.
    pub fn min_gap(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..self.len() {
            let gap = self.difference(i).abs();
            if gap.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, b)| gap < b) {
                best = Some((i, gap));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves(vlp: Vec<f64>, ipr: Vec<f64>) -> SampledCurves {
        let flow = (0..vlp.len()).map(|i| i as f64).collect();
        SampledCurves { flow, vlp, ipr }
    }

    #[test]
    fn min_gap_prefers_lowest_flow_on_ties() {
        let c = curves(vec![5.0, 3.0, 1.0, 3.0], vec![4.0, 2.0, 0.0, 4.0]);
        // gaps: 1, 1, 1, 1
        assert_eq!(c.min_gap(), Some((0, 1.0)));
    }

    #[test]
    fn min_gap_finds_smallest() {
        let c = curves(vec![10.0, 8.0, 6.1, 4.0], vec![6.0, 6.0, 6.0, 6.0]);
        let (i, gap) = c.min_gap().unwrap();
        assert_eq!(i, 2);
        assert!((gap - 0.1).abs() < 1e-12);
    }

    #[test]
    fn min_gap_skips_nan() {
        let c = curves(vec![f64::NAN, 7.0], vec![1.0, 6.0]);
        assert_eq!(c.min_gap(), Some((1, 1.0)));
        let all_nan = curves(vec![f64::NAN], vec![1.0]);
        assert_eq!(all_nan.min_gap(), None);
    }
}
