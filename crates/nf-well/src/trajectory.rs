//! Well trajectory and its flow segments.

use crate::error::{WellError, WellResult};
use nf_core::units::{Length, m};

/// A survey point along the well path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Measured depth (along hole)
    pub md: Length,
    /// True vertical depth
    pub tvd: Length,
    /// Inner diameter of the casing/tubing from this point onward
    pub id: Length,
}

impl Waypoint {
    /// Waypoint from values in metres.
    pub fn new(md_m: f64, tvd_m: f64, id_m: f64) -> Self {
        Self {
            md: m(md_m),
            tvd: m(tvd_m),
            id: m(id_m),
        }
    }
}

/// Interval between two consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Along-hole length, ΔMD
    pub length: Length,
    /// Vertical change, ΔTVD
    pub rise: Length,
    /// `atan2(ΔTVD, ΔMD)`: 0 is horizontal
    pub inclination: f64,
    /// Inner diameter, taken from the downstream waypoint
    pub diameter: Length,
}

impl Segment {
    fn between(from: &Waypoint, to: &Waypoint) -> Self {
        let length = to.md - from.md;
        let rise = to.tvd - from.tvd;
        Self {
            length,
            rise,
            inclination: rise.value.atan2(length.value),
            diameter: to.id,
        }
    }

    /// Vertical depth this segment adds to the traverse, `L·sin θ` (m).
    pub fn vertical_depth(&self) -> f64 {
        self.length.value * self.inclination.sin()
    }

    /// Flow area `π·D²/4` (m²).
    pub fn flow_area(&self) -> f64 {
        std::f64::consts::PI * self.diameter.value.powi(2) / 4.0
    }
}

/// Ordered waypoints plus the segments derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    waypoints: Vec<Waypoint>,
    segments: Vec<Segment>,
}

impl Trajectory {
    /// Validate waypoints and segment them.
    ///
    /// # Errors
    /// `InvalidTrajectory` for fewer than two waypoints, measured depth that
    /// is not strictly increasing, a non-positive inner diameter, or
    /// negative/non-finite depths.
    pub fn new(waypoints: Vec<Waypoint>) -> WellResult<Self> {
        if waypoints.len() < 2 {
            return Err(WellError::trajectory(format!(
                "need at least 2 waypoints, got {}",
                waypoints.len()
            )));
        }

        for (i, wp) in waypoints.iter().enumerate() {
            let (md, tvd, id) = (wp.md.value, wp.tvd.value, wp.id.value);
            if !(md.is_finite() && tvd.is_finite() && id.is_finite()) {
                return Err(WellError::trajectory(format!(
                    "waypoint {i} has a non-finite value"
                )));
            }
            if md < 0.0 || tvd < 0.0 {
                return Err(WellError::trajectory(format!(
                    "waypoint {i} has a negative depth (MD {md}, TVD {tvd})"
                )));
            }
            if id <= 0.0 {
                return Err(WellError::trajectory(format!(
                    "waypoint {i} inner diameter must be positive, got {id}"
                )));
            }
        }

        if let Some(i) = waypoints.windows(2).position(|w| w[1].md <= w[0].md) {
            return Err(WellError::trajectory(format!(
                "measured depth must be strictly increasing (waypoint {} at {} m after {} m)",
                i + 1,
                waypoints[i + 1].md.value,
                waypoints[i].md.value
            )));
        }

        let segments: Vec<Segment> = waypoints
            .windows(2)
            .map(|w| Segment::between(&w[0], &w[1]))
            .collect();

        tracing::debug!(
            waypoints = waypoints.len(),
            segments = segments.len(),
            "trajectory segmented"
        );

        Ok(Self {
            waypoints,
            segments,
        })
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of segment lengths (m).
    pub fn total_measured_length(&self) -> f64 {
        self.segments.iter().map(|s| s.length.value).sum()
    }

    /// Accumulated `L·sin θ` over all segments (m), as used for the pump
    /// depth check.
    pub fn total_vertical_depth(&self) -> f64 {
        self.segments.iter().map(Segment::vertical_depth).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::new(0.0, 0.0, 0.3397),
            Waypoint::new(500.0, 500.0, 0.2445),
            Waypoint::new(1500.0, 1500.0, 0.1778),
            Waypoint::new(2500.0, 2500.0, 0.1778),
        ]
    }

    #[test]
    fn one_segment_per_waypoint_pair() {
        let t = Trajectory::new(reference_waypoints()).unwrap();
        assert_eq!(t.segments().len(), 3);
        assert_eq!(t.total_measured_length(), 2500.0);
    }

    #[test]
    fn segment_takes_downstream_diameter() {
        let t = Trajectory::new(reference_waypoints()).unwrap();
        let diameters: Vec<f64> = t.segments().iter().map(|s| s.diameter.value).collect();
        assert_eq!(diameters, vec![0.2445, 0.1778, 0.1778]);
    }

    #[test]
    fn inclination_is_atan2_of_rise_over_length() {
        let t = Trajectory::new(vec![
            Waypoint::new(0.0, 0.0, 0.2),
            Waypoint::new(100.0, 0.0, 0.2),
            Waypoint::new(200.0, 100.0, 0.2),
            Waypoint::new(300.0, 50.0, 0.2),
        ])
        .unwrap();
        let s = t.segments();
        assert_eq!(s[0].inclination, 0.0);
        assert!((s[1].inclination - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
        assert!(s[2].inclination < 0.0);
        assert_eq!(s[0].vertical_depth(), 0.0);
    }

    #[test]
    fn rejects_single_waypoint() {
        let err = Trajectory::new(vec![Waypoint::new(0.0, 0.0, 0.2)]).unwrap_err();
        assert!(matches!(err, WellError::InvalidTrajectory { .. }));
        assert!(Trajectory::new(vec![]).is_err());
    }

    #[test]
    fn rejects_non_increasing_md() {
        let err = Trajectory::new(vec![
            Waypoint::new(0.0, 0.0, 0.2),
            Waypoint::new(100.0, 90.0, 0.2),
            Waypoint::new(100.0, 95.0, 0.2),
        ])
        .unwrap_err();
        assert!(matches!(err, WellError::InvalidTrajectory { .. }));
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn rejects_non_positive_diameter() {
        let err = Trajectory::new(vec![
            Waypoint::new(0.0, 0.0, 0.2),
            Waypoint::new(100.0, 100.0, 0.0),
        ])
        .unwrap_err();
        assert!(matches!(err, WellError::InvalidTrajectory { .. }));
    }
}
