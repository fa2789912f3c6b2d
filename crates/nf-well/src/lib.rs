//! nf-well: physical models of an ESP-lifted well.
//!
//! Provides the pieces a nodal analysis needs:
//! - `Trajectory` turns survey waypoints into flow segments
//! - `friction_factor` (explicit Swamee-Jain)
//! - `PumpCurve` / `Esp` for the submersible pump head table
//! - `Reservoir` for the linear inflow performance relationship (IPR)
//! - `VlpModel` for the vertical lift performance (VLP) pressure traverse
//!
//! Every model is validated at construction and immutable afterwards, so the
//! evaluators are pure functions of their argument.
//!
//! # Example
//!
//! ```
//! use nf_well::{Esp, FluidProperties, PumpCurve, Reservoir, Trajectory, VlpModel, Waypoint};
//!
//! let trajectory = Trajectory::new(vec![
//!     Waypoint::new(0.0, 0.0, 0.3397),
//!     Waypoint::new(500.0, 500.0, 0.2445),
//!     Waypoint::new(1500.0, 1500.0, 0.1778),
//! ])
//! .unwrap();
//!
//! let curve = PumpCurve::new(
//!     vec![0.0, 100.0, 200.0, 300.0, 400.0],
//!     vec![600.0, 550.0, 450.0, 300.0, 100.0],
//! )
//! .unwrap();
//! let esp = Esp::new(curve, 500.0).unwrap();
//!
//! let vlp = VlpModel::new(&trajectory, FluidProperties::water(), Some(esp), 10.0).unwrap();
//! let reservoir = Reservoir::new(230.0, 5.0).unwrap();
//!
//! let gap = vlp.vlp(100.0) - reservoir.ipr(100.0);
//! assert!(gap.is_finite());
//! ```

pub mod error;
pub mod fluid;
pub mod friction;
pub mod pump;
pub mod reservoir;
pub mod trajectory;
pub mod vlp;

// Re-exports
pub use error::{WellError, WellResult};
pub use fluid::FluidProperties;
pub use friction::{friction_factor, reynolds};
pub use pump::{Esp, PumpCurve};
pub use reservoir::Reservoir;
pub use trajectory::{Segment, Trajectory, Waypoint};
pub use vlp::{SegmentLoss, Traverse, VlpModel};
