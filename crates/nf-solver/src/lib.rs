//! Operating point solver for ESP well nodal analysis.
//!
//! This crate samples the VLP and IPR curves of a well over a flow range and
//! picks the sample where they meet. The search is a fixed-resolution grid:
//! the sample with the smallest |VLP − IPR| is accepted only if that gap is
//! below the pressure tolerance, otherwise the outcome is
//! [`OperatingPoint::NotFound`], which is a result and not an error.
//! A bisection pass over the bracketing samples is available as an opt-in
//! refinement.

pub mod curves;
pub mod error;
pub mod options;
pub mod refine;
pub mod solve;
pub mod sweep;

pub use curves::SampledCurves;
pub use error::{SolverError, SolverResult};
pub use options::SolveOptions;
pub use refine::{BisectionConfig, RefinedPoint};
pub use solve::{NodalSolution, OperatingPoint, solve};
pub use sweep::linspace;
