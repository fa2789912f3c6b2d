//! nf-core: shared foundation for the nodalflow crates.
//!
//! Contains:
//! - units (uom SI types, field-unit constructors and conversions)
//! - numeric (Real + tolerances + float checks)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports
pub use error::{NfError, NfResult};
pub use numeric::*;
pub use units::*;
