//! Error types for solver operations.

use thiserror::Error;

/// Errors that can occur while setting up a solve.
///
/// Failing to find an operating point is not an error; see
/// [`crate::OperatingPoint::NotFound`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;
