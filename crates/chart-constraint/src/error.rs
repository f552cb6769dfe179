// File: crates/chart-constraint/src/error.rs
// Summary: Error type for caller-side precondition violations.

use thiserror::Error;

/// Failures raised by the engine. All of them indicate a caller bug
/// (bad index, stale series reference); geometric "no result" cases are
/// reported through `Option`/NaN instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("illegal index {index} for a sequence of length {len}")]
    IllegalIndex { index: isize, len: usize },

    #[error("series #{0} not found")]
    SeriesNotFound(usize),

    #[error("element index {index} out of range for series of length {len}")]
    ElementOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = ConstraintError> = std::result::Result<T, E>;
