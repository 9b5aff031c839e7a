//! changepoint::errors — error types for singular spectrum transformation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the change-point
//! engine: parameter construction, input validation and the two scoring
//! strategies. Numerical failures from the `linalg` subtree are wrapped
//! rather than re-described.
//!
//! Key behaviors
//! -------------
//! - Define [`SSTError`] and [`SSTResult`] as the canonical error and result
//!   types for `changepoint`.
//! - Lift [`LinalgError`] into [`SSTError::Linalg`] via `From`, so kernels can
//!   be called with `?` from the scorers.
//! - Map every variant to a Python `ValueError` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - "Not enough data yet" in streaming mode is a value (`Ok(0.0)`), not an
//!   error. Only batch detection reports [`SSTError::InputTooSmall`].
//! - Variants are small and cloneable; payloads carry the offending value
//!   and, where useful, the name of the parameter.
//!
//! Testing notes
//! -------------
//! - Unit tests check payload embedding in `Display`, the `From<LinalgError>`
//!   lift and the `source()` chain.
use crate::linalg::LinalgError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SSTResult<T> = Result<T, SSTError>;

/// SSTError — error conditions for change-point scoring.
///
/// Variants
/// --------
/// - `InvalidWindow { param, value, reason }`
///   A window parameter (`w`, `m`, `k` or `L`) violates its constraint.
/// - `InputTooSmall { len, required }`
///   The series is too short for even one admissible index; `required` is
///   the minimal length `L + w + k − 1`.
/// - `NonFiniteData { index, value }`
///   The first NaN / ±∞ entry in the series.
/// - `InvalidIterations { param, value }`
///   A Lanczos iteration budget of zero.
/// - `InvalidTolerance { value }`
///   A non-finite or non-positive QR tolerance.
/// - `Linalg(LinalgError)`
///   A failure inside a numerical kernel (e.g. power iteration on a zero
///   window).
#[derive(Debug, Clone, PartialEq)]
pub enum SSTError {
    // ---- Configuration ----
    InvalidWindow { param: &'static str, value: usize, reason: &'static str },
    InvalidIterations { param: &'static str, value: usize },
    InvalidTolerance { value: f64 },

    // ---- Input ----
    InputTooSmall { len: usize, required: usize },
    NonFiniteData { index: usize, value: f64 },

    // ---- Numerics ----
    Linalg(LinalgError),
}

impl std::error::Error for SSTError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SSTError::Linalg(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for SSTError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SSTError::InvalidWindow { param, value, reason } => {
                write!(f, "Invalid window parameter {param} = {value}: {reason}")
            }
            SSTError::InvalidIterations { param, value } => {
                write!(f, "Invalid {param} = {value}: iteration count must be at least 1.")
            }
            SSTError::InvalidTolerance { value } => {
                write!(f, "Invalid QR tolerance {value}: must be finite and > 0.")
            }
            SSTError::InputTooSmall { len, required } => {
                write!(f, "Series of length {len} is too short; need at least {required} values.")
            }
            SSTError::NonFiniteData { index, value } => {
                write!(f, "Non-finite value {value} at index {index}.")
            }
            SSTError::Linalg(err) => write!(f, "Linear algebra failure: {err}"),
        }
    }
}

impl From<LinalgError> for SSTError {
    fn from(err: LinalgError) -> Self {
        SSTError::Linalg(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<SSTError> for PyErr {
    fn from(err: SSTError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
