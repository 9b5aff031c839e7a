//! linalg::errors — failure modes of the dense linear-algebra kernels.
//!
//! Purpose
//! -------
//! Provide a single error enum and result alias for the numerical building
//! blocks used by singular spectrum transformation: power iteration, the
//! Lanczos recurrence, the tridiagonal QR eigensolver and the SVD bridge.
//!
//! Key behaviors
//! -------------
//! - Define [`LinalgError`] and [`LinalgResult`] as the canonical error and
//!   result types of the `linalg` subtree.
//! - Attach human-readable `Display` messages that embed the offending shape
//!   or value so that logs are meaningful without extra context.
//! - Map every variant to a Python `ValueError` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Kernels report shape problems and degenerate inputs through this type
//!   instead of producing NaN silently.
//! - Numerical non-convergence of iterative routines is **not** an error; it
//!   is reported through the returned value (e.g. a `converged` flag).
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` messages embed their payloads.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LinalgResult<T> = Result<T, LinalgError>;

/// LinalgError — error conditions for the dense linear-algebra kernels.
///
/// Variants
/// --------
/// - `EmptyMatrix`
///   A matrix or vector with zero rows or columns was supplied.
/// - `NotSquare { rows, cols }`
///   A routine that needs a square (symmetric or tridiagonal) matrix got a
///   rectangular one.
/// - `DimensionMismatch { expected, actual }`
///   A vector length does not match the matrix dimension it is paired with.
/// - `ZeroNorm { context }`
///   A vector that must be normalized has zero or non-finite norm. This is
///   how degenerate inputs (e.g. the zero matrix in power iteration) surface.
/// - `InvalidTolerance { value }`
///   A convergence tolerance is non-finite or not strictly positive.
/// - `InvalidIterations { value }`
///   An iteration budget of zero was requested.
/// - `SvdFailed`
///   The SVD backend did not return the requested singular vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    EmptyMatrix,
    NotSquare { rows: usize, cols: usize },
    DimensionMismatch { expected: usize, actual: usize },
    ZeroNorm { context: &'static str },
    InvalidTolerance { value: f64 },
    InvalidIterations { value: usize },
    SvdFailed,
}

impl std::error::Error for LinalgError {}

impl std::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinalgError::EmptyMatrix => {
                write!(f, "Matrix must have at least one row and one column.")
            }
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "Matrix must be square; got {rows}x{cols}.")
            }
            LinalgError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected length {expected}, got {actual}.")
            }
            LinalgError::ZeroNorm { context } => {
                write!(f, "Cannot normalize a zero or non-finite vector ({context}).")
            }
            LinalgError::InvalidTolerance { value } => {
                write!(f, "Tolerance must be finite and > 0; got: {value}")
            }
            LinalgError::InvalidIterations { value } => {
                write!(f, "Iteration count must be at least 1; got: {value}")
            }
            LinalgError::SvdFailed => {
                write!(f, "SVD did not return the requested singular vectors.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LinalgError> for PyErr {
    fn from(err: LinalgError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
