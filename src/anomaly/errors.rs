//! anomaly::errors — error types for the Hotelling T² outlier detector.
//!
//! Purpose
//! -------
//! Describe why a Hotelling scan could not run: malformed input, a threshold
//! outside the open unit interval, or a series without dispersion.
//!
//! Conventions
//! -----------
//! - Mapped to Python `ValueError` under the `python-bindings` feature, with
//!   the `Display` text as the message.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type HotellingResult<T> = Result<T, HotellingError>;

/// HotellingError — failure modes of the one-dimensional T² detector.
///
/// Variants
/// --------
/// - `EmptySeries`
///   No observations were supplied.
/// - `NonFiniteData { index, value }`
///   First NaN / ±∞ observation.
/// - `InvalidThreshold(value)`
///   The significance level is not in `(0, 1)`.
/// - `ZeroVariance`
///   All observations are equal, so the abnormality score is undefined.
/// - `Distribution(message)`
///   The χ² reference distribution could not be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum HotellingError {
    EmptySeries,
    NonFiniteData { index: usize, value: f64 },
    InvalidThreshold(f64),
    ZeroVariance,
    Distribution(String),
}

impl std::error::Error for HotellingError {}

impl std::fmt::Display for HotellingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotellingError::EmptySeries => write!(f, "Need at least one observation."),
            HotellingError::NonFiniteData { index, value } => {
                write!(f, "Non-finite value {value} at index {index}.")
            }
            HotellingError::InvalidThreshold(value) => {
                write!(f, "Invalid threshold {value}. Must satisfy 0 < threshold < 1.")
            }
            HotellingError::ZeroVariance => {
                write!(f, "Series has zero variance; abnormality scores are undefined.")
            }
            HotellingError::Distribution(msg) => {
                write!(f, "Chi-squared reference distribution unavailable: {msg}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<HotellingError> for PyErr {
    fn from(err: HotellingError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
