//! anomaly — point-outlier detection on univariate series.
//!
//! Purpose
//! -------
//! Complement the change-point scores with a simple point-outlier rule: the
//! one-dimensional Hotelling T² test against a χ²(1) cut-off.
//!
//! Key behaviors
//! -------------
//! - [`HotellingOutcome::hotelling`] returns scores, cut-off and flags.
//! - [`hotelling::detect`] returns only the flagged `(index, value)` pairs.
//! - Errors are reported through [`HotellingError`] / [`HotellingResult`].

pub mod errors;
pub mod hotelling;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{HotellingError, HotellingResult};
pub use self::hotelling::HotellingOutcome;
