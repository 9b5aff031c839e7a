//! changepoint::validation — input guards for change-point scoring.
//!
//! Purpose
//! -------
//! Keep the series-level checks in one place so that batch and streaming
//! detection report the same errors for the same inputs.
//!
//! Key behaviors
//! -------------
//! - [`validate_series`] rejects the first non-finite observation.
//! - [`required_len`] gives the minimal series length for one admissible
//!   index, `L + w + k − 1`.
//!
//! Conventions
//! -----------
//! - Validation never allocates and never panics.
use crate::changepoint::{
    errors::{SSTError, SSTResult},
    params::SSTParams,
};

/// Reject series containing NaN or ±∞.
///
/// Errors
/// ------
/// - `SSTError::NonFiniteData { index, value }` for the first offending entry.
pub fn validate_series(series: &[f64]) -> SSTResult<()> {
    match series.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(SSTError::NonFiniteData { index, value: series[index] }),
        None => Ok(()),
    }
}

/// Minimal series length with at least one admissible index.
///
/// A series of length `T` admits indices `t ∈ [k + w, T − L + 1]`, which is
/// non-empty iff `T ≥ L + w + k − 1`.
pub fn required_len(params: &SSTParams) -> usize {
    params.l() + params.w() + params.k() - 1
}

/// Batch-mode length check.
///
/// Errors
/// ------
/// - `SSTError::InputTooSmall` if `series.len() < required_len(params)`.
pub fn validate_len(series: &[f64], params: &SSTParams) -> SSTResult<()> {
    let required = required_len(params);
    if series.len() < required {
        return Err(SSTError::InputTooSmall { len: series.len(), required });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Finite and non-finite series.
    // - The minimal-length boundary for default parameters.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The first non-finite value is reported with its index.
    //
    // Given
    // -----
    // - [1.0, 2.0, NaN, +∞].
    //
    // Expect
    // ------
    // - `NonFiniteData { index: 2, .. }`; a finite series passes.
    fn validate_series_reports_first_non_finite_entry() {
        // Arrange
        let bad = [1.0, 2.0, f64::NAN, f64::INFINITY];
        let good = [1.0, -2.0, 0.0];

        // Act
        let bad_result = validate_series(&bad);
        let good_result = validate_series(&good);

        // Assert
        assert!(matches!(bad_result, Err(SSTError::NonFiniteData { index: 2, .. })));
        assert_eq!(good_result, Ok(()));
    }

    #[test]
    // Purpose
    // -------
    // The length boundary matches `len > L + w + k − 2`.
    //
    // Given
    // -----
    // - w = 30 (k = 15, L = 7) so the minimum is 51.
    //
    // Expect
    // ------
    // - 50 values fail with `required = 51`; 51 values pass.
    fn validate_len_boundary_matches_admissible_range() {
        // Arrange
        let params = SSTParams::new(30, 2, None, None).expect("valid params");
        let short = vec![0.0; 50];
        let exact = vec![0.0; 51];

        // Act
        let short_result = validate_len(&short, &params);
        let exact_result = validate_len(&exact, &params);

        // Assert
        assert_eq!(required_len(&params), 51);
        assert_eq!(short_result, Err(SSTError::InputTooSmall { len: 50, required: 51 }));
        assert_eq!(exact_result, Ok(()));
    }
}
