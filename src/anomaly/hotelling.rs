//! anomaly::hotelling — one-dimensional Hotelling T² outlier flags.
//!
//! Purpose
//! -------
//! Flag observations whose squared standardized deviation from the sample
//! mean exceeds a χ²(1) cut-off. This is the univariate Hotelling T² rule
//! under a Gaussian working model.
//!
//! Key behaviors
//! -------------
//! - Abnormality `aᵢ = (xᵢ − x̄)² / σ̂²` with the population variance
//!   (`1 / n` denominator).
//! - Cut-off: upper end of the central `1 − threshold` interval of χ²(1),
//!   i.e. the `1 − threshold/2` quantile.
//! - Reports `(index, original value)` for every `aᵢ` strictly above the
//!   cut-off, in index order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input is non-empty, finite and not constant.
//! - `threshold ∈ (0, 1)`; smaller thresholds flag fewer points.
//!
//! Downstream usage
//! ----------------
//! - [`detect`] for the flagged pairs only; [`HotellingOutcome::hotelling`]
//!   when the per-point scores or the cut-off are also needed.
//!
//! Testing notes
//! -------------
//! - Unit tests cover a single injected outlier, the cut-off value, the
//!   monotonicity in `threshold`, and every validation branch.
use crate::anomaly::errors::{HotellingError, HotellingResult};
use ndarray::Array1;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// HotellingOutcome — abnormality scores and flags for one series.
///
/// Fields
/// ------
/// - `scores`: per-observation abnormality `aᵢ`.
/// - `cutoff`: χ²(1) cut-off derived from the threshold.
/// - `anomalies`: `(index, value)` pairs with `aᵢ > cutoff`.
#[derive(Debug, Clone, PartialEq)]
pub struct HotellingOutcome {
    scores: Array1<f64>,
    cutoff: f64,
    anomalies: Vec<(usize, f64)>,
}

impl HotellingOutcome {
    /// Score a series and flag outliers.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Finite, non-constant observations.
    /// - `threshold`: `f64`
    ///   Significance level in `(0, 1)`.
    ///
    /// Errors
    /// ------
    /// - `HotellingError::EmptySeries`, `NonFiniteData`, `InvalidThreshold`,
    ///   `ZeroVariance`.
    /// - `HotellingError::Distribution` if the χ² distribution cannot be
    ///   built.
    pub fn hotelling(data: &[f64], threshold: f64) -> HotellingResult<Self> {
        validate(data, threshold)?;

        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let var = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        if var <= 0.0 {
            return Err(HotellingError::ZeroVariance);
        }

        let chi2 =
            ChiSquared::new(1.0).map_err(|err| HotellingError::Distribution(err.to_string()))?;
        let cutoff = chi2.inverse_cdf(1.0 - threshold / 2.0);

        let scores: Array1<f64> = data.iter().map(|x| (x - mean).powi(2) / var).collect();
        let anomalies = scores
            .iter()
            .enumerate()
            .filter(|(_, a)| **a > cutoff)
            .map(|(i, _)| (i, data[i]))
            .collect();

        Ok(HotellingOutcome { scores, cutoff, anomalies })
    }

    pub fn scores(&self) -> &Array1<f64> {
        &self.scores
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn anomalies(&self) -> &[(usize, f64)] {
        &self.anomalies
    }

    pub fn into_anomalies(self) -> Vec<(usize, f64)> {
        self.anomalies
    }
}

/// Flagged `(index, value)` pairs of a Hotelling scan.
///
/// Examples
/// --------
/// ```rust
/// # use rust_changepoint::anomaly::hotelling::detect;
/// let mut data: Vec<f64> = (0..19).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
/// data.push(10.0);
/// assert_eq!(detect(&data, 0.01).unwrap(), vec![(19, 10.0)]);
/// ```
pub fn detect(data: &[f64], threshold: f64) -> HotellingResult<Vec<(usize, f64)>> {
    HotellingOutcome::hotelling(data, threshold).map(HotellingOutcome::into_anomalies)
}

fn validate(data: &[f64], threshold: f64) -> HotellingResult<()> {
    if data.is_empty() {
        return Err(HotellingError::EmptySeries);
    }
    if let Some(index) = data.iter().position(|x| !x.is_finite()) {
        return Err(HotellingError::NonFiniteData { index, value: data[index] });
    }
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(HotellingError::InvalidThreshold(threshold));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A single injected outlier among alternating ±1 values.
    // - The χ²(1) cut-off at threshold 0.01.
    // - Fewer flags as the threshold shrinks.
    // - Validation branches.
    // -------------------------------------------------------------------------

    fn alternating_with_spike() -> Vec<f64> {
        let mut data: Vec<f64> = (0..19).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        data.push(10.0);
        data
    }

    #[test]
    // Purpose
    // -------
    // Only the injected spike exceeds the cut-off.
    //
    // Given
    // -----
    // - Ten 1s and nine −1s alternating, then 10 at index 19; threshold 0.01.
    //
    // Expect
    // ------
    // - Flags `[(19, 10.0)]`; spike score ≈ 15.8127; cut-off ≈ 7.8794.
    fn hotelling_flags_single_injected_outlier() {
        // Arrange
        let data = alternating_with_spike();

        // Act
        let outcome = HotellingOutcome::hotelling(&data, 0.01).expect("valid input");

        // Assert
        assert_eq!(outcome.anomalies(), &[(19, 10.0)]);
        assert_relative_eq!(outcome.scores()[19], 15.812_749_003_984_063, epsilon = 1e-9);
        assert_relative_eq!(outcome.cutoff(), 7.879_438_576_622_42, epsilon = 1e-4);
        assert_eq!(outcome.scores().len(), data.len());
    }

    #[test]
    // Purpose
    // -------
    // Larger thresholds lower the cut-off and can only add flags.
    //
    // Given
    // -----
    // - The same series at thresholds 0.01 and 0.5.
    //
    // Expect
    // ------
    // - Cut-off decreases and the flag set at 0.01 is a subset of the one at 0.5.
    fn hotelling_flags_grow_with_threshold() {
        // Arrange
        let data = alternating_with_spike();

        // Act
        let strict = HotellingOutcome::hotelling(&data, 0.01).expect("valid input");
        let loose = HotellingOutcome::hotelling(&data, 0.5).expect("valid input");

        // Assert
        assert!(loose.cutoff() < strict.cutoff());
        for flag in strict.anomalies() {
            assert!(loose.anomalies().contains(flag));
        }
    }

    #[test]
    // Purpose
    // -------
    // Every validation branch reports its own variant.
    //
    // Given
    // -----
    // - Empty data, a NaN, thresholds 0 and 1, and a constant series.
    //
    // Expect
    // ------
    // - `EmptySeries`, `NonFiniteData`, `InvalidThreshold` (twice),
    //   `ZeroVariance`.
    fn hotelling_rejects_invalid_input() {
        // Arrange
        let ok = [1.0, 2.0, 3.0];

        // Act / Assert
        assert_eq!(detect(&[], 0.05), Err(HotellingError::EmptySeries));
        assert!(matches!(
            detect(&[1.0, f64::NAN], 0.05),
            Err(HotellingError::NonFiniteData { index: 1, .. })
        ));
        assert_eq!(detect(&ok, 0.0), Err(HotellingError::InvalidThreshold(0.0)));
        assert_eq!(detect(&ok, 1.0), Err(HotellingError::InvalidThreshold(1.0)));
        assert_eq!(detect(&[4.0, 4.0, 4.0], 0.05), Err(HotellingError::ZeroVariance));
    }
}
