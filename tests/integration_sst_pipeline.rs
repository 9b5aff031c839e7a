//! Integration tests for SST change-point scoring and Hotelling flags.
//!
//! Purpose
//! -------
//! - Validate the end-to-end change-point pipeline: parameter validation,
//!   window extraction, both scoring strategies and the batch / streaming
//!   entry points, on synthetic series with a known regime change.
//! - Check the Hotelling detector on a series with one injected outlier.
//!
//! Coverage
//! --------
//! - `changepoint::SST` with `ScoringMethod::direct()` and
//!   `ScoringMethod::lanczos(..)`.
//! - `changepoint::SSTParams` defaults and rejection of inconsistent windows.
//! - `anomaly::hotelling::detect`.
//!
//! Exclusions
//! ----------
//! - Kernel-level numerics (power iteration, Lanczos, QR, SVD bridge) are
//!   covered by unit tests in `linalg`.
//! - Python bindings.
use rust_changepoint::{
    anomaly::hotelling,
    changepoint::{LanczosOptions, SST, SSTError, SSTParams, ScoringMethod},
};
use std::f64::consts::PI;

/// Frequency switch from period 10 to period 3 at `at`.
fn frequency_switch(len: usize, at: usize) -> Vec<f64> {
    (0..len)
        .map(|t| {
            let period = if t < at { 10.0 } else { 3.0 };
            (2.0 * PI * t as f64 / period).sin()
        })
        .collect()
}

fn argmax(values: &[f64]) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, v)| if v > best.1 { (i, v) } else { best })
}

#[test]
// Purpose
// -------
// The exact path localizes a frequency switch.
//
// Given
// -----
// - 200 samples switching at t = 100, w = 30, m = 2 (k = 15, L = 7).
//
// Expect
// ------
// - Output length 200, peak above 0.5 within 30 samples after the switch,
//   near-zero scores well before and well after it.
fn sst_direct_path_localizes_frequency_switch() {
    // Arrange
    let series = frequency_switch(200, 100);
    let sst = SST::new(30).expect("valid window");

    // Act
    let scores = sst.detect(&series).expect("long enough");

    // Assert
    assert_eq!(scores.len(), 200);
    let scores = scores.to_vec();
    let (at, peak) = argmax(&scores);
    assert!(peak > 0.5, "peak {peak}");
    assert!((100..=130).contains(&at), "peak index {at}");
    assert!(scores[..90].iter().all(|&s| s < 0.01));
    assert!(scores[150..].iter().all(|&s| s < 0.01));
}

#[test]
// Purpose
// -------
// The Lanczos path is a rough approximation but still reacts to the switch,
// stays quiet in the steady regimes and places its peak near the exact one.
//
// Given
// -----
// - The same series, Lanczos with default budgets and seeds 1, 2, 3, 99 and
//   2024; the direct path as reference.
//
// Expect
// ------
// - Every score finite in [0, 1], steady-state scores below 0.05, a peak
//   above 0.1 somewhere in [95, 145], and a Lanczos argmax within w samples
//   of the direct argmax.
fn sst_lanczos_path_reacts_to_frequency_switch() {
    // Arrange
    let series = frequency_switch(200, 100);
    let params = SSTParams::new(30, 2, None, None).expect("valid params");
    let direct = SST::with_params(params, ScoringMethod::direct());
    let (direct_at, _) = argmax(&direct.detect(&series).expect("long enough").to_vec());

    for seed in [1, 2, 3, 99, 2024] {
        let sst = SST::with_params(params, ScoringMethod::lanczos(LanczosOptions::seeded(seed)));

        // Act
        let scores = sst.detect(&series).expect("long enough").to_vec();

        // Assert
        assert!(scores.iter().all(|s| s.is_finite() && (0.0..=1.0).contains(s)));
        for (t, &s) in scores.iter().enumerate() {
            if t < 90 || t > 150 {
                assert!(s < 0.05, "seed {seed}: steady-state score {s} at t = {t}");
            }
        }
        let peak = scores[95..=145].iter().copied().fold(0.0_f64, f64::max);
        assert!(peak > 0.1, "seed {seed}: Lanczos peak {peak}");
        let (lanczos_at, _) = argmax(&scores);
        assert!(
            lanczos_at.abs_diff(direct_at) <= params.w(),
            "seed {seed}: Lanczos argmax {lanczos_at} vs direct argmax {direct_at}"
        );
    }
}

#[test]
// Purpose
// -------
// Streaming over a growing buffer reproduces the batch scores.
//
// Given
// -----
// - The frequency-switch series fed one observation at a time, w = 30.
//
// Expect
// ------
// - 0.0 until 51 observations are available; afterwards each streaming
//   score equals the batch score at index n − L + 1.
fn sst_streaming_replays_batch_scores() {
    // Arrange
    let series = frequency_switch(160, 100);
    let sst = SST::new(30).expect("valid window");
    let l = sst.params().l();
    let batch = sst.detect(&series).expect("long enough");

    // Act / Assert
    for n in 1..series.len() {
        let streamed = sst.stream_detect(&series[..n]).expect("finite data");
        if n < 51 {
            assert_eq!(streamed, 0.0, "n = {n}");
        } else {
            assert!(
                (streamed - batch[n - l + 1]).abs() < 1e-12,
                "n = {n}: stream {streamed} vs batch {}",
                batch[n - l + 1]
            );
        }
    }
}

#[test]
// Purpose
// -------
// Invalid configurations and inputs surface as typed errors.
//
// Given
// -----
// - m larger than k, a too-short series, and a series containing +∞.
//
// Expect
// ------
// - `InvalidWindow`, `InputTooSmall`, `NonFiniteData`.
fn sst_reports_configuration_and_input_errors() {
    // Arrange
    let sst = SST::new(12).expect("valid window");
    let mut with_inf = frequency_switch(40, 100);
    with_inf[3] = f64::INFINITY;

    // Act
    let too_many_dirs = SSTParams::new(12, 7, None, None);
    let too_short = sst.detect(&[0.0; 10]);
    let non_finite = sst.detect(&with_inf);

    // Assert
    assert!(matches!(too_many_dirs, Err(SSTError::InvalidWindow { param: "m", .. })));
    assert!(matches!(too_short, Err(SSTError::InputTooSmall { len: 10, .. })));
    assert!(matches!(non_finite, Err(SSTError::NonFiniteData { index: 3, .. })));
}

#[test]
// Purpose
// -------
// Hotelling flags a single spike in an otherwise regular series.
//
// Given
// -----
// - 99 samples of sin(2πt/10) and a spike of 8 at index 60, threshold 0.01.
//
// Expect
// ------
// - Exactly one flag, `(60, 8.0)`.
fn hotelling_flags_spike_in_periodic_series() {
    // Arrange
    let mut series = frequency_switch(99, 1_000);
    series[60] = 8.0;

    // Act
    let flags = hotelling::detect(&series, 0.01).expect("valid input");

    // Assert
    assert_eq!(flags, vec![(60, 8.0)]);
}
