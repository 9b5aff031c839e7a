//! changepoint::sst — singular spectrum transformation change scores.
//!
//! Purpose
//! -------
//! Scan a univariate series and, for every admissible index `t`, measure
//! how much the dominant subspace of the recent history (trajectory window)
//! differs from that of the data just after it (test window). Large scores
//! mark candidate change points.
//!
//! Key behaviors
//! -------------
//! - [`SST::detect`] scores every admissible index of a full series and
//!   returns a dense vector the length of the input, zero elsewhere.
//! - [`SST::stream_detect`] scores only the newest admissible index and
//!   returns `0.0` while the series is still too short.
//! - The subspace comparison is delegated to the [`ScoringMethod`] chosen at
//!   construction (exact SVD or Lanczos approximation).
//!
//! Invariants & assumptions
//! ------------------------
//! - For a series of length `T`, admissible indices are
//!   `t ∈ [k + w, T − L + 1]`. The trajectory window uses sub-sequence
//!   starts `[t − w − k + 1, t − w]` and the test window the same range
//!   shifted by `L`.
//! - Scores are stored at 0-based position `t`. When `L = 1` the last
//!   admissible index equals `T` and has no slot in the batch output; it is
//!   still reachable through `stream_detect`.
//! - `SST` holds no mutable state. Every call owns its matrices and its RNG,
//!   so an instance can be shared across threads.
//!
//! Conventions
//! -----------
//! - Inputs are borrowed slices and never copied wholesale; window matrices
//!   are materialized per index.
//! - Emits a `debug` event per call and a `trace` event per scored index.
//!   No subscriber is installed by the library.
//!
//! Downstream usage
//! ----------------
//! - Build with [`SST::new`] for the common case (`m = 2`, default `k` and
//!   `L`, exact SVD), or with [`SST::with_params`] for full control.
//! - Batch users call `detect` once; online users append to their buffer
//!   and call `stream_detect` after each new observation.
//!
//! Testing notes
//! -------------
//! - Unit tests cover output length and zero padding, the too-short
//!   behavior of both entry points, non-finite input, the batch/stream
//!   agreement, a flat steady state on a periodic series and a clear peak
//!   after a frequency change.
use crate::changepoint::{
    errors::SSTResult,
    params::{DEFAULT_M, SSTParams},
    scoring::{ScoringMethod, SubspaceScorer},
    validation::{required_len, validate_len, validate_series},
    window::{extract_matrix, test_range, trajectory_range},
};
use ndarray::Array1;
use rand::rngs::StdRng;
use tracing::{debug, trace};

/// SST — singular spectrum transformation change-point scorer.
///
/// Fields
/// ------
/// - `params`: [`SSTParams`]
///   Validated window geometry.
/// - `method`: [`ScoringMethod`]
///   Subspace comparison strategy.
///
/// Examples
/// --------
/// ```rust
/// # use rust_changepoint::changepoint::SST;
/// let series: Vec<f64> = (0..120).map(|t| (t as f64 * 0.6).sin()).collect();
/// let sst = SST::new(20).unwrap();
/// let scores = sst.detect(&series).unwrap();
/// assert_eq!(scores.len(), series.len());
/// assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SST {
    params: SSTParams,
    method: ScoringMethod,
}

impl SST {
    /// Exact-SVD scorer with `m = 2` and default `k`, `L`.
    ///
    /// Errors
    /// ------
    /// - `SSTError::InvalidWindow` if `w` is too small for the defaults
    ///   (`w < 4`).
    pub fn new(w: usize) -> SSTResult<Self> {
        let params = SSTParams::new(w, DEFAULT_M, None, None)?;
        Ok(SST::with_params(params, ScoringMethod::direct()))
    }

    /// Scorer from already validated parameters and a strategy.
    pub fn with_params(params: SSTParams, method: ScoringMethod) -> Self {
        SST { params, method }
    }

    pub fn params(&self) -> &SSTParams {
        &self.params
    }

    pub fn method(&self) -> &ScoringMethod {
        &self.method
    }

    /// Change scores for every admissible index of `series`.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&[f64]`
    ///   Finite observations, length `T ≥ L + w + k − 1`.
    ///
    /// Returns
    /// -------
    /// `SSTResult<Array1<f64>>`
    ///   Length-`T` vector; position `t` holds the score for index `t` when
    ///   `k + w ≤ t ≤ min(T − L + 1, T − 1)`, and 0 elsewhere.
    ///
    /// Errors
    /// ------
    /// - `SSTError::NonFiniteData` for the first NaN / ±∞ observation.
    /// - `SSTError::InputTooSmall` if `T < L + w + k − 1`.
    /// - `SSTError::Linalg` if a window is degenerate for the chosen
    ///   strategy (e.g. an all-zero test window on the Lanczos path).
    pub fn detect(&self, series: &[f64]) -> SSTResult<Array1<f64>> {
        validate_series(series)?;
        validate_len(series, &self.params)?;

        let len = series.len();
        let first = self.params.k() + self.params.w();
        let last = (len + 1 - self.params.l()).min(len - 1);
        debug!(
            len,
            w = self.params.w(),
            m = self.params.m(),
            k = self.params.k(),
            l = self.params.l(),
            lanczos = self.method.is_lanczos(),
            "sst detect"
        );

        let mut scores = Array1::<f64>::zeros(len);
        let mut rng = self.method.rng();
        for t in first..=last {
            let score = self.score_at(series, t, &mut rng)?;
            trace!(t, score, "sst score");
            scores[t] = score;
        }
        Ok(scores)
    }

    /// Change score for the newest admissible index `t = T − L + 1`.
    ///
    /// Returns
    /// -------
    /// `SSTResult<f64>`
    ///   The score in `[0, 1]`, or `0.0` if the series is still shorter
    ///   than `L + w + k − 1`.
    ///
    /// Errors
    /// ------
    /// - `SSTError::NonFiniteData` for the first NaN / ±∞ observation.
    /// - `SSTError::Linalg` as in [`SST::detect`].
    pub fn stream_detect(&self, series: &[f64]) -> SSTResult<f64> {
        validate_series(series)?;
        let len = series.len();
        if len < required_len(&self.params) {
            debug!(len, required = required_len(&self.params), "sst stream: not enough data yet");
            return Ok(0.0);
        }

        let t = len + 1 - self.params.l();
        let mut rng = self.method.rng();
        let score = self.score_at(series, t, &mut rng)?;
        debug!(len, t, score, "sst stream score");
        Ok(score)
    }

    fn score_at(&self, series: &[f64], t: usize, rng: &mut StdRng) -> SSTResult<f64> {
        let w = self.params.w();
        let tra = trajectory_range(t, &self.params);
        let test = test_range(t, &self.params);
        let trajectory = extract_matrix(series, tra.start, tra.end, w);
        let test = extract_matrix(series, test.start, test.end, w);
        self.method.score(trajectory.view(), test.view(), self.params.m(), rng)
    }
}
