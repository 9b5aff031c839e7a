//! changepoint — singular spectrum transformation (SST) change-point scores.
//!
//! Purpose
//! -------
//! Score how strongly the local dynamics of a univariate series change at
//! each index by comparing the dominant singular subspaces of a history
//! window and a lagged test window.
//!
//! Key behaviors
//! -------------
//! - [`SST`] is the entry point: `detect` for whole series, `stream_detect`
//!   for the newest index of a growing buffer.
//! - [`SSTParams`] validates the window geometry `(w, m, k, L)` once.
//! - [`ScoringMethod`] selects the subspace comparison: exact thin SVDs
//!   ([`DirectSvdScorer`]) or the Lanczos approximation ([`LanczosScorer`])
//!   configured by [`LanczosOptions`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs must be finite; the first NaN / ±∞ is reported as
//!   [`SSTError::NonFiniteData`].
//! - Scores lie in `[0, 1]`; 0 means no change.
//! - Numerical kernels live in `crate::linalg`; their failures surface as
//!   [`SSTError::Linalg`].
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use rust_changepoint::changepoint::{LanczosOptions, SST, SSTParams, ScoringMethod};
//!
//! let params = SSTParams::new(30, 2, None, None)?;
//! let sst = SST::with_params(params, ScoringMethod::lanczos(LanczosOptions::seeded(1)));
//! let series: Vec<f64> = (0..200).map(|t| (t as f64 / 5.0).sin()).collect();
//! let scores = sst.detect(&series)?;
//! # assert_eq!(scores.len(), 200);
//! # Ok::<(), rust_changepoint::changepoint::SSTError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests; `tests/integration_sst_pipeline.rs`
//!   exercises full scans on synthetic regime changes.

pub mod errors;
pub mod options;
pub mod params;
pub mod scoring;
pub mod sst;
pub mod validation;
pub mod window;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{SSTError, SSTResult};
pub use self::options::LanczosOptions;
pub use self::params::SSTParams;
pub use self::scoring::{DirectSvdScorer, LanczosScorer, ScoringMethod, SubspaceScorer};
pub use self::sst::SST;
pub use self::window::{WindowRange, extract_matrix};

pub mod prelude {
    pub use super::errors::{SSTError, SSTResult};
    pub use super::options::LanczosOptions;
    pub use super::params::SSTParams;
    pub use super::scoring::ScoringMethod;
    pub use super::sst::SST;
}
