//! changepoint::params — validated window geometry for SST.
//!
//! Purpose
//! -------
//! Hold the four integers that define the singular spectrum transformation
//! windows and guarantee their consistency once, at construction.
//!
//! Key behaviors
//! -------------
//! - [`SSTParams::new`] resolves the optional `k` and `L` to their defaults
//!   (`k = ⌊w/2⌋`, `L = ⌊k/2⌋`) and validates all four values.
//! - Fields are private and exposed through getters, so a constructed value
//!   can never become inconsistent.
//!
//! Invariants & assumptions
//! ------------------------
//! - `w, m, k, L ≥ 1` and `m ≤ min(w, k)`.
//! - With defaults, the smallest usable window is `w = 4` (`k = 2`, `L = 1`).
//!
//! Conventions
//! -----------
//! - `w`: rows of every window matrix (sub-sequence length).
//! - `k`: columns of the trajectory and test matrices.
//! - `L`: lag between the trajectory and the test window.
//! - `m`: number of dominant directions compared.
use crate::changepoint::errors::{SSTError, SSTResult};

/// Number of retained basis vectors when callers do not choose one.
pub const DEFAULT_M: usize = 2;

/// SSTParams — window sizes for singular spectrum transformation.
///
/// Fields
/// ------
/// - `w`: window (sub-sequence) length.
/// - `m`: dominant directions compared per window.
/// - `k`: number of sub-sequences per window matrix.
/// - `l`: lag of the test window relative to the trajectory window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SSTParams {
    w: usize,
    m: usize,
    k: usize,
    l: usize,
}

impl SSTParams {
    /// Construct and validate window parameters.
    ///
    /// Parameters
    /// ----------
    /// - `w`: `usize`
    ///   Window length, ≥ 1.
    /// - `m`: `usize`
    ///   Retained directions, `1 ≤ m ≤ min(w, k)`.
    /// - `k`: `Option<usize>`
    ///   Column count; `None` selects `⌊w/2⌋`.
    /// - `l`: `Option<usize>`
    ///   Lag; `None` selects `⌊k/2⌋`.
    ///
    /// Returns
    /// -------
    /// `SSTResult<SSTParams>`
    ///
    /// Errors
    /// ------
    /// - `SSTError::InvalidWindow` naming the first parameter that is zero
    ///   (including a zero produced by the defaults), or `m` when
    ///   `m > min(w, k)`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_changepoint::changepoint::SSTParams;
    /// let params = SSTParams::new(30, 2, None, None).unwrap();
    /// assert_eq!((params.k(), params.l()), (15, 7));
    /// ```
    pub fn new(w: usize, m: usize, k: Option<usize>, l: Option<usize>) -> SSTResult<Self> {
        if w == 0 {
            return Err(SSTError::InvalidWindow {
                param: "w",
                value: w,
                reason: "window size must be positive",
            });
        }
        let k = k.unwrap_or(w / 2);
        if k == 0 {
            return Err(SSTError::InvalidWindow {
                param: "k",
                value: k,
                reason: "column count must be positive (default is floor(w / 2))",
            });
        }
        let l = l.unwrap_or(k / 2);
        if l == 0 {
            return Err(SSTError::InvalidWindow {
                param: "L",
                value: l,
                reason: "lag must be positive (default is floor(k / 2))",
            });
        }
        if m == 0 {
            return Err(SSTError::InvalidWindow {
                param: "m",
                value: m,
                reason: "number of retained directions must be positive",
            });
        }
        if m > w.min(k) {
            return Err(SSTError::InvalidWindow {
                param: "m",
                value: m,
                reason: "number of retained directions must not exceed min(w, k)",
            });
        }
        Ok(SSTParams { w, m, k, l })
    }

    /// Window length.
    pub fn w(&self) -> usize {
        self.w
    }

    /// Retained directions.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Columns per window matrix.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Lag between trajectory and test windows.
    pub fn l(&self) -> usize {
        self.l
    }
}
