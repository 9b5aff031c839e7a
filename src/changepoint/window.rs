//! changepoint::window — Hankel window matrices over a time series.
//!
//! Purpose
//! -------
//! Turn a contiguous slice of a series into a `w × c` matrix whose columns
//! are consecutive length-`w` sub-sequences, and express the trajectory and
//! test window ranges for a candidate change index `t`.
//!
//! Key behaviors
//! -------------
//! - [`extract_matrix`] builds the window matrix for 1-based column starts
//!   `start..=end`.
//! - [`trajectory_range`] and [`test_range`] give the closed-form column-start
//!   ranges `[t−w−k+1, t−w]` and `[t−w−k+1+L, t−w+L]`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Window formulas use 1-based positions. Column `i` (0-based) of the
//!   matrix for `start` holds the 0-based slice `series[start−1+i .. start−1+i+w]`.
//! - Range helpers are only meaningful for admissible `t ≥ k + w`; they
//!   saturate at zero otherwise, which `extract_matrix` then rejects.
//!
//! Conventions
//! -----------
//! - Bound violations in `extract_matrix` are programming errors and panic.
//!   The scorer only requests admissible ranges.
use crate::changepoint::params::SSTParams;
use ndarray::Array2;

/// WindowRange — inclusive 1-based range of sub-sequence start positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    pub start: usize,
    pub end: usize,
}

impl WindowRange {
    /// Number of columns the range produces.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// History window for change index `t`: starts `[t−w−k+1, t−w]`.
pub fn trajectory_range(t: usize, params: &SSTParams) -> WindowRange {
    let end = t.saturating_sub(params.w());
    WindowRange { start: (end + 1).saturating_sub(params.k()), end }
}

/// Current window for change index `t`: the trajectory range shifted by `L`.
pub fn test_range(t: usize, params: &SSTParams) -> WindowRange {
    let tra = trajectory_range(t, params);
    WindowRange { start: tra.start + params.l(), end: tra.end + params.l() }
}

/// Build the `w × (end − start + 1)` window matrix.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Source series (0-based storage).
/// - `start`, `end`: `usize`
///   Inclusive 1-based sub-sequence start positions.
/// - `w`: `usize`
///   Sub-sequence length (matrix rows).
///
/// Returns
/// -------
/// `Array2<f64>` with `a[[r, c]] = series[start − 1 + c + r]`.
///
/// Panics
/// ------
/// - If `start == 0`, `start > end`, `w == 0`, or
///   `end − 1 + w > series.len()`.
pub fn extract_matrix(series: &[f64], start: usize, end: usize, w: usize) -> Array2<f64> {
    assert!(start >= 1, "window start is 1-based and must be >= 1, got {start}");
    assert!(start <= end, "window start {start} exceeds end {end}");
    assert!(w >= 1, "window length must be >= 1");
    assert!(
        end - 1 + w <= series.len(),
        "window [{start}, {end}] with length {w} overruns series of length {}",
        series.len()
    );
    Array2::from_shape_fn((w, end - start + 1), |(r, c)| series[start - 1 + c + r])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Hankel layout of extracted matrices, including the full-length edge.
    // - Closed-form trajectory/test ranges for default parameters.
    // - Panics on out-of-bounds requests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Columns are consecutive sub-sequences.
    //
    // Given
    // -----
    // - series = [1, 2, 3, 4, 5, 6], start = 2, end = 4, w = 3.
    //
    // Expect
    // ------
    // - [[2, 3, 4], [3, 4, 5], [4, 5, 6]].
    fn extract_matrix_builds_hankel_columns() {
        // Arrange
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        // Act
        let a = extract_matrix(&series, 2, 4, 3);

        // Assert
        assert_eq!(a, array![[2.0, 3.0, 4.0], [3.0, 4.0, 5.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    // Purpose
    // -------
    // The last column may end exactly at the series end.
    //
    // Given
    // -----
    // - series of length 5, start = end = 3, w = 3.
    //
    // Expect
    // ------
    // - A single column [3, 4, 5].
    fn extract_matrix_allows_window_ending_at_series_end() {
        // Arrange
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];

        // Act
        let a = extract_matrix(&series, 3, 3, 3);

        // Assert
        assert_eq!(a, array![[3.0], [4.0], [5.0]]);
    }

    #[test]
    #[should_panic(expected = "overruns series")]
    // Purpose
    // -------
    // Requests that read past the end are programming errors.
    //
    // Given
    // -----
    // - series of length 5, start = 3, end = 4, w = 3.
    //
    // Expect
    // ------
    // - Panic mentioning the overrun.
    fn extract_matrix_panics_past_series_end() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let _ = extract_matrix(&series, 3, 4, 3);
    }

    #[test]
    #[should_panic(expected = "1-based")]
    // Purpose
    // -------
    // A zero start is rejected since positions are 1-based.
    //
    // Given
    // -----
    // - start = 0.
    //
    // Expect
    // ------
    // - Panic mentioning the 1-based convention.
    fn extract_matrix_panics_on_zero_start() {
        let series = [1.0, 2.0, 3.0];
        let _ = extract_matrix(&series, 0, 1, 2);
    }

    #[test]
    // Purpose
    // -------
    // Ranges follow the closed forms and both hold k columns.
    //
    // Given
    // -----
    // - w = 30, k = 15, L = 7 and the first admissible t = 45.
    //
    // Expect
    // ------
    // - Trajectory [1, 15], test [8, 22]; the test matrix needs
    //   end − 1 + w = 51 = T values, the minimal series length.
    fn window_ranges_match_closed_forms() {
        // Arrange
        let params = SSTParams::new(30, 2, None, None).expect("valid params");

        // Act
        let tra = trajectory_range(45, &params);
        let test = test_range(45, &params);

        // Assert
        assert_eq!(tra, WindowRange { start: 1, end: 15 });
        assert_eq!(test, WindowRange { start: 8, end: 22 });
        assert_eq!(tra.len(), 15);
        assert_eq!(test.len(), 15);
        assert_eq!(test.end - 1 + params.w(), 51);
    }
}
