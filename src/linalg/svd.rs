//! linalg::svd — `ndarray` ↔ `nalgebra` bridge for singular value decompositions.
//!
//! Purpose
//! -------
//! The crate keeps `ndarray` at its boundaries, while `nalgebra` provides a
//! robust SVD. This module copies views into `DMatrix<f64>`, runs the
//! decomposition and hands back leading singular vectors / values as
//! `ndarray` containers.
//!
//! Key behaviors
//! -------------
//! - [`leading_left_singular_vectors`] returns the `m` left singular vectors
//!   with the largest singular values, ordered by decreasing singular value.
//! - [`top_singular_value`] returns the largest singular value only, without
//!   forming singular vectors.
//!
//! Invariants & assumptions
//! ------------------------
//! - Ordering does not rely on the backend; indices are sorted here by
//!   singular value (descending, ties keep backend order).
//! - Singular vectors are defined up to sign. Callers must only consume
//!   sign-invariant quantities (e.g. singular values of `U₁ᵀ U₂`).
//!
//! Conventions
//! -----------
//! - Thin decompositions: for an `n × p` input at most `min(n, p)` vectors
//!   are available.
use crate::linalg::errors::{LinalgError, LinalgResult};
use nalgebra::{DMatrix, SVD};
use ndarray::{Array2, ArrayView2};

/// Copy an `ndarray` view into a column-major `nalgebra::DMatrix`.
pub(crate) fn to_dmatrix(a: ArrayView2<f64>) -> DMatrix<f64> {
    let (n, p) = a.dim();
    DMatrix::from_fn(n, p, |i, j| a[[i, j]])
}

/// Leading `m` left singular vectors of `a`.
///
/// Parameters
/// ----------
/// - `a`: `ArrayView2<f64>`
///   Matrix of shape `n × p`.
/// - `m`: `usize`
///   Number of vectors to return; `1 ≤ m ≤ min(n, p)`.
///
/// Returns
/// -------
/// `LinalgResult<Array2<f64>>`
///   Matrix of shape `n × m` whose columns are orthonormal left singular
///   vectors for the `m` largest singular values, largest first.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` if `a` is empty or `m == 0`.
/// - `LinalgError::DimensionMismatch` if `m > min(n, p)`.
/// - `LinalgError::SvdFailed` if the backend does not produce `U`.
pub fn leading_left_singular_vectors(a: ArrayView2<f64>, m: usize) -> LinalgResult<Array2<f64>> {
    let (n, p) = a.dim();
    if n == 0 || p == 0 || m == 0 {
        return Err(LinalgError::EmptyMatrix);
    }
    let available = n.min(p);
    if m > available {
        return Err(LinalgError::DimensionMismatch { expected: available, actual: m });
    }

    let svd = SVD::new(to_dmatrix(a), true, false);
    let u = svd.u.ok_or(LinalgError::SvdFailed)?;

    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&i, &j| svd.singular_values[j].total_cmp(&svd.singular_values[i]));

    Ok(Array2::from_shape_fn((n, m), |(row, col)| u[(row, order[col])]))
}

/// Largest singular value of `a`.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` if `a` has no rows or no columns.
pub fn top_singular_value(a: ArrayView2<f64>) -> LinalgResult<f64> {
    let (n, p) = a.dim();
    if n == 0 || p == 0 {
        return Err(LinalgError::EmptyMatrix);
    }
    let singular_values = to_dmatrix(a).singular_values();
    Ok(singular_values.iter().copied().fold(0.0_f64, f64::max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Element-wise fidelity of the ndarray → DMatrix copy.
    // - Ordering and orthonormality of leading left singular vectors.
    // - Largest singular value of small reference matrices.
    // - Argument validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The bridge must copy entries without transposing.
    //
    // Given
    // -----
    // - A 2×3 matrix with distinct entries.
    //
    // Expect
    // ------
    // - `DMatrix[(i, j)] == ndarray[[i, j]]` for all entries.
    fn to_dmatrix_copies_entries_in_place() {
        // Arrange
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

        // Act
        let d = to_dmatrix(a.view());

        // Assert
        assert_eq!(d.shape(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(d[(i, j)], a[[i, j]]);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Leading vectors follow singular values, not storage order.
    //
    // Given
    // -----
    // - diag(1, 5, 3) padded to 4×3, so the largest value sits on axis 1.
    //
    // Expect
    // ------
    // - First vector ≈ ±e₁ (index 1), second ≈ ±e₂ (index 2).
    fn leading_left_singular_vectors_are_sorted_by_singular_value() {
        // Arrange
        let a = array![[1.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 3.0], [0.0, 0.0, 0.0]];

        // Act
        let u = leading_left_singular_vectors(a.view(), 2).expect("valid input");

        // Assert
        assert_eq!(u.dim(), (4, 2));
        assert_relative_eq!(u[[1, 0]].abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u[[2, 1]].abs(), 1.0, epsilon = 1e-12);
        let gram = u.t().dot(&u);
        assert_relative_eq!(gram[[0, 0]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(gram[[1, 1]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(gram[[0, 1]], 0.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the largest singular value against a known reference.
    //
    // Given
    // -----
    // - [[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]] (σ₁ ≈ 25.4624074).
    // - A 2×2 rotation (σ₁ = 1).
    //
    // Expect
    // ------
    // - Matching values.
    fn top_singular_value_matches_reference() {
        // Arrange
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0], [10.0, 11.0, 12.0]];
        let theta = 0.3_f64;
        let rot = array![[theta.cos(), -theta.sin()], [theta.sin(), theta.cos()]];

        // Act
        let s_a = top_singular_value(a.view()).expect("non-empty");
        let s_rot = top_singular_value(rot.view()).expect("non-empty");

        // Assert
        assert_relative_eq!(s_a, 25.462_407_436_036_39, epsilon = 1e-9);
        assert_relative_eq!(s_rot, 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Requests beyond the thin rank and empty inputs are rejected.
    //
    // Given
    // -----
    // - A 3×2 matrix with m = 3, the same matrix with m = 0, and a 0×0
    //   matrix.
    //
    // Expect
    // ------
    // - `DimensionMismatch`, `EmptyMatrix`, `EmptyMatrix`.
    fn svd_helpers_validate_arguments() {
        // Arrange
        let a = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let empty = Array2::<f64>::zeros((0, 0));

        // Act
        let too_many = leading_left_singular_vectors(a.view(), 3);
        let none = leading_left_singular_vectors(a.view(), 0);
        let empty_top = top_singular_value(empty.view());

        // Assert
        assert_eq!(too_many, Err(LinalgError::DimensionMismatch { expected: 2, actual: 3 }));
        assert_eq!(none, Err(LinalgError::EmptyMatrix));
        assert_eq!(empty_top, Err(LinalgError::EmptyMatrix));
    }
}
