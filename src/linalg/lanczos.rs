//! linalg::lanczos — Lanczos reduction of a symmetric matrix to tridiagonal form.
//!
//! Purpose
//! -------
//! Build a small `size × size` tridiagonal matrix whose extreme eigenvalues
//! approximate those of a (much larger) symmetric matrix `P`, starting from a
//! caller-supplied seed vector.
//!
//! Key behaviors
//! -------------
//! - Classic three-term recurrence with state `(r, β, q_prev)` initialized to
//!   `(q0, 1, 0)`.
//! - Records `α` on the diagonal and `β` on both off-diagonals, except after
//!   the final step.
//! - Stops early on an invariant Krylov subspace (breakdown) and leaves the
//!   remaining band entries at zero; [`krylov_dimension`] recovers the order
//!   of the block that was actually built.
//!
//! Invariants & assumptions
//! ------------------------
//! - `P` is square and symmetric; symmetry is not checked.
//! - No re-orthogonalization is performed. Orthogonality of the Lanczos
//!   vectors degrades as `size` grows; with the small sizes used by the
//!   change-score path (`2m` or `2m − 1`) this is an accepted approximation.
//! - The seed is used as given (not normalized); the change-score path passes
//!   a unit vector.
//!
//! Testing notes
//! -------------
//! - Unit tests check that a tridiagonal `P` seeded with `e₁` is reproduced
//!   exactly, that a full-size reduction preserves the trace, that
//!   breakdown fills the remaining band with zeros, and that the realized
//!   Krylov dimension is read back correctly (including a zero `P`).
use crate::linalg::{
    errors::{LinalgError, LinalgResult},
    l2_norm,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use tracing::debug;

/// Relative size below which a new off-diagonal `β` counts as breakdown.
pub const LANCZOS_BREAKDOWN_EPS: f64 = 1e-10;

/// Reduce a symmetric matrix to a `size × size` tridiagonal matrix.
///
/// Parameters
/// ----------
/// - `p`: `ArrayView2<f64>`
///   Symmetric `n × n` matrix.
/// - `q0`: `ArrayView1<f64>`
///   Seed vector of length `n` (the initial residual `r₀`).
/// - `size`: `usize`
///   Number of Lanczos steps, i.e. the order of the returned matrix.
///
/// Returns
/// -------
/// `LinalgResult<Array2<f64>>`
///   Tridiagonal `T` with `T[j, j] = αⱼ` and `T[j, j+1] = T[j+1, j] = βⱼ`.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` if `p` is empty or `size == 0`.
/// - `LinalgError::NotSquare` if `p` is not square.
/// - `LinalgError::DimensionMismatch` if `q0.len() != n`.
///
/// Notes
/// -----
/// - Step j computes `q = r / β`, `c = P q`, `α = q·c`,
///   `r = c − α q − β q_prev`, `β = ‖r‖`.
/// - Breakdown is declared when `β ≤ LANCZOS_BREAKDOWN_EPS · (|α| + β_prev)`.
///   The recurrence stops there because the next `q` would be rounding noise
///   (or a division by zero); the rest of `T` stays zero.
pub fn tridiagonalize(
    p: ArrayView2<f64>, q0: ArrayView1<f64>, size: usize,
) -> LinalgResult<Array2<f64>> {
    let (rows, cols) = p.dim();
    if rows == 0 || cols == 0 || size == 0 {
        return Err(LinalgError::EmptyMatrix);
    }
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if q0.len() != rows {
        return Err(LinalgError::DimensionMismatch { expected: rows, actual: q0.len() });
    }

    let mut t = Array2::<f64>::zeros((size, size));
    let mut r: Array1<f64> = q0.to_owned();
    let mut beta = 1.0_f64;
    let mut q_prev = Array1::<f64>::zeros(rows);

    for j in 0..size {
        let q = &r / beta;
        let c = p.dot(&q);
        let alpha = q.dot(&c);
        r = &c - &(alpha * &q) - &(beta * &q_prev);
        let beta_next = l2_norm(r.view());

        t[[j, j]] = alpha;
        if j + 1 == size {
            break;
        }
        if beta_next <= LANCZOS_BREAKDOWN_EPS * (alpha.abs() + beta) {
            debug!(step = j, beta = beta_next, "lanczos breakdown, invariant subspace reached");
            break;
        }
        t[[j, j + 1]] = beta_next;
        t[[j + 1, j]] = beta_next;

        q_prev = q;
        beta = beta_next;
    }

    Ok(t)
}

/// Order of the leading block a [`tridiagonalize`] call actually built.
///
/// Parameters
/// ----------
/// - `t`: `ArrayView2<f64>`
///   Square output of [`tridiagonalize`].
///
/// Returns
/// -------
/// `usize`
///   `j + 1` for the first step `j` whose off-diagonal `T[j, j+1]` is zero,
///   or the full order when no breakdown occurred. Only the leading
///   `d × d` block carries Krylov information; the trailing rows and
///   columns are zero padding.
///
/// Notes
/// -----
/// - Recorded off-diagonals are strictly positive norms, so an exact zero
///   can only come from breakdown.
pub fn krylov_dimension(t: ArrayView2<f64>) -> usize {
    let n = t.nrows().min(t.ncols());
    (0..n.saturating_sub(1)).find(|&j| t[[j, j + 1]] == 0.0).map_or(n, |j| j + 1)
}
