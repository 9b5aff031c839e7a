//! linalg::tridiagonal — unshifted QR eigensolver for small tridiagonal matrices.
//!
//! Purpose
//! -------
//! Compute approximate eigenpairs of the `size × size` symmetric tridiagonal
//! matrix produced by the Lanczos recurrence. The change-score path runs a
//! single QR sweep by default, so results are rough estimates rather than
//! converged spectra.
//!
//! Key behaviors
//! -------------
//! - Each iteration factors `A = Q R` with a sequence of 2×2 Householder
//!   reflections acting on adjacent rows, then forms `A ← R Q` and
//!   accumulates `V ← V Q`.
//! - After every iteration the largest off-diagonal magnitude is compared
//!   with `tol`; iteration stops early once all off-diagonals are below it.
//! - The result reports the number of iterations actually performed and
//!   whether the tolerance was met.
//!
//! Invariants & assumptions
//! ------------------------
//! - The input is square, symmetric and tridiagonal. Only squareness is
//!   checked; entries outside the band are carried along but not exploited.
//! - No shifts and no deflation. Convergence is linear in the ratios of
//!   adjacent eigenvalues, which is adequate for the tiny matrices used here.
//! - Returned eigenvalues are the diagonal of the final iterate, in whatever
//!   order the iteration leaves them. Callers sort if they need an order.
//!
//! Conventions
//! -----------
//! - `sign(0) = +1` inside the Householder construction.
//! - A zero 2-vector yields the identity reflection so that an exactly
//!   decoupled block is left untouched.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against reference spectra of small matrices, check
//!   orthonormality of `V`, check one-sweep diagonals, and cover the
//!   Householder edge cases and the validation errors.
use crate::linalg::errors::{LinalgError, LinalgResult};
use ndarray::{Array1, Array2, ArrayView2};

/// QR sweeps used by the change-score path unless configured otherwise.
pub const DEFAULT_QR_ITERATIONS: usize = 1;

/// Off-diagonal magnitude below which the iteration is considered converged.
pub const DEFAULT_QR_TOL: f64 = 1e-3;

/// TridiagonalEigen — approximate eigen-decomposition of a tridiagonal matrix.
///
/// Fields
/// ------
/// - `eigenvalues`: `Array1<f64>`
///   Diagonal of the final iterate `Qₙᵀ⋯Q₁ᵀ T Q₁⋯Qₙ`.
/// - `eigenvectors`: `Array2<f64>`
///   Accumulated orthogonal factor `V = Q₁⋯Qₙ`; column `j` pairs with
///   `eigenvalues[j]`.
/// - `iterations`: `usize`
///   Number of QR sweeps performed (≤ requested budget).
/// - `converged`: `bool`
///   Whether every off-diagonal fell below the tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalEigen {
    pub eigenvalues: Array1<f64>,
    pub eigenvectors: Array2<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// 2×2 Householder reflection mapping `x` onto a multiple of `e₁`.
///
/// Parameters
/// ----------
/// - `x`: `[f64; 2]`
///   Vector to annihilate below its first entry.
///
/// Returns
/// -------
/// `[[f64; 2]; 2]`
///   Symmetric orthogonal `H` with `H x = (−sign(x₀)‖x‖, 0)`, or the identity
///   when `x = 0`.
pub fn householder_reflection(x: [f64; 2]) -> [[f64; 2]; 2] {
    let norm = x[0].hypot(x[1]);
    if norm == 0.0 {
        return [[1.0, 0.0], [0.0, 1.0]];
    }
    let sign = if x[0] >= 0.0 { 1.0 } else { -1.0 };
    let alpha = -sign * norm;
    let v = [x[0] - alpha, x[1]];
    let vv = v[0] * v[0] + v[1] * v[1];
    [
        [1.0 - 2.0 * v[0] * v[0] / vv, -2.0 * v[0] * v[1] / vv],
        [-2.0 * v[1] * v[0] / vv, 1.0 - 2.0 * v[1] * v[1] / vv],
    ]
}

/// Approximate eigenpairs of a symmetric tridiagonal matrix by unshifted QR.
///
/// Parameters
/// ----------
/// - `t`: `ArrayView2<f64>`
///   Symmetric tridiagonal `k × k` matrix.
/// - `iterations`: `usize`
///   Maximum number of QR sweeps (≥ 1).
/// - `tol`: `f64`
///   Convergence threshold on off-diagonal magnitudes (finite, > 0).
///
/// Returns
/// -------
/// `LinalgResult<TridiagonalEigen>`
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` if `t` is empty.
/// - `LinalgError::NotSquare` if `t` is not square.
/// - `LinalgError::InvalidIterations` if `iterations == 0`.
/// - `LinalgError::InvalidTolerance` if `tol` is non-finite or ≤ 0.
///
/// Notes
/// -----
/// - A 1×1 input converges immediately after one sweep with `V = [[1]]`.
/// - Exhausting the budget is not an error; inspect `converged`.
pub fn eigen(t: ArrayView2<f64>, iterations: usize, tol: f64) -> LinalgResult<TridiagonalEigen> {
    let (rows, cols) = t.dim();
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyMatrix);
    }
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if iterations == 0 {
        return Err(LinalgError::InvalidIterations { value: iterations });
    }
    if !(tol.is_finite() && tol > 0.0) {
        return Err(LinalgError::InvalidTolerance { value: tol });
    }

    let k = rows;
    let mut a = t.to_owned();
    let mut v = Array2::<f64>::eye(k);
    let mut performed = 0;
    let mut converged = false;

    while performed < iterations {
        let q = qr_sweep(&mut a);
        a = a.dot(&q);
        v = v.dot(&q);
        performed += 1;

        if max_off_diagonal(&a) < tol {
            converged = true;
            break;
        }
    }

    Ok(TridiagonalEigen {
        eigenvalues: a.diag().to_owned(),
        eigenvectors: v,
        iterations: performed,
        converged,
    })
}

// ---- Helpers ----

/// Overwrite `a` with the `R` factor and return the accumulated `Q`.
fn qr_sweep(a: &mut Array2<f64>) -> Array2<f64> {
    let k = a.nrows();
    let mut q = Array2::<f64>::eye(k);
    for i in 0..k.saturating_sub(1) {
        let h = householder_reflection([a[[i, i]], a[[i + 1, i]]]);
        for c in 0..(i + 3).min(k) {
            let (top, bottom) = (a[[i, c]], a[[i + 1, c]]);
            a[[i, c]] = h[0][0] * top + h[0][1] * bottom;
            a[[i + 1, c]] = h[1][0] * top + h[1][1] * bottom;
        }
        for r in 0..k {
            let (left, right) = (q[[r, i]], q[[r, i + 1]]);
            q[[r, i]] = left * h[0][0] + right * h[1][0];
            q[[r, i + 1]] = left * h[0][1] + right * h[1][1];
        }
    }
    q
}

fn max_off_diagonal(a: &Array2<f64>) -> f64 {
    a.indexed_iter()
        .filter(|((i, j), _)| i != j)
        .fold(0.0_f64, |acc, (_, x)| acc.max(x.abs()))
}
