//! linalg::power — crude power iteration for the leading singular triplet.
//!
//! Purpose
//! -------
//! Estimate the dominant singular triplet `(u, s, v)` of a rectangular
//! matrix `A` by repeatedly applying `AᵀA` to a start vector. The Lanczos
//! change-score path uses the left vector `u` of the test matrix as the
//! Krylov seed.
//!
//! Key behaviors
//! -------------
//! - [`power_iterate`] draws a standard-normal start vector from an injected
//!   random source, so callers control determinism by choosing the RNG.
//! - [`power_iterate_from`] runs the same iteration from an explicit start
//!   vector; it is the deterministic core used by tests.
//! - The default budget is a single iteration. This is a deliberately rough
//!   approximation, not a converged power method.
//!
//! Invariants & assumptions
//! ------------------------
//! - `A` has at least one row and one column.
//! - Degenerate inputs (zero matrix, zero start vector) are reported as
//!   [`LinalgError::ZeroNorm`] instead of propagating NaN.
//!
//! Testing notes
//! -------------
//! - Unit tests cover output shapes, convergence to a known triplet up to
//!   sign, seeded reproducibility and the zero-matrix failure.
use crate::linalg::{
    errors::{LinalgError, LinalgResult},
    l2_norm,
};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;
use rand_distr::StandardNormal;

/// Iteration budget used when callers do not ask for more.
pub const DEFAULT_POWER_ITERATIONS: usize = 1;

/// SingularTriplet — approximate leading singular triplet of a matrix.
///
/// Fields
/// ------
/// - `u`: `Array1<f64>`
///   Unit-norm left singular vector, length = number of rows of `A`.
/// - `s`: `f64`
///   Singular value estimate `‖A v‖ > 0`.
/// - `v`: `Array1<f64>`
///   Unit-norm right singular vector, length = number of columns of `A`.
///
/// Invariants
/// ----------
/// - `A v = s u` holds exactly up to rounding, by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularTriplet {
    pub u: Array1<f64>,
    pub s: f64,
    pub v: Array1<f64>,
}

/// Power iteration from a random standard-normal start vector.
///
/// Parameters
/// ----------
/// - `a`: `ArrayView2<f64>`
///   Target matrix of shape `n × p`.
/// - `iterations`: `usize`
///   Number of `q ← (AᵀA) q` updates. Zero is allowed and returns the
///   normalized random direction mapped through `A`.
/// - `rng`: `&mut R`
///   Random source for the start vector. Pass a seeded
///   `rand::rngs::StdRng` for reproducible results.
///
/// Returns
/// -------
/// `LinalgResult<SingularTriplet>`
///   The approximate dominant triplet, or an error for degenerate input.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` if `a` has no rows or no columns.
/// - `LinalgError::ZeroNorm` if the iterate or `A v` collapses to zero.
pub fn power_iterate<R: Rng + ?Sized>(
    a: ArrayView2<f64>, iterations: usize, rng: &mut R,
) -> LinalgResult<SingularTriplet> {
    let p = a.ncols();
    let q0: Array1<f64> = (0..p).map(|_| rng.sample::<f64, _>(StandardNormal)).collect();
    power_iterate_from(a, q0.view(), iterations)
}

/// Power iteration from an explicit start vector.
///
/// Parameters
/// ----------
/// - `a`: `ArrayView2<f64>`
///   Target matrix of shape `n × p`.
/// - `q0`: `ArrayView1<f64>`
///   Start vector of length `p`. It is normalized before use, so only its
///   direction matters.
/// - `iterations`: `usize`
///   Number of `q ← (AᵀA) q` updates.
///
/// Returns
/// -------
/// `LinalgResult<SingularTriplet>` with `v = q/‖q‖`, `s = ‖A v‖`,
/// `u = A v / s`.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` if `a` has no rows or no columns.
/// - `LinalgError::DimensionMismatch` if `q0.len() != a.ncols()`.
/// - `LinalgError::ZeroNorm` if `q0`, the final iterate or `A v` has zero or
///   non-finite norm.
///
/// Notes
/// -----
/// - `AᵀA` is formed once (`p × p`) and reused across iterations.
pub fn power_iterate_from(
    a: ArrayView2<f64>, q0: ArrayView1<f64>, iterations: usize,
) -> LinalgResult<SingularTriplet> {
    let (n, p) = a.dim();
    if n == 0 || p == 0 {
        return Err(LinalgError::EmptyMatrix);
    }
    if q0.len() != p {
        return Err(LinalgError::DimensionMismatch { expected: p, actual: q0.len() });
    }

    let q0_norm = l2_norm(q0);
    if !(q0_norm.is_finite() && q0_norm > 0.0) {
        return Err(LinalgError::ZeroNorm { context: "power iteration start vector" });
    }
    let mut q = q0.mapv(|x| x / q0_norm);

    let gram = a.t().dot(&a);
    for _ in 0..iterations {
        q = gram.dot(&q);
    }

    let q_norm = l2_norm(q.view());
    if !(q_norm.is_finite() && q_norm > 0.0) {
        return Err(LinalgError::ZeroNorm { context: "power iteration iterate" });
    }
    let v = q / q_norm;
    let av = a.dot(&v);
    let s = l2_norm(av.view());
    if !(s.is_finite() && s > 0.0) {
        return Err(LinalgError::ZeroNorm { context: "power iteration image A v" });
    }
    let u = av / s;

    Ok(SingularTriplet { u, s, v })
}
