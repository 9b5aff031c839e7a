//! linalg — dense numerical kernels behind singular spectrum transformation.
//!
//! Purpose
//! -------
//! Collect the small linear-algebra routines the change-score engine needs:
//! an approximate leading singular triplet, a Lanczos tridiagonalizer, an
//! unshifted QR eigensolver for tridiagonal matrices, and a thin bridge to
//! `nalgebra` for full singular value decompositions.
//!
//! Key behaviors
//! -------------
//! - [`power`]: crude power iteration with an injected random source.
//! - [`lanczos`]: three-term Lanczos recurrence without re-orthogonalization.
//! - [`tridiagonal`]: Householder-based QR iterations on a tridiagonal band.
//! - [`svd`]: copy `ndarray` views into `nalgebra::DMatrix` and extract
//!   leading singular vectors / values.
//!
//! Invariants & assumptions
//! ------------------------
//! - All routines operate on `f64` and on `ndarray` containers at their
//!   public boundary.
//! - Shape violations and degenerate inputs are reported through
//!   [`LinalgError`]; iterative routines treat a spent iteration budget as a
//!   normal outcome.
//!
//! Conventions
//! -----------
//! - Iteration budgets default to the rough single-step settings used by the
//!   change-score path; callers that need accuracy raise them explicitly.

pub mod errors;
pub mod lanczos;
pub mod power;
pub mod svd;
pub mod tridiagonal;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{LinalgError, LinalgResult};
pub use self::lanczos::{LANCZOS_BREAKDOWN_EPS, krylov_dimension, tridiagonalize};
pub use self::power::{SingularTriplet, power_iterate, power_iterate_from};
pub use self::svd::{leading_left_singular_vectors, top_singular_value};
pub use self::tridiagonal::{TridiagonalEigen, eigen, householder_reflection};

use ndarray::ArrayView1;

/// Euclidean norm of a vector.
#[inline]
pub(crate) fn l2_norm(v: ArrayView1<f64>) -> f64 {
    v.dot(&v).sqrt()
}
