//! changepoint::scoring — subspace-similarity strategies for the change score.
//!
//! Purpose
//! -------
//! Turn one (trajectory, test) pair of window matrices into a scalar change
//! score in `[0, 1]`, where 0 means the dominant subspaces coincide and 1
//! means they are orthogonal.
//!
//! Key behaviors
//! -------------
//! - [`SubspaceScorer`] is the strategy seam; the orchestrator only sees this
//!   trait through [`ScoringMethod`].
//! - [`DirectSvdScorer`] compares the top-`m` left singular subspaces
//!   exactly: `1 − σ₁(U₁ᵀ U₂)`.
//! - [`LanczosScorer`] approximates the same quantity through a power
//!   iteration seed, a Lanczos tridiagonalization of `X Xᵀ` and a rough QR
//!   eigensolve: `1 − Σⱼ V[0, j]²` over the top-`m` eigenvectors that carry
//!   energy (`λⱼ` above a floor relative to `trace(X Xᵀ)`).
//! - When the Krylov space breaks down early, only the realized leading
//!   block is eigensolved. A seed with no image under `X Xᵀ` (e.g. a silent
//!   history window) captures nothing and scores 1, as on the direct path.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scores are clamped to `[0, 1]`; rounding can otherwise push them a few
//!   ulps outside.
//! - `m ≤ min(w, k)` is guaranteed by `SSTParams`, so the thin SVD always has
//!   enough singular vectors.
//! - The Lanczos path is an approximation. With the default single
//!   iterations its scores are smaller and noisier than the direct ones, and
//!   for `m = 1` the tridiagonal matrix is `1 × 1`, so the score is 0 unless
//!   the seed has no image under `X Xᵀ`, in which case it is 1.
//!
//! Conventions
//! -----------
//! - The Lanczos matrix order is `2m` for even `m` and `2m − 1` for odd `m`.
//! - Each scoring call receives its RNG from the orchestrator; the direct
//!   path ignores it.
//!
//! Testing notes
//! -------------
//! - Unit tests cover identical and orthogonal subspaces for the direct
//!   path, identical subspaces and bounds for the Lanczos path, the order
//!   rule, and delegation through `ScoringMethod`.
use crate::{
    changepoint::{errors::SSTResult, options::LanczosOptions},
    linalg::{
        LANCZOS_BREAKDOWN_EPS, eigen, krylov_dimension, leading_left_singular_vectors,
        power_iterate, top_singular_value, tridiagonalize,
    },
};
use ndarray::{ArrayView2, s};
use rand::{SeedableRng, rngs::StdRng};
use tracing::trace;

/// SubspaceScorer — strategy that compares the dominant subspaces of two
/// window matrices.
pub trait SubspaceScorer {
    /// Change score in `[0, 1]` for one (trajectory, test) pair.
    ///
    /// Parameters
    /// ----------
    /// - `trajectory`: `ArrayView2<f64>`
    ///   History window, `w × k`.
    /// - `test`: `ArrayView2<f64>`
    ///   Current window, `w × k`.
    /// - `m`: `usize`
    ///   Number of dominant directions compared.
    /// - `rng`: `&mut StdRng`
    ///   Random source for strategies that need one.
    fn score(
        &self, trajectory: ArrayView2<f64>, test: ArrayView2<f64>, m: usize, rng: &mut StdRng,
    ) -> SSTResult<f64>;
}

/// Exact subspace comparison via two thin SVDs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectSvdScorer;

impl SubspaceScorer for DirectSvdScorer {
    fn score(
        &self, trajectory: ArrayView2<f64>, test: ArrayView2<f64>, m: usize, _rng: &mut StdRng,
    ) -> SSTResult<f64> {
        let u_tra = leading_left_singular_vectors(trajectory, m)?;
        let u_test = leading_left_singular_vectors(test, m)?;
        let cross = u_tra.t().dot(&u_test);
        let s1 = top_singular_value(cross.view())?;
        Ok(clamp_unit(1.0 - s1))
    }
}

/// Approximate subspace comparison via power iteration, Lanczos and QR.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LanczosScorer {
    pub options: LanczosOptions,
}

impl LanczosScorer {
    pub fn new(options: LanczosOptions) -> Self {
        LanczosScorer { options }
    }
}

impl SubspaceScorer for LanczosScorer {
    fn score(
        &self, trajectory: ArrayView2<f64>, test: ArrayView2<f64>, m: usize, rng: &mut StdRng,
    ) -> SSTResult<f64> {
        let seed = power_iterate(test, self.options.power_iterations(), rng)?;
        let gram = trajectory.dot(&trajectory.t());
        let size = lanczos_size(m);

        let tri = tridiagonalize(gram.view(), seed.u.view(), size)?;
        let dim = krylov_dimension(tri.view());
        let block = tri.slice(s![..dim, ..dim]);
        let decomposition = eigen(block, self.options.qr_iterations(), self.options.tol())?;
        trace!(
            size,
            dim,
            sweeps = decomposition.iterations,
            converged = decomposition.converged,
            "tridiagonal eigensolve"
        );

        // Ritz values at rounding level belong to directions outside range(X Xᵀ).
        let floor = LANCZOS_BREAKDOWN_EPS * gram.diag().sum();
        let mut order: Vec<usize> = (0..dim).collect();
        order.sort_by(|&i, &j| {
            decomposition.eigenvalues[j].total_cmp(&decomposition.eigenvalues[i])
        });
        let captured: f64 = order
            .iter()
            .take(m)
            .filter(|&&j| decomposition.eigenvalues[j] > floor)
            .map(|&j| decomposition.eigenvectors[[0, j]].powi(2))
            .sum();

        Ok(clamp_unit(1.0 - captured))
    }
}

/// ScoringMethod — the strategy an `SST` instance was built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringMethod {
    DirectSvd(DirectSvdScorer),
    Lanczos(LanczosScorer),
}

impl ScoringMethod {
    /// Exact SVD strategy.
    pub fn direct() -> Self {
        ScoringMethod::DirectSvd(DirectSvdScorer)
    }

    /// Lanczos strategy with the given options.
    pub fn lanczos(options: LanczosOptions) -> Self {
        ScoringMethod::Lanczos(LanczosScorer::new(options))
    }

    pub fn is_lanczos(&self) -> bool {
        matches!(self, ScoringMethod::Lanczos(_))
    }

    /// Random source for one detection call.
    ///
    /// The direct path never draws from it, so a fixed seed avoids an
    /// entropy read per call.
    pub fn rng(&self) -> StdRng {
        match self {
            ScoringMethod::DirectSvd(_) => StdRng::seed_from_u64(0),
            ScoringMethod::Lanczos(scorer) => scorer.options.rng(),
        }
    }
}

impl Default for ScoringMethod {
    fn default() -> Self {
        ScoringMethod::direct()
    }
}

impl SubspaceScorer for ScoringMethod {
    fn score(
        &self, trajectory: ArrayView2<f64>, test: ArrayView2<f64>, m: usize, rng: &mut StdRng,
    ) -> SSTResult<f64> {
        match self {
            ScoringMethod::DirectSvd(scorer) => scorer.score(trajectory, test, m, rng),
            ScoringMethod::Lanczos(scorer) => scorer.score(trajectory, test, m, rng),
        }
    }
}

/// Lanczos matrix order for `m` retained directions.
pub(crate) fn lanczos_size(m: usize) -> usize {
    if m % 2 == 0 { 2 * m } else { 2 * m - 1 }
}

fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
