//! changepoint::options — configuration for the Lanczos scoring path.
//!
//! Purpose
//! -------
//! Bundle the iteration budgets, the QR tolerance and the optional RNG seed
//! used by the approximate (Lanczos) change score.
//!
//! Key behaviors
//! -------------
//! - [`LanczosOptions::new`] validates budgets and tolerance once.
//! - [`LanczosOptions::default`] reproduces the rough single-iteration
//!   settings: one power iteration, one QR sweep, `tol = 1e-3`, no seed.
//! - [`LanczosOptions::rng`] builds a fresh `StdRng` for one scoring call,
//!   seeded when a seed is configured and from OS entropy otherwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - `power_iterations ≥ 1`, `qr_iterations ≥ 1`, `tol` finite and `> 0`.
//!   Fields are private, so every instance comes from `new`, `Default`,
//!   `seeded` or `with_seed` and the eigensolver never sees an unchecked
//!   budget.
//! - An unseeded configuration makes the Lanczos score non-deterministic
//!   across calls; set `seed` for reproducible output.
use crate::{
    changepoint::errors::{SSTError, SSTResult},
    linalg::{
        power::DEFAULT_POWER_ITERATIONS,
        tridiagonal::{DEFAULT_QR_ITERATIONS, DEFAULT_QR_TOL},
    },
};
use rand::{SeedableRng, rngs::StdRng};

/// LanczosOptions — knobs of the approximate change score.
///
/// Fields
/// ------
/// - `power_iterations`: `usize`
///   Power-iteration steps used to build the Krylov seed from the test
///   matrix.
/// - `qr_iterations`: `usize`
///   Maximum QR sweeps in the tridiagonal eigensolver.
/// - `tol`: `f64`
///   Off-diagonal tolerance that ends the QR sweeps early.
/// - `seed`: `Option<u64>`
///   Seed for the random start vector of the power iteration.
///
/// All fields are private and read through getters of the same name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanczosOptions {
    power_iterations: usize,
    qr_iterations: usize,
    tol: f64,
    seed: Option<u64>,
}

impl LanczosOptions {
    /// Construct validated Lanczos options.
    ///
    /// Errors
    /// ------
    /// - `SSTError::InvalidIterations` if either budget is zero.
    /// - `SSTError::InvalidTolerance` if `tol` is non-finite or `≤ 0`.
    pub fn new(
        power_iterations: usize, qr_iterations: usize, tol: f64, seed: Option<u64>,
    ) -> SSTResult<Self> {
        if power_iterations == 0 {
            return Err(SSTError::InvalidIterations {
                param: "power_iterations",
                value: power_iterations,
            });
        }
        if qr_iterations == 0 {
            return Err(SSTError::InvalidIterations {
                param: "qr_iterations",
                value: qr_iterations,
            });
        }
        if !(tol.is_finite() && tol > 0.0) {
            return Err(SSTError::InvalidTolerance { value: tol });
        }
        Ok(LanczosOptions { power_iterations, qr_iterations, tol, seed })
    }

    /// Default options with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        LanczosOptions { seed: Some(seed), ..LanczosOptions::default() }
    }

    /// Same options with the seed replaced (`None` clears it).
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        LanczosOptions { seed, ..self }
    }

    pub fn power_iterations(&self) -> usize {
        self.power_iterations
    }

    pub fn qr_iterations(&self) -> usize {
        self.qr_iterations
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Fresh random source for one scoring call.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for LanczosOptions {
    fn default() -> Self {
        LanczosOptions {
            power_iterations: DEFAULT_POWER_ITERATIONS,
            qr_iterations: DEFAULT_QR_ITERATIONS,
            tol: DEFAULT_QR_TOL,
            seed: None,
        }
    }
}
