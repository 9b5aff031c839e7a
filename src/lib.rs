//! rust_changepoint — singular spectrum transformation change points and
//! Hotelling T² outliers, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, with the `python-bindings`
//! feature, as the PyO3 bridge that exposes the detectors through the
//! `_rust_changepoint` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: [`changepoint`] (SST scores), [`anomaly`]
//!   (Hotelling T² flags) and [`linalg`] (numerical kernels).
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer, and
//!   register the `changepoint` and `anomaly` submodules in `sys.modules`
//!   so dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file only converts
//!   inputs, forwards calls and maps errors.
//! - Python-visible constructors validate through the same Rust builders
//!   (`SSTParams::new`, `LanczosOptions`) as native callers.
//!
//! Conventions
//! -----------
//! - Python classes live under `rust_changepoint.<submodule>`.
//! - Rust errors convert into `ValueError` with their `Display` message.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_sst_pipeline.rs`; the PyO3 layer is exercised from
//!   Python.

pub mod anomaly;
pub mod changepoint;
pub mod linalg;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    anomaly::hotelling,
    changepoint::SST,
    utils::{build_sst, extract_f64_array},
};

/// SST — Python-facing wrapper for singular spectrum transformation.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `SST(w, m=2, k=None, L=None, lanczos=False, seed=None)`:
/// - `w`: window length.
/// - `m`: retained directions, `m ≤ min(w, k)`.
/// - `k`, `L`: column count and lag; default `⌊w/2⌋` and `⌊k/2⌋`.
/// - `lanczos`: use the Lanczos approximation instead of exact SVDs.
/// - `seed`: RNG seed for the Lanczos path.
///
/// Notes
/// -----
/// - Rust callers should use [`changepoint::SST`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_changepoint.changepoint", name = "SST", frozen)]
pub struct PySST {
    inner: SST,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PySST {
    #[new]
    #[pyo3(
        text_signature = "(w, /, m=2, k=None, L=None, lanczos=False, seed=None)",
        signature = (w, m = 2, k = None, L = None, lanczos = false, seed = None)
    )]
    #[allow(non_snake_case)]
    pub fn new(
        w: usize, m: usize, k: Option<usize>, L: Option<usize>, lanczos: bool, seed: Option<u64>,
    ) -> PyResult<PySST> {
        Ok(PySST { inner: build_sst(w, m, k, L, lanczos, seed)? })
    }

    /// Change scores for every admissible index; same length as `data`.
    pub fn detect<'py>(
        &self, py: Python<'py>, data: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let arr = extract_f64_array(py, data)?;
        let series = arr
            .as_slice()
            .map_err(|_| PyValueError::new_err("data must be a contiguous 1-D float64 array"))?;
        let scores = self.inner.detect(series)?;
        Ok(scores.into_pyarray(py))
    }

    /// Change score at the newest admissible index, or 0.0 if too short.
    pub fn stream_detect<'py>(&self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<f64> {
        let arr = extract_f64_array(py, data)?;
        let series = arr
            .as_slice()
            .map_err(|_| PyValueError::new_err("data must be a contiguous 1-D float64 array"))?;
        Ok(self.inner.stream_detect(series)?)
    }

    #[getter]
    pub fn w(&self) -> usize {
        self.inner.params().w()
    }

    #[getter]
    pub fn m(&self) -> usize {
        self.inner.params().m()
    }

    #[getter]
    pub fn k(&self) -> usize {
        self.inner.params().k()
    }

    #[getter(L)]
    pub fn lag(&self) -> usize {
        self.inner.params().l()
    }

    #[getter]
    pub fn lanczos(&self) -> bool {
        self.inner.method().is_lanczos()
    }
}

/// Hotelling — Python-facing one-dimensional Hotelling T² detector.
///
/// `Hotelling().detect(data, threshold)` returns a list of
/// `(index, value)` tuples whose abnormality exceeds the χ²(1) cut-off.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_changepoint.anomaly", frozen)]
#[derive(Default)]
pub struct Hotelling {}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Hotelling {
    #[new]
    pub fn new() -> Self {
        Hotelling {}
    }

    pub fn detect<'py>(
        &self, py: Python<'py>, data: &Bound<'py, PyAny>, threshold: f64,
    ) -> PyResult<Vec<(usize, f64)>> {
        let arr = extract_f64_array(py, data)?;
        let series = arr
            .as_slice()
            .map_err(|_| PyValueError::new_err("data must be a contiguous 1-D float64 array"))?;
        Ok(hotelling::detect(series, threshold)?)
    }
}

/// _rust_changepoint — PyO3 module initializer.
///
/// Creates the `changepoint` and `anomaly` submodules, attaches them to the
/// extension module and registers them in `sys.modules` under
/// `rust_changepoint.<name>`.
///
/// Errors
/// ------
/// - `PyErr` if creating a submodule or updating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_changepoint<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let changepoint_mod = PyModule::new(py, "changepoint")?;
    changepoint_mod.add_class::<PySST>()?;
    m.add_submodule(&changepoint_mod)?;

    let anomaly_mod = PyModule::new(py, "anomaly")?;
    anomaly_mod.add_class::<Hotelling>()?;
    m.add_submodule(&anomaly_mod)?;

    let modules = py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_changepoint.changepoint", changepoint_mod)?;
    modules.set_item("rust_changepoint.anomaly", anomaly_mod)?;
    Ok(())
}
