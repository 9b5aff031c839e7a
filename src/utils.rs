//! utils — Python-boundary helpers shared by the PyO3 wrappers.
//!
//! Everything here is compiled only with the `python-bindings` feature.
//! Helpers convert loosely typed Python inputs (numpy arrays, pandas
//! Series, plain sequences) into contiguous `f64` buffers and build the core
//! Rust objects from keyword arguments.

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use crate::changepoint::{LanczosOptions, SST, SSTParams, ScoringMethod};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

/// Borrow or copy a Python object as a contiguous 1-D `float64` array.
///
/// Tries, in order: a contiguous `numpy.ndarray`, an object with
/// `to_numpy()` (pandas Series), and finally any sequence of floats, which
/// is copied.
///
/// Errors
/// ------
/// - `TypeError` if none of the conversions apply.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Some(arr) = contiguous_f64(raw_data) {
        return Ok(arr);
    }
    if let Some(arr) = raw_data.call_method0("to_numpy").ok().as_ref().and_then(contiguous_f64) {
        return Ok(arr);
    }

    let copied: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("series must be a 1-D numpy.ndarray, pandas.Series or sequence of floats")
    })?;
    Ok(copied.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
fn contiguous_f64<'py>(obj: &Bound<'py, PyAny>) -> Option<PyReadonlyArray1<'py, f64>> {
    obj.extract::<PyReadonlyArray1<'py, f64>>().ok().filter(|arr| arr.as_slice().is_ok())
}

/// Build an [`SST`] from the Python constructor arguments.
///
/// `lanczos = false` selects the exact SVD path, which takes no seed;
/// `lanczos = true` uses default Lanczos options with the given seed.
///
/// Errors
/// ------
/// - `ValueError` carrying the `SSTError` message for invalid windows.
/// - `ValueError` if a seed is given without `lanczos = true`.
#[cfg(feature = "python-bindings")]
pub fn build_sst(
    w: usize, m: usize, k: Option<usize>, l: Option<usize>, lanczos: bool, seed: Option<u64>,
) -> PyResult<SST> {
    let params = SSTParams::new(w, m, k, l)?;
    let method = if lanczos {
        ScoringMethod::lanczos(LanczosOptions::default().with_seed(seed))
    } else {
        if seed.is_some() {
            return Err(PyValueError::new_err("seed is only used when lanczos=True"));
        }
        ScoringMethod::direct()
    };
    Ok(SST::with_params(params, method))
}
