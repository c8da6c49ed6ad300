//! Python-boundary helpers for the `_rust_unitconv` extension module.
//!
//! Everything here is gated behind the `python-bindings` feature; native
//! Rust callers never need it. The single job of this module is coercing
//! arbitrary Python array-likes into contiguous `f64` buffers before the
//! pure converters run.

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Coerce a Python object into a read-only 1-D `f64` numpy view.
///
/// Accepts, in order of preference:
/// 1. a contiguous 1-D `numpy.ndarray` of `float64`,
/// 2. anything with a `to_numpy()` method yielding one (e.g. a pandas
///    `Series`),
/// 3. any sequence extractable as `Vec<f64>` (copied into a fresh array).
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_values: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_values.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_values.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_values.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}
