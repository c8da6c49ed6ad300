//! rust_unitconv — elementwise distance unit conversion with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the distance converters to Python via the `_rust_unitconv`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing functions and submodules used by the
//! `rust_unitconv` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`distance`) as the public crate
//!   surface.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   the `_rust_unitconv` Python extension.
//! - Create and register the `distance` submodule under `rust_unitconv`
//!   so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the `distance` module; this file
//!   performs only FFI glue, input coercion, and error mapping.
//! - The Python-visible functions mirror the semantics of their Rust
//!   counterparts: `convert_distance` signals unknown labels with NaN fill,
//!   `convert_metric` raises `ValueError` for unknown labels and uncovered
//!   pairs.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`distance::ConvError`]
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//! - Native Rust code should depend directly on the `distance` module and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration test under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that the functions can be
//!   called and round-tripped correctly from Python.

pub mod distance;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::ArrayView1;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny, wrap_pyfunction};

#[cfg(feature = "python-bindings")]
use crate::utils::extract_f64_array;

/// Convert a numeric sequence between distance units given as labels.
///
/// Purpose
/// -------
/// Python-facing wrapper over [`distance::convert_distance`]: coerce the
/// input to a contiguous `f64` buffer, run the pure converter, and hand the
/// result back as a fresh `numpy.ndarray`.
///
/// Parameters
/// ----------
/// - `values`: array-like of float64
///   One-dimensional input sequence.
/// - `from_unit`, `to_unit`: `str`
///   Case-sensitive unit labels; recognized labels are `"inch"`, `"cm"`,
///   and `"mm"`.
///
/// Returns
/// -------
/// `numpy.ndarray`
///   Converted values, or an all-NaN array of the same length when either
///   label is unrecognized (the source label is checked first).
///
/// Notes
/// -----
/// - This function never raises for unknown labels; NaN is the missing
///   marker, matching the semantics of the native converter.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "convert_distance",
    text_signature = "(values, from_unit, to_unit, /)",
    signature = (raw_values, from_unit, to_unit)
)]
fn py_convert_distance<'py>(
    py: Python<'py>, raw_values: &Bound<'py, PyAny>, from_unit: &str, to_unit: &str,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let arr = extract_f64_array(py, raw_values)?;
    let values: ArrayView1<'_, f64> = ArrayView1::from(
        arr.as_slice()
            .expect("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64"),
    );
    let out = distance::convert_distance(values, from_unit, to_unit);
    Ok(out.into_pyarray(py))
}

/// Convert a numeric sequence between metric units (cm/mm/m).
///
/// Purpose
/// -------
/// Python-facing wrapper over [`distance::convert_metric`]. Unlike
/// `convert_distance`, failures here are structured: unknown labels and
/// uncovered unit pairs raise `ValueError`.
///
/// Parameters
/// ----------
/// - `values`: array-like of float64
///   One-dimensional input sequence.
/// - `from_unit`, `to_unit`: `str`
///   Case-sensitive unit labels; recognized labels are `"cm"`, `"mm"`,
///   and `"m"`.
///
/// Returns
/// -------
/// `numpy.ndarray`
///   Converted values for covered pairs (equal units, cm → mm, cm → m).
///
/// Errors
/// ------
/// - `ValueError` for an unknown label or a recognized pair with no
///   conversion rule (e.g. mm → cm).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "convert_metric",
    text_signature = "(values, from_unit, to_unit, /)",
    signature = (raw_values, from_unit, to_unit)
)]
fn py_convert_metric<'py>(
    py: Python<'py>, raw_values: &Bound<'py, PyAny>, from_unit: &str, to_unit: &str,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let arr = extract_f64_array(py, raw_values)?;
    let values: ArrayView1<'_, f64> = ArrayView1::from(
        arr.as_slice()
            .expect("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64"),
    );
    let out = distance::convert_metric(values, from_unit, to_unit)?;
    Ok(out.into_pyarray(py))
}

/// _rust_unitconv — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_unitconv` Python module and register the `distance`
/// submodule used by the public `rust_unitconv` package.
///
/// Key behaviors
/// -------------
/// - Create the `distance` submodule and attach it to the parent module.
/// - Register the submodule in `sys.modules` so it is importable via
///   dotted paths from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_unitconv<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let distance_mod = PyModule::new(_py, "distance")?;
    distance_functions(_py, m, &distance_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_unitconv.distance", distance_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn distance_functions<'py>(
    _py: Python, rust_unitconv: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_convert_distance, m)?)?;
    m.add_function(wrap_pyfunction!(py_convert_metric, m)?)?;
    rust_unitconv.add_submodule(m)?;
    Ok(())
}
