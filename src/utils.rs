//! Python-boundary helpers: argument extraction and option building.
//!
//! Everything here is compiled only with the `python-bindings` feature and is
//! used by the `#[pyclass]` wrappers in the crate root.
#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::loglik_optimizer::{MLEOptions, Tolerances},
    retention::{
        core::options::{DEFAULT_INITIAL_GUESS, SBGOptions},
        errors::RetentionError,
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Fast path for numeric input: a contiguous float64 numpy array, a pandas
/// Series (via `to_numpy`), or a sequence of floats.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract retained-customer counts from any Python iterable.
///
/// Numeric arrays take the fast path. Otherwise elements are read one by one
/// so that the first element that is not a number is reported as
/// `NonNumericData { index }` (e.g. `['a', 'b']`), matching the loader's
/// error precedence. `None` is rejected the same way.
#[cfg(feature = "python-bindings")]
pub fn extract_counts<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(arr) = extract_f64_array(py, raw_data) {
        if let Ok(slice) = arr.as_slice() {
            return Ok(slice.to_vec());
        }
    }

    let mut out = Vec::new();
    for (index, item) in raw_data.try_iter()?.enumerate() {
        let item = item?;
        let value: f64 =
            item.extract().map_err(|_| PyErr::from(RetentionError::NonNumericData { index }))?;
        out.push(value);
    }
    Ok(out)
}

/// Build validated [`SBGOptions`] from Python keyword arguments.
///
/// `tol` and `max_iter` fall back to the library defaults when `None`.
#[cfg(feature = "python-bindings")]
pub fn extract_sbg_options(
    initial_alpha: Option<f64>, initial_beta: Option<f64>, tol: Option<f64>,
    max_iter: Option<usize>, verbose: Option<bool>,
) -> PyResult<SBGOptions> {
    let defaults = Tolerances::default();
    // Tolerances::new -> OptResult<Tolerances> -> RetentionError -> PyErr
    let tols = Tolerances::new(tol.or(defaults.tol_sd), max_iter.or(defaults.max_iter))
        .map_err(RetentionError::from)?;
    let mle_opts = MLEOptions::new(tols, verbose.unwrap_or(false));
    let opts = SBGOptions::new(
        initial_alpha.unwrap_or(DEFAULT_INITIAL_GUESS),
        initial_beta.unwrap_or(DEFAULT_INITIAL_GUESS),
        mle_opts,
    )?;
    Ok(opts)
}
