//! rust_retention — sBG customer-retention modeling with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the shifted-beta-geometric retention model to Python via the
//! `_rust_retention` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`retention` and `optimization`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_retention` Python extension when `python-bindings` is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts
//!   (`ShiftedBetaGeom`, `SBGParams`, `OptimOutcome`).
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are carried as `RetentionError` internally and
//!   converted to `ValueError` at the PyO3 boundary.
//! - The library never installs a `tracing` subscriber; applications do.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`retention`] (or its prelude) and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_retention` and may wrap its
//!   classes in pure-Python facades.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   `tests/integration_sbg_pipeline.rs` end-to-end test.

pub mod optimization;
pub mod retention;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::loglik_optimizer::OptimOutcome,
    retention::{
        core::{comparison::RetentionComparison, forecasts::DEFAULT_PREDICT_PERIODS},
        errors::RetentionError,
        models::sbg::ShiftedBetaGeom as SBGModel,
    },
    utils::{extract_counts, extract_sbg_options},
};

/// ShiftedBetaGeom — Python-facing wrapper for the sBG retention model.
///
/// Purpose
/// -------
/// Expose [`SBGModel`] to Python callers while preserving the Rust
/// lifecycle and error handling.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `ShiftedBetaGeom(initial_alpha=0.1, initial_beta=0.1, tol=None, max_iter=None, verbose=False)`:
/// - `initial_alpha`, `initial_beta`: optimizer starting point, > 0.
/// - `tol`: simplex cost standard-deviation tolerance (default `1e-10`).
/// - `max_iter`: iteration cap (default `400`).
/// - `verbose`: log the starting objective at `debug` level.
///
/// Notes
/// -----
/// - Getters that need a fitted model raise `ValueError` before `train`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_retention", name = "ShiftedBetaGeom")]
pub struct PyShiftedBetaGeom {
    pub inner: SBGModel,
}

#[cfg(feature = "python-bindings")]
impl PyShiftedBetaGeom {
    fn outcome(&self) -> PyResult<&OptimOutcome> {
        Ok(self.inner.results().ok_or(RetentionError::ModelNotTrained)?)
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyShiftedBetaGeom {
    #[new]
    #[pyo3(
        signature = (initial_alpha = None, initial_beta = None, tol = None, max_iter = None, verbose = None),
        text_signature = "(initial_alpha=0.1, initial_beta=0.1, tol=None, max_iter=None, verbose=False)"
    )]
    pub fn new(
        initial_alpha: Option<f64>, initial_beta: Option<f64>, tol: Option<f64>,
        max_iter: Option<usize>, verbose: Option<bool>,
    ) -> PyResult<Self> {
        let options = extract_sbg_options(initial_alpha, initial_beta, tol, max_iter, verbose)?;
        Ok(PyShiftedBetaGeom { inner: SBGModel::new(options) })
    }

    /// Fit `(alpha, beta)` to retained-customer counts; returns the pair.
    #[pyo3(text_signature = "(self, data, /)")]
    pub fn train<'py>(&mut self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<(f64, f64)> {
        let counts = extract_counts(py, data)?;
        let params = self.inner.train(&counts)?;
        Ok(params.as_tuple())
    }

    /// Normalized retention curve with `periods + 1` points.
    #[pyo3(signature = (periods = DEFAULT_PREDICT_PERIODS), text_signature = "(self, periods=36)")]
    pub fn predict(&self, periods: usize) -> PyResult<Vec<f64>> {
        Ok(self.inner.predict(periods)?.to_vec())
    }

    #[getter]
    pub fn is_trained(&self) -> bool {
        self.inner.is_trained()
    }

    #[getter]
    pub fn params(&self) -> PyResult<(f64, f64)> {
        let params = self.inner.params().ok_or(RetentionError::ModelNotTrained)?;
        Ok(params.as_tuple())
    }

    #[getter]
    pub fn alpha(&self) -> PyResult<f64> {
        Ok(self.params()?.0)
    }

    #[getter]
    pub fn beta(&self) -> PyResult<f64> {
        Ok(self.params()?.1)
    }

    #[getter]
    pub fn converged(&self) -> PyResult<bool> {
        Ok(self.outcome()?.converged)
    }

    #[getter]
    pub fn status(&self) -> PyResult<String> {
        Ok(self.outcome()?.status.clone())
    }

    #[getter]
    pub fn iterations(&self) -> PyResult<usize> {
        Ok(self.outcome()?.iterations)
    }

    /// Maximized log-likelihood.
    #[getter]
    pub fn loglik(&self) -> PyResult<f64> {
        Ok(self.outcome()?.value)
    }

    #[getter]
    pub fn fn_evals(&self) -> PyResult<Vec<(String, u64)>> {
        Ok(self.outcome()?.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect())
    }
}

/// Normalize and align actual and predicted curves for plotting.
///
/// Returns a dict with keys `t`, `actual`, `predicted` (missing values are
/// `None`), `title`, and `train_period`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (actual, predicted, title = String::new(), train_period = None),
    text_signature = "(actual, predicted, /, title='', train_period=None)"
)]
pub fn retention_comparison<'py>(
    py: Python<'py>, actual: &Bound<'py, PyAny>, predicted: &Bound<'py, PyAny>, title: String,
    train_period: Option<usize>,
) -> PyResult<Bound<'py, pyo3::types::PyDict>> {
    let actual = extract_counts(py, actual)?;
    let predicted = extract_counts(py, predicted)?;
    let cmp = RetentionComparison::new(&actual, &predicted, title, train_period)?;

    let out = pyo3::types::PyDict::new(py);
    out.set_item("t", cmp.periods)?;
    out.set_item("actual", cmp.actual)?;
    out.set_item("predicted", cmp.predicted)?;
    out.set_item("title", cmp.title)?;
    out.set_item("train_period", cmp.train_period)?;
    Ok(out)
}

/// _rust_retention — PyO3 module initializer for the Python extension.
///
/// Invoked by Python when importing the compiled extension; registers the
/// model class and the comparison helper.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_retention<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<PyShiftedBetaGeom>()?;
    m.add_function(wrap_pyfunction!(retention_comparison, m)?)?;
    m.add("DEFAULT_PREDICT_PERIODS", DEFAULT_PREDICT_PERIODS)?;
    Ok(())
}
