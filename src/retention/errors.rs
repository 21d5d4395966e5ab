//! Errors for sBG retention models (input validation, probability-domain
//! guards, prediction degeneracy, lifecycle, and optimizer failures).
//!
//! This module defines the model error type, [`RetentionError`], used across the
//! Rust core and the Python-facing API. It implements `Display`/`Error` and, with
//! the `python-bindings` feature, converts to `PyErr`.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to the period index of the input series.
//! - Loader errors are reported for the **first** offending element, in the
//!   fixed order: missing → non-numeric → length / increasing → negative →
//!   all-zero.
//! - Optimizer/backend errors are normalized to
//!   [`RetentionError::OptimizationFailed`] with a human-readable status.
//!   Running out of iterations is *not* an error.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

use crate::optimization::errors::OptError;

/// Crate-wide result alias for retention operations that may produce
/// [`RetentionError`].
pub type RetentionResult<T> = Result<T, RetentionError>;

/// Unified error type for sBG retention modeling.
#[derive(Debug, Clone, PartialEq)]
pub enum RetentionError {
    // ---- Input/data validation ----
    /// Series is empty.
    MissingData,

    /// A data point is not a usable number (NaN/±inf, or not numeric at all).
    NonNumericData { index: usize },

    /// Series has fewer than two points, so monotonicity is undefined.
    InsufficientLength { len: usize },

    /// A later count exceeds the earlier one.
    IncreasingData { index: usize, previous: f64, current: f64 },

    /// A data point is < 0.
    NegativeData { index: usize, value: f64 },

    /// Every count is zero.
    AllZero,

    // ---- Probability engine ----
    /// Requested period lies outside `[0, MAX_PERIOD]`.
    Domain { t: i64 },

    // ---- Parameters / options ----
    /// Initial guess for alpha or beta must be finite and > 0.
    InvalidInitialGuess { name: &'static str, value: f64 },

    /// Optimizer vector must hold exactly (alpha, beta).
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Optimizer vector entries must be finite.
    InvalidThetaInput { index: usize, value: f64 },

    // ---- Prediction ----
    /// Fitted parameters make `B(alpha, beta)` numerically 0 or undefined.
    DegenerateFit { alpha: f64, beta: f64 },

    /// Forecast horizon has more points than can be allocated.
    HorizonTooLong { periods: usize },

    /// Curve normalization needs a finite, non-zero first value.
    ZeroBaseline { value: f64 },

    // ---- Estimation / optimizer ----
    /// Optimizer failed; include a human-readable status/reason.
    OptimizationFailed { status: String },

    /// Model hasn't been trained yet.
    ModelNotTrained,
}

impl std::error::Error for RetentionError {}

impl std::fmt::Display for RetentionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            RetentionError::MissingData => write!(f, "Data is missing"),
            RetentionError::NonNumericData { index } => {
                write!(f, "Data is not numeric: element at index {index} is not a finite number")
            }
            RetentionError::InsufficientLength { len } => {
                write!(f, "Data needs at least 2 periods to check monotonicity; got {len}")
            }
            RetentionError::IncreasingData { index, previous, current } => {
                write!(
                    f,
                    "Data cannot be increasing: index {index} has {current} after {previous}"
                )
            }
            RetentionError::NegativeData { index, value } => {
                write!(f, "Data cannot be negative: index {index} has value {value}")
            }
            RetentionError::AllZero => write!(f, "Data cannot be all zero"),
            // ---- Probability engine ----
            RetentionError::Domain { t } => {
                write!(f, "t must be in [0, 500]; got {t}")
            }
            // ---- Parameters / options ----
            RetentionError::InvalidInitialGuess { name, value } => {
                write!(f, "Initial {name} must be finite and > 0; got {value}")
            }
            RetentionError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, got {actual}")
            }
            RetentionError::InvalidThetaInput { index, value } => {
                write!(f, "Theta input at index {index} must be finite, got {value}")
            }
            // ---- Prediction ----
            RetentionError::DegenerateFit { alpha, beta } => {
                write!(
                    f,
                    "Beta function is degenerate at alpha = {alpha}, beta = {beta}; check the training data"
                )
            }
            RetentionError::HorizonTooLong { periods } => {
                write!(f, "Cannot predict {periods} periods: horizon is too long")
            }
            RetentionError::ZeroBaseline { value } => {
                write!(f, "Curve must start at a finite, non-zero value to normalize; got {value}")
            }
            // ---- Estimation / optimizer ----
            RetentionError::OptimizationFailed { status } => {
                write!(f, "Optimizer failed with status: {status}")
            }
            RetentionError::ModelNotTrained => {
                write!(f, "Model hasn't been trained yet; call train() first.")
            }
        }
    }
}

/// Convert a [`RetentionError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl From<RetentionError> for PyErr {
    fn from(err: RetentionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<OptError> for RetentionError {
    fn from(err: OptError) -> RetentionError {
        match err {
            OptError::PeriodOutOfRange { t } => RetentionError::Domain { t },
            OptError::ThetaLengthMismatch { expected, actual } => {
                RetentionError::ThetaLengthMismatch { expected, actual }
            }
            OptError::InvalidThetaInput { index, value } => {
                RetentionError::InvalidThetaInput { index, value }
            }
            other => RetentionError::OptimizationFailed { status: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Conversions from optimizer errors into `RetentionError`.
    // - `Display` messages that callers are likely to match on.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure optimizer-level model errors map back to their domain variants
    // and everything else becomes `OptimizationFailed`.
    fn opterror_conversion_preserves_model_variants() {
        assert_eq!(
            RetentionError::from(OptError::PeriodOutOfRange { t: 501 }),
            RetentionError::Domain { t: 501 }
        );
        assert_eq!(
            RetentionError::from(OptError::ThetaLengthMismatch { expected: 2, actual: 3 }),
            RetentionError::ThetaLengthMismatch { expected: 2, actual: 3 }
        );
        assert!(matches!(
            RetentionError::from(OptError::MissingThetaHat),
            RetentionError::OptimizationFailed { .. }
        ));
    }

    #[test]
    fn display_messages_name_the_problem() {
        assert_eq!(RetentionError::MissingData.to_string(), "Data is missing");
        assert_eq!(RetentionError::AllZero.to_string(), "Data cannot be all zero");
        assert!(RetentionError::Domain { t: -1 }.to_string().contains("[0, 500]"));
        let horizon = RetentionError::HorizonTooLong { periods: usize::MAX };
        assert!(horizon.to_string().contains("too long"));
    }
}
