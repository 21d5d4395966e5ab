//! Retention data containers for sBG models.
//!
//! Purpose
//! -------
//! Provide the validated container that the sBG likelihood consumes: the
//! observed retained-customer counts per period and the churned counts derived
//! from them. This module is the loader of the estimation stack; every check
//! on raw input happens here, exactly once.
//!
//! Key behaviors
//! -------------
//! - [`RetentionData::new`] runs the ordered loader validation and derives the
//!   churn series.
//! - Exposes small accessors (`n_periods`, `last_retained`) so the likelihood
//!   never indexes raw arrays directly.
//!
//! Invariants & assumptions
//! ------------------------
//! - `retained` is non-empty, finite, non-negative, non-increasing, has at least
//!   two points, and is not all zero.
//! - `churned.len() == retained.len()`, `churned[0] == 0`, and
//!   `churned[i] = retained[i-1] − retained[i]` for `i ≥ 1`; hence every churn
//!   count is non-negative.
//! - Both arrays are immutable once constructed.
//!
//! Conventions
//! -----------
//! - Index = period, 0-based. Counts are stored as `f64`; fractional counts are
//!   accepted but the model is meant for raw customer counts, not curves already
//!   normalized to 1 or 100.
//! - At least six periods are recommended for a stable fit; shorter series are
//!   accepted.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the derived churn series and that loader failures surface
//!   unchanged from the validation layer.
use crate::retention::{
    core::validation::validate_retention_series,
    errors::RetentionResult,
};
use ndarray::Array1;

/// `RetentionData` — validated retained / churned counts for one cohort.
///
/// Fields
/// ------
/// - `retained`: `Array1<f64>`
///   Customers still retained at each period, exactly as supplied.
/// - `churned`: `Array1<f64>`
///   Customers lost at each period; element 0 is 0 by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionData {
    /// Customers retained at each period.
    pub retained: Array1<f64>,
    /// Customers churned at each period (`churned[0] == 0`).
    pub churned: Array1<f64>,
}

impl RetentionData {
    /// Construct a validated [`RetentionData`] from raw retained counts.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Customers retained at each period, e.g. `[1000, 900, 800, 500]`.
    ///
    /// Returns
    /// -------
    /// `RetentionResult<RetentionData>`
    ///
    /// Errors
    /// ------
    /// - `MissingData`, `NonNumericData`, `InsufficientLength`,
    ///   `IncreasingData`, `NegativeData`, `AllZero`, in that precedence.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_retention::retention::core::data::RetentionData;
    /// let data = RetentionData::new(&[100.0, 98.0, 94.0]).unwrap();
    /// assert_eq!(data.churned.to_vec(), vec![0.0, 2.0, 4.0]);
    /// ```
    pub fn new(data: &[f64]) -> RetentionResult<Self> {
        validate_retention_series(data)?;
        let retained = Array1::from(data.to_vec());
        let churned = Array1::from_shape_fn(data.len(), |i| {
            if i == 0 {
                0.0
            } else {
                data[i - 1] - data[i]
            }
        });
        Ok(RetentionData { retained, churned })
    }

    /// Number of observed periods `N`.
    pub fn n_periods(&self) -> usize {
        self.retained.len()
    }

    /// Customers still retained at the last observed period (right-censored).
    pub fn last_retained(&self) -> f64 {
        self.retained[self.retained.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retention::errors::RetentionError;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Ensure the churn series is derived from consecutive differences with a
    // leading zero.
    //
    // Given
    // -----
    // - `data = [100, 98, 94, 93, 91, 90]`.
    //
    // Expect
    // ------
    // - `churned = [0, 2, 4, 1, 2, 1]`, `retained` unchanged, `N = 6`,
    //   last retained = 90.
    fn retentiondata_new_derives_churn_series() {
        let data = RetentionData::new(&[100.0, 98.0, 94.0, 93.0, 91.0, 90.0]).unwrap();

        assert_eq!(data.retained, array![100.0, 98.0, 94.0, 93.0, 91.0, 90.0]);
        assert_eq!(data.churned, array![0.0, 2.0, 4.0, 1.0, 2.0, 1.0]);
        assert_eq!(data.n_periods(), 6);
        assert_eq!(data.last_retained(), 90.0);
    }

    #[test]
    fn retentiondata_new_accepts_flat_series() {
        let data = RetentionData::new(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();

        assert!(data.churned.iter().all(|&c| c == 0.0));
    }

    #[test]
    // Purpose
    // -------
    // Ensure loader failures surface unchanged.
    fn retentiondata_new_propagates_validation_errors() {
        assert_eq!(RetentionData::new(&[]), Err(RetentionError::MissingData));
        assert_eq!(
            RetentionData::new(&[100.0, 101.0, 98.0]),
            Err(RetentionError::IncreasingData { index: 1, previous: 100.0, current: 101.0 })
        );
        assert_eq!(RetentionData::new(&[0.0, 0.0, 0.0, 0.0]), Err(RetentionError::AllZero));
    }
}
