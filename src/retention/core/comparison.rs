//! Actual-vs-predicted retention comparison.
//!
//! Builds the aligned, normalized series a chart of actual and predicted
//! retention needs. Rendering itself is left to the caller; this module only
//! produces the data: both curves scaled to start at 1.0, placed on a shared
//! period axis, with an optional marker for the end of the training window.
use crate::retention::errors::{RetentionError, RetentionResult};

/// Scale a curve so its first element is exactly 1.0 (`x / x[0]`).
///
/// # Errors
/// - `MissingData` for an empty curve.
/// - `ZeroBaseline { value }` when the first element is zero or not finite.
pub fn normalize_curve(curve: &[f64]) -> RetentionResult<Vec<f64>> {
    let first = *curve.first().ok_or(RetentionError::MissingData)?;
    if first == 0.0 || !first.is_finite() {
        return Err(RetentionError::ZeroBaseline { value: first });
    }
    Ok(curve.iter().map(|x| x / first).collect())
}

/// Actual and predicted curves aligned on one period axis.
///
/// The curves may differ in length; the axis covers the longer one and the
/// shorter curve is padded with `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionComparison {
    pub title: String,
    pub periods: Vec<usize>,
    pub actual: Vec<Option<f64>>,
    pub predicted: Vec<Option<f64>>,
    /// Last period used for training, drawn as a vertical marker.
    pub train_period: Option<usize>,
}

impl RetentionComparison {
    /// Normalize and align `actual` and `predicted`.
    ///
    /// Both inputs are assumed to start at the same period and be sorted by
    /// period. Either may be raw counts or an already-normalized curve.
    pub fn new(
        actual: &[f64], predicted: &[f64], title: impl Into<String>, train_period: Option<usize>,
    ) -> RetentionResult<Self> {
        let actual = normalize_curve(actual)?;
        let predicted = normalize_curve(predicted)?;
        let n = actual.len().max(predicted.len());
        Ok(RetentionComparison {
            title: title.into(),
            periods: (0..n).collect(),
            actual: pad(actual, n),
            predicted: pad(predicted, n),
            train_period,
        })
    }

    /// `actual − predicted` on periods where both curves have a value.
    pub fn residuals(&self) -> Vec<Option<f64>> {
        self.actual
            .iter()
            .zip(&self.predicted)
            .map(|(a, p)| match (a, p) {
                (Some(a), Some(p)) => Some(a - p),
                _ => None,
            })
            .collect()
    }
}

fn pad(values: Vec<f64>, n: usize) -> Vec<Option<f64>> {
    let mut out: Vec<Option<f64>> = values.into_iter().map(Some).collect();
    out.resize(n, None);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_curve_divides_by_first_value() {
        assert_eq!(normalize_curve(&[200.0, 150.0, 100.0]).unwrap(), vec![1.0, 0.75, 0.5]);
    }

    #[test]
    fn normalize_curve_rejects_empty_and_zero_baseline() {
        assert_eq!(normalize_curve(&[]), Err(RetentionError::MissingData));
        assert_eq!(
            normalize_curve(&[0.0, 0.0]),
            Err(RetentionError::ZeroBaseline { value: 0.0 })
        );
        assert!(matches!(
            normalize_curve(&[f64::NAN, 1.0]),
            Err(RetentionError::ZeroBaseline { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Curves of different length share one axis and the shorter one is padded.
    //
    // Given
    // -----
    // - 3 actual counts and a 5-point predicted curve, training marker at 2.
    //
    // Expect
    // ------
    // - Axis 0..5, actual padded with two `None`, residuals only where both exist.
    fn retention_comparison_aligns_curves_of_different_length() {
        let cmp = RetentionComparison::new(
            &[100.0, 90.0, 80.0],
            &[1.0, 0.9, 0.85, 0.8, 0.76],
            "cohort A",
            Some(2),
        )
        .unwrap();

        assert_eq!(cmp.title, "cohort A");
        assert_eq!(cmp.periods, vec![0, 1, 2, 3, 4]);
        assert_eq!(cmp.actual, vec![Some(1.0), Some(0.9), Some(0.8), None, None]);
        assert_eq!(cmp.predicted.len(), 5);
        assert_eq!(cmp.train_period, Some(2));

        let residuals = cmp.residuals();
        assert_eq!(residuals[0], Some(0.0));
        assert!((residuals[2].unwrap() + 0.05).abs() < 1e-12);
        assert_eq!(residuals[4], None);
    }
}
