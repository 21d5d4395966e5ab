//! Validation helpers for retention series and sBG parameters.
//!
//! Purpose
//! -------
//! Centralize the checks that guard the sBG stack: the boolean validator
//! collaborators consumed by the loader ([`is_numeric`], [`is_non_increasing`]),
//! the ordered loader check itself ([`validate_retention_series`]), the
//! probability-engine domain guard ([`validate_period`]), and θ / initial-guess
//! checks used by the model and its options.
//!
//! Conventions
//! -----------
//! - Indices are 0-based period indices.
//! - Every validator reports the **first** offending element.
//! - Boolean collaborators never allocate; the ordered check returns a
//!   [`RetentionError`] describing exactly one violation.
use crate::retention::errors::{RetentionError, RetentionResult};
use ndarray::ArrayView1;

/// Largest period the churn / survival recurrences accept.
pub const MAX_PERIOD: i64 = 500;

/// Number of free sBG parameters `(alpha, beta)`.
pub const SBG_THETA_LEN: usize = 2;

/// Whether every element is a usable number.
///
/// Empty input is **not** numeric. In a typed `f64` slice the only
/// non-numbers are `NaN` and `±∞`.
pub fn is_numeric(data: &[f64]) -> bool {
    !data.is_empty() && data.iter().all(|v| v.is_finite())
}

/// Whether every element is ≤ its predecessor.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Series to inspect. Must have at least two elements.
///
/// Returns
/// -------
/// `RetentionResult<bool>`
///   `Ok(true)` when no adjacent pair increases; equal neighbours are allowed.
///
/// Errors
/// ------
/// - `RetentionError::InsufficientLength { len }`
///   Returned for empty and single-element input, where the question has no
///   well-defined answer.
pub fn is_non_increasing(data: &[f64]) -> RetentionResult<bool> {
    if data.len() < 2 {
        return Err(RetentionError::InsufficientLength { len: data.len() });
    }
    Ok(first_increase(data).is_none())
}

/// Run the loader's ordered validation over a raw retention series.
///
/// Order (fail fast):
/// 1. empty → `MissingData`
/// 2. non-finite element → `NonNumericData`
/// 3. length < 2 → `InsufficientLength`; later > earlier → `IncreasingData`
/// 4. minimum < 0 → `NegativeData`
/// 5. sum == 0 → `AllZero`
///
/// # Errors
/// Returns the first violation found, as listed above.
pub fn validate_retention_series(data: &[f64]) -> RetentionResult<()> {
    if data.is_empty() {
        return Err(RetentionError::MissingData);
    }
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(RetentionError::NonNumericData { index });
    }
    if !is_non_increasing(data)? {
        let index = first_increase(data).unwrap_or(1);
        return Err(RetentionError::IncreasingData {
            index,
            previous: data[index - 1],
            current: data[index],
        });
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| **v < 0.0) {
        return Err(RetentionError::NegativeData { index, value });
    }
    if data.iter().sum::<f64>() == 0.0 {
        return Err(RetentionError::AllZero);
    }
    Ok(())
}

/// Guard a requested period against the supported recursion range.
///
/// # Errors
/// `RetentionError::Domain { t }` unless `0 <= t <= MAX_PERIOD`.
pub fn validate_period(t: i64) -> RetentionResult<()> {
    if !(0..=MAX_PERIOD).contains(&t) {
        return Err(RetentionError::Domain { t });
    }
    Ok(())
}

/// Validate an optimizer vector `θ = (alpha, beta)`: length 2 and finite.
///
/// # Errors
/// - `ThetaLengthMismatch` for any other length.
/// - `InvalidThetaInput` for the first non-finite entry.
pub fn validate_theta(theta: ArrayView1<f64>) -> RetentionResult<()> {
    if theta.len() != SBG_THETA_LEN {
        return Err(RetentionError::ThetaLengthMismatch {
            expected: SBG_THETA_LEN,
            actual: theta.len(),
        });
    }
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(RetentionError::InvalidThetaInput { index, value });
        }
    }
    Ok(())
}

/// Validate an optimizer starting value for the named shape parameter.
///
/// # Errors
/// `InvalidInitialGuess` unless `value` is finite and strictly positive.
pub fn validate_initial_guess(name: &'static str, value: f64) -> RetentionResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RetentionError::InvalidInitialGuess { name, value });
    }
    Ok(())
}

fn first_increase(data: &[f64]) -> Option<usize> {
    data.windows(2).position(|w| w[1] > w[0]).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The boolean collaborators `is_numeric` and `is_non_increasing`,
    //   including the length < 2 error.
    // - The ordered loader validation and which error wins when several
    //   violations are present.
    // - Period, θ and initial-guess guards.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check `is_non_increasing` on flat, strictly decreasing, and rising input.
    //
    // Expect
    // ------
    // - Ties are allowed; any rise returns `false`; negative tails are irrelevant.
    fn is_non_increasing_matches_adjacent_pair_rule() {
        let cases: [(&[f64], bool); 7] = [
            (&[10.0, 8.0, 5.0, 4.0, 2.0, 1.0], true),
            (&[10.0, 10.0, 8.0, 4.0, 2.0, 1.0], true),
            (&[10.0, 10.0], true),
            (&[10.0, 8.0], true),
            (&[10.0, 12.0], false),
            (&[1.0, 0.0, -4.0], true),
            (&[10.0, 4.0, -1.0, -4.0, -2.0], false),
        ];
        for (data, expected) in cases {
            assert_eq!(is_non_increasing(data), Ok(expected), "data = {data:?}");
        }
    }

    #[test]
    fn is_non_increasing_rejects_short_input() {
        assert_eq!(is_non_increasing(&[1.0]), Err(RetentionError::InsufficientLength { len: 1 }));
        assert_eq!(is_non_increasing(&[]), Err(RetentionError::InsufficientLength { len: 0 }));
    }

    #[test]
    // Purpose
    // -------
    // Check `is_numeric` on finite, empty, and non-finite input.
    fn is_numeric_requires_non_empty_finite_values() {
        assert!(is_numeric(&[10.0, 1.0, 2.0, 3.0, -3.0]));
        assert!(is_numeric(&[1.0, 0.5, 1.0]));
        assert!(!is_numeric(&[]));
        assert!(!is_numeric(&[1.0, f64::NAN]));
        assert!(!is_numeric(&[f64::INFINITY, 1.0]));
    }

    #[test]
    // Purpose
    // -------
    // Ensure the loader reports the documented error for each bad input.
    //
    // Given
    // -----
    // - Empty, NaN-bearing, increasing, negative, all-zero and single-point input.
    //
    // Expect
    // ------
    // - One distinct error kind per case, pointing at the first offender.
    fn validate_retention_series_reports_first_violation() {
        assert_eq!(validate_retention_series(&[]), Err(RetentionError::MissingData));
        assert_eq!(
            validate_retention_series(&[f64::NAN, 1.0]),
            Err(RetentionError::NonNumericData { index: 0 })
        );
        assert_eq!(
            validate_retention_series(&[1.0, 2.0, 3.0]),
            Err(RetentionError::IncreasingData { index: 1, previous: 1.0, current: 2.0 })
        );
        assert_eq!(
            validate_retention_series(&[-1.0, -2.0]),
            Err(RetentionError::NegativeData { index: 0, value: -1.0 })
        );
        assert_eq!(validate_retention_series(&[0.0, 0.0, 0.0]), Err(RetentionError::AllZero));
        assert_eq!(
            validate_retention_series(&[5.0]),
            Err(RetentionError::InsufficientLength { len: 1 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify precedence: an increasing series with negatives fails on the
    // increase, since that check runs first.
    fn validate_retention_series_checks_increase_before_sign() {
        assert!(matches!(
            validate_retention_series(&[-100.0, -98.0, -97.0]),
            Err(RetentionError::IncreasingData { index: 1, .. })
        ));
        assert_eq!(
            validate_retention_series(&[8.0, 4.0, 3.0, -1.0]),
            Err(RetentionError::NegativeData { index: 3, value: -1.0 })
        );
        assert!(validate_retention_series(&[1.0, 1.0, 1.0, 1.0, 1.0]).is_ok());
    }

    #[test]
    fn validate_period_accepts_closed_range_only() {
        assert!(validate_period(0).is_ok());
        assert!(validate_period(MAX_PERIOD).is_ok());
        assert_eq!(validate_period(-1), Err(RetentionError::Domain { t: -1 }));
        assert_eq!(validate_period(1000), Err(RetentionError::Domain { t: 1000 }));
    }

    #[test]
    fn validate_theta_checks_length_and_finiteness() {
        assert!(validate_theta(array![0.5, 1.5].view()).is_ok());
        assert_eq!(
            validate_theta(array![0.5].view()),
            Err(RetentionError::ThetaLengthMismatch { expected: 2, actual: 1 })
        );
        assert!(matches!(
            validate_theta(array![0.5, f64::INFINITY].view()),
            Err(RetentionError::InvalidThetaInput { index: 1, .. })
        ));
    }

    #[test]
    fn validate_initial_guess_rejects_non_positive_values() {
        assert!(validate_initial_guess("alpha", 0.1).is_ok());
        assert!(validate_initial_guess("beta", 0.0).is_err());
        assert!(validate_initial_guess("beta", f64::NAN).is_err());
    }
}
