//! sBG churn and survival probabilities.
//!
//! Purpose
//! -------
//! Evaluate the shifted-beta-geometric distribution of the churn period `T`
//! for a cohort whose individual per-period churn rates are Beta(α, β)
//! distributed:
//!
//! - `P(T = 0) = 1` (bootstrap value for the recurrence, not a mass),
//! - `P(T = 1) = α / (α + β)`,
//! - `P(T = t) = ((β + t − 2) / (α + β + t − 1)) · P(T = t − 1)` for `t ≥ 2`,
//!
//! and the survival function
//!
//! - `S(0) = 1`, `S(1) = 1 − P(T = 1)`, `S(t) = S(t − 1) − P(T = t)`.
//!
//! Key behaviors
//! -------------
//! - [`churn_probability`] and [`survival`] evaluate single periods.
//! - [`churn_profile`] produces every `P(T = t)` for `t < n` together with
//!   `S(n − 1)` in one pass, as needed by the likelihood.
//!
//! Invariants & assumptions
//! ------------------------
//! - Periods must lie in `[0, MAX_PERIOD]`; anything else is a
//!   `RetentionError::Domain`.
//! - α and β are not validated here. The optimizer keeps them positive; at the
//!   boundary (α or β equal to 0) the recurrences produce zeros that the
//!   likelihood's degeneracy guard catches.
//!
//! Conventions
//! -----------
//! - Recurrences are evaluated by iterative accumulation. Each step performs
//!   the same floating-point operations, in the same order, as the recursive
//!   definition: `(β + t) − 2`, `((α + β) + t) − 1`, their quotient, then the
//!   product with the previous term. All three entry points therefore agree
//!   bit-for-bit.
use crate::retention::{core::validation::validate_period, errors::RetentionResult};
use ndarray::Array1;

/// Churn probabilities for the first `n` periods plus survival at `n − 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChurnProfile {
    /// `churn[t] = P(T = t)` for `t = 0..n`; `churn[0] == 1`.
    pub churn: Array1<f64>,
    /// `S(n − 1)`, the probability of still being retained at the last period.
    pub survival: f64,
}

/// One step of the churn recurrence: `P(T = t)` from `P(T = t − 1)`, `t ≥ 2`.
#[inline]
fn churn_step(prev: f64, t: i64, alpha: f64, beta: f64) -> f64 {
    let tf = t as f64;
    ((beta + tf - 2.0) / (alpha + beta + tf - 1.0)) * prev
}

/// `P(T = t)` under sBG(α, β).
///
/// # Errors
/// - `RetentionError::Domain { t }` when `t ∉ [0, 500]`.
///
/// # Examples
/// ```rust
/// # use rust_retention::retention::core::probability::churn_probability;
/// assert_eq!(churn_probability(0, 2.0, 3.0).unwrap(), 1.0);
/// assert_eq!(churn_probability(1, 2.0, 3.0).unwrap(), 0.4);
/// assert!(churn_probability(-1, 10.0, 12.0).is_err());
/// ```
pub fn churn_probability(t: i64, alpha: f64, beta: f64) -> RetentionResult<f64> {
    validate_period(t)?;
    if t == 0 {
        return Ok(1.0);
    }
    let mut p = alpha / (alpha + beta);
    for k in 2..=t {
        p = churn_step(p, k, alpha, beta);
    }
    Ok(p)
}

/// `S(t)`, the probability of surviving past period `t` under sBG(α, β).
///
/// # Errors
/// - `RetentionError::Domain { t }` when `t ∉ [0, 500]`.
pub fn survival(t: i64, alpha: f64, beta: f64) -> RetentionResult<f64> {
    validate_period(t)?;
    if t == 0 {
        return Ok(1.0);
    }
    let mut p = alpha / (alpha + beta);
    let mut s = 1.0 - p;
    for k in 2..=t {
        p = churn_step(p, k, alpha, beta);
        s -= p;
    }
    Ok(s)
}

/// All churn probabilities for `t = 0..n_periods` and `S(n_periods − 1)`.
///
/// Parameters
/// ----------
/// - `n_periods`: `usize`
///   Number of observed periods `N ≥ 1`.
/// - `alpha`, `beta`: `f64`
///   sBG shape parameters.
///
/// Returns
/// -------
/// `RetentionResult<ChurnProfile>`
///   Values identical to calling [`churn_probability`] for each `t` and
///   [`survival`] at `N − 1`.
///
/// Errors
/// ------
/// - `RetentionError::Domain` when `N − 1 > MAX_PERIOD` (or `N == 0`, reported
///   as `t = -1`).
pub fn churn_profile(n_periods: usize, alpha: f64, beta: f64) -> RetentionResult<ChurnProfile> {
    let last = n_periods as i64 - 1;
    validate_period(last)?;
    let mut churn = Array1::<f64>::zeros(n_periods);
    churn[0] = 1.0;
    let mut s = 1.0;
    if n_periods > 1 {
        let mut p = alpha / (alpha + beta);
        churn[1] = p;
        s = 1.0 - p;
        for k in 2..n_periods {
            p = churn_step(p, k as i64, alpha, beta);
            churn[k] = p;
            s -= p;
        }
    }
    Ok(ChurnProfile { churn, survival: s })
}

/// Guard used by the likelihood: any non-positive churn mass or survival makes
/// the log-likelihood undefined.
pub fn is_degenerate(profile: &ChurnProfile) -> bool {
    profile.survival <= 0.0 || profile.survival.is_nan() || profile.churn.iter().any(|&p| !(p > 0.0))
}
