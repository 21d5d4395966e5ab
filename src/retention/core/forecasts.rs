//! Retention-curve prediction for fitted sBG models.
//!
//! Purpose
//! -------
//! Project a normalized retention curve from fitted `(α, β)`. The sBG survival
//! function is the Beta ratio
//!
//! ```text
//! S(t) = B(α, β + t) / B(α, β),   t = 0, 1, …, periods
//! ```
//!
//! which telescopes into the product
//!
//! ```text
//! S(0) = 1,   S(t) = S(t − 1) · (β + t − 1) / (α + β + t − 1)
//! ```
//!
//! Key behaviors
//! -------------
//! - [`predict_curve`] evaluates the product form. Every factor lies in
//!   `(0, 1)` for positive parameters, so there is no cancellation even when
//!   the optimizer lands on `α, β` of order `1e10` or larger.
//! - Degenerate fits (non-positive or non-finite parameters, or an `α + β`
//!   that overflows) are reported as `RetentionError::DegenerateFit` rather
//!   than producing NaN curves.
//! - Horizons whose `periods + 1` points cannot be represented are reported
//!   as `RetentionError::HorizonTooLong` before anything is allocated.
//!
//! Invariants & assumptions
//! ------------------------
//! - `curve.len() == periods + 1` and `curve[0] == 1.0` exactly.
//! - For valid parameters the curve is non-increasing and lies in `(0, 1]`
//!   until it underflows for very long horizons.
//! - No period cap is applied; the product does not share the recursion
//!   range of the probability engine.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against closed forms (`α = β = 1` gives
//!   `1 / (t + 1)`), against the recursive survival function, cover fitted
//!   parameters in the `1e10`–`1e15` range, and check the error guards.
use crate::retention::{
    core::params::SBGParams,
    errors::{RetentionError, RetentionResult},
};
use ndarray::Array1;

/// Number of forward periods produced when the caller does not choose one.
pub const DEFAULT_PREDICT_PERIODS: usize = 36;

/// SBGForecast — a normalized forward retention curve.
///
/// `curve[t]` is the probability that a customer active at period 0 is still
/// retained at period `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct SBGForecast {
    pub curve: Array1<f64>,
}

impl SBGForecast {
    /// Number of forward periods (`curve.len() − 1`).
    pub fn periods(&self) -> usize {
        self.curve.len() - 1
    }

    /// Scale the normalized curve to a cohort of `initial` customers.
    pub fn scaled(&self, initial: f64) -> Array1<f64> {
        self.curve.mapv(|s| s * initial)
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.curve.to_vec()
    }
}

/// Produce the normalized sBG retention curve for `periods` forward periods.
///
/// Parameters
/// ----------
/// - `params`: `&SBGParams`
///   Fitted shape parameters.
/// - `periods`: `usize`
///   Forward horizon; the returned curve has `periods + 1` points.
///
/// Returns
/// -------
/// `RetentionResult<SBGForecast>`
///
/// Errors
/// ------
/// - `RetentionError::DegenerateFit { alpha, beta }` if either parameter is not
///   finite and strictly positive, or if `α + β` is not finite.
/// - `RetentionError::HorizonTooLong { periods }` if `periods + 1` values do
///   not fit in a single allocation.
///
/// Examples
/// --------
/// ```rust
/// # use rust_retention::retention::core::{forecasts::predict_curve, params::SBGParams};
/// let params = SBGParams { alpha: 1.0, beta: 1.0 };
/// let forecast = predict_curve(&params, 3).unwrap();
/// assert_eq!(forecast.curve[0], 1.0);
/// assert!((forecast.curve[3] - 0.25).abs() < 1e-12);
/// ```
pub fn predict_curve(params: &SBGParams, periods: usize) -> RetentionResult<SBGForecast> {
    let SBGParams { alpha, beta } = *params;
    if !(alpha.is_finite() && beta.is_finite() && alpha > 0.0 && beta > 0.0)
        || !(alpha + beta).is_finite()
    {
        return Err(RetentionError::DegenerateFit { alpha, beta });
    }
    let len = periods
        .checked_add(1)
        .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<f64>())
        .ok_or(RetentionError::HorizonTooLong { periods })?;

    let mut curve = Array1::<f64>::zeros(len);
    curve[0] = 1.0;
    let mut s = 1.0;
    for t in 1..len {
        let lag = (t - 1) as f64;
        s *= (beta + lag) / (alpha + beta + lag);
        curve[t] = s;
    }
    Ok(SBGForecast { curve })
}
