//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a *minimization*
//! problem by defining the cost as `c(θ) = -ℓ(θ)`. Points outside the model's
//! domain and degenerate points (`ℓ = -∞`) both map to a `+∞` cost, which the
//! simplex treats as "worse than anything" without aborting the run.
use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        traits::LogLikelihood,
        types::{Cost, Theta},
    },
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)` (negative log-likelihood), or `+∞`
///   when `θ` is outside `LogLikelihood::in_domain`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// - Returns `+∞` without calling the user's `value` when `θ` is outside
    ///   the domain.
    /// - Accepts `ℓ(θ) = -∞` and reports it as a `+∞` cost.
    /// - Returns `Error(NonFiniteCost)` for `NaN` and for `ℓ(θ) = +∞`.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        if !self.f.in_domain(theta) {
            return Ok(f64::INFINITY);
        }
        let output = self.f.value(theta, self.data)?;
        if output.is_nan() || output == f64::INFINITY {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}
