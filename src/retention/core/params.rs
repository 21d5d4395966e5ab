//! sBG parameterization.
//!
//! This module provides the **model-space** parameter container [`SBGParams`]
//! and the mapping between model space and the optimizer-space vector
//! `θ = [α, β]` (as `ndarray::Array1<f64>`).
//!
//! ## Mapping conventions
//! - θ is the identity map of `(α, β)`; no transform is applied. Positivity is
//!   enforced by the likelihood's feasibility check rather than by a
//!   reparameterization, so fitted values are reported exactly as the simplex
//!   found them.
//!
//! ## Invariants validated by constructors
//! - `θ.len() == 2` and both entries finite ([`SBGParams::from_theta`]).
//! - `α > 0`, `β > 0` and finite ([`SBGParams::new`]).
use crate::retention::{
    core::validation::{validate_initial_guess, validate_theta},
    errors::RetentionResult,
};
use ndarray::{Array1, ArrayView1, array};

/// Fitted or user-supplied sBG shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SBGParams {
    /// α > 0, first shape parameter of the churn-rate Beta distribution.
    pub alpha: f64,
    /// β > 0, second shape parameter of the churn-rate Beta distribution.
    pub beta: f64,
}

impl SBGParams {
    /// Create validated model-space parameters.
    ///
    /// # Errors
    /// `InvalidInitialGuess` naming the first parameter that is non-finite or
    /// not strictly positive.
    pub fn new(alpha: f64, beta: f64) -> RetentionResult<Self> {
        validate_initial_guess("alpha", alpha)?;
        validate_initial_guess("beta", beta)?;
        Ok(SBGParams { alpha, beta })
    }

    /// Materialize parameters from the optimizer's final θ.
    ///
    /// Only the shape of θ is checked (length 2, finite). The simplex may stop
    /// on a boundary point; rejecting it here would hide the fit from callers,
    /// so degenerate values are left for the predictor to report.
    pub fn from_theta(theta: ArrayView1<f64>) -> RetentionResult<Self> {
        validate_theta(theta)?;
        Ok(SBGParams { alpha: theta[0], beta: theta[1] })
    }

    /// Map to optimizer-space `θ = [α, β]`.
    pub fn to_theta(&self) -> Array1<f64> {
        array![self.alpha, self.beta]
    }

    /// Mean of the churn-rate Beta distribution, `α / (α + β)`.
    ///
    /// Equals `P(T = 1)`, the expected share lost in the first period.
    pub fn mean_churn_rate(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// `(α, β)` as a tuple, the shape handed back across the Python boundary.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.alpha, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retention::errors::RetentionError;

    #[test]
    // Purpose
    // -------
    // Ensure θ round-trips through the identity mapping.
    fn sbgparams_theta_mapping_is_identity() {
        let params = SBGParams::from_theta(array![0.7, 3.2].view()).unwrap();

        assert_eq!(params, SBGParams { alpha: 0.7, beta: 3.2 });
        assert_eq!(params.to_theta(), array![0.7, 3.2]);
        assert_eq!(params.as_tuple(), (0.7, 3.2));
    }

    #[test]
    fn sbgparams_from_theta_rejects_bad_shape() {
        assert_eq!(
            SBGParams::from_theta(array![1.0, 2.0, 3.0].view()),
            Err(RetentionError::ThetaLengthMismatch { expected: 2, actual: 3 })
        );
        assert!(SBGParams::from_theta(array![f64::NAN, 1.0].view()).is_err());
    }

    #[test]
    fn sbgparams_new_requires_positive_values() {
        assert!(SBGParams::new(1.0, 2.0).is_ok());
        assert_eq!(
            SBGParams::new(1.0, -2.0),
            Err(RetentionError::InvalidInitialGuess { name: "beta", value: -2.0 })
        );
    }

    #[test]
    fn sbgparams_mean_churn_rate_is_first_period_probability() {
        let params = SBGParams::new(2.0, 3.0).unwrap();
        assert_eq!(params.mean_churn_rate(), 0.4);
    }
}
