//! sBG retention model: likelihood, fitting, and prediction.
//!
//! This module wires the shifted-beta-geometric model to the `LogLikelihood`
//! trait and drives the derivative-free optimizer to estimate `(α, β)` from a
//! cohort's retained-customer counts.
//!
//! Key ideas:
//! - The log-likelihood is
//!   `ℓ(α, β) = Σ_t churned[t]·ln P(T = t) + retained[N−1]·ln S(N−1)`,
//!   with the last term the right-censored contribution of customers still
//!   active at the end of the window.
//! - Any non-positive probability makes the objective degenerate; it then
//!   evaluates to `−∞` (cost `+∞`) instead of raising, so the simplex simply
//!   moves away.
//! - Bounds `α, β > 0` are enforced through [`LogLikelihood::in_domain`]; the
//!   optimizer never evaluates the recurrences outside the positive orthant.
//! - The model carries an explicit lifecycle ([`ModelState`]); predicting
//!   before a successful fit is a `ModelNotTrained` error.
use crate::{
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Cost, LogLikelihood, OptimOutcome, Theta, maximize},
    },
    retention::{
        core::{
            data::RetentionData,
            forecasts::{SBGForecast, predict_curve},
            options::SBGOptions,
            params::SBGParams,
            probability::{churn_profile, is_degenerate},
            validation::{validate_period, validate_theta},
        },
        errors::{RetentionError, RetentionResult},
    },
};

/// Training lifecycle of a [`ShiftedBetaGeom`].
#[derive(Debug, Clone, PartialEq)]
pub enum ModelState {
    Untrained,
    Trained { params: SBGParams, outcome: OptimOutcome },
}

/// Shifted-beta-geometric retention model.
///
/// Usage
/// -----
/// 1. Construct with [`ShiftedBetaGeom::new`] (or `Default`).
/// 2. Call [`train`](ShiftedBetaGeom::train) with the raw number of customers
///    retained at each period, e.g. `[1000, 900, 800, 500]`. Six or more
///    periods are recommended, and counts should be actual customers rather
///    than a curve already normalized to 1 or 100.
/// 3. Call [`predict`](ShiftedBetaGeom::predict) for a normalized curve
///    starting at 1.0.
///
/// A model may be retrained; the latest successful fit replaces the previous
/// one. A failed fit leaves the previous state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftedBetaGeom {
    pub options: SBGOptions,
    state: ModelState,
    data: Option<RetentionData>,
}

impl ShiftedBetaGeom {
    pub fn new(options: SBGOptions) -> ShiftedBetaGeom {
        ShiftedBetaGeom { options, state: ModelState::Untrained, data: None }
    }

    /// Validate `data`, then estimate `(α, β)` by maximum likelihood.
    ///
    /// Errors
    /// ------
    /// - Any loader error from [`RetentionData::new`].
    /// - `Domain` if the series is longer than the recurrences support.
    /// - `OptimizationFailed` if the backend fails. Stopping at the iteration
    ///   cap is not a failure; the best point is kept and a warning is logged.
    pub fn train(&mut self, data: &[f64]) -> RetentionResult<SBGParams> {
        let data = RetentionData::new(data)?;
        self.fit(data)
    }

    /// Estimate `(α, β)` from already-validated data.
    pub fn fit(&mut self, data: RetentionData) -> RetentionResult<SBGParams> {
        validate_period(data.n_periods() as i64 - 1)?;
        let outcome = maximize(&*self, self.options.theta0(), &data, &self.options.mle_opts)?;
        let params = SBGParams::from_theta(outcome.theta_hat.view())?;

        if outcome.converged {
            tracing::debug!(
                alpha = params.alpha,
                beta = params.beta,
                loglik = outcome.value,
                iterations = outcome.iterations,
                status = %outcome.status,
                "sBG fit converged"
            );
        } else {
            tracing::warn!(
                alpha = params.alpha,
                beta = params.beta,
                iterations = outcome.iterations,
                status = %outcome.status,
                "sBG fit stopped without converging; keeping best parameters found"
            );
        }

        self.data = Some(data);
        self.state = ModelState::Trained { params, outcome };
        Ok(params)
    }

    /// Normalized retention curve for `periods` forward periods
    /// (`periods + 1` points, first exactly 1.0).
    ///
    /// Errors
    /// ------
    /// - `ModelNotTrained` before a successful fit.
    /// - `DegenerateFit` when the fitted parameters make the Beta ratio
    ///   undefined.
    /// - `HorizonTooLong` when `periods + 1` points cannot be allocated.
    pub fn predict(&self, periods: usize) -> RetentionResult<SBGForecast> {
        let params = self.params().ok_or(RetentionError::ModelNotTrained)?;
        predict_curve(params, periods)
    }

    pub fn params(&self) -> Option<&SBGParams> {
        match &self.state {
            ModelState::Trained { params, .. } => Some(params),
            ModelState::Untrained => None,
        }
    }

    /// Optimizer outcome of the latest fit, kept for diagnostics.
    pub fn results(&self) -> Option<&OptimOutcome> {
        match &self.state {
            ModelState::Trained { outcome, .. } => Some(outcome),
            ModelState::Untrained => None,
        }
    }

    pub fn is_trained(&self) -> bool {
        matches!(self.state, ModelState::Trained { .. })
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    /// Data used by the latest successful fit.
    pub fn data(&self) -> Option<&RetentionData> {
        self.data.as_ref()
    }
}

impl Default for ShiftedBetaGeom {
    fn default() -> Self {
        ShiftedBetaGeom::new(SBGOptions::default())
    }
}

impl LogLikelihood for ShiftedBetaGeom {
    type Data = RetentionData;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let profile = churn_profile(data.n_periods(), theta[0], theta[1])?;
        if is_degenerate(&profile) {
            return Ok(f64::NEG_INFINITY);
        }
        let churned: f64 =
            data.churned.iter().zip(profile.churn.iter()).map(|(&c, &p)| c * p.ln()).sum();
        Ok(churned + data.last_retained() * profile.survival.ln())
    }

    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        validate_theta(theta.view())?;
        Ok(())
    }

    fn in_domain(&self, theta: &Theta) -> bool {
        theta.iter().all(|&x| x.is_finite() && x > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::OptError,
        loglik_optimizer::{MLEOptions, Tolerances},
    };
    use crate::retention::core::forecasts::DEFAULT_PREDICT_PERIODS;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `LogLikelihood` conformance (`value`, `check`, `in_domain`).
    // - End-to-end `train` / `predict` on small cohorts, including flat,
    //   single-drop and near-geometric series.
    // - Lifecycle errors and the non-convergence path.
    // -------------------------------------------------------------------------

    fn cohort() -> Vec<f64> {
        vec![100.0, 98.0, 94.0, 93.0, 91.0, 90.0]
    }

    #[test]
    // Purpose
    // -------
    // Check `value` against a hand-computed log-likelihood.
    //
    // Given
    // -----
    // - data = [10, 6, 4], α = β = 1, where P(1) = 1/2, P(2) = 1/6, S(2) = 1/3.
    //
    // Expect
    // ------
    // - ℓ = 4·ln(1/2) + 2·ln(1/6) + 4·ln(1/3).
    fn value_matches_hand_computed_loglik() {
        let model = ShiftedBetaGeom::default();
        let data = RetentionData::new(&[10.0, 6.0, 4.0]).unwrap();

        let ll = model.value(&array![1.0, 1.0], &data).unwrap();

        let expected = 4.0 * 0.5f64.ln() + 2.0 * (1.0f64 / 6.0).ln() + 4.0 * (1.0f64 / 3.0).ln();
        assert!((ll - expected).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Degenerate probabilities map to −∞ rather than an error.
    fn value_is_negative_infinity_on_degenerate_probabilities() {
        let model = ShiftedBetaGeom::default();
        let data = RetentionData::new(&cohort()).unwrap();

        assert_eq!(model.value(&array![0.0, 1.0], &data).unwrap(), f64::NEG_INFINITY);
        assert_eq!(model.value(&array![1.0, 0.0], &data).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn check_and_in_domain_guard_theta() {
        let model = ShiftedBetaGeom::default();
        let data = RetentionData::new(&cohort()).unwrap();

        assert!(model.check(&array![0.1, 0.1], &data).is_ok());
        assert_eq!(
            model.check(&array![0.1], &data),
            Err(OptError::ThetaLengthMismatch { expected: 2, actual: 1 })
        );
        assert!(model.in_domain(&array![0.1, 0.1]));
        assert!(!model.in_domain(&array![0.0, 0.1]));
        assert!(!model.in_domain(&array![0.1, -1.0]));
    }

    #[test]
    // Purpose
    // -------
    // End-to-end fit and prediction on a small cohort.
    //
    // Given
    // -----
    // - data = [100, 98, 94, 93, 91, 90] with default options.
    //
    // Expect
    // ------
    // - α, β > 0 and the fitted ℓ beats the starting point.
    // - `predict(5)` has 6 values, starts at exactly 1.0, is non-increasing and
    //   lies in (0, 1].
    fn train_then_predict_on_small_cohort() {
        let mut model = ShiftedBetaGeom::default();

        let params = model.train(&cohort()).unwrap();

        assert!(params.alpha > 0.0 && params.beta > 0.0);
        assert!(model.is_trained());
        let data = model.data().unwrap();
        let ll_start = model.value(&array![0.1, 0.1], data).unwrap();
        assert!(model.results().unwrap().value >= ll_start);

        let curve = model.predict(5).unwrap().curve;
        assert_eq!(curve.len(), 6);
        assert_eq!(curve[0], 1.0);
        assert!(curve.iter().all(|&s| s > 0.0 && s <= 1.0));
        assert!((1..curve.len()).all(|t| curve[t] <= curve[t - 1]));
    }

    #[test]
    // Purpose
    // -------
    // A near-geometric cohort drives both parameters very large; the forecast
    // must still be a valid retention curve.
    //
    // Given
    // -----
    // - data = [1000, 500, 250, 125, 62, 31] (half the cohort churns each period).
    //
    // Expect
    // ------
    // - `predict(36)` starts at 1.0, is non-increasing and lies in (0, 1].
    // - The one-period retention is close to one half.
    fn predict_after_near_geometric_fit_is_valid_curve() {
        let mut model = ShiftedBetaGeom::default();
        model.train(&[1000.0, 500.0, 250.0, 125.0, 62.0, 31.0]).unwrap();

        let curve = model.predict(DEFAULT_PREDICT_PERIODS).unwrap().curve;

        assert_eq!(curve[0], 1.0);
        assert!(curve.iter().all(|&s| s > 0.0 && s <= 1.0));
        assert!((1..curve.len()).all(|t| curve[t] <= curve[t - 1]));
        assert!((curve[1] - 0.5).abs() < 0.025, "{}", curve[1]);
    }

    #[test]
    fn predict_is_idempotent() {
        let mut model = ShiftedBetaGeom::default();
        model.train(&[100.0, 98.0, 95.0, 92.0, 91.0]).unwrap();

        assert_eq!(model.predict(36).unwrap(), model.predict(36).unwrap());
    }

    #[test]
    // Purpose
    // -------
    // Series without churn after a point still train without error.
    //
    // Given
    // -----
    // - A flat series [1, 1, 1, 1, 1] and a single drop [100, 50, 50, 50, 50].
    //
    // Expect
    // ------
    // - Training succeeds with non-negative parameters; boundary optima may
    //   stop on the iteration cap rather than converge.
    fn train_accepts_flat_and_single_drop_series() {
        for series in [vec![1.0; 5], vec![100.0, 50.0, 50.0, 50.0, 50.0]] {
            let mut model = ShiftedBetaGeom::default();
            let params = model.train(&series).unwrap();
            assert!(params.alpha >= 0.0 && params.beta >= 0.0, "{series:?}");
        }
    }

    #[test]
    fn predict_before_train_is_an_error() {
        let model = ShiftedBetaGeom::default();

        assert_eq!(model.predict(5), Err(RetentionError::ModelNotTrained));
        assert!(model.params().is_none());
        assert_eq!(model.state(), &ModelState::Untrained);
    }

    #[test]
    // Purpose
    // -------
    // A failed retrain keeps the previous fit.
    fn failed_train_keeps_previous_state() {
        let mut model = ShiftedBetaGeom::default();
        let first = model.train(&cohort()).unwrap();

        let err = model.train(&[1.0, 2.0]).unwrap_err();

        assert!(matches!(err, RetentionError::IncreasingData { index: 1, .. }));
        assert_eq!(model.params(), Some(&first));
    }

    #[test]
    fn train_rejects_series_beyond_recursion_range() {
        let series: Vec<f64> = (0..502).map(|i| 1000.0 - i as f64).collect();
        let mut model = ShiftedBetaGeom::default();

        assert_eq!(model.train(&series), Err(RetentionError::Domain { t: 501 }));
    }

    #[test]
    // Purpose
    // -------
    // Hitting the iteration cap is not an error.
    //
    // Given
    // -----
    // - max_iter = 2.
    //
    // Expect
    // ------
    // - Training returns parameters, `converged == false`, and prediction works.
    fn train_with_iteration_cap_keeps_best_point() {
        let tols = Tolerances::new(Some(1e-12), Some(2)).unwrap();
        let options = SBGOptions::new(0.1, 0.1, MLEOptions::new(tols, false)).unwrap();
        let mut model = ShiftedBetaGeom::new(options);

        model.train(&cohort()).unwrap();

        assert!(!model.results().unwrap().converged);
        assert!(model.predict(3).is_ok());
    }
}
