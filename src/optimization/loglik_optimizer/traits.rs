//! Public API surface for log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait users implement for their model.
//! - [`MLEOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`OptimOutcome`]: normalized result returned by the high-level `maximize` API.
//!
//! Convention: we *maximize* a user log-likelihood `ℓ(θ)` by minimizing the cost
//! `c(θ) = -ℓ(θ)`. The solver is derivative-free, so no gradient is requested.
//! A log-likelihood of `-∞` is a legal answer meaning "θ lies in a degenerate
//! region"; the adapter turns it into a `+∞` cost that repels the simplex.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        validation::{validate_theta_hat, validate_value, verify_tol_sd},
        Cost, FnEvalMap, Theta, DEFAULT_MAX_ITER, DEFAULT_TOL_SD,
    },
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented log-likelihood interface.
///
/// You maximize `ℓ(θ)`; internally we minimize the cost `c(θ) = -ℓ(θ)`.
///
/// - `type Data`: per-model data carried into `value`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `ℓ(θ)`. Returning
///   `f64::NEG_INFINITY` marks θ as degenerate without aborting the run.
///   - Errors: return a descriptive `OptError` for invalid inputs or model failures.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `in_domain(&Theta) -> bool`: box constraint on θ. Points outside the
///   domain are never passed to `value`; they receive a `+∞` cost instead.
pub trait LogLikelihood {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn in_domain(&self, _theta: &Theta) -> bool {
        true
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — simplex stopping tolerance and iteration limit.
/// - `verbose: bool` — if `true`, logs the starting objective and attaches an
///   observer (behind the `obs_slog` feature).
///
/// Default:
/// - `tols`: `tol_sd = 1e-10`, `max_iter = 400`
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub verbose: bool,
}

impl MLEOptions {
    /// Create a new set of optimizer options.
    ///
    /// Validation of numeric fields is performed inside [`Tolerances::new`].
    pub fn new(tols: Tolerances, verbose: bool) -> Self {
        Self { tols, verbose }
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self { tols: Tolerances::default(), verbose: false }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_sd`: terminate when the standard deviation of the cost values at the
///   simplex vertices falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Either field can be `None` but **at least one** must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_sd: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_sd` or `max_iter` must be `Some`.
    /// - If provided, `tol_sd` must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if both are `None`.
    /// - [`OptError::InvalidTolSd`] for non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_sd: Option<f64>, max_iter: Option<usize>) -> OptResult<Self> {
        if tol_sd.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_sd(tol_sd)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_sd, max_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { tol_sd: Some(DEFAULT_TOL_SD), max_iter: Some(DEFAULT_MAX_ITER) }
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best **log-likelihood** value `ℓ(θ)` (not the cost).
/// - `converged`: `true` only if the solver met its own convergence rule;
///   hitting the iteration cap leaves this `false`.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus,
        iterations: u64, fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = match termination {
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            TerminationStatus::Terminated(reason) => {
                let converged = matches!(
                    reason,
                    TerminationReason::SolverConverged | TerminationReason::TargetCostReached
                );
                (converged, format!("{reason:?}"))
            }
        };
        let iterations = iterations as usize;
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Ensure `Tolerances::new` requires at least one stopping rule.
    //
    // Expect
    // ------
    // - `NoTolerancesProvided` when both are `None`; `InvalidMaxIter` for zero.
    fn tolerances_new_requires_a_stopping_rule() {
        assert_eq!(Tolerances::new(None, None), Err(OptError::NoTolerancesProvided));
        assert!(matches!(
            Tolerances::new(Some(1e-8), Some(0)),
            Err(OptError::InvalidMaxIter { max_iter: 0, .. })
        ));
        assert!(Tolerances::new(None, Some(10)).is_ok());
    }

    #[test]
    fn default_options_match_documented_values() {
        let opts = MLEOptions::default();

        assert_eq!(opts.tols.tol_sd, Some(DEFAULT_TOL_SD));
        assert_eq!(opts.tols.max_iter, Some(DEFAULT_MAX_ITER));
        assert!(!opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // Verify the mapping from argmin termination status to `converged`.
    //
    // Given
    // -----
    // - A `SolverConverged` and a `MaxItersReached` termination.
    //
    // Expect
    // ------
    // - Only the first is flagged as converged; both carry a status string.
    fn outcome_flags_only_solver_convergence_as_converged() {
        let ok = OptimOutcome::new(
            Some(array![1.0, 2.0]),
            -3.5,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            12,
            FnEvalMap::new(),
        )
        .unwrap();
        let capped = OptimOutcome::new(
            Some(array![1.0, 2.0]),
            -3.5,
            TerminationStatus::Terminated(TerminationReason::MaxItersReached),
            400,
            FnEvalMap::new(),
        )
        .unwrap();

        assert!(ok.converged);
        assert!(!capped.converged);
        assert_eq!(capped.iterations, 400);
        assert!(capped.status.contains("MaxIters"));
    }
}
