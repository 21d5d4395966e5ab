//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! This builds a Nelder–Mead simplex around the initial guess, wraps the model
//! in an `ArgMinAdapter` (which *minimizes* `-ℓ(θ)`), and delegates the run to
//! `run_nelder_mead`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        adapter::ArgMinAdapter,
        builders::build_optimizer_nelder_mead,
        run::run_nelder_mead,
        traits::{LogLikelihood, MLEOptions},
        OptimOutcome, Theta,
    },
};

/// Maximize a log-likelihood `ℓ(θ)` with the derivative-free Nelder–Mead method.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` that exposes a *minimization*
///   problem `c(θ) = -ℓ(θ)` to `argmin`; out-of-domain and degenerate points
///   cost `+∞`.
/// - Builds the simplex solver from `theta0` and `opts`.
/// - Calls `run_nelder_mead`, which configures the executor (max iters,
///   optional observers) and returns an `OptimOutcome`.
///
/// Hitting the iteration cap is **not** an error: the outcome carries the best
/// vertex found with `converged == false`.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_nelder_mead`.
/// - Propagates runtime errors from `run_nelder_mead`.
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use rust_retention::optimization::errors::OptResult;
/// use rust_retention::optimization::loglik_optimizer::{
///     maximize, LogLikelihood, MLEOptions, Theta,
/// };
///
/// struct MyLL;
/// impl LogLikelihood for MyLL {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         // Simple concave log-likelihood: -(θ·θ)
///         Ok(-theta.dot(theta))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&MyLL, array![0.1, -0.2], &(), &MLEOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), rust_retention::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    let solver = build_optimizer_nelder_mead(&theta0, opts)?;
    run_nelder_mead(&theta0, opts, problem, solver)
}
