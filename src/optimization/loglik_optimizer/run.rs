//! Execution helper that runs an `argmin` solver on a log-likelihood problem and
//! returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        adapter::ArgMinAdapter, types::SimplexState, LogLikelihood, MLEOptions, OptimOutcome,
        Theta,
    },
};
use argmin::core::{CostFunction, Executor, State};

/// Run an `argmin` optimization for a log-likelihood problem.
///
/// Wires up:
/// - the user model via [`ArgMinAdapter`],
/// - the chosen derivative-free `Solver` (the Nelder–Mead simplex, which
///   already carries its starting vertices),
/// - optional observers (behind the `obs_slog` feature),
/// - optional `max_iters`,
///
/// then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Arguments
/// - `theta0`: Initial parameter vector, used only for the verbose pre-run
///   log line; the simplex was seeded from it by the builder.
/// - `opts`: Optimizer options (tolerances, verbosity, max iters).
/// - `problem`: An [`ArgMinAdapter`] wrapping the user's model and data.
/// - `solver`: A fully constructed solver.
///
/// # Returns
/// An [`OptimOutcome`] containing the best parameter found, best log-likelihood
/// value ℓ(θ̂), termination status, iteration count and function-evaluation
/// counts.
///
/// # Errors
/// - Propagates any `argmin` runtime error via the crate's
///   `From<argmin::core::Error>` conversion.
/// - Propagates any validation errors encountered when constructing
///   [`OptimOutcome`] (e.g. every vertex stayed degenerate).
pub fn run_nelder_mead<'a, F, S>(
    theta0: &Theta, opts: &MLEOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
    S: argmin::core::Solver<ArgMinAdapter<'a, F>, SimplexState> + Send + 'static,
{
    if opts.verbose {
        log_initial_state(theta0, &problem)?;
    }
    let mut optimizer = Executor::new(problem, solver);
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        termination,
        iterations,
        function_counts,
    )
}

// ---- Helper Methods ----

fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: LogLikelihood,
{
    let ll0 = -problem.cost(theta0)?;
    tracing::debug!(theta0 = ?theta0.to_vec(), loglik = ll0, "starting simplex search");
    Ok(())
}
