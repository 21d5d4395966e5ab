//! loglik_optimizer::builders — Nelder–Mead solver construction helpers.
//!
//! Purpose
//! -------
//! Build the derivative-free simplex solver used by the log-likelihood
//! optimizer. The starting simplex is derived from the caller's initial
//! guess, and crate-level options (the simplex spread tolerance) are applied
//! so higher-level code can request a configured solver without touching
//! Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - [`initial_simplex`] turns a guess `θ₀` of dimension `n` into `n + 1`
//!   vertices: `θ₀` itself plus one vertex per coordinate, perturbed by
//!   [`SIMPLEX_NONZERO_DELTA`] (relative) or [`SIMPLEX_ZERO_DELTA`]
//!   (absolute, for zero coordinates).
//! - [`build_optimizer_nelder_mead`] wraps those vertices into a
//!   [`NelderMeadSolver`] and applies `opts.tols.tol_sd` when present.
//!
//! Conventions
//! -----------
//! - The builders do **not** set `max_iters`; that is a runtime concern
//!   applied by the runner (`run_nelder_mead`).
//! - Any invalid tolerance rejected by Argmin surfaces as an [`OptError`]
//!   via the crate's `From<argmin::core::Error>` implementation.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        traits::MLEOptions,
        types::{NelderMeadSolver, Theta, SIMPLEX_NONZERO_DELTA, SIMPLEX_ZERO_DELTA},
    },
};

/// initial_simplex — starting vertices around an initial guess.
///
/// Parameters
/// ----------
/// - `theta0`: `&Theta`
///   Initial guess. Must be non-empty.
///
/// Returns
/// -------
/// `OptResult<Vec<Theta>>`
///   `theta0.len() + 1` vertices, the first of which is `theta0`.
///
/// Errors
/// ------
/// - [`OptError::EmptyInitialGuess`] when `theta0` has no coordinates.
pub fn initial_simplex(theta0: &Theta) -> OptResult<Vec<Theta>> {
    if theta0.is_empty() {
        return Err(OptError::EmptyInitialGuess);
    }
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for k in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[k] = if vertex[k] != 0.0 {
            (1.0 + SIMPLEX_NONZERO_DELTA) * vertex[k]
        } else {
            SIMPLEX_ZERO_DELTA
        };
        vertices.push(vertex);
    }
    Ok(vertices)
}

/// build_optimizer_nelder_mead — construct a Nelder–Mead solver.
///
/// Parameters
/// ----------
/// - `theta0`: `&Theta`
///   Initial guess used to seed the simplex.
/// - `opts`: `&MLEOptions`
///   Optimizer options. This builder consults `opts.tols.tol_sd` only.
///
/// Returns
/// -------
/// `OptResult<NelderMeadSolver>`
///
/// Errors
/// ------
/// - Propagates [`initial_simplex`] errors.
/// - `OptError` (via `From<argmin::core::Error>`) if Argmin rejects the
///   tolerance.
pub fn build_optimizer_nelder_mead(theta0: &Theta, opts: &MLEOptions) -> OptResult<NelderMeadSolver> {
    let mut solver = NelderMeadSolver::new(initial_simplex(theta0)?);
    if let Some(sd) = opts.tols.tol_sd {
        solver = solver.with_sd_tolerance(sd)?;
    }
    Ok(solver)
}
