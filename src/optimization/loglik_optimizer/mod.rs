//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run a derivative-free
//! Nelder–Mead simplex with configurable stopping rules.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - seeds a simplex around the guess via [`builders`],
//!   - executes the solver via [`run::run_nelder_mead`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`MLEOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** a log-likelihood `ℓ(θ)` by minimizing
//!   a cost `c(θ) = -ℓ(θ)`; user code implements `ℓ(θ)`, **never** the cost.
//! - `ℓ(θ) = -∞` is a legal value for degenerate θ. It becomes a `+∞` cost,
//!   which the simplex tolerates; `NaN` is an error.
//! - Box constraints are expressed through [`LogLikelihood::in_domain`];
//!   points outside the domain are never evaluated.
//! - Non-convergence (iteration cap reached) is reported through
//!   [`OptimOutcome::converged`], not as an error.
//!
//! Conventions
//! -----------
//! - Parameters live in optimizer space as [`Theta`] (`Array1<f64>`).
//! - All user-facing diagnostics (including [`OptimOutcome::value`]) are
//!   expressed in terms of the log-likelihood `ℓ`.
//! - Errors bubble up as [`OptResult<T>`](crate::optimization::errors::OptResult);
//!   this module and its children never intentionally panic or use `unsafe`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions and `+∞` handling in
//!   [`adapter`], simplex construction in [`builders`], configuration and
//!   outcome invariants in [`traits`], and toy end-to-end solves in [`api`].

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, FnEvalMap, Theta, DEFAULT_MAX_ITER, DEFAULT_TOL_SD};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_retention::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Theta};
}
