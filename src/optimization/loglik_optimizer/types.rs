//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and solver aliases used by the
//! log-likelihood optimizer. By defining these in one place, the rest of
//! the optimization code can stay agnostic to `ndarray` and Argmin
//! generics and can more easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors and scalar costs
//!   (`Theta`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose the pre-wired Nelder–Mead solver alias and the iteration
//!   state it runs on.
//! - Pin the constants used to build the initial simplex and the default
//!   stopping rules.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are `ndarray` containers over `f64`.
//! - `Cost` is always a scalar `f64`; higher layers handle the sign flip
//!   between cost and log-likelihood.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; there are no
//!   dedicated unit tests.
use argmin::{core::IterState, solver::neldermead::NelderMead};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Nelder–Mead simplex solver specialized to this crate's numeric types.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;

/// Iteration state driven by derivative-free solvers (no gradient, Jacobian,
/// Hessian or residual slots).
pub type SimplexState = IterState<Theta, (), (), (), (), Cost>;

/// Relative perturbation applied to each non-zero coordinate of the initial
/// guess when building the starting simplex.
pub const SIMPLEX_NONZERO_DELTA: f64 = 0.05;

/// Absolute perturbation used instead when a coordinate of the guess is zero.
pub const SIMPLEX_ZERO_DELTA: f64 = 0.00025;

/// Default stopping rule on the standard deviation of simplex costs.
pub const DEFAULT_TOL_SD: f64 = 1e-10;

/// Default iteration cap (200 per free parameter for the 2-parameter sBG).
pub const DEFAULT_MAX_ITER: usize = 400;
