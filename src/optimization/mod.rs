//! optimization — MLE stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting: an Argmin-backed
//! log-likelihood optimizer plus a single error/result surface. Callers
//! implement a log-likelihood, choose stopping rules, and obtain fitted
//! parameters and diagnostics without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`) with a derivative-free simplex solver.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize `ℓ(θ)` by minimizing `c(θ) = -ℓ(θ)`;
//!   user-facing APIs and outcomes are expressed in terms of `ℓ`.
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors or model-specific error enums.
//! - This layer only logs at `debug` level when verbose runs are requested;
//!   reporting fit diagnostics is the model layer's job.

pub mod errors;
pub mod loglik_optimizer;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
}
