//! models — user-facing sBG retention model.
//!
//! Purpose
//! -------
//! Expose [`ShiftedBetaGeom`], which implements `LogLikelihood` for the sBG
//! model and provides `train` / `fit`, `predict`, and diagnostic accessors on
//! top of `retention::core` and the generic log-likelihood optimizer.
//!
//! Invariants & assumptions
//! ------------------------
//! - θ always has length 2 with layout `θ = (α, β)`, enforced by
//!   `LogLikelihood::check`.
//! - A model instance is single-owner; independent cohorts use independent
//!   instances.

pub mod sbg;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::sbg::{ModelState, ShiftedBetaGeom};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::sbg::{ModelState, ShiftedBetaGeom};
}
