//! core — shared sBG data, parameters, probabilities, and forecasts.
//!
//! Purpose
//! -------
//! Collect the building blocks of the shifted-beta-geometric retention model:
//! the validated data container, the churn / survival recurrences, parameter
//! and option types, the closed-form predictor, and the actual-vs-predicted
//! comparison data. The model type in `retention::models` wires these into the
//! generic log-likelihood optimizer.
//!
//! Key behaviors
//! -------------
//! - Load and validate raw retention counts into [`RetentionData`], deriving
//!   per-period churn.
//! - Evaluate `P(T = t)` and `S(t)` by iterative recurrences
//!   ([`churn_probability`], [`survival`], [`churn_profile`]) guarded to
//!   `t ∈ [0, MAX_PERIOD]`.
//! - Map between model-space [`SBGParams`] and optimizer-space θ, and carry
//!   estimation settings in [`SBGOptions`].
//! - Predict normalized curves from fitted parameters ([`predict_curve`]) and
//!   align them against observed curves ([`RetentionComparison`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Data in [`RetentionData`] are finite, non-negative, non-increasing, have
//!   at least two periods, and are not all zero.
//! - θ always has length 2 with layout `θ = (α, β)`.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; index = period.
//! - This module performs no I/O and no logging. Errors are reported via
//!   `RetentionResult`.
//!
//! Downstream usage
//! ----------------
//! - Most callers go through `ShiftedBetaGeom`; lower-level code can import
//!   the items re-exported below or use the [`prelude`].

pub mod comparison;
pub mod data;
pub mod forecasts;
pub mod options;
pub mod params;
pub mod probability;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::comparison::{RetentionComparison, normalize_curve};
pub use self::data::RetentionData;
pub use self::forecasts::{DEFAULT_PREDICT_PERIODS, SBGForecast, predict_curve};
pub use self::options::SBGOptions;
pub use self::params::SBGParams;
pub use self::probability::{ChurnProfile, churn_probability, churn_profile, survival};
pub use self::validation::{
    MAX_PERIOD, is_non_increasing, is_numeric, validate_period, validate_retention_series,
    validate_theta,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_retention::retention::core::prelude::*;
//
// to import the main sBG core surface in a single line.

pub mod prelude {
    pub use super::comparison::RetentionComparison;
    pub use super::data::RetentionData;
    pub use super::forecasts::{SBGForecast, predict_curve};
    pub use super::options::SBGOptions;
    pub use super::params::SBGParams;
    pub use super::probability::{churn_probability, survival};
}
