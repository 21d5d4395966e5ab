//! retention — sBG customer-retention stack: core numerics, models, and errors.
//!
//! Purpose
//! -------
//! Estimate and forecast cohort retention curves with the shifted-beta-geometric
//! (sBG) model. Given the number of customers retained at each period, the
//! stack fits the two Beta shape parameters of the per-customer churn rate by
//! maximum likelihood, then projects a normalized retention curve forward.
//!
//! Key behaviors
//! -------------
//! - Collect data loading, churn / survival recurrences, parameters, options,
//!   prediction, and comparison helpers in [`core`].
//! - Expose the user-facing model [`ShiftedBetaGeom`] in [`models`].
//! - Centralize model errors in [`errors`] (`RetentionError`,
//!   `RetentionResult`).
//!
//! Conventions
//! -----------
//! - Data flow is Loader → Probability Engine → Likelihood → Optimizer →
//!   fitted parameters → Predictor. Fitted parameters are never mutated after
//!   a fit; retraining replaces them.
//! - The stack performs no I/O. The only logging is a `debug` / `warn` line
//!   per fit through `tracing`.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use rust_retention::retention::prelude::*;
//!
//! let mut model = ShiftedBetaGeom::default();
//! model.train(&[100.0, 98.0, 94.0, 93.0, 91.0, 90.0]).unwrap();
//! let curve = model.predict(12).unwrap();
//! assert_eq!(curve.curve.len(), 13);
//! ```

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    DEFAULT_PREDICT_PERIODS, RetentionComparison, RetentionData, SBGForecast, SBGOptions,
    SBGParams,
};
pub use self::errors::{RetentionError, RetentionResult};
pub use self::models::{ModelState, ShiftedBetaGeom};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_retention::retention::prelude::*;
//
// to import the main retention surface in a single line.

pub mod prelude {
    pub use super::{
        DEFAULT_PREDICT_PERIODS, ModelState, RetentionComparison, RetentionData, RetentionError,
        RetentionResult, SBGForecast, SBGOptions, SBGParams, ShiftedBetaGeom,
    };
}
