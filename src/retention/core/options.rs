//! sBG options — configuration for estimation.
//!
//! Purpose
//! -------
//! Collect the knobs for fitting an sBG model in one place: the optimizer's
//! starting point `(α₀, β₀)` and the maximum-likelihood optimizer options
//! (simplex tolerance, iteration cap, verbosity).
//!
//! Invariants & assumptions
//! ------------------------
//! - Starting values are finite and strictly positive, checked by
//!   [`SBGOptions::new`].
//! - [`MLEOptions`] is assumed to have been validated by its own builder
//!   ([`Tolerances::new`](crate::optimization::loglik_optimizer::Tolerances::new)).
//!
//! Downstream usage
//! ----------------
//! - Construct an [`SBGOptions`] (or start from `SBGOptions::default()`) and
//!   pass it to [`ShiftedBetaGeom::new`](crate::retention::models::sbg::ShiftedBetaGeom::new).
//!
//! Testing notes
//! -------------
//! - Unit tests check defaults, that inputs are preserved, and that invalid
//!   starting values are rejected.
use crate::{
    optimization::loglik_optimizer::{MLEOptions, Theta},
    retention::{core::validation::validate_initial_guess, errors::RetentionResult},
};
use ndarray::array;

/// Default optimizer starting value for both α and β.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// SBGOptions — estimation-time configuration for sBG models.
///
/// Fields
/// ------
/// - `initial_alpha`: `f64`
///   Starting α for the simplex, > 0.
/// - `initial_beta`: `f64`
///   Starting β for the simplex, > 0.
/// - `mle_opts`: [`MLEOptions`]
///   Optimizer configuration (SD tolerance, iteration cap, verbosity).
#[derive(Debug, Clone, PartialEq)]
pub struct SBGOptions {
    /// Optimizer starting value for α.
    pub initial_alpha: f64,
    /// Optimizer starting value for β.
    pub initial_beta: f64,
    /// Nelder–Mead options.
    pub mle_opts: MLEOptions,
}

impl SBGOptions {
    /// Construct validated [`SBGOptions`].
    ///
    /// Errors
    /// ------
    /// - `RetentionError::InvalidInitialGuess` when either starting value is
    ///   non-finite or ≤ 0.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_retention::retention::core::options::SBGOptions;
    /// # use rust_retention::optimization::loglik_optimizer::{MLEOptions, Tolerances};
    /// let tols = Tolerances::new(Some(1e-8), Some(200)).unwrap();
    /// let opts = SBGOptions::new(0.5, 0.5, MLEOptions::new(tols, false)).unwrap();
    /// assert_eq!(opts.theta0().to_vec(), vec![0.5, 0.5]);
    /// ```
    pub fn new(initial_alpha: f64, initial_beta: f64, mle_opts: MLEOptions) -> RetentionResult<Self> {
        validate_initial_guess("alpha", initial_alpha)?;
        validate_initial_guess("beta", initial_beta)?;
        Ok(SBGOptions { initial_alpha, initial_beta, mle_opts })
    }

    /// Optimizer starting vector `θ₀ = [α₀, β₀]`.
    pub fn theta0(&self) -> Theta {
        array![self.initial_alpha, self.initial_beta]
    }
}

impl Default for SBGOptions {
    fn default() -> Self {
        SBGOptions {
            initial_alpha: DEFAULT_INITIAL_GUESS,
            initial_beta: DEFAULT_INITIAL_GUESS,
            mle_opts: MLEOptions::default(),
        }
    }
}
