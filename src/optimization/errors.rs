use argmin::core::{ArgminError, Error};

use crate::retention::errors::RetentionError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- MLEOptions ----
    /// Simplex standard-deviation tolerance needs to be positive and finite.
    InvalidTolSd {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one stopping rule must be provided.
    NoTolerancesProvided,

    // ---- Cost function ----
    /// Cost function returned NaN (+∞ is a legal "outside the domain" cost).
    NonFiniteCost {
        value: f64,
    },

    // ---- Simplex ----
    /// Initial simplex needs a non-empty starting point.
    EmptyInitialGuess,

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- sBG model errors ----
    /// Theta length mismatch for the (alpha, beta) pair.
    ThetaLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Optimizer input must have finite values.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    /// Likelihood requested a period outside the supported recursion range.
    PeriodOutOfRange {
        t: i64,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- MLEOptions ----
            OptError::InvalidTolSd { tol, reason } => {
                write!(f, "Invalid simplex standard-deviation tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Simplex ----
            OptError::EmptyInitialGuess => {
                write!(f, "Initial guess must contain at least one parameter")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- sBG model errors ----
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }
            OptError::PeriodOutOfRange { t } => {
                write!(f, "Likelihood requested period {t}, outside the supported range")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Our own errors travel through argmin boxed; recover them first.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<RetentionError> for OptError {
    fn from(err: RetentionError) -> Self {
        match err {
            RetentionError::Domain { t } => OptError::PeriodOutOfRange { t },
            RetentionError::ThetaLengthMismatch { expected, actual } => {
                OptError::ThetaLengthMismatch { expected, actual }
            }
            RetentionError::InvalidThetaInput { index, value } => {
                OptError::InvalidThetaInput { index, value }
            }
            other => OptError::BackendError { text: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recovery of crate errors that were boxed into `argmin::core::Error`.
    // - Mapping of argmin's own error kinds and of foreign errors.
    // - Conversion of sBG model errors into the optimizer surface.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure an `OptError` that travelled through argmin comes back unchanged.
    //
    // Given
    // -----
    // - `OptError::NonFiniteCost { value: NaN }` boxed into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::from` yields a `NonFiniteCost` variant again.
    fn opterror_round_trips_through_argmin_error() {
        let boxed: Error = OptError::NonFiniteCost { value: f64::NAN }.into();

        let recovered = OptError::from(boxed);

        assert!(matches!(recovered, OptError::NonFiniteCost { value } if value.is_nan()));
    }

    #[test]
    // Purpose
    // -------
    // Verify that argmin's own error kinds map onto the matching variants.
    //
    // Given
    // -----
    // - `ArgminError::InvalidParameter` boxed into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::InvalidParameter` with the same text.
    fn argmin_invalid_parameter_maps_to_invalid_parameter() {
        let boxed: Error = ArgminError::InvalidParameter { text: "bad tol".to_string() }.into();

        assert_eq!(
            OptError::from(boxed),
            OptError::InvalidParameter { text: "bad tol".to_string() }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure the likelihood's domain guard surfaces as `PeriodOutOfRange`.
    //
    // Given
    // -----
    // - `RetentionError::Domain { t: 600 }`.
    //
    // Expect
    // ------
    // - `OptError::PeriodOutOfRange { t: 600 }`.
    fn retention_domain_error_maps_to_period_out_of_range() {
        let err = OptError::from(RetentionError::Domain { t: 600 });

        assert_eq!(err, OptError::PeriodOutOfRange { t: 600 });
    }

    #[test]
    // Purpose
    // -------
    // Model errors without an optimizer counterpart keep their message.
    //
    // Given
    // -----
    // - `RetentionError::AllZero` and `RetentionError::DegenerateFit`.
    //
    // Expect
    // ------
    // - `OptError::BackendError` whose text is the model error's message.
    fn other_retention_errors_keep_their_message() {
        let err = OptError::from(RetentionError::AllZero);
        assert_eq!(err, OptError::BackendError { text: "Data cannot be all zero".to_string() });

        let degenerate = RetentionError::DegenerateFit { alpha: 0.0, beta: 1.0 };
        let expected = degenerate.to_string();
        assert_eq!(OptError::from(degenerate), OptError::BackendError { text: expected });
    }
}
