//! Error types for implied volatility solving.

use thiserror::Error;
use vanopt_core::types::SolverError;

use crate::analytical::AnalyticalError;

/// Implied volatility solver errors.
///
/// Distinguishes the three ways an inversion can fail: the observed price
/// lies outside the range the model can reach over the volatility bracket,
/// the root search ran out of iterations, or the inputs were rejected
/// before the search began.
///
/// # Variants
/// - `NoBracketingRoot`: No sign change over the volatility bracket
/// - `ConvergenceFailure`: Iteration cap reached before the tolerance
/// - `InvalidParameter`: Input rejected before solving
///
/// # Examples
/// ```
/// use vanopt_models::implied::ImpliedVolError;
///
/// let err = ImpliedVolError::NoBracketingRoot { lo: 1e-5, hi: 5.0 };
/// assert!(format!("{}", err).contains("No bracketing root"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// The objective has the same sign at both bracket endpoints.
    #[error("No bracketing root: objective has the same sign at σ = {lo} and σ = {hi}")]
    NoBracketingRoot {
        /// Lower volatility bracket endpoint
        lo: f64,
        /// Upper volatility bracket endpoint
        hi: f64,
    },

    /// The root search hit its iteration cap.
    #[error("Convergence failure: no root within tolerance after {iterations} iterations")]
    ConvergenceFailure {
        /// Number of iterations performed
        iterations: usize,
    },

    /// An input was rejected before the search began.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected input
        message: String,
    },
}

impl From<SolverError> for ImpliedVolError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NoBracket { a, b } => ImpliedVolError::NoBracketingRoot { lo: a, hi: b },
            SolverError::MaxIterationsExceeded { iterations } => {
                ImpliedVolError::ConvergenceFailure { iterations }
            }
        }
    }
}

impl From<AnalyticalError> for ImpliedVolError {
    fn from(err: AnalyticalError) -> Self {
        ImpliedVolError::InvalidParameter {
            message: err.to_string(),
        }
    }
}
