//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Errors from root-finding solvers.
///
/// Endpoint and iteration diagnostics are carried as plain `f64`/`usize`
/// values so the error type stays independent of the solver's generic
/// floating-point parameter.
///
/// # Variants
/// - `NoBracket`: The supplied interval does not bracket a root
/// - `MaxIterationsExceeded`: The iteration budget ran out before convergence
///
/// # Examples
/// ```
/// use vanopt_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: 1.0, b: 2.0 };
/// assert_eq!(
///     format!("{}", err),
///     "No bracket: f(1) and f(2) have same sign"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// The function has the same sign at both interval endpoints.
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left endpoint of the rejected interval.
        a: f64,
        /// Right endpoint of the rejected interval.
        b: f64,
    },

    /// The iteration budget was exhausted before the tolerance was met.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations performed.
        iterations: usize,
    },
}
