//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors raised when model parameters fail validation

use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised by [`BlackScholes::new`](super::BlackScholes::new) when market
/// parameters fail validation. Pricing itself cannot fail: once a model is
/// constructed, every operation on it is total.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidVolatility`: Non-positive or non-finite volatility
///
/// # Examples
/// ```
/// use vanopt_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility (non-positive or non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}
