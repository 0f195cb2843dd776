//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction.

use thiserror::Error;

/// Instrument-related errors.
///
/// Raised when contract parameters fail validation at construction time.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive or non-finite
/// - `InvalidExpiry`: Expiry time is non-positive or non-finite
///
/// # Examples
/// ```
/// use vanopt_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry time (non-positive or non-finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strike_display() {
        let err = InstrumentError::InvalidStrike { strike: -100.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = -100");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = InstrumentError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_invalid_strike_nan_display() {
        let err = InstrumentError::InvalidStrike { strike: f64::NAN };
        assert_eq!(format!("{}", err), "Invalid strike: K = NaN");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InstrumentError::InvalidStrike { strike: -100.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = InstrumentError::InvalidExpiry { expiry: -0.5 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
