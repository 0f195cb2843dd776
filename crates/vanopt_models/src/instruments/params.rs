//! Common contract parameters.
//!
//! This module provides the validated strike/expiry pair shared by
//! option instruments.

use num_traits::Float;

use super::error::InstrumentError;

/// Validated contract parameters.
///
/// Contains strike price and time to expiry. Construction rejects
/// non-positive or non-finite values, so a value of this type always
/// satisfies `strike > 0` and `expiry > 0`.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vanopt_models::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0_f64, 1.0).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.expiry(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams<T: Float> {
    strike: T,
    expiry: T,
}

impl<T: Float> OptionParams<T> {
    /// Creates new contract parameters with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive and finite)
    /// * `expiry` - Time to expiry in years (must be positive and finite)
    ///
    /// # Returns
    /// `Ok(OptionParams)` if both parameters are valid.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if strike is not a positive finite number
    /// - `InstrumentError::InvalidExpiry` if expiry is not a positive finite number
    ///
    /// # Examples
    /// ```
    /// use vanopt_models::instruments::OptionParams;
    ///
    /// // Valid parameters
    /// let params = OptionParams::new(100.0_f64, 1.0);
    /// assert!(params.is_ok());
    ///
    /// // Expired contracts are rejected rather than priced at intrinsic
    /// let expired = OptionParams::new(100.0_f64, 0.0);
    /// assert!(expired.is_err());
    /// ```
    pub fn new(strike: T, expiry: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if strike <= zero || !strike.is_finite() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry <= zero || !expiry.is_finite() {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self { strike, expiry })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }
}
