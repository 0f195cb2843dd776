//! Payoff type definitions.
//!
//! This module provides the closed Call/Put payoff enum with exact
//! intrinsic payoff evaluation.

use num_traits::Float;
use std::fmt;

/// Type of option payoff.
///
/// A closed two-variant enum: every option in the system is either a call
/// or a put, and `match` expressions over it need no fallback arm.
///
/// # Variants
/// - `Call`: max(S - K, 0) payoff
/// - `Put`: max(K - S, 0) payoff
///
/// # Examples
/// ```
/// use vanopt_models::instruments::OptionType;
///
/// let call = OptionType::Call;
/// assert_eq!(call.payoff(110.0_f64, 100.0), 10.0);
/// assert_eq!(call.payoff(90.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Evaluate the intrinsic payoff for given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Terminal spot price (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Returns
    /// The exact payoff, always non-negative.
    ///
    /// # Examples
    /// ```
    /// use vanopt_models::instruments::OptionType;
    ///
    /// // In-the-money put
    /// let put = OptionType::Put;
    /// assert_eq!(put.payoff(90.0_f64, 100.0), 10.0);
    ///
    /// // Out-of-the-money put
    /// assert_eq!(put.payoff(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}
