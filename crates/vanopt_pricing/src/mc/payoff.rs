//! Payoff evaluation for simulated terminal prices.
//!
//! The engine prices vanilla European contracts only, so a payoff is fully
//! described by a strike and a call/put type drawn from the closed
//! [`OptionType`] enum in `vanopt_models`.

use vanopt_models::instruments::OptionType;

use super::error::ConfigError;

/// Payoff parameters for a vanilla European option.
///
/// Construction is infallible; the strike is validated together with the
/// market parameters when a pricing call is made.
///
/// # Examples
///
/// ```rust
/// use vanopt_pricing::mc::PayoffParams;
///
/// let call = PayoffParams::call(100.0);
/// assert_eq!(call.evaluate(110.0), 10.0);
/// assert_eq!(call.evaluate(90.0), 0.0);
///
/// let put = PayoffParams::put(100.0);
/// assert_eq!(put.evaluate(90.0), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayoffParams {
    /// Strike price (K).
    strike: f64,
    /// Call or put.
    option_type: OptionType,
}

impl PayoffParams {
    /// Creates payoff parameters for the given strike and option type.
    #[inline]
    pub fn new(strike: f64, option_type: OptionType) -> Self {
        Self {
            strike,
            option_type,
        }
    }

    /// Creates call payoff parameters: max(S - K, 0).
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self::new(strike, OptionType::Call)
    }

    /// Creates put payoff parameters: max(K - S, 0).
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self::new(strike, OptionType::Put)
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Evaluates the intrinsic payoff at a terminal spot price.
    #[inline]
    pub fn evaluate(&self, terminal: f64) -> f64 {
        self.option_type.payoff(terminal, self.strike)
    }

    /// Validates the payoff parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if the strike is not strictly
    /// positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "strike",
                value: format!("must be positive and finite, got {}", self.strike),
            });
        }
        Ok(())
    }
}
