//! Vanilla European option instrument.

use num_traits::Float;

use super::params::OptionParams;
use super::payoff::OptionType;

/// A vanilla European option.
///
/// Binds a Call/Put payoff type to validated contract parameters. The
/// exercise style is implicit: every option of this type is exercisable
/// only at expiry.
///
/// Construction is infallible because [`OptionParams`] has already
/// validated strike and expiry.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vanopt_models::instruments::{EuropeanOption, OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0_f64, 0.5).unwrap();
/// let put = EuropeanOption::new(params, OptionType::Put);
///
/// assert_eq!(put.strike(), 100.0);
/// assert_eq!(put.expiry(), 0.5);
/// assert_eq!(put.payoff(80.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption<T: Float> {
    params: OptionParams<T>,
    option_type: OptionType,
}

impl<T: Float> EuropeanOption<T> {
    /// Creates a new European option.
    ///
    /// # Arguments
    /// * `params` - Validated contract parameters
    /// * `option_type` - Call or Put
    pub fn new(params: OptionParams<T>, option_type: OptionType) -> Self {
        Self {
            params,
            option_type,
        }
    }

    /// Returns the contract parameters.
    #[inline]
    pub fn params(&self) -> OptionParams<T> {
        self.params
    }

    /// Returns the payoff type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.params.strike()
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.params.expiry()
    }

    /// Evaluates the payoff at a terminal spot price.
    ///
    /// # Arguments
    /// * `spot` - Terminal spot price
    ///
    /// # Returns
    /// max(S - K, 0) for a call, max(K - S, 0) for a put.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.option_type.payoff(spot, self.params.strike())
    }
}
