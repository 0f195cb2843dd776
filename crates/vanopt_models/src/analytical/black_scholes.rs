//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{EuropeanOption, OptionType};

/// The five first-order Black-Scholes sensitivities.
///
/// Produced by [`BlackScholes::greeks`]. Theta follows the per-year
/// convention: it is the price change for one full year of calendar time,
/// not one trading day.
///
/// # Examples
/// ```
/// use vanopt_models::analytical::BlackScholes;
/// use vanopt_models::instruments::{EuropeanOption, OptionParams, OptionType};
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let params = OptionParams::new(100.0, 1.0).unwrap();
/// let call = EuropeanOption::new(params, OptionType::Call);
///
/// let greeks = bs.greeks(&call);
/// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
/// assert!(greeks.gamma > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Sensitivity to spot (∂V/∂S)
    pub delta: T,
    /// Convexity in spot (∂²V/∂S²)
    pub gamma: T,
    /// Sensitivity to volatility (∂V/∂σ)
    pub vega: T,
    /// Sensitivity to the passage of time, per year (-∂V/∂T)
    pub theta: T,
    /// Sensitivity to the risk-free rate (∂V/∂r)
    pub rho: T,
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics. Market parameters are validated at
/// construction; combined with the validated contract parameters inside
/// [`EuropeanOption`], every pricing operation is a total function and
/// never produces NaN.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vanopt_models::analytical::BlackScholes;
/// use vanopt_models::instruments::{EuropeanOption, OptionParams, OptionType};
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let params = OptionParams::new(100.0, 1.0).unwrap();
/// let call = EuropeanOption::new(params, OptionType::Call);
/// let put = EuropeanOption::new(params, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = bs.price(&call) - bs.price(&put) - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive and finite)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (must be positive and finite)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or non-finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or non-finite
    ///
    /// # Examples
    /// ```
    /// use vanopt_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    ///
    /// // Invalid volatility
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero || !spot.is_finite() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero || !volatility.is_finite() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Well-defined for every valid option: strike and expiry are positive
    /// by construction, so the logarithm and the division are always finite.
    #[inline]
    pub fn d1(&self, option: &EuropeanOption<T>) -> T {
        let half = T::from(0.5).unwrap();
        let expiry = option.expiry();

        let vol_sqrt_t = self.volatility * expiry.sqrt();

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (self.spot / option.strike()).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, option: &EuropeanOption<T>) -> T {
        self.d1(option) - self.volatility * option.expiry().sqrt()
    }

    /// Computes the option price.
    ///
    /// - Call: C = S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Arguments
    /// * `option` - The European option to price
    ///
    /// # Returns
    /// The theoretical option price, always non-negative within the
    /// accuracy of the normal CDF approximation.
    ///
    /// # Examples
    /// ```
    /// use vanopt_models::analytical::BlackScholes;
    /// use vanopt_models::instruments::{EuropeanOption, OptionParams, OptionType};
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let params = OptionParams::new(100.0, 1.0).unwrap();
    /// let call = EuropeanOption::new(params, OptionType::Call);
    ///
    /// let price = bs.price(&call);
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price(&self, option: &EuropeanOption<T>) -> T {
        let d1 = self.d1(option);
        let d2 = self.d2(option);
        let strike = option.strike();
        let discount = (-self.rate * option.expiry()).exp();

        match option.option_type() {
            OptionType::Call => self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
            OptionType::Put => strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁), in [0, 1]
    /// - Put Delta = N(d₁) - 1, in [-1, 0]
    #[inline]
    pub fn delta(&self, option: &EuropeanOption<T>) -> T {
        let n_d1 = norm_cdf(self.d1(option));

        match option.option_type() {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - T::one(),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    ///
    /// Gamma is the same for calls and puts; the payoff type carried by
    /// `option` does not enter the formula.
    #[inline]
    pub fn gamma(&self, option: &EuropeanOption<T>) -> T {
        let d1 = self.d1(option);
        let sqrt_t = option.expiry().sqrt();

        norm_pdf(d1) / (self.spot * self.volatility * sqrt_t)
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁)
    ///
    /// Vega is the same for calls and puts.
    #[inline]
    pub fn vega(&self, option: &EuropeanOption<T>) -> T {
        let d1 = self.d1(option);
        let sqrt_t = option.expiry().sqrt();

        self.spot * sqrt_t * norm_pdf(d1)
    }

    /// Computes Theta, the sensitivity to the passage of time.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Theta is quoted per year of calendar time: it equals -∂V/∂T where
    /// T is the time to expiry in years. Divide by 365 to approximate the
    /// decay over a single day.
    #[inline]
    pub fn theta(&self, option: &EuropeanOption<T>) -> T {
        let d1 = self.d1(option);
        let d2 = self.d2(option);
        let strike = option.strike();
        let sqrt_t = option.expiry().sqrt();
        let discount = (-self.rate * option.expiry()).exp();
        let two = T::from(2.0).unwrap();

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (two * sqrt_t);

        match option.option_type() {
            OptionType::Call => decay - self.rate * strike * discount * norm_cdf(d2),
            OptionType::Put => decay + self.rate * strike * discount * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, option: &EuropeanOption<T>) -> T {
        let d2 = self.d2(option);
        let strike = option.strike();
        let expiry = option.expiry();
        let discount = (-self.rate * expiry).exp();

        match option.option_type() {
            OptionType::Call => strike * expiry * discount * norm_cdf(d2),
            OptionType::Put => -strike * expiry * discount * norm_cdf(-d2),
        }
    }

    /// Computes all five first-order Greeks in one call.
    ///
    /// # Examples
    /// ```
    /// use vanopt_models::analytical::BlackScholes;
    /// use vanopt_models::instruments::{EuropeanOption, OptionParams, OptionType};
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let params = OptionParams::new(100.0, 1.0).unwrap();
    /// let put = EuropeanOption::new(params, OptionType::Put);
    ///
    /// let greeks = bs.greeks(&put);
    /// assert!(greeks.delta < 0.0);
    /// assert!(greeks.rho < 0.0);
    /// ```
    pub fn greeks(&self, option: &EuropeanOption<T>) -> Greeks<T> {
        Greeks {
            delta: self.delta(option),
            gamma: self.gamma(option),
            vega: self.vega(option),
            theta: self.theta(option),
            rho: self.rho(option),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::OptionParams;
    use approx::assert_relative_eq;

    fn call_option(strike: f64, expiry: f64) -> EuropeanOption<f64> {
        EuropeanOption::new(OptionParams::new(strike, expiry).unwrap(), OptionType::Call)
    }

    fn put_option(strike: f64, expiry: f64) -> EuropeanOption<f64> {
        EuropeanOption::new(OptionParams::new(strike, expiry).unwrap(), OptionType::Put)
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2);
        assert!(bs.is_ok());

        let bs = bs.unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot_negative() {
        let result = BlackScholes::new(-100.0_f64, 0.05, 0.2);
        assert!(result.is_err());
        match result.unwrap_err() {
            AnalyticalError::InvalidSpot { spot } => {
                assert_eq!(spot, -100.0);
            }
            _ => panic!("Expected InvalidSpot error"),
        }
    }

    #[test]
    fn test_new_invalid_spot_zero() {
        let result = BlackScholes::new(0.0_f64, 0.05, 0.2);
        assert!(matches!(result, Err(AnalyticalError::InvalidSpot { .. })));
    }

    #[test]
    fn test_new_invalid_spot_nan() {
        let result = BlackScholes::new(f64::NAN, 0.05, 0.2);
        assert!(matches!(result, Err(AnalyticalError::InvalidSpot { .. })));
    }

    #[test]
    fn test_new_invalid_volatility_negative() {
        let result = BlackScholes::new(100.0_f64, 0.05, -0.2);
        assert!(result.is_err());
        match result.unwrap_err() {
            AnalyticalError::InvalidVolatility { volatility } => {
                assert_eq!(volatility, -0.2);
            }
            _ => panic!("Expected InvalidVolatility error"),
        }
    }

    #[test]
    fn test_new_invalid_volatility_zero() {
        let result = BlackScholes::new(100.0_f64, 0.05, 0.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        // Negative rates should be allowed
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2);
        assert!(bs.is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        let d1 = bs.d1(&call_option(100.0, 1.0));
        // d1 = (0 + 0.02/2 * 1) / 0.2 = 0.1
        assert_relative_eq!(d1, 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d2_atm() {
        // ATM with r=0: d2 = d1 - σ√T = -σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        let d2 = bs.d2(&call_option(100.0, 1.0));
        // d2 = 0.1 - 0.2 = -0.1
        assert_relative_eq!(d2, -0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2_relationship() {
        // d2 = d1 - σ√T
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let option = call_option(105.0, 0.5);
        let expected_d2 = bs.d1(&option) - 0.2 * 0.5_f64.sqrt();
        assert_relative_eq!(bs.d2(&option), expected_d2, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_same_for_call_and_put() {
        // d1 depends only on contract parameters, not the payoff type
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.d1(&call_option(110.0, 1.0)), bs.d1(&put_option(110.0, 1.0)));
    }

    #[test]
    fn test_d1_itm_positive() {
        // Deep ITM call should have large positive d1
        let bs = BlackScholes::new(150.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.d1(&call_option(100.0, 1.0)) > 1.0);
    }

    #[test]
    fn test_d1_otm_negative() {
        // Deep OTM call should have negative d1
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.d1(&call_option(100.0, 1.0)) < -1.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_positive() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price(&call_option(100.0, 1.0)) > 0.0);
    }

    #[test]
    fn test_put_price_positive() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price(&put_option(100.0, 1.0)) > 0.0);
    }

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1
        // Expected call price ≈ 10.4506
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price(&call_option(100.0, 1.0));
        assert_relative_eq!(price, 10.4506, epsilon = 0.001);
    }

    #[test]
    fn test_put_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1
        // Expected put price ≈ 5.5735
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price(&put_option(100.0, 1.0));
        assert_relative_eq!(price, 5.5735, epsilon = 0.001);
    }

    #[test]
    fn test_deep_itm_call() {
        // Deep ITM call ≈ S - K*exp(-rT)
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price(&call_option(100.0, 1.0));
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call() {
        // Deep OTM call ≈ 0
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price(&call_option(100.0, 1.0));
        assert!(price < 0.01);
    }

    #[test]
    fn test_short_expiry_near_intrinsic() {
        // With one day left, an ITM call trades close to intrinsic value
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price(&call_option(100.0, 1.0 / 365.0));
        assert_relative_eq!(price, 10.0, epsilon = 0.05);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K*exp(-rT)
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let call = bs.price(&call_option(100.0, 1.0));
        let put = bs.price(&put_option(100.0, 1.0));
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.price(&call_option(strike, 1.0));
            let put = bs.price(&put_option(strike, 1.0));
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_various_expiries() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for expiry in [0.25, 0.5, 1.0, 2.0] {
            let call = bs.price(&call_option(100.0, expiry));
            let put = bs.price(&put_option(100.0, expiry));
            let forward = 100.0 - 100.0 * (-0.05 * expiry).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        // Parity should hold for negative rates
        let bs = BlackScholes::new(100.0_f64, -0.02, 0.2).unwrap();
        let call = bs.price(&call_option(100.0, 1.0));
        let put = bs.price(&put_option(100.0, 1.0));
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_call_bounds() {
        // Call delta ∈ [0, 1]
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let delta = bs.delta(&call_option(strike, 1.0));
            assert!(delta >= 0.0, "Call delta should be >= 0");
            assert!(delta <= 1.0, "Call delta should be <= 1");
        }
    }

    #[test]
    fn test_delta_put_bounds() {
        // Put delta ∈ [-1, 0]
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let delta = bs.delta(&put_option(strike, 1.0));
            assert!(delta >= -1.0, "Put delta should be >= -1");
            assert!(delta <= 0.0, "Put delta should be <= 0");
        }
    }

    #[test]
    fn test_delta_call_put_relationship() {
        // Put delta = Call delta - 1
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let call_delta = bs.delta(&call_option(100.0, 1.0));
        let put_delta = bs.delta(&put_option(100.0, 1.0));
        assert_relative_eq!(put_delta, call_delta - 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_gamma_identical_for_call_and_put() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 100.0, 120.0] {
            assert_eq!(
                bs.gamma(&call_option(strike, 1.0)),
                bs.gamma(&put_option(strike, 1.0))
            );
        }
    }

    #[test]
    fn test_vega_identical_for_call_and_put() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 100.0, 120.0] {
            assert_eq!(
                bs.vega(&call_option(strike, 1.0)),
                bs.vega(&put_option(strike, 1.0))
            );
        }
    }

    #[test]
    fn test_gamma_non_negative() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            assert!(bs.gamma(&call_option(strike, 1.0)) >= 0.0);
        }
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        // Gamma peaks near the money
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let gamma_atm = bs.gamma(&call_option(100.0, 1.0));
        assert!(gamma_atm >= bs.gamma(&call_option(80.0, 1.0)));
        assert!(gamma_atm >= bs.gamma(&call_option(120.0, 1.0)));
    }

    #[test]
    fn test_vega_non_negative() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            assert!(bs.vega(&call_option(strike, 1.0)) >= 0.0);
        }
    }

    #[test]
    fn test_theta_call_typically_negative() {
        // For most cases, theta is negative (time decay)
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.theta(&call_option(100.0, 1.0)) < 0.0);
    }

    #[test]
    fn test_rho_call_positive() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.rho(&call_option(100.0, 1.0)) > 0.0);
    }

    #[test]
    fn test_rho_put_negative() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.rho(&put_option(100.0, 1.0)) < 0.0);
    }

    #[test]
    fn test_greeks_aggregate_matches_individual() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let option = call_option(105.0, 0.75);
        let greeks = bs.greeks(&option);

        assert_eq!(greeks.delta, bs.delta(&option));
        assert_eq!(greeks.gamma, bs.gamma(&option));
        assert_eq!(greeks.vega, bs.vega(&option));
        assert_eq!(greeks.theta, bs.theta(&option));
        assert_eq!(greeks.rho, bs.rho(&option));
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let option = call_option(100.0, 1.0);
        let h = 0.01;

        let bs_up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let bs_dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();

        let fd_delta = (bs_up.price(&option) - bs_dn.price(&option)) / (2.0 * h);
        assert_relative_eq!(bs.delta(&option), fd_delta, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let option = call_option(100.0, 1.0);
        let h = 0.01;

        let bs_up = BlackScholes::new(100.0 + h, 0.05, 0.2).unwrap();
        let bs_dn = BlackScholes::new(100.0 - h, 0.05, 0.2).unwrap();

        let fd_gamma =
            (bs_up.price(&option) - 2.0 * bs.price(&option) + bs_dn.price(&option)) / (h * h);
        assert_relative_eq!(bs.gamma(&option), fd_gamma, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let option = call_option(100.0, 1.0);
        let h = 0.001;

        let bs_up = BlackScholes::new(100.0, 0.05, 0.2 + h).unwrap();
        let bs_dn = BlackScholes::new(100.0, 0.05, 0.2 - h).unwrap();

        let fd_vega = (bs_up.price(&option) - bs_dn.price(&option)) / (2.0 * h);
        assert_relative_eq!(bs.vega(&option), fd_vega, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // Theta = -∂V/∂T under the per-year convention
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let h = 1e-4;

        let option_up = call_option(100.0, 1.0 + h);
        let option_dn = call_option(100.0, 1.0 - h);

        let fd_theta = -(bs.price(&option_up) - bs.price(&option_dn)) / (2.0 * h);
        assert_relative_eq!(bs.theta(&call_option(100.0, 1.0)), fd_theta, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_put_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let h = 1e-4;

        let option_up = put_option(100.0, 1.0 + h);
        let option_dn = put_option(100.0, 1.0 - h);

        let fd_theta = -(bs.price(&option_up) - bs.price(&option_dn)) / (2.0 * h);
        assert_relative_eq!(bs.theta(&put_option(100.0, 1.0)), fd_theta, epsilon = 1e-3);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let option = call_option(100.0, 1.0);
        let h = 0.0001;

        let bs_up = BlackScholes::new(100.0, 0.05 + h, 0.2).unwrap();
        let bs_dn = BlackScholes::new(100.0, 0.05 - h, 0.2).unwrap();

        let fd_rho = (bs_up.price(&option) - bs_dn.price(&option)) / (2.0 * h);
        assert_relative_eq!(bs.rho(&option), fd_rho, epsilon = 1e-3);
    }

    // ==========================================================
    // Clone and Debug Tests
    // ==========================================================

    #[test]
    fn test_clone() {
        let bs1 = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let bs2 = bs1.clone();
        assert_eq!(bs1.spot(), bs2.spot());
        assert_eq!(bs1.rate(), bs2.rate());
        assert_eq!(bs1.volatility(), bs2.volatility());
    }

    #[test]
    fn test_debug() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let debug_str = format!("{:?}", bs);
        assert!(debug_str.contains("BlackScholes"));
        assert!(debug_str.contains("spot"));
    }

    // ==========================================================
    // f32 Compatibility Tests
    // ==========================================================

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        let params = OptionParams::new(100.0_f32, 1.0_f32).unwrap();
        let call = EuropeanOption::new(params, OptionType::Call);
        let price = bs.price(&call);
        assert!((price - 10.45_f32).abs() < 0.05);
    }

    // ==========================================================
    // Property Tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn spot_strategy() -> impl Strategy<Value = f64> {
            50.0..150.0_f64
        }

        fn strike_strategy() -> impl Strategy<Value = f64> {
            50.0..150.0_f64
        }

        fn expiry_strategy() -> impl Strategy<Value = f64> {
            0.1..3.0_f64
        }

        fn rate_strategy() -> impl Strategy<Value = f64> {
            -0.02..0.10_f64
        }

        fn vol_strategy() -> impl Strategy<Value = f64> {
            0.05..0.8_f64
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn prop_put_call_parity(
                spot in spot_strategy(),
                strike in strike_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
            ) {
                let bs = BlackScholes::new(spot, rate, vol).unwrap();
                let call = bs.price(&call_option(strike, expiry));
                let put = bs.price(&put_option(strike, expiry));
                let forward = spot - strike * (-rate * expiry).exp();

                prop_assert!((call - put - forward).abs() < 1e-6);
            }

            #[test]
            fn prop_call_delta_in_unit_interval(
                spot in spot_strategy(),
                strike in strike_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
            ) {
                let bs = BlackScholes::new(spot, rate, vol).unwrap();
                let delta = bs.delta(&call_option(strike, expiry));

                prop_assert!((0.0..=1.0).contains(&delta));
            }

            #[test]
            fn prop_put_delta_in_negative_unit_interval(
                spot in spot_strategy(),
                strike in strike_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
            ) {
                let bs = BlackScholes::new(spot, rate, vol).unwrap();
                let delta = bs.delta(&put_option(strike, expiry));

                prop_assert!((-1.0..=0.0).contains(&delta));
            }

            #[test]
            fn prop_gamma_and_vega_payoff_independent(
                spot in spot_strategy(),
                strike in strike_strategy(),
                expiry in expiry_strategy(),
                rate in rate_strategy(),
                vol in vol_strategy(),
            ) {
                let bs = BlackScholes::new(spot, rate, vol).unwrap();
                let call = call_option(strike, expiry);
                let put = put_option(strike, expiry);

                prop_assert_eq!(bs.gamma(&call), bs.gamma(&put));
                prop_assert_eq!(bs.vega(&call), bs.vega(&put));
            }
        }
    }
}
