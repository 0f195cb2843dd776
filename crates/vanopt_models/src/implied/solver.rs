//! Implied volatility inversion via bracketed root finding.

use num_traits::Float;
use vanopt_core::math::solvers::{BrentSolver, SolverConfig};

use super::error::ImpliedVolError;
use crate::analytical::BlackScholes;
use crate::instruments::EuropeanOption;

/// Default lower volatility bracket endpoint.
pub const DEFAULT_BRACKET_LO: f64 = 1e-5;

/// Default upper volatility bracket endpoint.
pub const DEFAULT_BRACKET_HI: f64 = 5.0;

/// Implied volatility solver.
///
/// Recovers the Black-Scholes volatility that reproduces an observed
/// option price, using Brent's method over a fixed volatility bracket.
/// The bracketed search needs no vega and cannot step outside the
/// bracket, so it behaves predictably for deep in- and out-of-the-money
/// quotes where Newton iterations stall.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vanopt_models::analytical::BlackScholes;
/// use vanopt_models::implied::ImpliedVolSolver;
/// use vanopt_models::instruments::{EuropeanOption, OptionParams, OptionType};
///
/// let option = EuropeanOption::new(
///     OptionParams::new(100.0_f64, 1.0).unwrap(),
///     OptionType::Call,
/// );
/// let observed = BlackScholes::new(100.0, 0.05, 0.25).unwrap().price(&option);
///
/// let solver = ImpliedVolSolver::with_defaults();
/// let implied = solver.solve(100.0, 0.05, &option, observed).unwrap();
/// assert!((implied - 0.25).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    /// Underlying bracketed root finder
    brent: BrentSolver<T>,
    /// Volatility search bracket (lo, hi)
    bracket: (T, T),
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Create a solver with the given root-finding configuration and the
    /// default volatility bracket [1e-5, 5.0].
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            brent: BrentSolver::new(config),
            bracket: (
                T::from(DEFAULT_BRACKET_LO).unwrap(),
                T::from(DEFAULT_BRACKET_HI).unwrap(),
            ),
        }
    }

    /// Create a solver with default configuration and bracket.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Create a solver with a custom volatility bracket.
    ///
    /// # Arguments
    /// * `config` - Root-finding configuration
    /// * `lo` - Lower volatility bracket endpoint
    /// * `hi` - Upper volatility bracket endpoint
    ///
    /// # Panics
    /// Panics if `lo <= 0` or `hi <= lo`.
    pub fn with_bracket(config: SolverConfig<T>, lo: T, hi: T) -> Self {
        assert!(lo > T::zero(), "bracket lower bound must be positive");
        assert!(hi > lo, "bracket upper bound must exceed lower bound");

        Self {
            brent: BrentSolver::new(config),
            bracket: (lo, hi),
        }
    }

    /// Returns the volatility search bracket.
    #[inline]
    pub fn bracket(&self) -> (T, T) {
        self.bracket
    }

    /// Solve for the volatility that reproduces `observed_price`.
    ///
    /// Searches for σ in the bracket such that the Black-Scholes price of
    /// `option` under (`spot`, `rate`, σ) equals the observed price.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive and finite)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `option` - The quoted European option
    /// * `observed_price` - The market price to invert
    ///
    /// # Returns
    /// The implied volatility.
    ///
    /// # Errors
    /// - `ImpliedVolError::InvalidParameter` if the spot is rejected
    /// - `ImpliedVolError::NoBracketingRoot` if no volatility in the
    ///   bracket reproduces the observed price (for example a zero or
    ///   negative price, or a price above the model's reachable range)
    /// - `ImpliedVolError::ConvergenceFailure` if the iteration cap is
    ///   reached before the tolerance
    ///
    /// # Panics
    /// The internal pricing closure panics if the bracket contains a
    /// non-positive volatility, which [`ImpliedVolSolver::with_bracket`]
    /// rules out at construction.
    pub fn solve(
        &self,
        spot: T,
        rate: T,
        option: &EuropeanOption<T>,
        observed_price: T,
    ) -> Result<T, ImpliedVolError> {
        let (lo, hi) = self.bracket;

        // Reject a bad spot up front so the closure below can assume it.
        BlackScholes::new(spot, rate, lo)?;

        let objective = |sigma: T| {
            let model = BlackScholes::new(spot, rate, sigma)
                .expect("volatility inside the bracket must be positive");
            model.price(option) - observed_price
        };

        match self.brent.find_root(objective, lo, hi) {
            Ok(vol) => {
                tracing::debug!(
                    "implied volatility converged: sigma = {}",
                    vol.to_f64().unwrap_or(f64::NAN)
                );
                Ok(vol)
            }
            Err(err) => {
                tracing::warn!("implied volatility solve failed: {}", err);
                Err(err.into())
            }
        }
    }
}
