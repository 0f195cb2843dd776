//! Implied volatility recovery.
//!
//! Inverts the Black-Scholes price for volatility with a bracketed Brent
//! search over σ ∈ [1e-5, 5.0] by default. Bracketing trades a little
//! speed for robustness: unlike Newton iterations on vega, the search
//! cannot diverge, and a quote outside the model's reachable price range
//! fails loudly with [`ImpliedVolError::NoBracketingRoot`].

mod error;
mod solver;

pub use error::ImpliedVolError;
pub use solver::{ImpliedVolSolver, DEFAULT_BRACKET_HI, DEFAULT_BRACKET_LO};
