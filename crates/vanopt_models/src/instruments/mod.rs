//! Financial instrument definitions.
//!
//! This module provides the contract types consumed by the analytical and
//! simulation pricers.
//!
//! # Architecture
//!
//! - [`OptionType`]: closed Call/Put enum with intrinsic payoff evaluation
//! - [`OptionParams`]: validated strike and expiry pair
//! - [`EuropeanOption`]: a payoff type bound to validated parameters
//!
//! Validation happens once, at construction. An [`EuropeanOption`] in hand
//! always carries a positive strike and a positive time to expiry, so
//! downstream pricing code never re-checks them.
//!
//! # Examples
//!
//! ```
//! use vanopt_models::instruments::{EuropeanOption, OptionParams, OptionType};
//!
//! let params = OptionParams::new(100.0_f64, 1.0).unwrap();
//! let call = EuropeanOption::new(params, OptionType::Call);
//!
//! assert_eq!(call.payoff(110.0), 10.0);
//! assert_eq!(call.payoff(90.0), 0.0);
//! ```

mod error;
mod params;
mod payoff;
mod vanilla;

// Re-export all public types
pub use error::InstrumentError;
pub use params::OptionParams;
pub use payoff::OptionType;
pub use vanilla::EuropeanOption;
