//! Monte Carlo pricing kernel for vanilla European options.
//!
//! This module provides the simulation engine: configuration, market and
//! payoff parameters, streaming statistics and the pricer itself.
//!
//! Because the contracts are European, terminal spot prices are drawn from
//! the exact GBM solution in a single step per path. Payoffs stream through
//! a Welford accumulator, so memory use is constant in the path count.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (path count and seed)
//! ├── GbmParams          (market dynamics: spot, rate, volatility, maturity)
//! ├── PayoffParams       (contract: strike and call/put type)
//! └── StreamingStats     (running mean / variance, shard merging)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vanopt_pricing::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(config).unwrap();
//!
//! let gbm = GbmParams {
//!     spot: 100.0,
//!     rate: 0.05,
//!     volatility: 0.2,
//!     maturity: 1.0,
//! };
//! let payoff = PayoffParams::call(100.0);
//!
//! let result = pricer.price_european(gbm, payoff).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod stats;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use error::ConfigError;
pub use paths::{GbmParams, TerminalSampler};
pub use payoff::PayoffParams;
pub use pricer::{MonteCarloPricer, PricingResult};
pub use stats::StreamingStats;
