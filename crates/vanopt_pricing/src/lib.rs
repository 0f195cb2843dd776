//! # Vanopt Pricing (L3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! vanopt_pricing is the Monte Carlo engine in the three-layer architecture:
//! - Seeded, bit-reproducible simulation of terminal spot prices under GBM
//! - Streaming payoff statistics with no per-path storage
//! - Sharded parallel pricing with a deterministic merge
//!
//! The engine draws its instrument types from `vanopt_models` and is
//! deliberately `f64`-concrete: the hot loop is one normal draw, one
//! multiply-add and one `exp` per path.
//!
//! ## Reproducibility
//!
//! Every simulation is driven by an explicit 64-bit seed carried in
//! [`MonteCarloConfig`]. The engine never reads ambient entropy, so a given
//! configuration produces bit-identical results on every run.
//!
//! ## Usage Example
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
//! let result = pricer
//!     .price_european(GbmParams::default(), PayoffParams::call(100.0))
//!     .unwrap();
//!
//! assert!(result.price > 0.0);
//! assert!(result.std_error > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo kernel
pub mod mc;

// Re-export commonly used items for convenience
pub use mc::{GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams, PricingResult};
