//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation for the Monte Carlo
//! simulation engine.
//!
//! ## Design Rationale
//!
//! The RNG infrastructure is designed with the following principles:
//!
//! - **Reproducibility**: every generator is constructed from an explicit
//!   64-bit seed and never reads ambient entropy
//! - **Determinism**: the same seed always yields the same variate sequence,
//!   so simulation results are bit-reproducible
//! - **Efficiency**: static dispatch only; no `Box<dyn Trait>` in hot paths
//!
//! ## Usage Example
//!
//! ```rust
//! use vanopt_pricing::rng::SimRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = SimRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//! ```

mod prng;

// Public re-exports
pub use prng::SimRng;
