//! # Vanopt Models (L2: Pricing Models)
//!
//! European option definitions, closed-form valuation, and implied
//! volatility inversion.
//!
//! This crate provides:
//! - Instrument definitions (European options with Call/Put payoffs)
//! - Black-Scholes closed-form prices and the five first-order Greeks
//! - Standard normal distribution helpers (`norm_cdf`, `norm_pdf`)
//! - Implied volatility recovery via bracketed root finding
//!
//! ## Design Principles
//!
//! - **Validated construction**: market and contract parameters are checked
//!   once at construction, so pricing operations are total functions
//! - **Closed payoff enum** for static dispatch over Call/Put
//! - **Generic over `T: Float`** supporting both `f64` and `f32`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied;
pub mod instruments;
