//! # vanopt_core: Numerical Foundation for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! vanopt_core is the bottom layer of the three-layer workspace, providing:
//! - Derivative-free root-finding (`math::solvers`)
//! - Structured solver error types (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vanopt_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Example
//!
//! ```rust
//! use vanopt_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! let solver = BrentSolver::new(SolverConfig::default());
//!
//! // Solve ln(x) = 1 in the bracket [1, 5]
//! let root = solver.find_root(|x: f64| x.ln() - 1.0, 1.0, 5.0).unwrap();
//! assert!((root - std::f64::consts::E).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
