//! Root-finding solvers.
//!
//! This module provides derivative-free root-finding for one-dimensional
//! functions:
//! - [`BrentSolver`]: Brent's method (bracketing, robust)
//! - [`SolverConfig`]: Tolerance and iteration budget shared by solvers
//!
//! ## Design Principles
//!
//! - **Bracket-based**: Callers supply an interval with a sign change, so
//!   convergence is guaranteed for continuous functions
//! - **Generic over `T: Float`** so both `f64` and `f32` are supported
//! - **Errors, not panics**: A missing bracket or exhausted iteration budget
//!   surfaces as [`SolverError`](crate::types::SolverError)

mod brent;
mod config;

pub use brent::BrentSolver;
pub use config::SolverConfig;
