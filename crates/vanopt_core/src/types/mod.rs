//! Shared numerical types.
//!
//! This module provides:
//! - `error`: Structured error types for root-finding solvers
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SolverError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::SolverError;
