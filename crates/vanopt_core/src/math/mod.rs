//! Numerical routines shared across the workspace.
//!
//! This module provides:
//! - `solvers`: Derivative-free root-finding (Brent's method)

pub mod solvers;
