//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration and
//! market-parameter validation in the simulation engine.

use std::fmt;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors surface when invalid parameters are provided, either while
/// building a configuration or when a pricing call validates its inputs.
/// The engine never simulates with a bad input and never returns `NaN` in
/// place of an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
