//! Error types for the checked root API.
//!
//! The core root functions never fail: they return `NaN` for inputs outside
//! their domain. [`RootError`] is only produced by the `try_*` variants
//! and configuration validation.

use thiserror::Error;

/// Result type alias using [`RootError`].
pub type Result<T> = std::result::Result<T, RootError>;

/// Unified error type for checked root computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootError {
    // ============ Domain Errors ============
    /// Root index zero has no meaning
    #[error("Root index must be non-zero")]
    ZeroIndex,

    /// No real even root of a negative number
    #[error("Even root (index {index}) of negative radicand {radicand} is not real")]
    EvenRootOfNegative { radicand: f64, index: i32 },

    /// Radicand is not a number
    #[error("Radicand is NaN")]
    InvalidRadicand { radicand: f64 },

    // ============ Configuration Errors ============
    /// Rejected calculator configuration
    #[error("Invalid calculator configuration: {message}")]
    InvalidConfig { message: String },
}

impl RootError {
    /// Create an even-root-of-negative error
    pub fn even_root_of_negative(radicand: f64, index: i32) -> Self {
        Self::EvenRootOfNegative { radicand, index }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
