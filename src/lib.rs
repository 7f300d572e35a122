//! # Newton Root
//!
//! N-th roots of real numbers computed with Newton-Raphson iteration,
//! without calling the platform's power or root functions.
//!
//! This library provides:
//! - [`nth_root`], [`sqrt`] and [`cbrt`] backed by a default [`RootCalculator`]
//! - Checked variants ([`try_nth_root`], [`try_sqrt`], [`try_cbrt`]) returning [`RootError`]
//! - A configurable calculator for a different fixed iteration count
//!
//! ## Architecture
//!
//! - [`solver`] - Initial guess, Newton updates and sign/parity dispatch
//! - [`error`] - Error type for the checked API
//!
//! ## Usage
//!
//! ### Library
//!
//! ```rust
//! let r = newton_root::nth_root(216.0, 3);
//! assert!((r - 6.0).abs() < 1e-12);
//!
//! // No real even root of a negative number
//! assert!(newton_root::nth_root(-16.0, 4).is_nan());
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! nthroot -216 --index 3 --compare
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { nthRoot } from 'newton_root';
//!
//! nthRoot(1000, -3); // 0.1
//! ```
//!
//! ## Undefined Results
//!
//! The unchecked functions signal "no real root" only through `NaN`:
//!
//! 1. index `0`
//! 2. even index with a negative radicand
//! 3. a `NaN` radicand
//!
//! Overflow and underflow follow IEEE-754, so `nth_root(0.0, -2)` is `+inf`.

pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use error::{Result, RootError};
pub use solver::{CalculatorConfig, RootCalculator, NEWTON_METHOD_ITERATIONS, UNDEFINED};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

/// N-th root of `x` with the default calculator. See [`RootCalculator::nth_root`].
pub fn nth_root(x: f64, n: i32) -> f64 {
    RootCalculator::new().nth_root(x, n)
}

/// Square root of `x` with the default calculator; `NaN` for `x < 0`.
pub fn sqrt(x: f64) -> f64 {
    RootCalculator::new().sqrt(x)
}

/// Real cube root of `x` with the default calculator.
pub fn cbrt(x: f64) -> f64 {
    RootCalculator::new().cbrt(x)
}

/// Checked [`nth_root`].
pub fn try_nth_root(x: f64, n: i32) -> Result<f64> {
    RootCalculator::new().try_nth_root(x, n)
}

/// Checked [`sqrt`].
pub fn try_sqrt(x: f64) -> Result<f64> {
    RootCalculator::new().try_sqrt(x)
}

/// Checked [`cbrt`].
pub fn try_cbrt(x: f64) -> Result<f64> {
    RootCalculator::new().try_cbrt(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_free_functions_use_default_calculator() {
        let calc = RootCalculator::new();
        assert_eq!(nth_root(1024.0, 5), calc.nth_root(1024.0, 5));
        assert_eq!(sqrt(2.0), calc.sqrt(2.0));
        assert_eq!(cbrt(-27.0), calc.cbrt(-27.0));
    }

    #[test]
    fn test_free_function_scenarios() {
        assert_relative_eq!(nth_root(-216.0, 3), -6.0, max_relative = 1e-12);
        assert_relative_eq!(nth_root(1000.0, -3), 0.1, max_relative = 1e-12);
        assert!(nth_root(-216.0, 0).is_nan());
        assert!(sqrt(-4.0).is_nan());
        assert_relative_eq!(cbrt(-8.0), -2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_checked_free_functions() {
        assert_eq!(try_nth_root(5.0, 0), Err(RootError::ZeroIndex));
        assert!(try_sqrt(-4.0).is_err());
        assert_eq!(try_cbrt(-8.0), Ok(cbrt(-8.0)));
    }

    #[test]
    fn test_undefined_is_nan() {
        assert!(UNDEFINED.is_nan());
        assert!((-UNDEFINED).is_nan());
        assert!((1.0 / UNDEFINED).is_nan());
    }
}
