//! Root calculator interface.

use crate::error::{Result, RootError};

use super::estimate::{is_even, is_negative, is_neutral_value};
use super::newton::{cbrt_unchecked, nth_root_unchecked, sqrt_unchecked};
use super::{NEWTON_METHOD_ITERATIONS, UNDEFINED};

/// Configuration for the root calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Number of Newton updates applied on every call.
    pub iterations: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            iterations: NEWTON_METHOD_ITERATIONS,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of Newton updates.
    ///
    /// The count is a fixed loop bound, not a maximum: every call runs
    /// exactly this many steps.
    /// - 20 (default): enough for indices up to 7 over `1..=1e6`
    /// - 60: covers indices up to 10 over the same range
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Reject configurations that would return the raw initial guess.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(RootError::invalid_config("iterations must be at least 1"));
        }
        Ok(())
    }
}

/// N-th root calculator using fixed-iteration Newton-Raphson.
///
/// Inputs without a real root produce `NaN`; use the `try_*` methods to get
/// a [`RootError`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootCalculator {
    config: CalculatorConfig,
}

impl RootCalculator {
    /// Create a calculator with the default 20 iterations.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator with a custom configuration.
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Create a calculator, rejecting an invalid configuration.
    pub fn try_with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// The configuration this calculator was built with.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Compute the n-th root of `x`.
    ///
    /// Special cases:
    /// - `n == 0` gives `NaN`.
    /// - `n < 0` gives `1 / nth_root(x, -n)`.
    /// - `x < 0` with even `n` gives `NaN`.
    /// - `x < 0` with odd `n` gives `-nth_root(-x, n)`.
    /// - `n == 1`, or `x` one of `-1`, `-0`, `0`, `1`, gives `x`.
    pub fn nth_root(&self, x: f64, n: i32) -> f64 {
        if n < 0 {
            // x^(-1/a) = 1 / x^(1/a)
            return 1.0 / self.positive_index_root(x, n.unsigned_abs());
        }
        self.positive_index_root(x, n as u32)
    }

    fn positive_index_root(&self, x: f64, n: u32) -> f64 {
        if n == 0 {
            return UNDEFINED;
        }
        if is_negative(x) {
            if is_even(n) {
                return UNDEFINED;
            }
            return -self.positive_index_root(-x, n);
        }
        if n == 1 || is_neutral_value(x) {
            return x;
        }

        let iterations = self.config.iterations;
        match n {
            2 => sqrt_unchecked(x, iterations),
            3 => cbrt_unchecked(x, iterations),
            _ => nth_root_unchecked(x, n, iterations),
        }
    }

    /// Compute the square root of `x`, or `NaN` if `x < 0`.
    pub fn sqrt(&self, x: f64) -> f64 {
        if is_negative(x) {
            return UNDEFINED;
        }
        if is_neutral_value(x) {
            return x;
        }
        sqrt_unchecked(x, self.config.iterations)
    }

    /// Compute the real cube root of `x`; defined for every real `x`.
    pub fn cbrt(&self, x: f64) -> f64 {
        if is_neutral_value(x) {
            return x;
        }
        // The seed is only defined for non-negative radicands.
        if is_negative(x) {
            return -cbrt_unchecked(-x, self.config.iterations);
        }
        cbrt_unchecked(x, self.config.iterations)
    }

    /// Checked variant of [`nth_root`](Self::nth_root).
    pub fn try_nth_root(&self, x: f64, n: i32) -> Result<f64> {
        if x.is_nan() {
            return Err(RootError::InvalidRadicand { radicand: x });
        }
        if n == 0 {
            return Err(RootError::ZeroIndex);
        }
        if is_negative(x) && is_even(n.unsigned_abs()) {
            return Err(RootError::even_root_of_negative(x, n));
        }
        Ok(self.nth_root(x, n))
    }

    /// Checked variant of [`sqrt`](Self::sqrt).
    pub fn try_sqrt(&self, x: f64) -> Result<f64> {
        self.try_nth_root(x, 2)
    }

    /// Checked variant of [`cbrt`](Self::cbrt).
    pub fn try_cbrt(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Err(RootError::InvalidRadicand { radicand: x });
        }
        Ok(self.cbrt(x))
    }
}
