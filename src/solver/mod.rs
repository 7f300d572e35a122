//! Newton-Raphson root solver.
//!
//! The n-th root of `S` is the zero of
//! ```text
//! f(z) = z^n - S,    f'(z) = n * z^(n-1)
//! ```
//! so each Newton step `z - f(z)/f'(z)` simplifies to
//! ```text
//! z_{k+1} = (1/n) * ((n-1) * z_k + S / z_k^(n-1))
//! ```
//!
//! The iteration starts from a power-of-two guess derived from the bit
//! length of `floor(S)` and runs a fixed number of steps with no
//! convergence test. Index 2 and 3 have dedicated update rules.

mod calculator;
mod estimate;
mod newton;

pub use calculator::{CalculatorConfig, RootCalculator};

/// Number of Newton updates applied by the default calculator.
pub const NEWTON_METHOD_ITERATIONS: usize = 20;

/// Sentinel returned when no real root exists.
pub const UNDEFINED: f64 = f64::NAN;
