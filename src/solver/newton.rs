//! Fixed-iteration Newton updates.
//!
//! These assume a positive, non-neutral radicand; the calculator performs
//! the sign and parity dispatch before calling in.

use super::estimate::{best_approximation, raised_to_integer_exponent};

/// Square root: `z ← (1/2) * (z + x/z)`.
pub(crate) fn sqrt_unchecked(x: f64, iterations: usize) -> f64 {
    let mut result = best_approximation(x, 2);
    for _ in 0..iterations {
        // f(z) = z^2 - x, f'(z) = 2z
        result = 0.5 * (result + x / result);
    }
    result
}

/// Cube root: `z ← (1/3) * (2z + x/z^2)`.
pub(crate) fn cbrt_unchecked(x: f64, iterations: usize) -> f64 {
    let mut result = best_approximation(x, 3);
    for _ in 0..iterations {
        // f(z) = z^3 - x, f'(z) = 3z^2
        result = (1.0 / 3.0) * (2.0 * result + x / (result * result));
    }
    result
}

/// General index `n >= 4`: `z ← (1/n) * ((n-1)z + x/z^(n-1))`.
pub(crate) fn nth_root_unchecked(x: f64, n: u32, iterations: usize) -> f64 {
    let mut result = best_approximation(x, n);

    let c = 1.0 / n as f64;
    let n_1 = n - 1;
    let n_1_f = n_1 as f64;

    for _ in 0..iterations {
        result = c * (n_1_f * result + x / raised_to_integer_exponent(result, n_1));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_iterations_returns_guess() {
        assert_eq!(sqrt_unchecked(2.0, 0), 1.0);
        assert_eq!(cbrt_unchecked(216.0, 0), 4.0);
        assert_eq!(nth_root_unchecked(1024.0, 10, 0), 2.0);
    }

    #[test]
    fn test_single_sqrt_step() {
        // Seed 1, one step: (1 + 2/1) / 2
        assert_eq!(sqrt_unchecked(2.0, 1), 1.5);
    }

    #[test]
    fn test_sqrt_converges() {
        assert_relative_eq!(sqrt_unchecked(2.0, 20), std::f64::consts::SQRT_2, max_relative = 1e-15);
        assert_eq!(sqrt_unchecked(1_000_000.0, 20), 1000.0);
        assert_eq!(sqrt_unchecked(0.25, 20), 0.5);
    }

    #[test]
    fn test_cbrt_converges() {
        assert_eq!(cbrt_unchecked(27.0, 20), 3.0);
        assert_eq!(cbrt_unchecked(216.0, 20), 6.0);
        assert_relative_eq!(cbrt_unchecked(0.001, 20), 0.1, max_relative = 1e-15);
    }

    #[test]
    fn test_general_index_converges() {
        assert_eq!(nth_root_unchecked(1024.0, 5, 20), 4.0);
        assert_eq!(nth_root_unchecked(81.0, 4, 20), 3.0);
        assert_eq!(nth_root_unchecked(100_000.0, 5, 20), 10.0);
        assert_eq!(nth_root_unchecked(128.0, 7, 20), 2.0);
    }

    #[test]
    fn test_iteration_budget_is_fixed() {
        // Seed 1 for 1023^(1/10) overshoots to ~103 and 20 steps are not
        // enough to come back down; more steps are.
        let short = nth_root_unchecked(1023.0, 10, 20);
        assert!(short > 13.0 && short < 14.0);

        let long = nth_root_unchecked(1023.0, 10, 60);
        assert_relative_eq!(long, 1.999_804_601_616_188_6, max_relative = 1e-12);
    }
}
