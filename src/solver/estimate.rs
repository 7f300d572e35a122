//! Initial guess and small arithmetic helpers shared by the update rules.

/// Power-of-two seed for the Newton iteration.
///
/// Counts how many times `floor(x)` can be shifted right by `n` bits before
/// reaching zero and returns `2` raised to that count, roughly
/// `2^floor(log2(floor(x)) / n)`. Only meaningful for `1 <= x < 2^31`; any
/// `x` below one seeds with `1`.
pub(crate) fn best_approximation(x: f64, n: u32) -> f64 {
    let mut result: u32 = 1;
    // Saturating truncation; NaN becomes 0.
    let mut ix = x as i32;
    loop {
        // Shifting an i32 by 32 or more bits clears it.
        ix = ix.checked_shr(n).unwrap_or(0);
        if ix <= 0 {
            break;
        }
        result <<= 1;
    }
    result as f64
}

/// `x^n` by `n` repeated multiplications.
pub(crate) fn raised_to_integer_exponent(x: f64, n: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..n {
        result *= x;
    }
    result
}

/// Values for which `x^n == x` for every natural `n`.
pub(crate) fn is_neutral_value(x: f64) -> bool {
    // -0.0 == 0.0, so both zeros match.
    x == 0.0 || x == 1.0 || x == -1.0
}

pub(crate) fn is_negative(x: f64) -> bool {
    x < 0.0
}

/// Even index check on the magnitude of the index.
pub(crate) fn is_even(n: u32) -> bool {
    n & 1 == 0
}
