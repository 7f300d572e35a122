//! WASM bindings for Newton Root.
//!
//! Exposes the three root functions to JavaScript.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { nthRoot, sqrt, cbrt } from 'newton_root';
//!
//! await init();
//!
//! nthRoot(216, 3);  // 6
//! nthRoot(-16, 4);  // NaN
//! cbrt(-8);         // -2
//! ```

use wasm_bindgen::prelude::*;

use crate::RootCalculator;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// N-th root of `x`; `NaN` when no real root exists.
#[wasm_bindgen(js_name = nthRoot)]
pub fn wasm_nth_root(x: f64, n: i32) -> f64 {
    RootCalculator::new().nth_root(x, n)
}

/// Square root of `x`; `NaN` for negative `x`.
#[wasm_bindgen(js_name = sqrt)]
pub fn wasm_sqrt(x: f64) -> f64 {
    RootCalculator::new().sqrt(x)
}

/// Real cube root of `x`.
#[wasm_bindgen(js_name = cbrt)]
pub fn wasm_cbrt(x: f64) -> f64 {
    RootCalculator::new().cbrt(x)
}

/// N-th root of `x` with a custom number of Newton updates.
///
/// Throws if `iterations` is zero.
#[wasm_bindgen(js_name = nthRootWithIterations)]
pub fn wasm_nth_root_with_iterations(x: f64, n: i32, iterations: usize) -> Result<f64, JsValue> {
    let config = crate::CalculatorConfig::new().with_iterations(iterations);
    let calculator =
        RootCalculator::try_with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(calculator.nth_root(x, n))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
