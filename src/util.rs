// Small helpers shared by the clock and components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Uniform integer in `[min, max]`, both ends inclusive.
pub fn random_int(min: u32, max: u32) -> u32 {
    debug_assert!(min <= max);
    min + (js_sys::Math::random() * ((max - min + 1) as f64)).floor() as u32
}
