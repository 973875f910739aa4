pub mod config;
pub mod log;
pub mod markup;

// Page behaviors run in the browser only; natively they are compiled for tests.
#[cfg(any(target_arch = "wasm32", test))]
pub mod contact;
#[cfg(any(target_arch = "wasm32", test))]
pub mod motion;
#[cfg(any(target_arch = "wasm32", test))]
pub mod notification;
#[cfg(any(target_arch = "wasm32", test))]
pub mod scroll;
#[cfg(any(target_arch = "wasm32", test))]
pub mod typing;

/// Formats a CSS length or angle the way the browser would print the number,
/// folding negative zero into `0`.
#[cfg(any(target_arch = "wasm32", test))]
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
