//! One-shot `setTimeout` helper.

use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Milliseconds for `setTimeout`, saturating at `i32::MAX`.
pub fn millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// Runs `f` once after `delay`. The closure frees itself after it runs.
pub fn set_timeout<F>(window: &Window, delay: Duration, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        millis(delay),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_converts_and_saturates() {
        assert_eq!(millis(Duration::from_millis(2000)), 2000);
        assert_eq!(millis(Duration::ZERO), 0);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), i32::MAX);
    }
}
