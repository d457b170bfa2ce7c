//! Browser entry point for portfolio-fx.
//!
//! On module start, wires each page effect to its element. An effect whose
//! element is missing from the page is skipped.

mod background;
mod canvas;
mod hero;
mod loader;
mod timer;
mod typewriter;

pub use canvas::CanvasSurface;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    loader::mount(&window, &document)?;
    background::mount(&window, &document)?;
    typewriter::mount(&window, &document)?;
    hero::mount(&document)?;
    Ok(())
}
