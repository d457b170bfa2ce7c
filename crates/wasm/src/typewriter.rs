//! Typewriter title in the sidebar (`.info-content .title`).

use crate::timer::set_timeout;
use portfolio_fx_effects::Typewriter;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

const TITLE_SELECTOR: &str = ".info-content .title";

struct Host {
    window: Window,
    element: Element,
    typewriter: RefCell<Typewriter>,
}

/// Starts the typewriter if the title element exists.
pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(element) = document.query_selector(TITLE_SELECTOR)? else {
        return Ok(());
    };
    let host = Rc::new(Host {
        window: window.clone(),
        element,
        typewriter: RefCell::new(Typewriter::default()),
    });
    schedule(host, Duration::ZERO)
}

fn schedule(host: Rc<Host>, delay: Duration) -> Result<(), JsValue> {
    let window = host.window.clone();
    set_timeout(&window, delay, move || step(host))?;
    Ok(())
}

fn step(host: Rc<Host>) {
    let frame = host.typewriter.borrow_mut().tick();
    host.element.set_text_content(Some(&frame.text));
    if let Err(e) = schedule(host, frame.delay) {
        log::error!("typewriter stopped: {e:?}");
    }
}
