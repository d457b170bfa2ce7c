//! Page loader overlay (`#pageLoader`).
//!
//! Hidden on the window `load` event, or right away if the document has
//! already finished loading, with [`FALLBACK`] as a backstop. The element is
//! detached once the fade-out has played.

use crate::timer::set_timeout;
use portfolio_fx_effects::loader::FALLBACK;
use portfolio_fx_effects::{LoaderState, PageLoader};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

const LOADER_ID: &str = "pageLoader";
const HIDDEN_CLASS: &str = "hidden";

struct Host {
    window: Window,
    element: Element,
    started_ms: f64,
    loader: RefCell<PageLoader>,
}

impl Host {
    fn elapsed(&self) -> Duration {
        let ms = (js_sys::Date::now() - self.started_ms).max(0.0);
        Duration::from_secs_f64(ms / 1000.0)
    }
}

pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id(LOADER_ID) else {
        return Ok(());
    };
    let host = Rc::new(Host {
        window: window.clone(),
        element,
        started_ms: js_sys::Date::now(),
        loader: RefCell::new(PageLoader::default()),
    });

    if load_finished(document) {
        request_hide(&host);
    } else {
        let on_load_host = host.clone();
        let on_load = Closure::once_into_js(move || request_hide(&on_load_host));
        window.add_event_listener_with_callback("load", on_load.unchecked_ref())?;
    }

    let fallback_host = host.clone();
    set_timeout(window, FALLBACK, move || {
        if fallback_host.loader.borrow().state() == LoaderState::Showing {
            log::warn!("page loader: load event not seen, hiding on fallback");
        }
        request_hide(&fallback_host);
    })?;
    Ok(())
}

/// `document.readyState == "complete"`, read by property so it does not
/// depend on which `web-sys` binding of `readyState` is available.
fn load_finished(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete")
}

fn request_hide(host: &Rc<Host>) {
    let Some(wait) = host.loader.borrow_mut().request_hide(host.elapsed()) else {
        return;
    };
    let next = host.clone();
    if let Err(e) = set_timeout(&host.window, wait, move || hide(next)) {
        log::error!("page loader: cannot schedule hide: {e:?}");
    }
}

fn hide(host: Rc<Host>) {
    let Some(fade) = host.loader.borrow_mut().hide() else {
        return;
    };
    if let Err(e) = host.element.class_list().add_1(HIDDEN_CLASS) {
        log::error!("page loader: cannot add class: {e:?}");
    }
    let next = host.clone();
    if let Err(e) = set_timeout(&host.window, fade, move || remove(next)) {
        log::error!("page loader: cannot schedule removal: {e:?}");
    }
}

fn remove(host: Rc<Host>) {
    if host.loader.borrow_mut().remove() {
        host.element.remove();
        log::debug!("page loader removed");
    }
}
