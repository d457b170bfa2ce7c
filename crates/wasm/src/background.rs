//! The `#bgCanvas` neural-network background.
//!
//! Sizes the canvas to the whole scrollable page, drives the field from
//! `requestAnimationFrame`, follows window resizes, and cancels on
//! `beforeunload`.

use crate::canvas::CanvasSurface;
use portfolio_fx_core::driver::{CancelHandle, FrameDriver, FrameOutcome};
use portfolio_fx_core::{Scene, Surface};
use portfolio_fx_neural::{NeuralParams, ParticleField};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

const CANVAS_ID: &str = "bgCanvas";

type Driver = FrameDriver<ParticleField, CanvasSurface>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Window width by full document height, so the background covers the
/// whole page and not just the visible part.
fn page_size(window: &Window, document: &Document) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = document
        .body()
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(0.0);
    (width, height)
}

/// Starts the background if the page has a `#bgCanvas`; otherwise does nothing.
pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (width, height) = page_size(window, document);
    let mut rng = js_sys::Math::random;
    let surface = CanvasSurface::find(document, CANVAS_ID);
    let Some(driver) =
        ParticleField::mount(surface, width, height, NeuralParams::default(), &mut rng)
    else {
        return Ok(());
    };
    log::info!(
        "background: {} particles on {width}x{height}",
        driver.scene().len()
    );

    let driver = Rc::new(RefCell::new(driver));
    let frame_id = Rc::new(Cell::new(None::<i32>));

    start_frames(window, &driver, &frame_id)?;
    listen_resize(window, document, &driver)?;
    listen_teardown(window, &driver, &frame_id)?;
    Ok(())
}

/// Runs one frame. Returns whether the loop should request another; a
/// stopped driver also forgets the pending frame id.
fn run_frame<Sc: Scene, Su: Surface>(
    driver: &RefCell<FrameDriver<Sc, Su>>,
    frame_id: &Cell<Option<i32>>,
) -> bool {
    match driver.borrow_mut().tick() {
        FrameOutcome::Rearm => true,
        FrameOutcome::Stopped => {
            frame_id.set(None);
            false
        }
    }
}

/// Cancels the driver and hands back the frame still pending, if any.
fn teardown(cancel: &CancelHandle, frame_id: &Cell<Option<i32>>) -> Option<i32> {
    cancel.cancel();
    frame_id.take()
}

/// Arms the frame loop: each callback ticks the driver and re-arms itself
/// until the driver reports it has stopped.
fn start_frames(
    window: &Window,
    driver: &Rc<RefCell<Driver>>,
    frame_id: &Rc<Cell<Option<i32>>>,
) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));

    let rearm = callback.clone();
    let driver = driver.clone();
    let ids = frame_id.clone();
    let win = window.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !run_frame(&driver, &ids) {
            return;
        }
        if let Some(cb) = rearm.borrow().as_ref() {
            match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => ids.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = callback.borrow().as_ref() {
        let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        frame_id.set(Some(id));
    }
    Ok(())
}

fn listen_resize(
    window: &Window,
    document: &Document,
    driver: &Rc<RefCell<Driver>>,
) -> Result<(), JsValue> {
    let driver = driver.clone();
    let win = window.clone();
    let doc = document.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let (width, height) = page_size(&win, &doc);
        driver.borrow_mut().resize(width, height);
        log::debug!("background resized to {width}x{height}");
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

/// Cancels the driver and the pending frame when the page is discarded.
fn listen_teardown(
    window: &Window,
    driver: &Rc<RefCell<Driver>>,
    frame_id: &Rc<Cell<Option<i32>>>,
) -> Result<(), JsValue> {
    let cancel = driver.borrow().cancel_handle();
    let ids = frame_id.clone();
    let win = window.clone();
    let on_unload = Closure::wrap(Box::new(move || {
        if let Some(id) = teardown(&cancel, &ids) {
            if let Err(e) = win.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())?;
    on_unload.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_fx_core::{Recorder, Xorshift64};

    fn driver() -> RefCell<FrameDriver<ParticleField, Recorder>> {
        let mut rng = Xorshift64::new(7);
        let field = ParticleField::new(300.0, 200.0, NeuralParams::default(), &mut rng);
        RefCell::new(FrameDriver::new(field, Recorder::new(0.0, 0.0)))
    }

    #[test]
    fn live_driver_rearms_and_keeps_frame_id() {
        let driver = driver();
        let frame_id = Cell::new(Some(3));
        assert!(run_frame(&driver, &frame_id));
        assert_eq!(frame_id.get(), Some(3));
        assert_eq!(driver.borrow().frames(), 1);
    }

    #[test]
    fn cancelled_driver_stops_without_drawing() {
        let driver = driver();
        let frame_id = Cell::new(Some(3));
        let pending = teardown(&driver.borrow().cancel_handle(), &frame_id);
        assert_eq!(pending, Some(3));
        assert_eq!(frame_id.get(), None);

        let before = driver.borrow().scene().particles().to_vec();
        frame_id.set(Some(4));
        assert!(!run_frame(&driver, &frame_id));
        assert_eq!(frame_id.get(), None);
        assert_eq!(driver.borrow().frames(), 0);
        assert_eq!(driver.borrow().scene().particles(), before.as_slice());
        assert_eq!(driver.borrow().surface().circle_count(), 0);
        assert_eq!(driver.borrow().surface().line_count(), 0);
    }

    #[test]
    fn teardown_without_pending_frame_returns_none() {
        let driver = driver();
        let frame_id = Cell::new(None);
        assert_eq!(teardown(&driver.borrow().cancel_handle(), &frame_id), None);
        assert!(driver.borrow().is_cancelled());
    }
}
