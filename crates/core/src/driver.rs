//! Per-frame driver: advance, render, re-arm, until cancelled.
//!
//! The host owns the clock (`requestAnimationFrame` in the browser, a plain
//! loop in tests) and calls [`FrameDriver::tick`] once per frame, re-arming
//! only while the outcome is [`FrameOutcome::Rearm`]. Cancellation goes
//! through a [`CancelHandle`] so teardown code does not need to borrow the
//! driver itself.

use crate::scene::Scene;
use crate::surface::Surface;
use std::cell::Cell;
use std::rc::Rc;

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was drawn; schedule the next one.
    Rearm,
    /// The driver is cancelled; do not schedule again.
    Stopped,
}

/// Shared, terminal cancellation flag for a [`FrameDriver`].
///
/// Clones observe the same flag. There is no way to un-cancel.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            log::debug!("frame driver cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Owns a scene and the surface it draws on, and steps them frame by frame.
pub struct FrameDriver<Sc, Su> {
    scene: Sc,
    surface: Su,
    cancel: CancelHandle,
    frames: u64,
}

impl<Sc: Scene, Su: Surface> FrameDriver<Sc, Su> {
    /// Wraps `scene` and sizes `surface` to the scene's viewport.
    pub fn new(scene: Sc, mut surface: Su) -> Self {
        let viewport = scene.viewport();
        surface.set_size(viewport.width, viewport.height);
        Self {
            scene,
            surface,
            cancel: CancelHandle::default(),
            frames: 0,
        }
    }

    /// Runs one frame: `advance` then `render`.
    ///
    /// After cancellation this returns [`FrameOutcome::Stopped`] and leaves
    /// the scene and surface untouched.
    pub fn tick(&mut self) -> FrameOutcome {
        if self.cancel.is_cancelled() {
            return FrameOutcome::Stopped;
        }
        self.scene.advance();
        self.scene.render(&mut self.surface);
        self.frames += 1;
        FrameOutcome::Rearm
    }

    /// Drives up to `max_frames` ticks the way a frame clock would, stopping
    /// early once cancelled. Returns the number of frames drawn.
    pub fn run(&mut self, max_frames: u64) -> u64 {
        let mut drawn = 0;
        while drawn < max_frames && self.tick() == FrameOutcome::Rearm {
            drawn += 1;
        }
        drawn
    }

    /// Resizes the backing surface and the scene's viewport.
    ///
    /// Safe between any two frames. Values are not validated.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.set_size(width, height);
        self.scene.resize(width, height);
    }

    /// A handle that cancels this driver from elsewhere (e.g. page teardown).
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &Sc {
        &self.scene
    }

    pub fn surface(&self) -> &Su {
        &self.surface
    }
}
