//! Page loader timing.
//!
//! The loader stays up for at least [`MIN_DISPLAY`] so it never flashes,
//! fades out over [`FADE_OUT`], and is taken down by [`FALLBACK`] at the
//! latest even if the page `load` event never arrives. Both the `load` event
//! and the fallback timer may ask to hide; only the first request counts.

use std::time::Duration;

pub const MIN_DISPLAY: Duration = Duration::from_millis(1000);
/// Matches the CSS opacity transition on `.hidden`.
pub const FADE_OUT: Duration = Duration::from_millis(600);
pub const FALLBACK: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Visible, no hide requested yet.
    Showing,
    /// Hide requested; waiting out the minimum display time.
    Scheduled,
    /// `hidden` class applied; fading out.
    Hiding,
    /// Element detached from the document.
    Removed,
}

#[derive(Debug, Clone)]
pub struct PageLoader {
    state: LoaderState,
    min_display: Duration,
    fade_out: Duration,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new(MIN_DISPLAY, FADE_OUT)
    }
}

impl PageLoader {
    pub fn new(min_display: Duration, fade_out: Duration) -> Self {
        Self {
            state: LoaderState::Showing,
            min_display,
            fade_out,
        }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Asks to hide the loader `elapsed` after it appeared.
    ///
    /// The first request returns how long to wait before applying the
    /// `hidden` class (the rest of the minimum display time, or zero).
    /// Later requests return `None`.
    pub fn request_hide(&mut self, elapsed: Duration) -> Option<Duration> {
        if self.state != LoaderState::Showing {
            return None;
        }
        self.state = LoaderState::Scheduled;
        let wait = self.min_display.saturating_sub(elapsed);
        log::debug!("page loader hides in {wait:?}");
        Some(wait)
    }

    /// Records that the `hidden` class was applied and returns how long to
    /// wait before removing the element. `None` unless a hide was scheduled.
    pub fn hide(&mut self) -> Option<Duration> {
        if self.state != LoaderState::Scheduled {
            return None;
        }
        self.state = LoaderState::Hiding;
        Some(self.fade_out)
    }

    /// Records removal. Returns `false` if the loader was not fading out.
    pub fn remove(&mut self) -> bool {
        if self.state != LoaderState::Hiding {
            return false;
        }
        self.state = LoaderState::Removed;
        true
    }
}
