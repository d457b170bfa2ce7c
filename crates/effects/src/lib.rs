#![deny(unsafe_code)]
//! Small timed effects that sit around the background scene.
//!
//! Each effect is a pure state machine: the host (the wasm bindings) owns the
//! timers and the DOM, and asks the effect what to show next and how long to
//! wait. That keeps the timing rules testable without a browser.

pub mod hero;
pub mod loader;
pub mod typewriter;

pub use hero::{hero_particles, HeroParticle};
pub use loader::{LoaderState, PageLoader};
pub use typewriter::{Typewriter, TypewriterFrame};
