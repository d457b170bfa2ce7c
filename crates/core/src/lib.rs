#![deny(unsafe_code)]
//! Core types and traits for the portfolio-fx visual effects.
//!
//! Provides the `Scene` trait, the `Surface` drawing abstraction (plus the
//! `Recorder` test surface), the per-frame `FrameDriver` with its
//! `CancelHandle`, color types (`Srgb`, `Rgba`), the `RandomSource` trait and
//! `Xorshift64` PRNG, `Seed`, and parameter helpers.

pub mod color;
pub mod driver;
pub mod error;
pub mod params;
pub mod prng;
pub mod scene;
pub mod seed;
pub mod surface;

pub use color::{Rgba, Srgb};
pub use driver::{CancelHandle, FrameDriver, FrameOutcome};
pub use error::FxError;
pub use prng::{RandomSource, Xorshift64};
pub use scene::{Scene, Viewport};
pub use seed::Seed;
pub use surface::{DrawCommand, Recorder, Surface};
