//! The `Scene` trait every animated background implements.
//!
//! The trait is object-safe so scenes can be used as `dyn Scene` and driven
//! by a [`FrameDriver`](crate::driver::FrameDriver) without knowing which
//! animation is running.

use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pixel dimensions of the area a scene animates in.
///
/// No validation: zero or negative sizes are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A frame-stepped animation that draws itself onto a [`Surface`].
///
/// `advance` and `render` are total: a scene that has been built never fails.
pub trait Scene {
    /// Moves the simulation forward by one animation frame.
    fn advance(&mut self);

    /// Draws the current state. Does not mutate the scene.
    fn render(&self, surface: &mut dyn Surface);

    /// Updates the viewport. Scenes decide what, if anything, to rebuild.
    fn resize(&mut self, width: f64, height: f64);

    fn viewport(&self) -> Viewport;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Recorder;
    use serde_json::json;

    /// Counts frames and draws one circle per frame seen.
    struct Counter {
        frames: usize,
        viewport: Viewport,
    }

    impl Scene for Counter {
        fn advance(&mut self) {
            self.frames += 1;
        }

        fn render(&self, surface: &mut dyn Surface) {
            for i in 0..self.frames {
                surface.fill_circle(i as f64, 0.0, 1.0);
            }
        }

        fn resize(&mut self, width: f64, height: f64) {
            self.viewport = Viewport::new(width, height);
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn params(&self) -> Value {
            json!({"frames": self.frames})
        }

        fn param_schema(&self) -> Value {
            json!({"frames": {"type": "integer", "default": 0}})
        }
    }

    #[test]
    fn scene_trait_is_object_safe() {
        let mut scene: Box<dyn Scene> = Box::new(Counter {
            frames: 0,
            viewport: Viewport::new(8.0, 8.0),
        });
        scene.advance();
        scene.advance();
        let mut rec = Recorder::new(8.0, 8.0);
        scene.render(&mut rec);
        assert_eq!(rec.circle_count(), 2);
        assert_eq!(scene.params()["frames"], 2);
    }

    #[test]
    fn resize_is_visible_through_viewport() {
        let mut scene = Counter {
            frames: 0,
            viewport: Viewport::default(),
        };
        scene.resize(-5.0, 0.0);
        assert_eq!(scene.viewport(), Viewport::new(-5.0, 0.0));
    }
}
