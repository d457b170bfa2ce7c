//! The 2D drawing surface scenes render into.
//!
//! The trait mirrors the handful of `CanvasRenderingContext2d` calls the
//! background uses, so the browser implementation is a direct forward. The
//! CPU raster lives in the scenes crate; [`Recorder`] keeps the calls as
//! [`DrawCommand`]s for inspection.

use crate::color::Rgba;
use serde::{Deserialize, Serialize};

/// A mutable-size 2D drawing surface.
///
/// Fill and stroke styles are stateful, like a canvas context: the style set
/// last applies to every following fill or stroke.
pub trait Surface {
    /// Current pixel size `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Resizes the backing pixels. Contents after a resize are unspecified.
    fn set_size(&mut self, width: f64, height: f64);

    /// Clears the rectangle to fully transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_fill_style(&mut self, color: Rgba);

    /// Fills a disc of radius `r` centred on `(x, y)` with the fill style.
    fn fill_circle(&mut self, x: f64, y: f64, r: f64);

    fn set_stroke_style(&mut self, color: Rgba);

    fn set_line_width(&mut self, width: f64);

    /// Strokes a straight segment with the stroke style and line width.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetSize { width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    SetFillStyle { color: Rgba },
    FillCircle { x: f64, y: f64, r: f64 },
    SetStrokeStyle { color: Rgba },
    SetLineWidth { width: f64 },
    StrokeLine { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// A surface that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// All calls since creation.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `FillCircle` calls recorded.
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    /// Number of `StrokeLine` calls recorded.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::SetSize { width, height });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetFillStyle { color });
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
        self.commands.push(DrawCommand::FillCircle { x, y, r });
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetStrokeStyle { color });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth { width });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.commands
            .push(DrawCommand::StrokeLine { x1, y1, x2, y2 });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_calls_in_order() {
        let mut rec = Recorder::new(10.0, 10.0);
        rec.clear_rect(0.0, 0.0, 10.0, 10.0);
        rec.set_fill_style(Rgba::new(1, 2, 3, 0.5));
        rec.fill_circle(1.0, 2.0, 3.0);
        rec.stroke_line(0.0, 0.0, 1.0, 1.0);
        assert_eq!(rec.commands().len(), 4);
        assert!(matches!(rec.commands()[0], DrawCommand::ClearRect { .. }));
        assert_eq!(rec.circle_count(), 1);
        assert_eq!(rec.line_count(), 1);
    }

    #[test]
    fn set_size_updates_reported_size() {
        let mut rec = Recorder::new(10.0, 10.0);
        rec.set_size(640.0, 2400.0);
        assert_eq!(rec.size(), (640.0, 2400.0));
    }

    #[test]
    fn surface_trait_is_object_safe() {
        let mut rec = Recorder::new(4.0, 4.0);
        let surface: &mut dyn Surface = &mut rec;
        surface.fill_circle(2.0, 2.0, 1.0);
        assert_eq!(rec.circle_count(), 1);
    }

    #[test]
    fn draw_command_serializes_with_op_tag() {
        let cmd = DrawCommand::FillCircle {
            x: 1.0,
            y: 2.0,
            r: 3.0,
        };
        let v = serde_json::to_value(&cmd).unwrap();
        assert_eq!(v["op"], "fill_circle");
        assert_eq!(v["r"], 3.0);
    }
}
