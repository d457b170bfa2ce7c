//! CPU raster implementation of [`Surface`].
//!
//! Always available (no feature gate) so both the PNG snapshot path and any
//! other consumer of raw RGBA bytes share the same drawing code. Pixels are
//! stored premultiplied and composited source-over, like a 2D canvas.

use portfolio_fx_core::color::{Rgba, Srgb};
use portfolio_fx_core::surface::Surface;

/// Sub-pixel sample offsets for disc coverage (2x2 grid).
const SAMPLES: [(f64, f64); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// An in-memory RGBA canvas.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    /// Premultiplied RGBA in [0, 1], row-major.
    pixels: Vec<[f64; 4]>,
    fill: Rgba,
    stroke: Rgba,
    line_width: f64,
}

impl Raster {
    /// Creates a fully transparent raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width * height],
            fill: Rgba::new(0, 0, 0, 1.0),
            stroke: Rgba::new(0, 0, 0, 1.0),
            line_width: 1.0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f64; 4]> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Converts to straight-alpha RGBA8, `width * height * 4` bytes.
    ///
    /// With a `background`, every pixel is composited over it and alpha is 255.
    pub fn to_rgba8(&self, background: Option<Srgb>) -> Vec<u8> {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.pixels
            .iter()
            .flat_map(|&[r, g, b, a]| match background {
                Some(bg) => {
                    let inv = 1.0 - a;
                    [q(r + bg.r * inv), q(g + bg.g * inv), q(b + bg.b * inv), 255]
                }
                None if a > 0.0 => [q(r / a), q(g / a), q(b / a), q(a)],
                None => [0, 0, 0, 0],
            })
            .collect()
    }

    /// Source-over blend of `color` at `coverage` into pixel `(x, y)`.
    fn blend(&mut self, x: usize, y: usize, color: Rgba, coverage: f64) {
        let a = color.a * coverage.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let src = [
            color.r as f64 / 255.0 * a,
            color.g as f64 / 255.0 * a,
            color.b as f64 / 255.0 * a,
            a,
        ];
        let dst = &mut self.pixels[y * self.width + x];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s + *d * (1.0 - a);
        }
    }

    /// Pixel index range covering `[lo, hi)` in one axis, clipped to `len`.
    fn span(lo: f64, hi: f64, len: usize) -> std::ops::Range<usize> {
        let start = lo.floor().max(0.0) as usize;
        let end = (hi.ceil().max(0.0) as usize).min(len);
        start.min(end)..end
    }
}

/// Distance from `(px, py)` to the segment `(x1, y1)-(x2, y2)`.
fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let (dx, dy) = (x2 - x1, y2 - y1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (x1 + t * dx, y1 + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

impl Surface for Raster {
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    /// Like a canvas element: sizes truncate to whole pixels, negatives
    /// become 0, and the contents are cleared.
    fn set_size(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0) as usize;
        self.height = height.max(0.0) as usize;
        self.pixels = vec![[0.0; 4]; self.width * self.height];
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let xs = Self::span(x, x + width, self.width);
        for py in Self::span(y, y + height, self.height) {
            let row = py * self.width;
            for px in xs.clone() {
                self.pixels[row + px] = [0.0; 4];
            }
        }
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
        if r <= 0.0 {
            return;
        }
        let r_sq = r * r;
        for py in Self::span(y - r, y + r, self.height) {
            for px in Self::span(x - r, x + r, self.width) {
                let hits = SAMPLES
                    .iter()
                    .filter(|(ox, oy)| {
                        let (dx, dy) = (px as f64 + ox - x, py as f64 + oy - y);
                        dx * dx + dy * dy <= r_sq
                    })
                    .count();
                if hits > 0 {
                    self.blend(px, py, self.fill, hits as f64 / SAMPLES.len() as f64);
                }
            }
        }
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Coverage falls off linearly over one pixel past half the line width.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let half = self.line_width / 2.0;
        if half <= 0.0 {
            return;
        }
        let pad = half + 1.0;
        let xs = Self::span(x1.min(x2) - pad, x1.max(x2) + pad, self.width);
        for py in Self::span(y1.min(y2) - pad, y1.max(y2) + pad, self.height) {
            for px in xs.clone() {
                let d = segment_distance(px as f64 + 0.5, py as f64 + 0.5, x1, y1, x2, y2);
                let coverage = half + 0.5 - d;
                if coverage > 0.0 {
                    self.blend(px, py, self.stroke, coverage);
                }
            }
        }
    }
}
