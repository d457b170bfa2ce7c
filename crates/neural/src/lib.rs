#![deny(unsafe_code)]
//! Neural-network particle background.
//!
//! A fixed set of slow-drifting particles bounces around the page. Each frame
//! every particle is drawn as a small disc, and every pair closer than the
//! link distance is joined by a line whose opacity fades to zero at that
//! distance. Density follows the viewport width at construction time (one
//! particle per 15px, at most 100) and is never rebalanced afterwards.

pub mod particle;
pub mod render;

pub use particle::{advance, Particle};
pub use render::{for_each_link, link_opacity, render, Link, Style};

use portfolio_fx_core::color::Srgb;
use portfolio_fx_core::driver::FrameDriver;
use portfolio_fx_core::error::FxError;
use portfolio_fx_core::params::{param_color, param_f64, param_usize};
use portfolio_fx_core::prng::{RandomSource, Xorshift64};
use portfolio_fx_core::scene::{Scene, Viewport};
use portfolio_fx_core::surface::Surface;
use serde_json::{json, Value};

/// Pixels of viewport width per particle.
const DEFAULT_SPACING: f64 = 15.0;
/// Upper bound on particle count; caps the link pass at 4950 pairs.
const DEFAULT_MAX_PARTICLES: usize = 100;
/// Velocity axis is `(random() - 0.5) * speed`.
const DEFAULT_SPEED: f64 = 0.5;
const DEFAULT_RADIUS_MIN: f64 = 1.0;
const DEFAULT_RADIUS_RANGE: f64 = 2.0;
const DEFAULT_LINK_DISTANCE: f64 = 150.0;
const DEFAULT_LINK_ALPHA: f64 = 0.2;
const DEFAULT_LINE_WIDTH: f64 = 1.0;
const DEFAULT_COLOR: Srgb = Srgb {
    r: 1.0,
    g: 167.0 / 255.0,
    b: 38.0 / 255.0,
};
const DEFAULT_FILL_ALPHA: f64 = 0.5;

/// Tunable constants of the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuralParams {
    pub spacing: f64,
    pub max_particles: usize,
    pub speed: f64,
    pub radius_min: f64,
    pub radius_range: f64,
    pub link_distance: f64,
    pub link_alpha: f64,
    pub line_width: f64,
    pub color: Srgb,
    pub fill_alpha: f64,
}

impl Default for NeuralParams {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            max_particles: DEFAULT_MAX_PARTICLES,
            speed: DEFAULT_SPEED,
            radius_min: DEFAULT_RADIUS_MIN,
            radius_range: DEFAULT_RADIUS_RANGE,
            link_distance: DEFAULT_LINK_DISTANCE,
            link_alpha: DEFAULT_LINK_ALPHA,
            line_width: DEFAULT_LINE_WIDTH,
            color: DEFAULT_COLOR,
            fill_alpha: DEFAULT_FILL_ALPHA,
        }
    }
}

impl NeuralParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// Returns `FxError::InvalidColor` if `color` is present but not `#rrggbb`.
    pub fn from_json(params: &Value) -> Result<Self, FxError> {
        Ok(Self {
            spacing: param_f64(params, "spacing", DEFAULT_SPACING),
            max_particles: param_usize(params, "max_particles", DEFAULT_MAX_PARTICLES),
            speed: param_f64(params, "speed", DEFAULT_SPEED),
            radius_min: param_f64(params, "radius_min", DEFAULT_RADIUS_MIN),
            radius_range: param_f64(params, "radius_range", DEFAULT_RADIUS_RANGE),
            link_distance: param_f64(params, "link_distance", DEFAULT_LINK_DISTANCE),
            link_alpha: param_f64(params, "link_alpha", DEFAULT_LINK_ALPHA),
            line_width: param_f64(params, "line_width", DEFAULT_LINE_WIDTH),
            color: param_color(params, "color", DEFAULT_COLOR)?,
            fill_alpha: param_f64(params, "fill_alpha", DEFAULT_FILL_ALPHA),
        })
    }

    /// Paint settings derived from these params.
    pub fn style(&self) -> Style {
        Style {
            fill: self.color.with_alpha(self.fill_alpha),
            link_color: self.color,
            link_distance: self.link_distance,
            link_alpha: self.link_alpha,
            line_width: self.line_width,
        }
    }
}

/// Number of particles for a viewport `width`: `min(floor(width / spacing), max)`.
///
/// Negative, zero, and NaN widths give 0.
pub fn particle_count(width: f64, spacing: f64, max: usize) -> usize {
    let n = (width / spacing).floor();
    if n.is_nan() || n <= 0.0 {
        0
    } else {
        // `as` saturates, so an infinite quotient still lands on `max`.
        (n as usize).min(max)
    }
}

/// The animated background: particles, viewport, and paint settings.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    params: NeuralParams,
    style: Style,
}

impl ParticleField {
    /// Builds a field for a `width` x `height` viewport.
    ///
    /// Particle count is fixed here and never recomputed.
    pub fn new(width: f64, height: f64, params: NeuralParams, rng: &mut dyn RandomSource) -> Self {
        let viewport = Viewport::new(width, height);
        let count = particle_count(width, params.spacing, params.max_particles);
        let particles = (0..count)
            .map(|_| {
                Particle::random(
                    viewport,
                    params.speed,
                    params.radius_min,
                    params.radius_range,
                    rng,
                )
            })
            .collect();
        log::debug!("neural field: {count} particles for {width}x{height}");
        Self {
            particles,
            viewport,
            style: params.style(),
            params,
        }
    }

    /// Builds a field from a JSON params object and a seeded [`Xorshift64`].
    pub fn from_json(
        width: f64,
        height: f64,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, FxError> {
        let params = NeuralParams::from_json(json_params)?;
        let mut rng = Xorshift64::new(seed);
        Ok(Self::new(width, height, params, &mut rng))
    }

    /// Attaches a field to a host surface, if there is one.
    ///
    /// A missing surface disables the background: no particles are created
    /// and no driver is returned. This is not an error.
    pub fn mount<S: Surface>(
        surface: Option<S>,
        width: f64,
        height: f64,
        params: NeuralParams,
        rng: &mut dyn RandomSource,
    ) -> Option<FrameDriver<ParticleField, S>> {
        let surface = surface?;
        let field = Self::new(width, height, params, rng);
        Some(FrameDriver::new(field, surface))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Connections the next render would draw, in draw order.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for_each_link(
            &self.particles,
            self.style.link_distance,
            self.style.link_alpha,
            |link| links.push(link),
        );
        links
    }
}

impl Scene for ParticleField {
    fn advance(&mut self) {
        advance(&mut self.particles, self.viewport);
    }

    fn render(&self, surface: &mut dyn Surface) {
        render(&self.particles, self.viewport, &self.style, surface);
    }

    /// Updates the viewport only. Existing particles are neither moved nor
    /// rescaled and the count stays as built, so particles outside a shrunk
    /// viewport drift back in through their own bounces.
    fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn params(&self) -> Value {
        let p = &self.params;
        json!({
            "spacing": p.spacing,
            "max_particles": p.max_particles,
            "speed": p.speed,
            "radius_min": p.radius_min,
            "radius_range": p.radius_range,
            "link_distance": p.link_distance,
            "link_alpha": p.link_alpha,
            "line_width": p.line_width,
            "color": p.color.to_hex(),
            "fill_alpha": p.fill_alpha,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "spacing": {
                "type": "number",
                "default": DEFAULT_SPACING,
                "min": 1.0,
                "max": 200.0,
                "description": "Viewport pixels per particle (count = floor(width / spacing))"
            },
            "max_particles": {
                "type": "integer",
                "default": DEFAULT_MAX_PARTICLES,
                "min": 0,
                "max": 500,
                "description": "Upper bound on particle count"
            },
            "speed": {
                "type": "number",
                "default": DEFAULT_SPEED,
                "min": 0.0,
                "max": 10.0,
                "description": "Velocity spread per axis: (random - 0.5) * speed"
            },
            "radius_min": {
                "type": "number",
                "default": DEFAULT_RADIUS_MIN,
                "min": 0.0,
                "max": 20.0,
                "description": "Smallest particle radius in pixels"
            },
            "radius_range": {
                "type": "number",
                "default": DEFAULT_RADIUS_RANGE,
                "min": 0.0,
                "max": 20.0,
                "description": "Radius spread above radius_min"
            },
            "link_distance": {
                "type": "number",
                "default": DEFAULT_LINK_DISTANCE,
                "min": 0.0,
                "max": 1000.0,
                "description": "Pairs closer than this are connected"
            },
            "link_alpha": {
                "type": "number",
                "default": DEFAULT_LINK_ALPHA,
                "min": 0.0,
                "max": 1.0,
                "description": "Link opacity for coincident particles, fading to 0 at link_distance"
            },
            "line_width": {
                "type": "number",
                "default": DEFAULT_LINE_WIDTH,
                "min": 0.0,
                "max": 10.0,
                "description": "Link stroke width in pixels"
            },
            "color": {
                "type": "string",
                "default": DEFAULT_COLOR.to_hex(),
                "description": "Hue of particles and links as #rrggbb"
            },
            "fill_alpha": {
                "type": "number",
                "default": DEFAULT_FILL_ALPHA,
                "min": 0.0,
                "max": 1.0,
                "description": "Particle fill opacity"
            }
        })
    }
}
