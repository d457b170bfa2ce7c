//! Drawing: discs for particles, faded lines between close pairs.

use crate::particle::Particle;
use portfolio_fx_core::color::{Rgba, Srgb};
use portfolio_fx_core::scene::Viewport;
use portfolio_fx_core::surface::Surface;

/// Resolved paint settings for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Disc fill, `rgba(255, 167, 38, 0.5)` by default.
    pub fill: Rgba,
    /// Link hue; alpha comes from [`link_opacity`].
    pub link_color: Srgb,
    /// Links are drawn only for distances strictly below this.
    pub link_distance: f64,
    /// Link opacity at distance zero.
    pub link_alpha: f64,
    pub line_width: f64,
}

/// A connection between particles `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// Opacity of a link at `distance`: `link_alpha * (1 - distance / link_distance)`
/// below the threshold, exactly 0 at or beyond it.
pub fn link_opacity(distance: f64, link_distance: f64, link_alpha: f64) -> f64 {
    if distance < link_distance {
        link_alpha * (1.0 - distance / link_distance)
    } else {
        0.0
    }
}

/// Calls `f` for every pair `i < j` closer than `link_distance`, each pair
/// exactly once, in `(i, j)` lexicographic order.
pub fn for_each_link<F>(particles: &[Particle], link_distance: f64, link_alpha: f64, mut f: F)
where
    F: FnMut(Link),
{
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let distance = a.position.distance(b.position);
            if distance < link_distance {
                f(Link {
                    i,
                    j,
                    distance,
                    opacity: link_opacity(distance, link_distance, link_alpha),
                });
            }
        }
    }
}

/// Clears the viewport, draws every particle, then every link.
pub fn render(particles: &[Particle], viewport: Viewport, style: &Style, surface: &mut dyn Surface) {
    surface.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    surface.set_fill_style(style.fill);
    for p in particles {
        surface.fill_circle(p.position.x, p.position.y, p.radius);
    }

    surface.set_line_width(style.line_width);
    for_each_link(particles, style.link_distance, style.link_alpha, |link| {
        let a = particles[link.i].position;
        let b = particles[link.j].position;
        surface.set_stroke_style(style.link_color.with_alpha(link.opacity));
        surface.stroke_line(a.x, a.y, b.x, b.y);
    });
}
