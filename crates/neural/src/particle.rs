//! Point-mass particles and the per-frame integration step.

use glam::DVec2;
use portfolio_fx_core::prng::RandomSource;
use portfolio_fx_core::scene::Viewport;
use serde::{Deserialize, Serialize};

/// One node of the network.
///
/// Velocity is a constant per-frame displacement; a component only changes
/// sign when the particle crosses the matching viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
}

impl Particle {
    /// Draws a particle from `rng`, in the order x, y, vx, vy, radius.
    ///
    /// Position is uniform over `[0, width) x [0, height)`, each velocity
    /// axis is `(r - 0.5) * speed`, radius is uniform over
    /// `[radius_min, radius_min + radius_range)`.
    pub fn random(
        viewport: Viewport,
        speed: f64,
        radius_min: f64,
        radius_range: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let x = rng.next_f64() * viewport.width;
        let y = rng.next_f64() * viewport.height;
        let vx = (rng.next_f64() - 0.5) * speed;
        let vy = (rng.next_f64() - 0.5) * speed;
        let radius = rng.next_range(radius_min, radius_min + radius_range);
        Self {
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
            radius,
        }
    }

    /// The particle one frame later.
    ///
    /// Moves by `velocity`, then negates a velocity component if the new
    /// position lies strictly outside `[0, size]` on that axis. Position is
    /// not clamped, so a particle can sit up to one step past an edge.
    pub fn advanced(self, viewport: Viewport) -> Self {
        let position = self.position + self.velocity;
        let mut velocity = self.velocity;
        if position.x < 0.0 || position.x > viewport.width {
            velocity.x = -velocity.x;
        }
        if position.y < 0.0 || position.y > viewport.height {
            velocity.y = -velocity.y;
        }
        Self {
            position,
            velocity,
            radius: self.radius,
        }
    }
}

/// Advances every particle by one frame, in place.
pub fn advance(particles: &mut [Particle], viewport: Viewport) {
    for p in particles.iter_mut() {
        *p = p.advanced(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_fx_core::prng::Xorshift64;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
            radius: 2.0,
        }
    }

    #[test]
    fn random_uses_draws_in_order() {
        let draws = [0.5, 0.25, 1.0, 0.0, 0.5];
        let mut i = 0;
        let mut rng = || {
            let v = draws[i];
            i += 1;
            v
        };
        let p = Particle::random(Viewport::new(200.0, 100.0), 0.5, 1.0, 2.0, &mut rng);
        assert_eq!(p.position, DVec2::new(100.0, 25.0));
        assert_eq!(p.velocity, DVec2::new(0.25, -0.25));
        assert_eq!(p.radius, 2.0);
    }

    #[test]
    fn radius_draw_spans_min_to_min_plus_range() {
        let viewport = Viewport::new(10.0, 10.0);
        let mut low = || 0.0;
        assert_eq!(Particle::random(viewport, 0.5, 3.0, 4.0, &mut low).radius, 3.0);

        let draws = [0.0, 0.0, 0.0, 0.0, 0.75];
        let mut i = 0;
        let mut rng = || {
            let v = draws[i];
            i += 1;
            v
        };
        assert_eq!(Particle::random(viewport, 0.5, 3.0, 4.0, &mut rng).radius, 6.0);
    }

    #[test]
    fn random_stays_in_documented_ranges() {
        let mut rng = Xorshift64::new(3);
        let viewport = Viewport::new(640.0, 480.0);
        for _ in 0..1000 {
            let p = Particle::random(viewport, 0.5, 1.0, 2.0, &mut rng);
            assert!((0.0..640.0).contains(&p.position.x));
            assert!((0.0..480.0).contains(&p.position.y));
            assert!((-0.25..0.25).contains(&p.velocity.x));
            assert!((-0.25..0.25).contains(&p.velocity.y));
            assert!((1.0..3.0).contains(&p.radius));
        }
    }

    #[test]
    fn advanced_moves_by_velocity() {
        let p = particle(10.0, 20.0, 0.25, -0.125).advanced(Viewport::new(100.0, 100.0));
        assert_eq!(p.position, DVec2::new(10.25, 19.875));
        assert_eq!(p.velocity, DVec2::new(0.25, -0.125));
        assert_eq!(p.radius, 2.0);
    }

    #[test]
    fn landing_exactly_on_edge_does_not_reflect() {
        let viewport = Viewport::new(100.0, 100.0);
        let p = particle(99.75, 50.0, 0.25, 0.0).advanced(viewport);
        assert_eq!(p.position.x, 100.0);
        assert_eq!(p.velocity.x, 0.25, "x == width must not bounce");
    }

    #[test]
    fn crossing_edge_flips_once_and_returns() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut p = particle(99.75, 50.0, 0.25, 0.0);
        p = p.advanced(viewport);
        p = p.advanced(viewport);
        assert_eq!(p.position.x, 100.25, "renders one step past the edge");
        assert_eq!(p.velocity.x, -0.25);
        p = p.advanced(viewport);
        assert_eq!(p.position.x, 100.0);
        assert_eq!(p.velocity.x, -0.25, "no second flip on the way back");
        p = p.advanced(viewport);
        assert_eq!(p.position.x, 99.75);
        assert_eq!(p.velocity.x, -0.25);
    }

    #[test]
    fn left_and_top_edges_reflect_independently() {
        let viewport = Viewport::new(100.0, 100.0);
        let p = particle(0.125, 50.0, -0.25, 0.125).advanced(viewport);
        assert_eq!(p.velocity, DVec2::new(0.25, 0.125));
        let q = particle(50.0, 0.0, 0.0, -0.25).advanced(viewport);
        assert_eq!(q.velocity, DVec2::new(0.0, 0.25));
    }

    #[test]
    fn advance_updates_every_particle() {
        let viewport = Viewport::new(100.0, 100.0);
        let mut particles = vec![particle(1.0, 1.0, 0.25, 0.0), particle(2.0, 2.0, 0.0, 0.25)];
        advance(&mut particles, viewport);
        assert_eq!(particles[0].position, DVec2::new(1.25, 1.0));
        assert_eq!(particles[1].position, DVec2::new(2.0, 2.25));
    }

    #[test]
    fn particle_serializes_position_as_pair() {
        let v = serde_json::to_value(particle(1.0, 2.0, 0.25, -0.25)).unwrap();
        assert_eq!(v["position"], serde_json::json!([1.0, 2.0]));
        assert_eq!(v["radius"], 2.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn overshoot_is_bounded_by_one_step(
                seed: u64,
                width in 1.0_f64..2000.0,
                height in 1.0_f64..2000.0,
            ) {
                let viewport = Viewport::new(width, height);
                let mut rng = Xorshift64::new(seed);
                let mut p = Particle::random(viewport, 0.5, 1.0, 2.0, &mut rng);
                let eps = 1e-9;
                for _ in 0..5000 {
                    p = p.advanced(viewport);
                    let (vx, vy) = (p.velocity.x.abs(), p.velocity.y.abs());
                    prop_assert!(p.position.x >= -vx - eps && p.position.x <= width + vx + eps,
                        "x = {} escaped [0, {width}]", p.position.x);
                    prop_assert!(p.position.y >= -vy - eps && p.position.y <= height + vy + eps,
                        "y = {} escaped [0, {height}]", p.position.y);
                }
            }

            #[test]
            fn speed_never_changes(seed: u64) {
                let viewport = Viewport::new(50.0, 50.0);
                let mut rng = Xorshift64::new(seed);
                let start = Particle::random(viewport, 0.5, 1.0, 2.0, &mut rng);
                let mut p = start;
                for _ in 0..1000 {
                    p = p.advanced(viewport);
                    prop_assert_eq!(p.velocity.abs(), start.velocity.abs());
                }
            }
        }
    }
}
