//! Decorative particles around the hero visual.
//!
//! These are plain elements animated by CSS; all the code decides is where
//! each one starts, how far it drifts (`--tx`/`--ty`), and when its animation
//! begins.

use portfolio_fx_core::prng::RandomSource;

/// Particles placed around the hero visual by default.
pub const DEFAULT_HERO_PARTICLES: usize = 15;

/// Placement of one hero particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParticle {
    /// Start position as a percentage of the container, in [0, 100).
    pub left_pct: f64,
    pub top_pct: f64,
    /// Drift in pixels, in [-50, 50).
    pub tx_px: f64,
    pub ty_px: f64,
    /// Animation delay in seconds, in [0, 3).
    pub delay_secs: f64,
}

impl HeroParticle {
    /// Draws one particle, in the order left, top, tx, ty, delay.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self {
            left_pct: rng.next_f64() * 100.0,
            top_pct: rng.next_f64() * 100.0,
            tx_px: (rng.next_f64() - 0.5) * 100.0,
            ty_px: (rng.next_f64() - 0.5) * 100.0,
            delay_secs: rng.next_f64() * 3.0,
        }
    }

    /// Inline style for the particle element.
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; --tx: {}px; --ty: {}px; animation-delay: {}s;",
            self.left_pct, self.top_pct, self.tx_px, self.ty_px, self.delay_secs
        )
    }
}

/// Lays out `count` hero particles.
pub fn hero_particles(count: usize, rng: &mut dyn RandomSource) -> Vec<HeroParticle> {
    (0..count).map(|_| HeroParticle::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_fx_core::prng::Xorshift64;

    #[test]
    fn draws_map_to_fields_in_order() {
        let draws = [0.5, 0.25, 0.0, 0.75, 0.5];
        let mut i = 0;
        let mut rng = || {
            let v = draws[i];
            i += 1;
            v
        };
        let p = HeroParticle::random(&mut rng);
        assert_eq!(
            p,
            HeroParticle {
                left_pct: 50.0,
                top_pct: 25.0,
                tx_px: -50.0,
                ty_px: 25.0,
                delay_secs: 1.5,
            }
        );
    }

    #[test]
    fn style_sets_position_drift_and_delay() {
        let p = HeroParticle {
            left_pct: 50.0,
            top_pct: 25.0,
            tx_px: -50.0,
            ty_px: 25.0,
            delay_secs: 1.5,
        };
        assert_eq!(
            p.style(),
            "left: 50%; top: 25%; --tx: -50px; --ty: 25px; animation-delay: 1.5s;"
        );
    }

    #[test]
    fn default_count_and_ranges() {
        let mut rng = Xorshift64::new(15);
        let particles = hero_particles(DEFAULT_HERO_PARTICLES, &mut rng);
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((-50.0..50.0).contains(&p.tx_px));
            assert!((-50.0..50.0).contains(&p.ty_px));
            assert!((0.0..3.0).contains(&p.delay_secs));
        }
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(hero_particles(0, &mut Xorshift64::new(1)).is_empty());
    }
}
