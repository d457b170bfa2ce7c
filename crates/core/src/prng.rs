//! Random number sources for scene initialization.
//!
//! Scenes never reach for a process-wide generator: they take a
//! [`RandomSource`] at construction. Tests and the CLI pass a seeded
//! [`Xorshift64`] so trajectories are reproducible; the browser passes a
//! closure over `Math.random`.

use serde::{Deserialize, Serialize};

/// A source of uniformly distributed `f64` values in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a source, which keeps host adapters
/// (and scripted test sequences) to a single line.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed value in `[min, max)`.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift triple (13, 7, 17). A seed of 0 is the all-zeros
/// fixed point of the algorithm and is replaced with a non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53, for full mantissa precision.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // If this breaks, every saved Seed replays differently.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_is_replaced() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0, "seed=0 guard failed");
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift64::new(1500);
        let mut b = Xorshift64::new(1500);
        for i in 0..1000 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits(), "diverged at {i}");
        }
    }

    #[test]
    fn closure_is_a_random_source() {
        let values = [0.25, 0.75];
        let mut i = 0;
        let mut source = || {
            let v = values[i % values.len()];
            i += 1;
            v
        };
        assert_eq!(source.next_f64(), 0.25);
        assert_eq!(source.next_range(-1.0, 1.0), 0.5);
    }

    #[test]
    fn dyn_random_source_works() {
        let mut rng = Xorshift64::new(7);
        let source: &mut dyn RandomSource = &mut rng;
        let v = source.next_range(1.0, 3.0);
        assert!((1.0..3.0).contains(&v), "next_range(1, 3) = {v}");
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64(), "diverged at {i}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v), "next_f64() = {v} for seed {seed}");
                }
            }

            #[test]
            fn next_range_in_bounds_for_any_seed_and_range(
                seed: u64,
                min in -1e6_f64..1e6,
                max in -1e6_f64..1e6,
            ) {
                prop_assume!(min < max);
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, max);
                    prop_assert!(v >= min && v < max, "next_range({min}, {max}) = {v}");
                }
            }
        }
    }
}
