//! Deterministic random number generation for simulated bowlers.
//!
//! Same seed, same throws. `fork` hands out independent lanes from one
//! root seed.
//!
//! ```
//! use bowling_frames::core::BowlerRng;
//!
//! let mut a = BowlerRng::new(7);
//! let mut b = BowlerRng::new(7);
//! assert_eq!(a.gen_pins(10), b.gen_pins(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used by [`RandomBowler`](crate::sim::RandomBowler).
///
/// ChaCha8 keeps it fast and reproducible across platforms.
#[derive(Clone, Debug)]
pub struct BowlerRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BowlerRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent, deterministic stream (one per simulated lane).
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Roll a pin count in `0..=standing`.
    pub fn gen_pins(&mut self, standing: u8) -> u8 {
        self.inner.gen_range(0..=standing)
    }

    /// `true` with the given probability, clamped to `0.0..=1.0`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}
