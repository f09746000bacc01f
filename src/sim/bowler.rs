//! Random bowler implementation.

use crate::core::{BowlerRng, InvalidThrow};
use crate::frames::FrameEngine;

/// Rolls legal throws against a [`FrameEngine`].
#[derive(Clone, Debug)]
pub struct RandomBowler {
    rng: BowlerRng,
    /// Chance of clearing whatever is standing on a throw.
    clear_chance: f64,
}

impl RandomBowler {
    /// Create a bowler with a seed and no bias towards clearing the rack.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: BowlerRng::new(seed),
            clear_chance: 0.0,
        }
    }

    /// Bias the bowler towards strikes and spares.
    #[must_use]
    pub fn with_clear_chance(mut self, chance: f64) -> Self {
        self.clear_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Pick the next throw for `engine`. Always legal.
    pub fn next_throw(&mut self, engine: &FrameEngine) -> i32 {
        let standing = engine.pins_standing();
        let pins = if self.rng.gen_bool(self.clear_chance) {
            standing
        } else {
            self.rng.gen_pins(standing)
        };
        i32::from(pins)
    }

    /// Bowl `throws` throws into `engine`.
    pub fn play(&mut self, engine: &mut FrameEngine, throws: usize) -> Result<(), InvalidThrow> {
        for _ in 0..throws {
            let pins = self.next_throw(engine);
            engine.throw(pins)?;
        }
        Ok(())
    }

    /// A second bowler with an independent stream and the same bias.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            rng: self.rng.fork(),
            clear_chance: self.clear_chance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BowlerConfig;

    #[test]
    fn test_play_never_rejected() {
        let mut bowler = RandomBowler::new(42);
        let mut engine = FrameEngine::new();

        bowler.play(&mut engine, 500).unwrap();
        assert_eq!(engine.throw_count(), 500);
    }

    #[test]
    fn test_deterministic() {
        let mut a = FrameEngine::new();
        let mut b = FrameEngine::new();
        RandomBowler::new(7).play(&mut a, 40).unwrap();
        RandomBowler::new(7).play(&mut b, 40).unwrap();

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_always_clear_is_all_strikes() {
        let mut bowler = RandomBowler::new(1).with_clear_chance(1.0);
        let mut engine = FrameEngine::new();
        bowler.play(&mut engine, 12).unwrap();

        assert!(engine.log().iter().all(|r| r.pins.raw() == 10));
        assert_eq!(engine.frame_number(), 13);
    }

    #[test]
    fn test_respects_small_rack() {
        let mut bowler = RandomBowler::new(9);
        let mut engine = FrameEngine::with_config(BowlerConfig::new().with_rack_size(3));
        bowler.play(&mut engine, 100).unwrap();

        assert!(engine.log().iter().all(|r| r.pins.raw() <= 3));
    }

    #[test]
    fn test_fork_differs() {
        let mut bowler = RandomBowler::new(42);
        let mut forked = bowler.fork();

        let mut a = FrameEngine::new();
        let mut b = FrameEngine::new();
        bowler.play(&mut a, 30).unwrap();
        forked.play(&mut b, 30).unwrap();

        assert_ne!(a.snapshot(), b.snapshot());
    }
}
