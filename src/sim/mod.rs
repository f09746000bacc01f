//! Simulated bowlers for driving the engine.
//!
//! A `RandomBowler` only ever rolls legal throws, so it can feed a
//! `FrameEngine` for any number of frames. Seeded, so runs are reproducible.

mod bowler;

pub use bowler::RandomBowler;
