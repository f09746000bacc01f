//! # bowling-frames
//!
//! Tracks one bowler through a sequence of throws.
//!
//! ## Behavior
//!
//! 1. **Validation first**: a throw above a full rack, or above the pins
//!    still standing in the frame, is rejected and nothing changes.
//!
//! 2. **Two-throw window**: strikes and spares are detected from the last
//!    two throws, newest first.
//!
//! 3. **Running score**: pinfall accumulates; the throw after a spare counts
//!    twice. A score equal to one full rack is ambiguous and is withheld.
//!
//! ## Modules
//!
//! - `core`: Pin counts, configuration, errors, RNG
//! - `frames`: History window, validator, frame state, `FrameEngine`
//! - `sim`: Seeded random bowler for driving an engine

pub mod core;
pub mod frames;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    BowlerConfig, BowlerRng, BowlingError, InvalidThrow, Pins, ScoreUnknown, STANDARD_RACK,
};

pub use crate::frames::{
    validate, Bowler, EngineSnapshot, FrameEngine, FrameOutcome, FrameState, ThrowHistory,
    ThrowRecord, Transition, HISTORY_LEN,
};

pub use crate::sim::RandomBowler;
