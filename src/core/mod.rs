//! Core value types: pin counts, configuration, errors, RNG.
//!
//! Everything here is independent of frame bookkeeping. The `frames`
//! module builds the engine on top of these.

pub mod config;
pub mod error;
pub mod pins;
pub mod rng;

pub use config::{BowlerConfig, STANDARD_RACK};
pub use error::{BowlingError, InvalidThrow, ScoreUnknown};
pub use pins::Pins;
pub use rng::BowlerRng;
