//! Error types for throws and scores.
//!
//! Both conditions are recoverable: a rejected throw leaves the engine
//! untouched, and an unknown score resolves once another throw lands.

use thiserror::Error;

/// A throw that cannot physically happen.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidThrow {
    /// More pins than a full rack holds, or a negative count.
    #[error("cannot knock down {pins} pins from a rack of {rack}")]
    OutOfRange { pins: i32, rack: u8 },

    /// More pins than are still standing in the current frame.
    #[error("cannot knock down {pins} pins with only {standing} standing")]
    ExceedsStanding { pins: u8, standing: u8 },
}

/// The running score equals the ambiguous sentinel and cannot be reported.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("score of {pending} is pending a bonus resolution")]
pub struct ScoreUnknown {
    /// The withheld score.
    pub pending: u32,
}

/// Any error raised by a [`FrameEngine`](crate::frames::FrameEngine).
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BowlingError {
    #[error(transparent)]
    InvalidThrow(#[from] InvalidThrow),

    #[error(transparent)]
    ScoreUnknown(#[from] ScoreUnknown),
}
