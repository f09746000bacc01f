//! Frame state and the pure per-throw transition.
//!
//! ## FrameState
//!
//! Everything the engine knows about a bowler between throws:
//! - Two-throw history window (newest first)
//! - Whether the next throw opens a new frame
//! - Running score and whether a spare bonus ball is owed
//! - Outcome of the latest frame
//!
//! `FrameState::apply` never mutates; it returns the next state. Callers
//! must validate the throw first (see [`validate`](super::validate)).

use serde::{Deserialize, Serialize};

use super::history::ThrowHistory;
use crate::core::{BowlerConfig, Pins};

/// Outcome of the frame the latest throw belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// No spare or strike (yet).
    #[default]
    Open,
    /// Two throws cleared the rack, or a full rack followed a gutter ball.
    Spare,
    /// First throw of the frame cleared the rack.
    Strike,
}

impl FrameOutcome {
    /// Does the next throw score a bonus? Only a spare earns one.
    #[must_use]
    pub const fn earns_bonus(self) -> bool {
        matches!(self, FrameOutcome::Spare)
    }

    /// Does this outcome close the frame regardless of throw position?
    #[must_use]
    pub const fn closes_frame(self) -> bool {
        !matches!(self, FrameOutcome::Open)
    }
}

impl std::fmt::Display for FrameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameOutcome::Open => write!(f, "open"),
            FrameOutcome::Spare => write!(f, "spare"),
            FrameOutcome::Strike => write!(f, "strike"),
        }
    }
}

/// Result of applying one accepted throw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the throw.
    pub state: FrameState,
    /// Outcome derived from the throw.
    pub outcome: FrameOutcome,
    /// Points added to the score, bonuses included.
    pub points: u32,
    /// Whether this throw ended its frame.
    pub closed_frame: bool,
}

/// Complete per-bowler frame state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameState {
    history: ThrowHistory,

    /// True when the next throw starts a new frame.
    new_frame: bool,

    score: u32,

    outcome: FrameOutcome,

    /// The next throw counts twice.
    bonus_ball: bool,

    /// Frame the next throw belongs to (starts at 1).
    frame: u32,

    throws: u32,
}

impl FrameState {
    /// Fresh state: empty window, full rack, score 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: ThrowHistory::new(),
            new_frame: true,
            score: 0,
            outcome: FrameOutcome::Open,
            bonus_ball: false,
            frame: 1,
            throws: 0,
        }
    }

    #[must_use]
    pub fn history(&self) -> &ThrowHistory {
        &self.history
    }

    /// Does the next throw face a full rack?
    #[must_use]
    pub fn starts_new_frame(&self) -> bool {
        self.new_frame
    }

    /// Raw accumulated score, including the ambiguous sentinel.
    #[must_use]
    pub fn raw_score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn outcome(&self) -> FrameOutcome {
        self.outcome
    }

    /// Frame number of the next throw.
    #[must_use]
    pub fn frame_number(&self) -> u32 {
        self.frame
    }

    /// Accepted throws so far.
    #[must_use]
    pub fn throw_count(&self) -> u32 {
        self.throws
    }

    /// Will the next throw count twice?
    #[must_use]
    pub fn owes_bonus_ball(&self) -> bool {
        self.bonus_ball
    }

    /// Pins the next throw can knock down at most.
    #[must_use]
    pub fn pins_standing(&self, config: &BowlerConfig) -> u8 {
        match self.history.latest() {
            Some(prev) if !self.new_frame => config.rack_size.saturating_sub(prev.raw()),
            _ => config.rack_size,
        }
    }

    /// Score if it is unambiguous.
    #[must_use]
    pub fn known_score(&self, config: &BowlerConfig) -> Option<u32> {
        (self.score != config.pending_sentinel()).then_some(self.score)
    }

    /// Record that the score was found ambiguous.
    pub(crate) fn mark_pending(&mut self) {
        self.outcome = FrameOutcome::Spare;
    }

    /// Apply an already-validated throw.
    #[must_use]
    pub fn apply(&self, pins: Pins, config: &BowlerConfig) -> Transition {
        let rack = config.rack_size;
        let previous = self.history.latest();

        let outcome = match previous {
            Some(prev) if !self.new_frame && prev.raw() + pins.raw() == rack => FrameOutcome::Spare,
            // A full rack straight after a gutter ball scores as a spare.
            Some(Pins::GUTTER) if pins.is_full(rack) => FrameOutcome::Spare,
            _ if pins.is_full(rack) => FrameOutcome::Strike,
            _ => FrameOutcome::Open,
        };

        let closed_frame = outcome.closes_frame() || !self.new_frame;
        let points = if self.bonus_ball { pins.points() * 2 } else { pins.points() };

        let mut history = self.history;
        history.record(pins);

        let state = FrameState {
            history,
            new_frame: closed_frame,
            // Counters saturate; the engine has no terminal state.
            score: self.score.saturating_add(points),
            outcome,
            bonus_ball: outcome.earns_bonus(),
            frame: if closed_frame { self.frame.saturating_add(1) } else { self.frame },
            throws: self.throws.saturating_add(1),
        };

        Transition {
            state,
            outcome,
            points,
            closed_frame,
        }
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::new()
    }
}
