//! The frame engine: public surface for one bowler.
//!
//! Every throw goes through the validator first. On success the history
//! window, frame flag, outcome and score all advance together in a single
//! transition, so a caller never observes a half-applied throw.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::history::HISTORY_LEN;
use super::state::{FrameOutcome, FrameState};
use super::validator::validate;
use crate::core::{BowlerConfig, InvalidThrow, Pins, ScoreUnknown};

/// Record of an accepted throw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowRecord {
    /// Index of the throw (0-based).
    pub index: u32,
    /// Frame the throw belonged to (1-based).
    pub frame: u32,
    pub pins: Pins,
    pub outcome: FrameOutcome,
    /// Points scored, bonuses included.
    pub points: u32,
}

/// Captured engine state: frame state plus the throw log that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub state: FrameState,
    pub log: Vector<ThrowRecord>,
}

/// Tracks a single bowler's throws, frame state and running score.
///
/// ## Usage
///
/// ```
/// use bowling_frames::{FrameEngine, FrameOutcome};
///
/// let mut bowler = FrameEngine::new();
/// bowler.throw(7).unwrap();
/// bowler.throw(3).unwrap();
/// assert_eq!(bowler.state(), FrameOutcome::Spare);
///
/// bowler.throw(9).unwrap();
/// assert_eq!(bowler.score(), Ok(28));
/// assert_eq!(bowler.recent_throws(), [Some(9), Some(3)]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrameEngine {
    config: BowlerConfig,
    state: FrameState,
    /// Accepted throws, oldest first. Persistent so cloning stays O(1).
    log: Vector<ThrowRecord>,
}

/// A bowler is one frame engine.
pub type Bowler = FrameEngine;

impl FrameEngine {
    /// Create an engine for a standard ten-pin rack.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BowlerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: BowlerConfig) -> Self {
        Self {
            config,
            state: FrameState::new(),
            log: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BowlerConfig {
        &self.config
    }

    // === Throws ===

    /// Record a throw of `pins` pins.
    ///
    /// Fails with [`InvalidThrow`] if the count is negative, above a full
    /// rack, or above the pins left standing in this frame. State is left
    /// untouched on failure.
    pub fn throw(&mut self, pins: i32) -> Result<(), InvalidThrow> {
        let pins = validate(&self.state, pins, &self.config).map_err(|err| {
            trace!(%err, "throw rejected");
            err
        })?;

        let frame = self.state.frame_number();
        let transition = self.state.apply(pins, &self.config);

        debug!(
            frame,
            pins = pins.raw(),
            outcome = %transition.outcome,
            points = transition.points,
            "throw accepted"
        );

        self.log.push_back(ThrowRecord {
            index: self.state.throw_count(),
            frame,
            pins,
            outcome: transition.outcome,
            points: transition.points,
        });
        self.state = transition.state;

        Ok(())
    }

    /// Check a throw without recording it.
    pub fn would_accept(&self, pins: i32) -> Result<Pins, InvalidThrow> {
        validate(&self.state, pins, &self.config)
    }

    // === Score & State ===

    /// Current score.
    ///
    /// A score equal to one full rack is ambiguous: it fails with
    /// [`ScoreUnknown`] and the outcome is set to [`FrameOutcome::Spare`].
    pub fn score(&mut self) -> Result<u32, ScoreUnknown> {
        match self.state.known_score(&self.config) {
            Some(score) => Ok(score),
            None => {
                let pending = self.state.raw_score();
                trace!(pending, "score withheld");
                self.state.mark_pending();
                Err(ScoreUnknown { pending })
            }
        }
    }

    /// Current score without side effects; `None` when ambiguous.
    #[must_use]
    pub fn peek_score(&self) -> Option<u32> {
        self.state.known_score(&self.config)
    }

    /// Outcome of the latest frame.
    #[must_use]
    pub fn state(&self) -> FrameOutcome {
        self.state.outcome()
    }

    /// Last two throws, newest first. Unset before enough throws happen.
    #[must_use]
    pub fn recent_throws(&self) -> [Option<u8>; HISTORY_LEN] {
        self.state.history().to_raw()
    }

    /// Frame number of the next throw (1-based).
    #[must_use]
    pub fn frame_number(&self) -> u32 {
        self.state.frame_number()
    }

    #[must_use]
    pub fn throw_count(&self) -> u32 {
        self.state.throw_count()
    }

    /// Full frame state behind the accessors above.
    #[must_use]
    pub fn frame_state(&self) -> &FrameState {
        &self.state
    }

    /// Most pins the next throw may knock down.
    #[must_use]
    pub fn pins_standing(&self) -> u8 {
        self.state.pins_standing(&self.config)
    }

    /// Every accepted throw, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<ThrowRecord> {
        &self.log
    }

    // === Snapshots ===

    /// Capture the frame state and log. O(1): the log is persistent.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state.clone(),
            log: self.log.clone(),
        }
    }

    /// Return to a captured snapshot, earlier or later than the current state.
    pub fn restore(&mut self, snapshot: EngineSnapshot) {
        self.state = snapshot.state;
        self.log = snapshot.log;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl(throws: &[i32]) -> FrameEngine {
        let mut engine = FrameEngine::new();
        for &pins in throws {
            engine.throw(pins).unwrap();
        }
        engine
    }

    #[test]
    fn test_single_throw() {
        let mut engine = bowl(&[3]);
        assert_eq!(engine.score(), Ok(3));
        assert_eq!(engine.state(), FrameOutcome::Open);
        assert_eq!(engine.recent_throws(), [Some(3), None]);
    }

    #[test]
    fn test_fresh_engine() {
        let mut engine = FrameEngine::new();
        assert_eq!(engine.score(), Ok(0));
        assert_eq!(engine.recent_throws(), [None, None]);
        assert_eq!(engine.frame_number(), 1);
        assert!(engine.log().is_empty());
    }

    #[test]
    fn test_rejected_throw_leaves_state() {
        let mut engine = bowl(&[5]);
        let before = engine.snapshot();

        assert_eq!(
            engine.throw(8),
            Err(InvalidThrow::ExceedsStanding { pins: 8, standing: 5 })
        );
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.log().len(), 1);
    }

    #[test]
    fn test_score_unknown_sets_spare() {
        let mut engine = bowl(&[4, 2, 3, 1]);
        assert_eq!(engine.state(), FrameOutcome::Open);
        assert_eq!(engine.peek_score(), None);
        // peek has no side effect
        assert_eq!(engine.state(), FrameOutcome::Open);

        assert_eq!(engine.score(), Err(ScoreUnknown { pending: 10 }));
        assert_eq!(engine.state(), FrameOutcome::Spare);
    }

    #[test]
    fn test_log_records_frames() {
        let engine = bowl(&[10, 3, 4]);
        let log: Vec<_> = engine
            .log()
            .iter()
            .map(|r| (r.frame, r.pins.raw(), r.points))
            .collect();
        assert_eq!(log, vec![(1, 10, 10), (2, 3, 3), (2, 4, 4)]);
        assert_eq!(engine.log()[0].outcome, FrameOutcome::Strike);
        assert_eq!(engine.frame_number(), 3);
        assert_eq!(engine.throw_count(), 3);
    }

    #[test]
    fn test_would_accept() {
        let engine = bowl(&[6]);
        assert_eq!(engine.pins_standing(), 4);
        assert!(engine.would_accept(4).is_ok());
        assert!(engine.would_accept(5).is_err());
        assert_eq!(engine.throw_count(), 1);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut engine = bowl(&[7, 2]);
        let snapshot = engine.snapshot();

        engine.throw(10).unwrap();
        engine.throw(10).unwrap();
        assert_eq!(engine.log().len(), 4);

        engine.restore(snapshot);
        assert_eq!(engine.score(), Ok(9));
        assert_eq!(engine.recent_throws(), [Some(2), Some(7)]);
        assert_eq!(engine.log().len(), 2);
    }

    #[test]
    fn test_restore_later_snapshot_after_rewind() {
        let mut engine = bowl(&[1, 2]);
        let early = engine.snapshot();
        engine.throw(3).unwrap();
        engine.throw(5).unwrap();
        let late = engine.snapshot();

        engine.restore(early);
        engine.throw(6).unwrap();
        engine.restore(late);

        let pins: Vec<_> = engine.log().iter().map(|r| r.pins.raw()).collect();
        assert_eq!(pins, vec![1, 2, 3, 5]);
        assert_eq!(engine.throw_count(), 4);

        let logged: u32 = engine.log().iter().map(|r| r.points).sum();
        assert_eq!(engine.peek_score(), Some(logged));
        assert_eq!(engine.recent_throws(), [Some(5), Some(3)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let engine = bowl(&[1, 2]);
        let mut branch = engine.clone();
        branch.throw(9).unwrap();

        assert_eq!(engine.throw_count(), 2);
        assert_eq!(branch.throw_count(), 3);
    }

    #[test]
    fn test_snapshot_serde() {
        let engine = bowl(&[10, 3]);
        let json = serde_json::to_string(&engine.snapshot()).unwrap();
        let restored: EngineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.log.len(), 2);
        assert_eq!(&restored.state, engine.frame_state());
    }
}
