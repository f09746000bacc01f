//! Two-throw history window.
//!
//! Holds the most recent throws, newest first. The window always has two
//! slots; slots are `None` until enough throws have been recorded.

use serde::{Deserialize, Serialize};

use crate::core::Pins;

/// Number of throws retained by [`ThrowHistory`].
pub const HISTORY_LEN: usize = 2;

/// Fixed-size window over the latest throws, newest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThrowHistory {
    slots: [Option<Pins>; HISTORY_LEN],
}

impl ThrowHistory {
    /// Create an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a throw to the front, evicting the oldest.
    pub fn record(&mut self, pins: Pins) {
        self.slots.rotate_right(1);
        self.slots[0] = Some(pins);
    }

    /// The most recent throw.
    #[must_use]
    pub fn latest(&self) -> Option<Pins> {
        self.slots[0]
    }

    /// Raw pin counts, newest first. Unset slots are `None`.
    #[must_use]
    pub fn to_raw(&self) -> [Option<u8>; HISTORY_LEN] {
        self.slots.map(|slot| slot.map(Pins::raw))
    }
}
