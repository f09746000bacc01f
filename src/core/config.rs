//! Bowler configuration.
//!
//! The engine never hardcodes the rack size - `BowlerConfig` carries it.
//! The default is a standard ten-pin rack.

use serde::{Deserialize, Serialize};

/// Pins in a standard ten-pin rack.
pub const STANDARD_RACK: u8 = 10;

/// Configuration for a single bowler's frame engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerConfig {
    /// Pins standing at the start of each frame.
    ///
    /// Also the running score that is treated as ambiguous: a score equal
    /// to one full rack cannot be told apart from an unresolved frame.
    pub rack_size: u8,
}

impl BowlerConfig {
    /// Create a configuration for a standard ten-pin rack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rack_size: STANDARD_RACK,
        }
    }

    /// Set the number of pins per rack.
    #[must_use]
    pub fn with_rack_size(mut self, pins: u8) -> Self {
        assert!(pins > 0, "Rack must hold at least 1 pin");
        self.rack_size = pins;
        self
    }

    /// The score value that is withheld as ambiguous.
    #[must_use]
    pub fn pending_sentinel(&self) -> u32 {
        u32::from(self.rack_size)
    }
}

impl Default for BowlerConfig {
    fn default() -> Self {
        Self::new()
    }
}
