//! Pin counts for a single throw.
//!
//! ## Pins
//!
//! Type-safe pin count. A `Pins` value has already been checked against the
//! rack it was thrown at, so the frame engine never sees an impossible count.

use serde::{Deserialize, Serialize};

use super::error::InvalidThrow;

/// Number of pins knocked down by one accepted throw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pins(u8);

impl Pins {
    /// No pins down (a gutter ball).
    pub const GUTTER: Pins = Pins(0);

    /// Check a raw pin count against a rack of `rack` pins.
    ///
    /// ```
    /// use bowling_frames::core::Pins;
    ///
    /// assert_eq!(Pins::new(7, 10).unwrap().raw(), 7);
    /// assert!(Pins::new(11, 10).is_err());
    /// assert!(Pins::new(-1, 10).is_err());
    /// ```
    pub fn new(value: i32, rack: u8) -> Result<Self, InvalidThrow> {
        match u8::try_from(value) {
            Ok(pins) if pins <= rack => Ok(Self(pins)),
            _ => Err(InvalidThrow::OutOfRange { pins: value, rack }),
        }
    }

    /// Get the raw pin count.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Did this throw clear a full rack?
    #[must_use]
    pub const fn is_full(self, rack: u8) -> bool {
        self.0 == rack
    }

    /// Points this throw is worth before any bonus.
    #[must_use]
    pub const fn points(self) -> u32 {
        self.0 as u32
    }
}

impl std::fmt::Display for Pins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pins", self.0)
    }
}
