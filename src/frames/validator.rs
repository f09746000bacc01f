//! Throw validation.
//!
//! Runs before any state changes: a rejected throw leaves the engine
//! exactly as it was.

use super::state::FrameState;
use crate::core::{BowlerConfig, InvalidThrow, Pins};

/// Check a raw pin count against the current frame.
///
/// The first throw of a frame always faces a full rack; a second throw may
/// only knock down what the first left standing.
pub fn validate(
    state: &FrameState,
    value: i32,
    config: &BowlerConfig,
) -> Result<Pins, InvalidThrow> {
    let pins = Pins::new(value, config.rack_size)?;

    let standing = state.pins_standing(config);
    if pins.raw() > standing {
        return Err(InvalidThrow::ExceedsStanding {
            pins: pins.raw(),
            standing,
        });
    }

    Ok(pins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(throws: &[i32]) -> FrameState {
        let config = BowlerConfig::default();
        throws.iter().fold(FrameState::new(), |state, &n| {
            let pins = validate(&state, n, &config).unwrap();
            state.apply(pins, &config).state
        })
    }

    #[test]
    fn test_rejects_over_rack() {
        let config = BowlerConfig::default();
        assert_eq!(
            validate(&FrameState::new(), 16, &config),
            Err(InvalidThrow::OutOfRange { pins: 16, rack: 10 })
        );
        assert!(validate(&FrameState::new(), -1, &config).is_err());
    }

    #[test]
    fn test_rejects_more_than_standing() {
        let config = BowlerConfig::default();
        assert_eq!(
            validate(&after(&[5]), 8, &config),
            Err(InvalidThrow::ExceedsStanding { pins: 8, standing: 5 })
        );
        assert!(validate(&after(&[5]), 5, &config).is_ok());
    }

    #[test]
    fn test_new_frame_faces_full_rack() {
        let config = BowlerConfig::default();
        // 5, 4 closes the frame; 9 is a legal first ball
        assert!(validate(&after(&[5, 4]), 9, &config).is_ok());
        // After a strike the next ball also faces a full rack
        assert!(validate(&after(&[10]), 10, &config).is_ok());
    }

    #[test]
    fn test_small_rack() {
        let config = BowlerConfig::new().with_rack_size(3);
        assert!(validate(&FrameState::new(), 4, &config).is_err());
        assert!(validate(&FrameState::new(), 3, &config).is_ok());
    }
}
