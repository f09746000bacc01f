//! Frame bookkeeping for a single bowler.
//!
//! - `history`: two-throw window, newest first
//! - `validator`: rejects impossible throws before anything changes
//! - `state`: frame flag, outcome, score and the pure per-throw transition
//! - `engine`: `FrameEngine`, the public surface tying them together

mod engine;
mod history;
mod state;
mod validator;

pub use engine::{Bowler, EngineSnapshot, FrameEngine, ThrowRecord};
pub use history::{ThrowHistory, HISTORY_LEN};
pub use state::{FrameOutcome, FrameState, Transition};
pub use validator::validate;
