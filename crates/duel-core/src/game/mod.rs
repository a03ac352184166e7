//! Game definitions and the commit-reveal engine.

mod choice;
mod engine;

pub use choice::Choice;
pub use engine::{GameInstance, GameOutcome, Phase, PlayerSlot, SlotState};
