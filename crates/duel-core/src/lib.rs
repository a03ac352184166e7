//! Duel Core Library
//!
//! This crate provides the commit-reveal game engine, the cryptographic
//! commitment scheme, and the registry that isolates concurrent duels by
//! participant pair.

pub mod crypto;
mod error;
pub mod game;
pub mod registry;

pub use crypto::{random_salt, Commitment};
pub use error::GameError;
pub use game::{Choice, GameInstance, GameOutcome, Phase, SlotState};
pub use registry::{AccountId, GameRegistry};
