//! Application state: the registry behind one lock.

use duel_core::{AccountId, Commitment, GameError, GameOutcome, GameRegistry, Phase};
use std::sync::{Arc, Mutex};

/// Shared application state
///
/// One mutex over the whole registry linearizes every operation, so the
/// second reveal of a game always observes that it is second and resolution
/// runs exactly once.
#[derive(Clone, Default)]
pub struct AppState {
    registry: Arc<Mutex<GameRegistry>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(GameRegistry::new())),
        }
    }

    pub fn initiate(
        &self,
        caller: &AccountId,
        responder: &AccountId,
        commitment: Commitment,
    ) -> Result<(), GameError> {
        self.registry
            .lock()
            .unwrap()
            .initiate_game(caller, responder, commitment)
    }

    pub fn respond(
        &self,
        caller: &AccountId,
        initiator: &AccountId,
        commitment: Commitment,
    ) -> Result<(), GameError> {
        self.registry
            .lock()
            .unwrap()
            .respond(caller, initiator, commitment)
    }

    /// Reveal as initiator; returns the game phase after the reveal
    pub fn reveal_initiator(
        &self,
        caller: &AccountId,
        responder: &AccountId,
        choice_code: u8,
        salt: &str,
    ) -> Result<Phase, GameError> {
        let mut registry = self.registry.lock().unwrap();
        registry.add_initiator_choice(caller, responder, choice_code, salt)?;
        Ok(registry
            .game(caller, responder)
            .map(|g| g.phase())
            .unwrap_or(Phase::Responded))
    }

    /// Reveal as responder; returns the game phase after the reveal
    pub fn reveal_responder(
        &self,
        caller: &AccountId,
        initiator: &AccountId,
        choice_code: u8,
        salt: &str,
    ) -> Result<Phase, GameError> {
        let mut registry = self.registry.lock().unwrap();
        registry.add_responder_choice(caller, initiator, choice_code, salt)?;
        Ok(registry
            .game(initiator, caller)
            .map(|g| g.phase())
            .unwrap_or(Phase::Responded))
    }

    pub fn initiator_result(
        &self,
        caller: &AccountId,
        responder: &AccountId,
    ) -> Result<GameOutcome, GameError> {
        self.registry
            .lock()
            .unwrap()
            .get_initiator_result(caller, responder)
    }

    pub fn responder_result(
        &self,
        caller: &AccountId,
        initiator: &AccountId,
    ) -> Result<GameOutcome, GameError> {
        self.registry
            .lock()
            .unwrap()
            .get_responder_result(caller, initiator)
    }
}
