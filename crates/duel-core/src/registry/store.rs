//! The associative store of game instances and its authorization checks.

use crate::crypto::Commitment;
use crate::game::{Choice, GameInstance, GameOutcome};
use crate::registry::AccountId;
use crate::GameError;
use std::collections::HashMap;

/// Registry of live games, one per ordered (initiator, responder) pair
///
/// Authorization derives strictly from the lookup key built from the call's
/// own arguments and the caller identity. The same pair of identities holds
/// at most one live game per role assignment; initiating again for the exact
/// pair replaces the previous instance. Entries are never deleted.
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: HashMap<(AccountId, AccountId), GameInstance>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Structural checks shared by every operation: the counterparty must be
    /// a real identity and must differ from the caller.
    fn check_pair(caller: &AccountId, counterparty: &AccountId) -> Result<(), GameError> {
        if counterparty.is_zero() {
            return Err(GameError::ZeroIdentity);
        }
        if counterparty == caller {
            return Err(GameError::SelfPlayForbidden);
        }
        Ok(())
    }

    fn key(initiator: &AccountId, responder: &AccountId) -> (AccountId, AccountId) {
        (initiator.clone(), responder.clone())
    }

    /// Look up the game the caller initiated against `responder`
    ///
    /// A missing entry means the caller holds no initiator role for this
    /// pair, hence `WrongCaller`.
    fn initiated_game_mut(
        &mut self,
        caller: &AccountId,
        responder: &AccountId,
    ) -> Result<&mut GameInstance, GameError> {
        self.games
            .get_mut(&Self::key(caller, responder))
            .ok_or(GameError::WrongCaller)
    }

    /// Look up the game where the caller responds to `initiator`
    fn responding_game_mut(
        &mut self,
        caller: &AccountId,
        initiator: &AccountId,
    ) -> Result<&mut GameInstance, GameError> {
        self.games
            .get_mut(&Self::key(initiator, caller))
            .ok_or(GameError::WrongCaller)
    }

    /// Start a game: the caller becomes the initiator and commits immediately
    pub fn initiate_game(
        &mut self,
        caller: &AccountId,
        responder: &AccountId,
        commitment: Commitment,
    ) -> Result<(), GameError> {
        Self::check_pair(caller, responder)?;
        let game = GameInstance::new(caller.clone(), responder.clone(), commitment);
        self.games.insert(Self::key(caller, responder), game);
        Ok(())
    }

    /// Accept a game: the caller becomes the responder and commits
    pub fn respond(
        &mut self,
        caller: &AccountId,
        initiator: &AccountId,
        commitment: Commitment,
    ) -> Result<(), GameError> {
        Self::check_pair(caller, initiator)?;
        let game = self
            .games
            .get_mut(&Self::key(initiator, caller))
            .ok_or(GameError::GameNotInitiated)?;
        game.submit_response_commitment(commitment)
    }

    /// Reveal the initiator's choice for the game against `responder`
    pub fn add_initiator_choice(
        &mut self,
        caller: &AccountId,
        responder: &AccountId,
        choice_code: u8,
        salt: &str,
    ) -> Result<(), GameError> {
        Self::check_pair(caller, responder)?;
        let choice = Choice::from_code(choice_code).ok_or(GameError::InvalidChoice(choice_code))?;
        self.initiated_game_mut(caller, responder)?
            .submit_initiator_reveal(choice, salt)
    }

    /// Reveal the responder's choice for the game against `initiator`
    pub fn add_responder_choice(
        &mut self,
        caller: &AccountId,
        initiator: &AccountId,
        choice_code: u8,
        salt: &str,
    ) -> Result<(), GameError> {
        Self::check_pair(caller, initiator)?;
        let choice = Choice::from_code(choice_code).ok_or(GameError::InvalidChoice(choice_code))?;
        self.responding_game_mut(caller, initiator)?
            .submit_responder_reveal(choice, salt)
    }

    /// Read the outcome of the game the caller initiated
    pub fn get_initiator_result(
        &self,
        caller: &AccountId,
        responder: &AccountId,
    ) -> Result<GameOutcome, GameError> {
        Self::check_pair(caller, responder)?;
        self.games
            .get(&Self::key(caller, responder))
            .ok_or(GameError::WrongCaller)?
            .result()
    }

    /// Read the outcome of the game the caller responded to
    pub fn get_responder_result(
        &self,
        caller: &AccountId,
        initiator: &AccountId,
    ) -> Result<GameOutcome, GameError> {
        Self::check_pair(caller, initiator)?;
        self.games
            .get(&Self::key(initiator, caller))
            .ok_or(GameError::WrongCaller)?
            .result()
    }

    /// Inspect a game by its ordered pair
    pub fn game(&self, initiator: &AccountId, responder: &AccountId) -> Option<&GameInstance> {
        self.games.get(&Self::key(initiator, responder))
    }
}
