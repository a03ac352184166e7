//! Commit-reveal engine for a single two-party game instance.

use crate::crypto::Commitment;
use crate::game::Choice;
use crate::registry::AccountId;
use crate::GameError;
use serde::{Deserialize, Serialize};

/// Per-participant commit/reveal progress
///
/// `Revealed` records that a reveal was stored, not that it matched the
/// commitment; validity is judged at resolution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    Pending,
    Committed,
    Revealed,
}

/// Game-wide lifecycle stage
///
/// Discriminants are the wire encoding. The phase only advances forward:
/// `Initiated -> Responded -> {Won, Drawn}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Phase {
    Initiated = 0,
    Responded = 1,
    Won = 2,
    Drawn = 3,
}

impl Phase {
    /// Wire integer for this phase
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Initiated => "Initiated",
            Phase::Responded => "Responded",
            Phase::Won => "Won",
            Phase::Drawn => "Drawn",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One participant's record within a game instance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerSlot {
    identity: AccountId,
    state: SlotState,
    commitment: Option<Commitment>,
    revealed_choice: Option<Choice>,
    revealed_salt: Option<String>,
}

impl PlayerSlot {
    fn pending(identity: AccountId) -> Self {
        Self {
            identity,
            state: SlotState::Pending,
            commitment: None,
            revealed_choice: None,
            revealed_salt: None,
        }
    }

    fn committed(identity: AccountId, commitment: Commitment) -> Self {
        Self {
            identity,
            state: SlotState::Committed,
            commitment: Some(commitment),
            revealed_choice: None,
            revealed_salt: None,
        }
    }

    fn commit(&mut self, commitment: Commitment) {
        self.commitment = Some(commitment);
        self.state = SlotState::Committed;
    }

    fn reveal(&mut self, choice: Choice, salt: &str) {
        self.revealed_choice = Some(choice);
        self.revealed_salt = Some(salt.to_string());
        self.state = SlotState::Revealed;
    }

    /// The revealed choice, if the reveal reproduces the stored commitment
    fn valid_reveal(&self) -> Option<Choice> {
        match (&self.commitment, self.revealed_choice, &self.revealed_salt) {
            (Some(commitment), Some(choice), Some(salt)) if commitment.verify(choice, salt) => {
                Some(choice)
            }
            _ => None,
        }
    }

    pub fn identity(&self) -> &AccountId {
        &self.identity
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn commitment(&self) -> Option<&Commitment> {
        self.commitment.as_ref()
    }

    pub fn revealed_choice(&self) -> Option<Choice> {
        self.revealed_choice
    }
}

/// Resolved (or in-progress) outcome of a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Winner identity; `None` marks a draw
    pub winner: Option<AccountId>,
    pub phase: Phase,
    pub note: String,
}

/// A single two-party commit-reveal game
///
/// The initiator commits at construction time; the responder commits
/// afterwards; both then reveal in either order. Resolution runs exactly
/// once, when the second reveal lands.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameInstance {
    initiator: PlayerSlot,
    responder: PlayerSlot,
    phase: Phase,
    winner: Option<AccountId>,
    outcome_note: String,
}

impl GameInstance {
    /// Create a game with the initiator's commitment already in place
    pub fn new(
        initiator: AccountId,
        responder: AccountId,
        initiator_commitment: Commitment,
    ) -> Self {
        Self {
            initiator: PlayerSlot::committed(initiator, initiator_commitment),
            responder: PlayerSlot::pending(responder),
            phase: Phase::Initiated,
            winner: None,
            outcome_note: String::new(),
        }
    }

    pub fn initiator(&self) -> &PlayerSlot {
        &self.initiator
    }

    pub fn responder(&self) -> &PlayerSlot {
        &self.responder
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Store the responder's commitment and open the reveal stage
    ///
    /// A repeat call before either reveal simply overwrites the previous
    /// commitment; once the initiator has revealed, the initiator slot is no
    /// longer `Committed` and the call fails.
    pub fn submit_response_commitment(&mut self, commitment: Commitment) -> Result<(), GameError> {
        if self.initiator.state != SlotState::Committed {
            return Err(GameError::InvalidPhase);
        }
        self.responder.commit(commitment);
        self.phase = Phase::Responded;
        Ok(())
    }

    /// Store the initiator's reveal; resolves the game if the responder
    /// has already revealed
    pub fn submit_initiator_reveal(&mut self, choice: Choice, salt: &str) -> Result<(), GameError> {
        if self.initiator.state != SlotState::Committed
            || self.responder.state == SlotState::Pending
        {
            return Err(GameError::InvalidPhase);
        }
        self.initiator.reveal(choice, salt);
        if self.responder.state == SlotState::Revealed {
            self.resolve();
        }
        Ok(())
    }

    /// Store the responder's reveal; resolves the game if the initiator
    /// has already revealed
    pub fn submit_responder_reveal(&mut self, choice: Choice, salt: &str) -> Result<(), GameError> {
        if self.responder.state != SlotState::Committed
            || self.initiator.state == SlotState::Pending
        {
            return Err(GameError::InvalidPhase);
        }
        self.responder.reveal(choice, salt);
        if self.initiator.state == SlotState::Revealed {
            self.resolve();
        }
        Ok(())
    }

    /// Judge both reveals against their commitments and settle the outcome
    ///
    /// Invalid attempts lose to valid ones; two invalid attempts draw. Only
    /// when both attempts check out does the beats-table apply.
    fn resolve(&mut self) {
        match (
            self.initiator.valid_reveal(),
            self.responder.valid_reveal(),
        ) {
            (None, None) => {
                self.phase = Phase::Drawn;
                self.winner = None;
                self.outcome_note = "both attempts invalid".to_string();
            }
            (Some(_), None) => {
                self.phase = Phase::Won;
                self.winner = Some(self.initiator.identity.clone());
                self.outcome_note = "initiator wins, responder attempt invalid".to_string();
            }
            (None, Some(_)) => {
                self.phase = Phase::Won;
                self.winner = Some(self.responder.identity.clone());
                self.outcome_note = "responder wins, initiator attempt invalid".to_string();
            }
            (Some(a), Some(b)) if a == b => {
                self.phase = Phase::Drawn;
                self.winner = None;
                self.outcome_note = "choices equal".to_string();
            }
            (Some(a), Some(b)) => {
                let (winner, note) = if a.beats(&b) {
                    (self.initiator.identity.clone(), format!("{} beats {}", a, b))
                } else {
                    (self.responder.identity.clone(), format!("{} beats {}", b, a))
                };
                self.phase = Phase::Won;
                self.winner = Some(winner);
                self.outcome_note = note;
            }
        }
    }

    /// Read the settled outcome
    pub fn result(&self) -> Result<GameOutcome, GameError> {
        if self.initiator.state != SlotState::Revealed
            || self.responder.state != SlotState::Revealed
        {
            return Err(GameError::ResultNotReady);
        }
        Ok(GameOutcome {
            winner: self.winner.clone(),
            phase: self.phase,
            note: self.outcome_note.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from("alice")
    }

    fn bob() -> AccountId {
        AccountId::from("bob")
    }

    /// Game with both commitments in place, awaiting reveals
    fn responded_game(
        initiator_choice: Choice,
        initiator_salt: &str,
        responder_choice: Choice,
        responder_salt: &str,
    ) -> GameInstance {
        let mut game = GameInstance::new(
            alice(),
            bob(),
            Commitment::for_reveal(initiator_choice, initiator_salt),
        );
        game.submit_response_commitment(Commitment::for_reveal(responder_choice, responder_salt))
            .unwrap();
        game
    }

    #[test]
    fn test_create_initial_state() {
        let game = GameInstance::new(alice(), bob(), Commitment::for_reveal(Choice::Rock, "abc"));

        assert_eq!(game.phase(), Phase::Initiated);
        assert_eq!(game.initiator().state(), SlotState::Committed);
        assert_eq!(game.responder().state(), SlotState::Pending);
        assert_eq!(game.initiator().identity(), &alice());
        assert_eq!(game.responder().identity(), &bob());
    }

    #[test]
    fn test_response_commitment_advances_phase() {
        let mut game =
            GameInstance::new(alice(), bob(), Commitment::for_reveal(Choice::Rock, "abc"));
        game.submit_response_commitment(Commitment::for_reveal(Choice::Paper, "xyz"))
            .unwrap();

        assert_eq!(game.phase(), Phase::Responded);
        assert_eq!(game.responder().state(), SlotState::Committed);
    }

    #[test]
    fn test_reveal_before_response_fails() {
        let mut game =
            GameInstance::new(alice(), bob(), Commitment::for_reveal(Choice::Rock, "abc"));

        assert_eq!(
            game.submit_initiator_reveal(Choice::Rock, "abc"),
            Err(GameError::InvalidPhase)
        );
        assert_eq!(game.phase(), Phase::Initiated);
    }

    #[test]
    fn test_double_reveal_fails() {
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();

        assert_eq!(
            game.submit_initiator_reveal(Choice::Rock, "abc"),
            Err(GameError::InvalidPhase)
        );
    }

    #[test]
    fn test_truthful_reveals_initiator_wins() {
        // Scenario: Rock vs Scissors, both reveal honestly.
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();
        game.submit_responder_reveal(Choice::Scissors, "xyz").unwrap();

        let outcome = game.result().unwrap();
        assert_eq!(outcome.phase, Phase::Won);
        assert_eq!(outcome.winner, Some(alice()));
        assert!(outcome.note.contains("Rock beats Scissors"));
    }

    #[test]
    fn test_cheating_responder_loses() {
        // Responder committed to Scissors but reveals Paper.
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "zzz");
        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();
        game.submit_responder_reveal(Choice::Paper, "zzz").unwrap();

        let outcome = game.result().unwrap();
        assert_eq!(outcome.phase, Phase::Won);
        assert_eq!(outcome.winner, Some(alice()));
        assert!(outcome.note.contains("responder attempt invalid"));
    }

    #[test]
    fn test_cheating_initiator_loses() {
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_initiator_reveal(Choice::Paper, "abc").unwrap();
        game.submit_responder_reveal(Choice::Scissors, "xyz").unwrap();

        let outcome = game.result().unwrap();
        assert_eq!(outcome.phase, Phase::Won);
        assert_eq!(outcome.winner, Some(bob()));
        assert!(outcome.note.contains("initiator attempt invalid"));
    }

    #[test]
    fn test_both_cheating_draws() {
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_initiator_reveal(Choice::Rock, "wrong").unwrap();
        game.submit_responder_reveal(Choice::Paper, "xyz").unwrap();

        let outcome = game.result().unwrap();
        assert_eq!(outcome.phase, Phase::Drawn);
        assert_eq!(outcome.winner, None);
        assert!(outcome.note.contains("both attempts invalid"));
    }

    #[test]
    fn test_equal_choices_draw() {
        let mut game = responded_game(Choice::Paper, "abc", Choice::Paper, "xyz");
        game.submit_initiator_reveal(Choice::Paper, "abc").unwrap();
        game.submit_responder_reveal(Choice::Paper, "xyz").unwrap();

        let outcome = game.result().unwrap();
        assert_eq!(outcome.phase, Phase::Drawn);
        assert_eq!(outcome.winner, None);
        assert!(outcome.note.contains("choices equal"));
    }

    #[test]
    fn test_reveal_order_does_not_matter() {
        let mut first = responded_game(Choice::Scissors, "s1", Choice::Paper, "s2");
        first.submit_initiator_reveal(Choice::Scissors, "s1").unwrap();
        first.submit_responder_reveal(Choice::Paper, "s2").unwrap();

        let mut second = responded_game(Choice::Scissors, "s1", Choice::Paper, "s2");
        second.submit_responder_reveal(Choice::Paper, "s2").unwrap();
        second.submit_initiator_reveal(Choice::Scissors, "s1").unwrap();

        assert_eq!(first.result().unwrap(), second.result().unwrap());
    }

    #[test]
    fn test_role_swap_symmetry() {
        // For every unequal pair: swapping roles flips the winner but keeps
        // the same beats-relationship note.
        let choices = [Choice::Rock, Choice::Paper, Choice::Scissors];
        for a in choices {
            for b in choices {
                if a == b {
                    continue;
                }
                let mut forward = responded_game(a, "sa", b, "sb");
                forward.submit_initiator_reveal(a, "sa").unwrap();
                forward.submit_responder_reveal(b, "sb").unwrap();

                let mut swapped = responded_game(b, "sb", a, "sa");
                swapped.submit_initiator_reveal(b, "sb").unwrap();
                swapped.submit_responder_reveal(a, "sa").unwrap();

                let fwd = forward.result().unwrap();
                let swp = swapped.result().unwrap();

                assert_eq!(fwd.phase, Phase::Won);
                assert_eq!(swp.phase, Phase::Won);
                assert_eq!(fwd.note, swp.note);
                if fwd.winner == Some(alice()) {
                    assert_eq!(swp.winner, Some(bob()));
                } else {
                    assert_eq!(swp.winner, Some(alice()));
                }
            }
        }
    }

    #[test]
    fn test_result_not_ready_until_both_reveals() {
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        assert_eq!(game.result(), Err(GameError::ResultNotReady));

        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();
        assert_eq!(game.result(), Err(GameError::ResultNotReady));

        game.submit_responder_reveal(Choice::Scissors, "xyz").unwrap();
        let first = game.result().unwrap();
        let second = game.result().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_recommit_overwrites_before_reveals() {
        // Permissive re-commit: the responder may replace their commitment
        // until the initiator has revealed.
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_response_commitment(Commitment::for_reveal(Choice::Paper, "new"))
            .unwrap();
        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();
        game.submit_responder_reveal(Choice::Paper, "new").unwrap();

        let outcome = game.result().unwrap();
        assert_eq!(outcome.phase, Phase::Won);
        assert_eq!(outcome.winner, Some(bob()));
        assert!(outcome.note.contains("Paper beats Rock"));
    }

    #[test]
    fn test_recommit_after_initiator_reveal_fails() {
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();

        assert_eq!(
            game.submit_response_commitment(Commitment::for_reveal(Choice::Paper, "new")),
            Err(GameError::InvalidPhase)
        );
    }

    #[test]
    fn test_phase_terminal_after_resolution() {
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();
        game.submit_responder_reveal(Choice::Scissors, "xyz").unwrap();
        assert_eq!(game.phase(), Phase::Won);

        // No operation can re-enter the state machine.
        assert_eq!(
            game.submit_response_commitment(Commitment::for_reveal(Choice::Rock, "x")),
            Err(GameError::InvalidPhase)
        );
        assert_eq!(
            game.submit_initiator_reveal(Choice::Rock, "abc"),
            Err(GameError::InvalidPhase)
        );
        assert_eq!(
            game.submit_responder_reveal(Choice::Scissors, "xyz"),
            Err(GameError::InvalidPhase)
        );
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn test_instance_serde_round_trip() {
        // Persisted games must restore bit-exact between operations.
        let mut game = responded_game(Choice::Rock, "abc", Choice::Scissors, "xyz");
        game.submit_initiator_reveal(Choice::Rock, "abc").unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let mut restored: GameInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&restored).unwrap());

        // The restored game continues exactly where the original left off.
        restored.submit_responder_reveal(Choice::Scissors, "xyz").unwrap();
        let outcome = restored.result().unwrap();
        assert_eq!(outcome.winner, Some(alice()));
        assert!(outcome.note.contains("Rock beats Scissors"));
    }

    #[test]
    fn test_phase_codes() {
        assert_eq!(Phase::Initiated.code(), 0);
        assert_eq!(Phase::Responded.code(), 1);
        assert_eq!(Phase::Won.code(), 2);
        assert_eq!(Phase::Drawn.code(), 3);
    }
}
