//! Request and response types for the HTTP API.

use duel_core::{AccountId, Commitment, GameOutcome};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct InitiateRequest {
    pub responder: AccountId,
    /// 64-char hex SHA-256 digest
    pub commitment: Commitment,
}

#[derive(Deserialize)]
pub struct RespondRequest {
    pub initiator: AccountId,
    pub commitment: Commitment,
}

#[derive(Deserialize)]
pub struct InitiatorRevealRequest {
    pub responder: AccountId,
    /// 1=Rock, 2=Paper, 3=Scissors
    pub choice: u8,
    pub salt: String,
}

#[derive(Deserialize)]
pub struct ResponderRevealRequest {
    pub initiator: AccountId,
    pub choice: u8,
    pub salt: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ResultResponse {
    pub winner: Option<AccountId>,
    pub phase: String,
    pub phase_code: u8,
    pub note: String,
}

impl From<GameOutcome> for ResultResponse {
    fn from(outcome: GameOutcome) -> Self {
        Self {
            winner: outcome.winner,
            phase: outcome.phase.as_str().to_string(),
            phase_code: outcome.phase.code(),
            note: outcome.note,
        }
    }
}
