//! Error type shared by the game engine and the registry.

use thiserror::Error;

/// Errors from duel operations
///
/// Every failure is a caller-input or ordering error, fatal to the single
/// call that caused it. No operation mutates state before its checks pass.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("counterparty identity is empty")]
    ZeroIdentity,

    #[error("playing against yourself is forbidden")]
    SelfPlayForbidden,

    #[error("caller does not hold this role for the given pair")]
    WrongCaller,

    #[error("no game has been initiated for this pair")]
    GameNotInitiated,

    #[error("operation attempted out of required order")]
    InvalidPhase,

    #[error("invalid choice code: {0} (expected 1=Rock, 2=Paper, 3=Scissors)")]
    InvalidChoice(u8),

    #[error("result not ready: both reveals must be submitted first")]
    ResultNotReady,
}
