//! Rock-Paper-Scissors choice and beats-table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's choice
///
/// The external integer encoding reserves 0 for "not yet revealed"; an
/// unrevealed slot is `Option<Choice>::None`, so only the three playable
/// values exist here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Canonical name used in the commitment preimage
    pub fn name(&self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }

    /// Decode the wire integer (1=Rock, 2=Paper, 3=Scissors)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Choice::Rock),
            2 => Some(Choice::Paper),
            3 => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// Wire integer for this choice
    pub fn code(&self) -> u8 {
        match self {
            Choice::Rock => 1,
            Choice::Paper => 2,
            Choice::Scissors => 3,
        }
    }

    /// Check if this choice beats the other
    pub fn beats(&self, other: &Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
