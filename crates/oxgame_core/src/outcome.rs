//! Result of evaluating a board.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Outcome of a board, derived on every read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and at least one empty square.
    Ongoing,
    /// A player completed a line.
    Win {
        /// The player owning the line.
        player: Player,
        /// The three positions forming the line.
        line: [Position; 3],
    },
    /// Board full without a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Ongoing"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
