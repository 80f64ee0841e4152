//! Error types for game commands.

use derive_more::{Display, Error};

/// A jump named a step that is not in the history.
///
/// The game state is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} is out of range (history has {} snapshots)", step, len)]
pub struct StepOutOfRange {
    /// The requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}

/// Why a move was ignored.
///
/// Ignored moves are a normal part of play (clicking a filled square,
/// clicking after the game ended) and never change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(crate::Position),

    /// The current board is already won or drawn.
    #[display("Game is already decided: {}", _0)]
    GameDecided(crate::Outcome),
}
