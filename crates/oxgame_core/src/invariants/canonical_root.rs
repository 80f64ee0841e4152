//! Canonical root invariant: history starts at the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: snapshot 0 is the empty board and carries no move.
pub struct CanonicalRootInvariant;

impl Invariant<GameState> for CanonicalRootInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .get(0)
            .is_some_and(|root| root.placed().is_none() && *root.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(CanonicalRootInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut game = GameState::new();
        game.history.snapshots[0]
            .board
            .set(Position::Center, Square::Occupied(Player::X));
        assert!(!CanonicalRootInvariant::holds(&game));
    }
}
