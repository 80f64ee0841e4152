//! Step bounds invariant: the current step names a real snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step lies inside the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_rejected_jump() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        assert!(game.jump_to(5).is_err());
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_step_violates() {
        let mut game = GameState::new();
        game.current_step = 1;
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
