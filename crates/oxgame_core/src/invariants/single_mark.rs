//! Single mark invariant: each step adds exactly one mark for the right player.

use super::Invariant;
use crate::{GameState, Player, Position, Snapshot, Square};

/// Invariant: every snapshot after the root differs from its predecessor
/// in exactly one square.
///
/// That square was empty before, now holds the mark of the player whose
/// turn it was (X on odd steps), and is the position recorded as the move.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameState> for SingleMarkPerStepInvariant {
    fn holds(game: &GameState) -> bool {
        let snapshots: Vec<&Snapshot> = game.history().iter().collect();
        snapshots
            .windows(2)
            .enumerate()
            .all(|(index, pair)| step_is_single_mark(pair[0], pair[1], index + 1))
    }

    fn description() -> &'static str {
        "Each step places exactly one mark for the player to move"
    }
}

fn step_is_single_mark(before: &Snapshot, after: &Snapshot, step: usize) -> bool {
    let changed: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
        .collect();

    let expected = Square::Occupied(Player::to_move_at(step - 1));
    match changed.as_slice() {
        [pos] => {
            before.board().is_empty(*pos)
                && after.board().get(*pos) == expected
                && after.placed() == Some(*pos)
        }
        _ => false,
    }
}
