//! Read model handed to the presentation layer.

use super::{Board, GameState, Outcome, Player, Position};
use derive_getters::Getters;
use serde::Serialize;

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    step: usize,
    /// 1-indexed (column, row) of the move, `None` for the reset entry.
    coordinates: Option<(usize, usize)>,
    /// Text shown in the move list.
    label: String,
    /// Whether this is the step currently displayed.
    current: bool,
}

impl MoveEntry {
    fn new(step: usize, coordinates: Option<(usize, usize)>, current: bool) -> Self {
        let label = match coordinates {
            Some((column, row)) => format!("move {} at ({},{})", step, column, row),
            None => "board reset".to_string(),
        };
        Self {
            step,
            coordinates,
            label,
            current,
        }
    }
}

/// Status line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// The game goes on; this player moves next.
    #[display("Next player: {}", _0)]
    ToMove(Player),
    /// This player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

/// Snapshot of everything a renderer needs.
///
/// Built by [`GameState::read`]; owns its data so it can outlive the
/// state it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Outcome of that board.
    outcome: Outcome,
    /// Current step.
    current_step: usize,
    /// True when X moves next.
    x_is_next: bool,
    /// Move list shown newest first.
    sort_descending: bool,
    /// Help panel replaces the board.
    help_visible: bool,
    /// One entry per snapshot, oldest first.
    moves: Vec<MoveEntry>,
}

impl GameView {
    pub(crate) fn from_state(game: &GameState) -> Self {
        let moves = game
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                MoveEntry::new(step, snapshot.coordinates(), step == game.current_step())
            })
            .collect();

        Self {
            board: game.board().clone(),
            outcome: game.outcome(),
            current_step: game.current_step(),
            x_is_next: game.x_is_next(),
            sort_descending: game.sort_descending(),
            help_visible: game.help_visible(),
            moves,
        }
    }

    /// Move list in display order.
    pub fn ordered_moves(&self) -> Vec<&MoveEntry> {
        if self.sort_descending {
            self.moves.iter().rev().collect()
        } else {
            self.moves.iter().collect()
        }
    }

    /// Player to move at the current step.
    pub fn to_move(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Status line input derived from the outcome.
    pub fn status(&self) -> Status {
        match self.outcome {
            Outcome::Ongoing => Status::ToMove(self.to_move()),
            Outcome::Win { player, .. } => Status::Won(player),
            Outcome::Draw => Status::Draw,
        }
    }

    /// Positions to highlight: the winning line, if any.
    pub fn highlighted(&self) -> &[Position] {
        match &self.outcome {
            Outcome::Win { line, .. } => line,
            _ => &[],
        }
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted().contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_history() {
        let mut game = GameState::new();
        game.apply_move(Position::TopRight);
        game.apply_move(Position::BottomLeft);

        let view = game.read();
        let labels: Vec<&str> = view.moves().iter().map(|m| m.label().as_str()).collect();
        assert_eq!(labels, ["board reset", "move 1 at (3,1)", "move 2 at (1,3)"]);
    }

    #[test]
    fn test_current_entry_is_marked() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.jump_to(1).unwrap();

        let view = game.read();
        let current: Vec<usize> = view
            .moves()
            .iter()
            .filter(|m| *m.current())
            .map(|m| *m.step())
            .collect();
        assert_eq!(current, [1]);
    }

    #[test]
    fn test_sort_reverses_display_order_only() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.toggle_sort();

        let view = game.read();
        let steps: Vec<usize> = view.ordered_moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, [2, 1, 0]);
        let stored: Vec<usize> = view.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(stored, [0, 1, 2]);
    }

    #[test]
    fn test_status_text() {
        let mut game = GameState::new();
        assert_eq!(game.read().status().to_string(), "Next player: X");

        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.apply_move(pos);
        }
        let view = game.read();
        assert_eq!(view.status(), Status::Won(Player::X));
        assert_eq!(view.status().to_string(), "Winner: X");
        assert!(view.is_highlighted(Position::TopCenter));
        assert!(!view.is_highlighted(Position::Center));
    }

    #[test]
    fn test_view_serializes_for_renderers() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);

        let json = serde_json::to_value(game.read()).unwrap();
        assert_eq!(json["current_step"], 1);
        assert_eq!(json["x_is_next"], false);
        assert_eq!(json["outcome"], "Ongoing");
        assert_eq!(json["moves"][1]["label"], "move 1 at (2,2)");
    }
}
