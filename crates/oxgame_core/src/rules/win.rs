//! Line detection.

use crate::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed line.
///
/// Returns the owning player and the line, or `None` when no line is
/// complete.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let first = board.get(a);
        let player = first.player()?;
        (board.get(b) == first && board.get(c) == first).then_some((player, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn place(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            place(&mut board, Player::O, &line);
            assert_eq!(winning_line(&board), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, Player::X, &[Position::TopLeft, Position::TopCenter]);
        place(&mut board, Player::O, &[Position::TopRight]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        place(&mut board, Player::X, &[Position::TopLeft, Position::Center]);
        assert_eq!(winning_line(&board), None);
    }
}
