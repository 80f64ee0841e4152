//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here looks at
//! history or turn order, so any nine squares are a valid input, including
//! boards no real game could reach.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// A completed line wins over a full board, so a board that is both full
/// and contains a line is a win, never a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Win { player, line };
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
