//! Tests for board evaluation.

use oxgame_core::{Board, Outcome, Player, Position, Square, evaluate, rules::LINES};

fn board_from(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, mark) in squares.iter_mut().zip(marks.chars()) {
        *square = match mark {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_boards_with_space_and_no_line_are_ongoing() {
    for marks in [".........", "X........", "XO.......", "XOX.O....", "XOXOXO..O", "OXOXOXXO."] {
        assert_eq!(evaluate(&board_from(marks)), Outcome::Ongoing, "{marks}");
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    for marks in ["XOXXOOOXX", "XXOOOXXXO", "OXOXXOXOX"] {
        assert_eq!(evaluate(&board_from(marks)), Outcome::Draw, "{marks}");
    }
}

#[test]
fn test_each_line_wins_for_its_owner() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                player: Player::X,
                line
            }
        );
    }
}

#[test]
fn test_lines_are_checked_rows_then_columns_then_diagonals() {
    // Column 2 and the anti-diagonal: the column comes first.
    let outcome = evaluate(&board_from("..O.OOO.O"));
    assert_eq!(
        outcome.line(),
        Some([Position::TopRight, Position::MiddleRight, Position::BottomRight])
    );

    // Bottom row and the main diagonal share the corner: the row comes first.
    let outcome = evaluate(&board_from("X...X.XXX"));
    assert_eq!(
        outcome.line(),
        Some([Position::BottomLeft, Position::BottomCenter, Position::BottomRight])
    );
}

#[test]
fn test_impossible_boards_are_accepted() {
    assert_eq!(evaluate(&board_from("XXXXXXXXX")).winner(), Some(Player::X));
    assert_eq!(evaluate(&board_from("OO.......")), Outcome::Ongoing);
}

/// Row, column, diagonal triples by raw index, kept apart from `LINES`.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn scan(squares: &[Square; 9]) -> Outcome {
    for triple in TRIPLES {
        let [a, b, c] = triple.map(|i| squares[i]);
        if let Square::Occupied(player) = a
            && a == b
            && b == c
        {
            let line = triple.map(|i| Position::from_index(i).expect("index in 0..9"));
            return Outcome::Win { player, line };
        }
    }
    if squares.iter().all(|s| *s != Square::Empty) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[test]
fn test_every_board_matches_direct_scan() {
    let mut checked = 0;
    for code in 0..3usize.pow(9) {
        let mut squares = [Square::Empty; 9];
        let mut rest = code;
        for square in squares.iter_mut() {
            *square = match rest % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            rest /= 3;
        }
        let board = Board::from_squares(squares);
        assert_eq!(evaluate(&board), scan(&squares), "board {code}: {squares:?}");
        checked += 1;
    }
    assert_eq!(checked, 19_683);
}
