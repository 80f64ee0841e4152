//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use oxgame_core::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 1 / the top of the move list.
    Up,
    /// Towards row 3 / the bottom of the move list.
    Down,
    /// Towards column 1.
    Left,
    /// Towards column 3.
    Right,
}

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the move list selection.
    Navigate(Direction),
    /// Play at the cursor, or jump to the selected move list entry.
    Activate,
    /// Play directly at a position.
    Play(Position),
    /// Switch focus between the board and the move list.
    SwitchFocus,
    /// Flip the move list order.
    ToggleSort,
    /// Show or hide the help panel.
    ToggleHelp,
    /// Start over.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action.
///
/// Digits follow the board display: `1` is the top-left square, `9` the
/// bottom-right one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up => Action::Navigate(Direction::Up),
        KeyCode::Down => Action::Navigate(Direction::Down),
        KeyCode::Left => Action::Navigate(Direction::Left),
        KeyCode::Right => Action::Navigate(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchFocus,
        KeyCode::Char('s') => Action::ToggleSort,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            let pos = Position::from_index(digit.checked_sub(1)?)?;
            Action::Play(pos)
        }
        _ => return None,
    };
    Some(action)
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let (column, row) = match direction {
        Direction::Up => (column, row.saturating_sub(1).max(1)),
        Direction::Down => (column, (row + 1).min(3)),
        Direction::Left => (column.saturating_sub(1).max(1), row),
        Direction::Right => ((column + 1).min(3), row),
    };
    Position::from_coordinates(column, row).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_squares() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Play(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('5')), Some(Action::Play(Position::Center)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Play(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(action_for(KeyCode::Char('s')), Some(Action::ToggleSort));
        assert_eq!(action_for(KeyCode::Char('?')), Some(Action::ToggleHelp));
        assert_eq!(action_for(KeyCode::Tab), Some(Action::SwitchFocus));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Char('z')), None);
        assert_eq!(action_for(KeyCode::F(1)), None);
    }

    #[test]
    fn test_only_arrows_navigate() {
        assert_eq!(action_for(KeyCode::Up), Some(Action::Navigate(Direction::Up)));
        assert_eq!(action_for(KeyCode::Down), Some(Action::Navigate(Direction::Down)));
        for letter in ['j', 'k', 'l'] {
            assert_eq!(action_for(KeyCode::Char(letter)), None);
        }
        assert_eq!(action_for(KeyCode::Char('h')), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Right), Position::MiddleRight);
    }
}
