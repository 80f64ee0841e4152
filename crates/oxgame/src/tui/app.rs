//! Application state and intent dispatch.

use super::input::{Action, Direction, move_cursor};
use oxgame_core::{GameState, GameView, Placement, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor.
    Board,
    /// Arrows move the move list selection.
    History,
}

/// Main application state.
///
/// Owns the one [`GameState`]; every intent goes through
/// [`App::handle`], one at a time.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Index into the move list in display order.
    selected: usize,
    message: Option<String>,
    quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: GameState) -> Self {
        let mut app = Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
            quit: false,
        };
        app.sync_selection();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move list row, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last intent, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Read model for rendering.
    pub fn view(&self) -> GameView {
        self.game.read()
    }

    /// Applies one user intent.
    #[instrument(skip(self), fields(step = self.game.current_step(), focus = ?self.focus))]
    pub fn handle(&mut self, action: Action) {
        if self.game.help_visible()
            && !matches!(action, Action::ToggleHelp | Action::NewGame | Action::Quit)
        {
            debug!("Ignoring board intent while help is shown");
            self.message = Some("Press h to return to the board".to_string());
            return;
        }

        match action {
            Action::Navigate(direction) => self.navigate(direction),
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.sync_selection();
            }
            Action::ToggleSort => {
                self.game.toggle_sort();
                self.sync_selection();
            }
            Action::ToggleHelp => {
                self.game.toggle_help();
                self.message = None;
            }
            Action::NewGame => {
                self.game = self.game.restarted();
                self.cursor = Position::Center;
                self.message = Some("New game".to_string());
                self.sync_selection();
            }
            Action::Quit => {
                info!("User quit");
                self.quit = true;
            }
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                let last = self.game.history().last_step();
                self.selected = match direction {
                    Direction::Up => self.selected.saturating_sub(1),
                    Direction::Down => (self.selected + 1).min(last),
                    Direction::Left | Direction::Right => self.selected,
                };
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            Placement::Placed { player, step } => {
                debug!(%player, step, %pos, "Move applied to UI state");
                self.message = Some(format!("{} played {}", player, pos));
            }
            Placement::Ignored(rejection) => {
                self.message = Some(rejection.to_string());
            }
        }
        self.sync_selection();
    }

    fn jump_to_selected(&mut self) {
        let view = self.game.read();
        let Some(step) = view.ordered_moves().get(self.selected).map(|entry| *entry.step())
        else {
            return;
        };
        match self.game.jump_to(step) {
            Ok(()) => {
                self.message = Some(if step == 0 {
                    "Back to the empty board".to_string()
                } else {
                    format!("Back to move {}", step)
                });
            }
            Err(e) => {
                warn!(error = %e, "Jump failed");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Points the move list selection at the current step.
    fn sync_selection(&mut self) {
        let step = self.game.current_step();
        self.selected = if self.game.sort_descending() {
            self.game.history().last_step() - step
        } else {
            step
        };
    }
}
