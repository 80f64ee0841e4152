//! Game state with move history and time travel.

use super::contracts::{Contract, MoveContract};
use super::error::{MoveRejection, StepOutOfRange};
use super::snapshot::{History, Snapshot};
use super::view::GameView;
use super::{Board, Outcome, Player, Position, Square, rules};
use tracing::{debug, info, instrument, warn};

/// What [`GameState::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was placed and a new snapshot became current.
    Placed {
        /// Player who placed the mark.
        player: Player,
        /// Step of the new snapshot.
        step: usize,
    },
    /// The move was ignored; nothing changed.
    Ignored(MoveRejection),
}

impl Placement {
    /// Returns true if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// The whole game: history, current step and view toggles.
///
/// Whose turn it is comes from the parity of `current_step` and is never
/// stored, so it cannot drift from the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    sort_descending: bool,
    help_visible: bool,
}

impl GameState {
    /// Creates a new game: empty board, ascending move list, help hidden.
    #[instrument]
    pub fn new() -> Self {
        Self::with_view(false, false)
    }

    /// Creates a new game with the given view toggles.
    #[instrument]
    pub fn with_view(sort_descending: bool, help_visible: bool) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            sort_descending,
            help_visible,
        }
    }

    /// Returns the history, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the current step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the current snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history.snapshots[self.current_step]
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// True when X moves next (even step).
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// Player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.current_step)
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Returns true if the move list is shown newest first.
    pub fn sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// Returns true if the help panel replaces the board.
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Ignored when the current board is decided or the square is taken.
    /// Otherwise every snapshot after the current step is discarded and
    /// the new board becomes the latest snapshot.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Placement {
        if let Err(rejection) = MoveContract::pre(self, &pos) {
            debug!(%rejection, "Move ignored");
            return Placement::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));
        self.current_step = self
            .history
            .branch(self.current_step, Snapshot::after_move(board, pos));

        #[cfg(debug_assertions)]
        assert_postconditions(&before, self);

        debug!(step = self.current_step, outcome = %self.outcome(), "Move applied");
        Placement::Placed {
            player,
            step: self.current_step,
        }
    }

    /// Makes `step` the current snapshot without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`StepOutOfRange`] if `step` is not an index into the
    /// history. The state is unchanged in that case.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepOutOfRange> {
        if step >= self.history.len() {
            let err = StepOutOfRange {
                step,
                len: self.history.len(),
            };
            warn!(%err, "Jump rejected");
            return Err(err);
        }
        debug!(from = self.current_step, to = step, "Jumping");
        self.current_step = step;
        Ok(())
    }

    /// Flips the move list order. History storage order is unaffected.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_descending = !self.sort_descending;
        debug!(sort_descending = self.sort_descending, "Sort toggled");
    }

    /// Flips between the board and the help panel.
    #[instrument(skip(self))]
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        debug!(help_visible = self.help_visible, "Help toggled");
    }

    /// Starts over with a fresh game, keeping the view toggles.
    #[instrument(skip(self))]
    pub fn restarted(&self) -> Self {
        info!(moves = self.history.last_step(), "Starting a new game");
        Self::with_view(self.sort_descending, self.help_visible)
    }

    /// Builds the read model for the presentation layer.
    #[instrument(skip(self))]
    pub fn read(&self) -> GameView {
        GameView::from_state(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(debug_assertions)]
fn assert_postconditions(before: &GameState, after: &GameState) {
    if let Err(violations) = MoveContract::post(before, after) {
        panic!(
            "Move broke game invariants: {}",
            super::invariants::describe(&violations)
        );
    }
}
