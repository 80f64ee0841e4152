//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The
//! precondition decides whether a move is applied at all; the postcondition
//! checks that an applied move kept the history well formed.

use super::error::MoveRejection;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Reason an action is refused.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the current board is neither won nor drawn.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveRejection> {
        let outcome = game.outcome();
        if outcome.is_decided() {
            Err(MoveRejection::GameDecided(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveRejection> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is undecided and
/// the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveRejection> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

/// Contract for [`GameState::apply_move`].
///
/// Preconditions:
/// - Game undecided
/// - Square empty
///
/// Postconditions:
/// - History was cut at the old step and grew by exactly one snapshot
/// - The new snapshot is current
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Rejection = MoveRejection;

    fn pre(game: &GameState, pos: &Position) -> Result<(), MoveRejection> {
        LegalMove::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();

        if after.history().len() != before.current_step() + 2 {
            warn!(
                before_step = before.current_step(),
                after_len = after.history().len(),
                "History did not branch at the current step"
            );
            violations.push(InvariantViolation::new(
                "History is cut at the old step plus one new snapshot",
            ));
        }
        if after.current_step() != after.history().last_step() {
            violations.push(InvariantViolation::new("The new snapshot is current"));
        }
        let kept = before.current_step() + 1;
        if before.history().iter().take(kept).ne(after.history().iter().take(kept)) {
            violations.push(InvariantViolation::new("Past snapshots are unchanged"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
