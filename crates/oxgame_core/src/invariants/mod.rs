//! First-class invariants over the game state.
//!
//! Invariants are logical properties that must hold after every command.
//! They are checked after each applied move in debug builds and can be
//! tested on their own.

pub mod canonical_root;
pub mod single_mark;
pub mod step_bounds;

pub use canonical_root::CanonicalRootInvariant;
pub use single_mark::SingleMarkPerStepInvariant;
pub use step_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of up to four invariants. Every member is checked
/// so a single report lists all violations.
pub trait InvariantSet<S> {
    /// Returns `Ok(())` if every invariant holds, otherwise all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($inv::holds(state), $inv::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1);
impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every invariant of a [`GameState`](crate::GameState).
pub type GameInvariants = (
    CanonicalRootInvariant,
    StepInBoundsInvariant,
    SingleMarkPerStepInvariant,
);

/// Joins violation descriptions into one line.
pub fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.apply_move(pos);
        }
        game.jump_to(1).unwrap();
        game.apply_move(Position::BottomRight);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.history.snapshots[0].placed = Some(Position::TopLeft);
        game.current_step = 7;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(describe(&violations).contains(StepInBoundsInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CanonicalRootInvariant, StepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
