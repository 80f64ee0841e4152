//! OX game core - tic-tac-toe state with history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a board into an [`Outcome`]
//! - **GameState**: snapshot history, current step and view toggles
//! - **Contracts / invariants**: move preconditions and history checks
//! - **View**: the read model a presentation layer renders
//!
//! # Example
//!
//! ```
//! use oxgame_core::{GameState, Outcome, Player, Position};
//!
//! let mut game = GameState::new();
//! for pos in [0, 1, 3, 4, 6] {
//!     game.apply_move(Position::from_index(pos).unwrap());
//! }
//! assert_eq!(game.outcome().winner(), Some(Player::X));
//!
//! // Step back and play on from there; the old future is dropped.
//! game.jump_to(2).unwrap();
//! game.apply_move(Position::Center);
//! assert_eq!(game.history().len(), 4);
//! assert_eq!(game.outcome(), Outcome::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod outcome;
mod position;
mod snapshot;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use error::{MoveRejection, StepOutOfRange};
pub use game::{GameState, Placement};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate;
pub use snapshot::{History, Snapshot};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, Status};
