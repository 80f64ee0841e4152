//! Immutable board snapshots and the history that holds them.

use super::{Board, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// One historical board plus the move that produced it.
///
/// Every snapshot owns its board. Nothing is shared between snapshots, so
/// playing on from an earlier step can never rewrite the past.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) placed: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn root() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// A board reached by playing at `placed`.
    pub fn after_move(board: Board, placed: Position) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position of the move that produced this snapshot (`None` for the root).
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }

    /// 1-indexed (column, row) of the move that produced this snapshot.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.placed.map(|pos| (pos.column(), pos.row()))
    }
}

/// Ordered snapshots, oldest first. Index 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the root snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::root()],
        }
    }

    /// Number of snapshots, root included.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the root snapshot cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Iterates snapshots oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Drops everything after `step` and appends `snapshot`.
    ///
    /// Returns the step of the appended snapshot, which is always
    /// `step + 1`.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, step: usize, snapshot: Snapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.snapshots.truncate(step + 1);
        self.snapshots.push(snapshot);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
