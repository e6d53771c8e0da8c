//! Snapshot stack backing `MatchEngine::undo`.

use crate::domain::state::MatchState;

/// Ordered stack of prior match states, most recent last.
///
/// Snapshots are stored by value, so later changes to the live state can
/// never alter an entry already pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoHistory {
    snapshots: Vec<MatchState>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: MatchState) {
        self.snapshots.push(snapshot);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<MatchState> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&MatchState> {
        self.snapshots.last()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
