use crate::Deck;
use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 10;

/// Bounded stack of deck snapshots. Pushing past the limit drops the oldest
/// entry, so undo reaches at most [`HISTORY_LIMIT`] steps back.
#[derive(Debug, Default)]
pub struct History {
    snapshots: VecDeque<Deck>,
}

impl History {
    pub fn push(&mut self, snapshot: Deck) {
        if self.snapshots.len() >= HISTORY_LIMIT {
            let _ = self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Deck> {
        self.snapshots.pop_back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
