//! Bounded history of past positions, used for undo.

use std::collections::VecDeque;

use log::debug;

use crate::grid::Grid;
use crate::HISTORY_CAPACITY;

/// A grid and score captured at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: u32,
}

/// Fixed-capacity, oldest-first sequence of [`Snapshot`]s.
///
/// Appending past capacity evicts the oldest entry, so the newest snapshot is
/// always at the tail.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
}

impl History {
    /// Create an empty history holding at most [`HISTORY_CAPACITY`] snapshots.
    pub fn new() -> Self {
        History {
            snapshots: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Record a copy of `grid` and `score` as the newest snapshot.
    pub fn append(&mut self, grid: &Grid, score: u32) {
        self.snapshots.push_back(Snapshot { grid: *grid, score });
        if self.snapshots.len() > HISTORY_CAPACITY {
            self.snapshots.pop_front();
            debug!("history full, evicted oldest snapshot");
        }
    }

    /// Remove and return the newest snapshot.
    pub fn pop_newest(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Get the newest snapshot without removing it.
    pub fn peek_newest(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Get the number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no snapshot is stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get the maximum number of snapshots kept.
    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    /// Remove every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EMPTY_GRID;

    /// A grid whose top-left tile encodes `n`, so snapshots are distinguishable.
    fn numbered(n: u32) -> Grid {
        let mut grid = EMPTY_GRID;
        grid[0][0] = 1 << n;
        grid
    }

    #[test]
    fn test_new_is_empty() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.capacity(), 6);
        assert_eq!(history.peek_newest(), None);
        assert_eq!(history.pop_newest(), None);
    }

    #[test]
    fn test_append_keeps_newest_at_tail() {
        let mut history = History::new();
        history.append(&numbered(1), 10);
        history.append(&numbered(2), 20);
        assert_eq!(history.len(), 2);
        assert_eq!(history.peek_newest().map(|s| s.score), Some(20));
        assert_eq!(history.iter().next().map(|s| s.score), Some(10));
    }

    #[test]
    fn test_seventh_append_evicts_oldest() {
        let mut history = History::new();
        for n in 1..=7 {
            history.append(&numbered(n), n);
        }
        assert_eq!(history.len(), 6);
        let scores: Vec<u32> = history.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(history.iter().next().map(|s| s.grid), Some(numbered(2)));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut history = History::new();
        for n in 0..50 {
            history.append(&numbered(n % 16), n);
            assert!(history.len() <= history.capacity());
        }
        assert_eq!(history.peek_newest().map(|s| s.score), Some(49));
    }

    #[test]
    fn test_pop_newest_returns_in_reverse_order() {
        let mut history = History::new();
        for n in 1..=3 {
            history.append(&numbered(n), n);
        }
        assert_eq!(history.pop_newest().map(|s| s.score), Some(3));
        assert_eq!(history.pop_newest().map(|s| s.score), Some(2));
        assert_eq!(history.pop_newest().map(|s| s.score), Some(1));
        assert_eq!(history.pop_newest(), None);
    }

    #[test]
    fn test_append_copies_grid() {
        let mut history = History::new();
        let mut grid = numbered(1);
        history.append(&grid, 0);
        grid[3][3] = 64;
        assert_eq!(history.peek_newest().map(|s| s.grid), Some(numbered(1)));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.append(&numbered(1), 0);
        history.clear();
        assert!(history.is_empty());
    }
}
