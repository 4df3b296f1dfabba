//! Bounded undo/redo history for the rotation tool.
//!
//! The history is an explicit stack with a cursor. `push` records the
//! state after a change and drops any redo tail; `undo` and `redo` move
//! the cursor and report the snapshot it lands on. The stack holds at
//! most [`HISTORY_CAPACITY`] entries, evicting the oldest when full.
//!
//! Timestamps are caller-supplied milliseconds; the core carries no
//! clock so the same code runs natively and in WASM.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of snapshots the history retains.
pub const HISTORY_CAPACITY: usize = 50;

/// One recorded rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationSnapshot {
    /// Rotation angle in degrees when the snapshot was taken.
    pub angle_degrees: f64,
    /// Caller-supplied capture time in milliseconds.
    pub timestamp_ms: u64,
}

impl RotationSnapshot {
    /// Create a snapshot of the given angle at the given time.
    pub fn new(angle_degrees: f64, timestamp_ms: u64) -> Self {
        Self {
            angle_degrees,
            timestamp_ms,
        }
    }
}

/// Undo/redo stack with a cursor, bounded to [`HISTORY_CAPACITY`].
///
/// The cursor counts applied entries; the current snapshot is the one
/// just before it. Undoing past the oldest retained entry is not
/// possible, so eviction quietly shortens the undo range.
#[derive(Debug, Clone, Default)]
pub struct RotationHistory {
    entries: VecDeque<RotationSnapshot>,
    cursor: usize,
}

impl RotationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot as the new current state.
    ///
    /// Everything after the cursor (the redo tail) is discarded first.
    /// At capacity, the oldest entry is evicted.
    pub fn push(&mut self, snapshot: RotationSnapshot) {
        self.entries.truncate(self.cursor);

        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }

        self.entries.push_back(snapshot);
        self.cursor = self.entries.len();
    }

    /// Step back one entry and return the snapshot the cursor lands on.
    ///
    /// Returns `None` when there is no earlier entry to land on.
    pub fn undo(&mut self) -> Option<RotationSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Step forward one entry and return the snapshot the cursor lands on.
    ///
    /// Returns `None` when nothing has been undone.
    pub fn redo(&mut self) -> Option<RotationSnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    /// The snapshot at the cursor, if any entry is applied.
    pub fn current(&self) -> Option<RotationSnapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.entries.get(self.cursor - 1).copied()
    }

    /// Whether `undo` has an earlier entry to land on.
    pub fn can_undo(&self) -> bool {
        self.cursor > 1
    }

    /// Whether `redo` has an undone entry ahead of the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Number of retained snapshots (applied and undone).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(angle: f64) -> RotationSnapshot {
        RotationSnapshot::new(angle, 1_700_000_000_000 + angle as u64)
    }

    #[test]
    fn test_new_history_is_empty() {
        let mut history = RotationHistory::new();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.current(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_push_sets_current() {
        let mut history = RotationHistory::new();
        history.push(snap(10.0));

        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(snap(10.0)));
        // A single entry has nothing earlier to land on.
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_returns_previous_snapshot() {
        let mut history = RotationHistory::new();
        history.push(snap(10.0));
        history.push(snap(20.0));
        history.push(snap(30.0));

        assert_eq!(history.undo(), Some(snap(20.0)));
        assert_eq!(history.current(), Some(snap(20.0)));
        assert_eq!(history.undo(), Some(snap(10.0)));
        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);
        // The failed undo leaves the cursor in place.
        assert_eq!(history.current(), Some(snap(10.0)));
    }

    #[test]
    fn test_redo_after_undo() {
        let mut history = RotationHistory::new();
        history.push(snap(10.0));
        history.push(snap(20.0));

        assert_eq!(history.undo(), Some(snap(10.0)));
        assert!(history.can_redo());
        assert_eq!(history.redo(), Some(snap(20.0)));
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_push_truncates_redo_tail() {
        let mut history = RotationHistory::new();
        history.push(snap(10.0));
        history.push(snap(20.0));
        history.push(snap(30.0));
        history.undo();
        history.undo();

        history.push(snap(40.0));

        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some(snap(40.0)));
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
        // The discarded 20/30 branch is unreachable; undo lands on 10.
        assert_eq!(history.undo(), Some(snap(10.0)));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = RotationHistory::new();
        for i in 0..60 {
            history.push(snap(i as f64));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.current(), Some(snap(59.0)));

        // Entries 0..10 were evicted; undo bottoms out at angle 10.
        let mut last = None;
        while history.can_undo() {
            last = history.undo();
        }
        assert_eq!(last, Some(snap(10.0)));
    }

    #[test]
    fn test_undo_depth_is_capacity_minus_one_after_eviction() {
        let mut history = RotationHistory::new();
        for i in 0..200 {
            history.push(snap(i as f64));
        }

        let mut undos = 0;
        while history.undo().is_some() {
            undos += 1;
        }
        assert_eq!(undos, HISTORY_CAPACITY - 1);
    }

    #[test]
    fn test_timestamps_preserved() {
        let mut history = RotationHistory::new();
        history.push(RotationSnapshot::new(45.0, 123_456));

        let current = history.current().unwrap();
        assert_eq!(current.angle_degrees, 45.0);
        assert_eq!(current.timestamp_ms, 123_456);
    }

    #[test]
    fn test_push_at_capacity_with_redo_tail() {
        let mut history = RotationHistory::new();
        for i in 0..50 {
            history.push(snap(i as f64));
        }
        history.undo();
        history.undo();

        // Truncation brings the stack under capacity, so no eviction.
        history.push(snap(100.0));

        assert_eq!(history.len(), 49);
        assert_eq!(history.current(), Some(snap(100.0)));
        assert_eq!(history.undo(), Some(snap(47.0)));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
