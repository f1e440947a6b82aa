//! Selection state machine shared by every input mode.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Cell, Direction, Position};

use super::path::SelectionPath;

/// Tracker state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerState {
    /// No path.
    Idle,
    /// At least one cell selected.
    Building,
}

/// What a tracker call did to the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new path began from idle.
    Started,
    /// The cell was appended.
    Extended,
    /// The previous path was dropped and a new one begun at the cell.
    Restarted,
    /// Nothing changed.
    Ignored,
    /// The path was handed over for validation; the tracker is idle again.
    Committed(SelectionPath),
    /// The path was dropped without validation.
    Abandoned,
}

/// Builds straight-line selections one cell at a time.
///
/// ## Rules
///
/// - `start` from idle begins a path. From building, pressing the path's
///   last cell again (path of two or more) commits; any other cell
///   restarts the path there.
/// - `extend` appends a neighbour of the last cell that is not already on
///   the path and, once a direction is locked, continues it. Cells already
///   on the path are ignored; anything else restarts the path at that cell.
/// - `commit` needs at least two cells.
///
/// ```
/// use rust_wordsearch::core::{Cell, Position};
/// use rust_wordsearch::selection::{SelectionTracker, Transition};
///
/// let mut tracker = SelectionTracker::new();
/// tracker.start(Cell::new('C', Position::new(0, 0)));
/// tracker.extend(Cell::new('A', Position::new(0, 1)));
/// tracker.extend(Cell::new('T', Position::new(0, 2)));
///
/// match tracker.commit() {
///     Transition::Committed(path) => assert_eq!(path.word(), "CAT"),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    path: SelectionPath,
}

impl SelectionTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        if self.path.is_empty() {
            TrackerState::Idle
        } else {
            TrackerState::Building
        }
    }

    /// The in-progress path.
    #[must_use]
    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    /// Letters selected so far.
    #[must_use]
    pub fn current_word(&self) -> String {
        self.path.word()
    }

    /// Whether a cell is part of the in-progress path.
    #[must_use]
    pub fn is_selected(&self, pos: Position) -> bool {
        self.path.contains(pos)
    }

    /// Whether `pos` is the last cell of a path long enough to commit.
    #[must_use]
    pub fn is_commit_target(&self, pos: Position) -> bool {
        self.path.len() >= 2 && self.path.last().is_some_and(|c| c.position == pos)
    }

    /// Begin a path at `cell`, or commit when re-pressing the last cell.
    pub fn start(&mut self, cell: Cell) -> Transition {
        match self.state() {
            TrackerState::Idle => {
                self.path = SelectionPath::single(cell);
                trace!(pos = %cell.position, "Selection started");
                Transition::Started
            }
            TrackerState::Building if self.is_commit_target(cell.position) => self.commit(),
            TrackerState::Building => self.restart(cell),
        }
    }

    /// Try to append `cell` to the path.
    pub fn extend(&mut self, cell: Cell) -> Transition {
        let Some(last) = self.path.last().copied() else {
            return Transition::Ignored;
        };

        if self.path.contains(cell.position) {
            return Transition::Ignored;
        }

        let Some(step) = Direction::between(last.position, cell.position) else {
            return self.restart(cell);
        };

        if let Some(locked) = self.path.direction() {
            if locked != step {
                return self.restart(cell);
            }
        }

        self.path.push(cell);
        trace!(pos = %cell.position, len = self.path.len(), "Selection extended");
        Transition::Extended
    }

    /// Hand the path over for validation and return to idle.
    pub fn commit(&mut self) -> Transition {
        if self.path.len() < 2 {
            return Transition::Ignored;
        }
        let path = std::mem::take(&mut self.path);
        trace!(word = %path.word(), "Selection committed");
        Transition::Committed(path)
    }

    /// Drop the path without validating it.
    pub fn abandon(&mut self) -> Transition {
        if self.path.is_empty() {
            return Transition::Ignored;
        }
        self.path.clear();
        trace!("Selection abandoned");
        Transition::Abandoned
    }

    fn restart(&mut self, cell: Cell) -> Transition {
        self.path = SelectionPath::single(cell);
        trace!(pos = %cell.position, "Selection restarted");
        Transition::Restarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new('X', Position::new(row, col))
    }

    fn positions(tracker: &SelectionTracker) -> Vec<Position> {
        tracker.path().cells().iter().map(|c| c.position).collect()
    }

    #[test]
    fn test_start_from_idle() {
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.state(), TrackerState::Idle);
        assert_eq!(tracker.start(cell(1, 1)), Transition::Started);
        assert_eq!(tracker.state(), TrackerState::Building);
    }

    #[test]
    fn test_extend_when_idle_is_ignored() {
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.extend(cell(0, 0)), Transition::Ignored);
        assert_eq!(tracker.state(), TrackerState::Idle);
    }

    #[test]
    fn test_non_adjacent_restarts() {
        let mut tracker = SelectionTracker::new();
        tracker.start(cell(0, 0));
        assert_eq!(tracker.extend(cell(0, 2)), Transition::Restarted);
        assert_eq!(positions(&tracker), vec![Position::new(0, 2)]);
    }

    #[test]
    fn test_direction_lock() {
        let mut tracker = SelectionTracker::new();
        tracker.start(cell(2, 2));
        assert_eq!(tracker.extend(cell(2, 3)), Transition::Extended);
        assert_eq!(tracker.extend(cell(3, 4)), Transition::Restarted);
        assert_eq!(positions(&tracker), vec![Position::new(3, 4)]);
    }

    #[test]
    fn test_revisiting_path_cell_is_ignored() {
        let mut tracker = SelectionTracker::new();
        tracker.start(cell(0, 0));
        tracker.extend(cell(1, 1));
        assert_eq!(tracker.extend(cell(0, 0)), Transition::Ignored);
        assert_eq!(tracker.extend(cell(1, 1)), Transition::Ignored);
        assert_eq!(tracker.path().len(), 2);
    }

    #[test]
    fn test_start_on_last_cell_commits() {
        let mut tracker = SelectionTracker::new();
        tracker.start(cell(0, 0));
        tracker.extend(cell(0, 1));

        let result = tracker.start(cell(0, 1));
        assert!(matches!(result, Transition::Committed(ref p) if p.len() == 2));
        assert_eq!(tracker.state(), TrackerState::Idle);
    }

    #[test]
    fn test_start_on_single_cell_restarts() {
        let mut tracker = SelectionTracker::new();
        tracker.start(cell(0, 0));
        assert_eq!(tracker.start(cell(0, 0)), Transition::Restarted);
        assert_eq!(tracker.path().len(), 1);
    }

    #[test]
    fn test_start_elsewhere_restarts() {
        let mut tracker = SelectionTracker::new();
        tracker.start(cell(0, 0));
        tracker.extend(cell(0, 1));
        assert_eq!(tracker.start(cell(0, 0)), Transition::Restarted);
        assert_eq!(positions(&tracker), vec![Position::new(0, 0)]);
    }

    #[test]
    fn test_commit_requires_two_cells() {
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.commit(), Transition::Ignored);

        tracker.start(cell(0, 0));
        assert_eq!(tracker.commit(), Transition::Ignored);
        assert_eq!(tracker.state(), TrackerState::Building);
    }

    #[test]
    fn test_abandon() {
        let mut tracker = SelectionTracker::new();
        assert_eq!(tracker.abandon(), Transition::Ignored);

        tracker.start(cell(0, 0));
        tracker.extend(cell(0, 1));
        assert_eq!(tracker.abandon(), Transition::Abandoned);
        assert_eq!(tracker.state(), TrackerState::Idle);
    }

    #[test]
    fn test_is_commit_target() {
        let mut tracker = SelectionTracker::new();
        tracker.start(cell(4, 4));
        assert!(!tracker.is_commit_target(Position::new(4, 4)));
        tracker.extend(cell(3, 4));
        assert!(tracker.is_commit_target(Position::new(3, 4)));
        assert!(!tracker.is_commit_target(Position::new(4, 4)));
    }
}
