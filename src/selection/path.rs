//! The ordered, straight-line path of selected cells.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, Direction, Position};

/// Ordered cells of an in-progress or committed selection.
///
/// Invariants maintained by [`super::SelectionTracker`]:
/// - consecutive cells are neighbours (Chebyshev distance 1)
/// - from the third cell on, every step repeats the first step's direction
/// - no position appears twice
///
/// SmallVec keeps typical word lengths off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPath {
    cells: SmallVec<[Cell; 16]>,
}

impl SelectionPath {
    /// An empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn single(cell: Cell) -> Self {
        let mut cells = SmallVec::new();
        cells.push(cell);
        Self { cells }
    }

    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Cells in selection order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of selected cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Most recently selected cell.
    #[must_use]
    pub fn last(&self) -> Option<&Cell> {
        self.cells.last()
    }

    /// Locked direction, once at least two cells are selected.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.cells.as_slice() {
            [first, second, ..] => Direction::between(first.position, second.position),
            _ => None,
        }
    }

    /// Whether a position is on the path.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.iter().any(|c| c.position == pos)
    }

    /// Letters in traversal order.
    #[must_use]
    pub fn word(&self) -> String {
        self.cells.iter().map(|c| c.letter).collect()
    }
}
