//! The letter grid and its cells.
//!
//! A `Grid` is square and immutable once generated. Cells are identified by
//! their `Position`; a `Cell` pairs a position with the letter shown there.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Position};

/// One letter on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub letter: char,
    pub position: Position,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(letter: char, position: Position) -> Self {
        Self { letter, position }
    }
}

/// Square, row-major letter grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Build a grid from already-filled letters.
    ///
    /// `letters.len()` must equal `size * size`.
    pub(crate) fn from_letters(size: usize, letters: Vec<char>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        Self { size, letters }
    }

    /// Build a grid from one string per row.
    ///
    /// Returns `None` unless every row has as many letters as there are rows.
    ///
    /// ```
    /// use rust_wordsearch::core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows(&["CAT", "XYZ", "QRS"]).unwrap();
    /// assert_eq!(grid.get(Position::new(0, 1)), Some('A'));
    /// assert!(Grid::from_rows(&["AB", "C"]).is_none());
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut letters = Vec::with_capacity(size * size);
        for row in rows {
            let before = letters.len();
            letters.extend(row.chars());
            if letters.len() - before != size {
                return None;
            }
        }
        Some(Self { size, letters })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a position lies on the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Letter at a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        self.letters.get(pos.row * self.size + pos.col).copied()
    }

    /// Cell at a position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.get(pos).map(|letter| Cell::new(letter, pos))
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics; an empty grid has no rows anyway.
        self.letters.chunks(self.size.max(1))
    }

    /// Read `len` letters starting at `start` along `direction`.
    ///
    /// Returns `None` if the run leaves the grid.
    #[must_use]
    pub fn read(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| start.step(direction, i, self.size).and_then(|p| self.get(p)))
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
