//! Word placements and the in-progress placement board.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameRng, Grid, Position, Word};

use super::alphabet::FillerAlphabet;

/// Where a word was embedded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: Word,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Positions covered by the word, in reading order.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        (0..self.word.len())
            .filter_map(|i| self.start.step(self.direction, i, usize::MAX))
            .collect()
    }
}

/// Mutable board used while placing words. Empty cells are `None`.
#[derive(Clone, Debug)]
pub(crate) struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Positions the word would occupy, if every one is legal.
    ///
    /// A cell is legal when it is on the board and either empty or already
    /// holding the same letter (crossing words).
    pub(crate) fn fit(
        &self,
        letters: &[char],
        start: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let mut positions = Vec::with_capacity(letters.len());
        for (i, &letter) in letters.iter().enumerate() {
            let pos = start.step(direction, i, self.size)?;
            match self.cells[self.index(pos)] {
                Some(existing) if existing != letter => return None,
                _ => positions.push(pos),
            }
        }
        Some(positions)
    }

    pub(crate) fn write(&mut self, letters: &[char], positions: &[Position]) {
        for (&letter, &pos) in letters.iter().zip(positions) {
            let idx = self.index(pos);
            self.cells[idx] = Some(letter);
        }
    }

    /// Fill every empty cell and freeze into a `Grid`.
    pub(crate) fn fill(self, filler: &FillerAlphabet, rng: &mut GameRng) -> Grid {
        let letters = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| filler.sample(rng)))
            .collect();
        Grid::from_letters(self.size, letters)
    }
}
