//! Per-stage game state.
//!
//! Uses `im` persistent collections so the controller can move the state
//! through transition functions and hosts can hold snapshots cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Grid, Position, StageNumber, Word, WordList};
use crate::generator::Placement;
use crate::selection::SelectionPath;
use crate::validation::RemainingWords;

/// A word found this stage, with the cells it was selected through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: Word,
    pub cells: SelectionPath,
}

/// Everything about the stage in play.
///
/// Created when a stage starts (fresh grid, full timer, nothing found) and
/// replaced when the stage ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageState {
    pub(crate) stage: StageNumber,
    pub(crate) words: WordList,
    pub(crate) grid: Grid,
    pub(crate) placements: Vec<Placement>,
    pub(crate) found: Vector<FoundWord>,
    pub(crate) remaining: RemainingWords,
    pub(crate) time_remaining: u32,
    /// Running total across stages.
    pub(crate) score: u32,
}

impl StageState {
    /// Which stage this is.
    #[must_use]
    pub fn stage(&self) -> StageNumber {
        self.stage
    }

    /// This stage's target words.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Where each placed word sits. Words missing here can never be found.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words found so far, in order.
    #[must_use]
    pub fn found(&self) -> &Vector<FoundWord> {
        &self.found
    }

    /// Words still to find.
    #[must_use]
    pub fn remaining(&self) -> &RemainingWords {
        &self.remaining
    }

    /// Seconds left on the stage timer.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Score accumulated over the whole game so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// (found, total) word counts.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.found.len(), self.words.len())
    }

    /// Whether every word of the stage has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.words.len()
    }

    /// Whether `word` was already found this stage.
    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.found.iter().any(|f| &f.word == word)
    }

    /// Whether a cell belongs to any found word.
    #[must_use]
    pub fn is_cell_found(&self, pos: Position) -> bool {
        self.found.iter().any(|f| f.cells.contains(pos))
    }

    /// Remaining time as `m:ss`.
    #[must_use]
    pub fn time_label(&self) -> String {
        format_time(self.time_remaining)
    }
}

/// Format seconds as `m:ss`.
///
/// ```
/// use rust_wordsearch::stage::format_time;
///
/// assert_eq!(format_time(600), "10:00");
/// assert_eq!(format_time(65), "1:05");
/// assert_eq!(format_time(0), "0:00");
/// ```
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
