//! Checking committed selections against the remaining target words.
//!
//! Matching is exact and forward-only: the path's letters are read in the
//! order they were selected. Selecting a word back to front does not count.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Word;
use crate::selection::SelectionPath;

/// Points awarded per letter of a found word.
pub const POINTS_PER_LETTER: u32 = 10;

/// Target words not yet found in the current stage.
pub type RemainingWords = OrdSet<Word>;

/// A successful match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub word: Word,
    pub points: u32,
    pub cells: SelectionPath,
}

/// Outcome of validating one committed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Match(MatchResult),
    NoMatch,
}

impl Validation {
    /// Whether a word was matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Validation::Match(_))
    }
}

/// Score for finding `word`.
#[must_use]
pub fn points_for(word: &Word) -> u32 {
    u32::try_from(word.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_LETTER)
}

/// Stateless word validator.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordValidator;

impl WordValidator {
    /// Match a committed path against the remaining words.
    ///
    /// ```
    /// use rust_wordsearch::core::{Grid, Position, Word};
    /// use rust_wordsearch::selection::{SelectionTracker, Transition};
    /// use rust_wordsearch::validation::{RemainingWords, Validation, WordValidator};
    ///
    /// let grid = Grid::from_rows(&["CAT", "XXX", "XXX"]).unwrap();
    /// let mut tracker = SelectionTracker::new();
    /// for col in 0..3 {
    ///     let cell = grid.cell(Position::new(0, col)).unwrap();
    ///     if col == 0 { tracker.start(cell); } else { tracker.extend(cell); }
    /// }
    /// let Transition::Committed(path) = tracker.commit() else { unreachable!() };
    ///
    /// let remaining: RemainingWords = [Word::new("CAT")].into_iter().collect();
    /// match WordValidator.validate(&path, &remaining) {
    ///     Validation::Match(m) => assert_eq!(m.points, 30),
    ///     Validation::NoMatch => unreachable!(),
    /// }
    /// ```
    #[must_use]
    pub fn validate(&self, path: &SelectionPath, remaining: &RemainingWords) -> Validation {
        let text = path.word();
        let attempt = Word::new(&text);
        // Targets are normalized; an attempt that normalization would alter
        // cannot equal one exactly.
        if attempt.as_str() != text || !remaining.contains(&attempt) {
            debug!(attempt = %text, "No match");
            return Validation::NoMatch;
        }

        let points = points_for(&attempt);
        debug!(word = %attempt, points, "Word matched");
        Validation::Match(MatchResult {
            word: attempt,
            points,
            cells: path.clone(),
        })
    }
}
