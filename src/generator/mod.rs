//! Procedural word-search grid generation.
//!
//! ## Algorithm
//!
//! 1. Sort words longest first (stable), so long words land before the
//!    board gets crowded.
//! 2. For each word, try up to `max_attempts` random (start, direction)
//!    pairs. A placement is legal when every cell stays on the board and is
//!    either empty or already holds the same letter.
//! 3. Words that exhaust the budget, or are longer than the board, are
//!    skipped. Generation never fails.
//! 4. Remaining empty cells are filled from the filler alphabet.
//!
//! The result is fully determined by the word list, the size and the RNG
//! stream.
//!
//! ```
//! use rust_wordsearch::core::{GameRng, WordList};
//! use rust_wordsearch::generator::{GeneratorConfig, GridGenerator};
//!
//! let words = WordList::from_raw(["cat"]);
//! let generator = GridGenerator::new(GeneratorConfig::default());
//! let generated = generator.generate(&words, 10, &mut GameRng::new(1));
//!
//! let placement = &generated.placements[0];
//! let text = generated
//!     .grid
//!     .read(placement.start, placement.direction, 3)
//!     .unwrap();
//! assert_eq!(text, "CAT");
//! ```

mod alphabet;
mod placement;

pub use alphabet::{FillerAlphabet, CYRILLIC_KAZAKH, LATIN};
pub use placement::Placement;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Direction, GameRng, Grid, Position, Word, WordList};
use crate::error::ConfigError;

use placement::Board;

/// Default number of random placement attempts per word.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1500;

/// Grid generator settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Random placement attempts per word before it is skipped.
    pub max_attempts: u32,

    /// Letters used for cells no word occupies.
    pub filler: FillerAlphabet,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            filler: FillerAlphabet::default(),
        }
    }
}

impl GeneratorConfig {
    /// Set the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the filler alphabet.
    #[must_use]
    pub fn with_filler(mut self, filler: FillerAlphabet) -> Self {
        self.filler = filler;
        self
    }

    /// Check the settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// Output of one generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedGrid {
    pub grid: Grid,
    /// Words that were embedded, in placement order (longest first).
    pub placements: Vec<Placement>,
    /// Words that could not be embedded.
    pub skipped: Vec<Word>,
}

/// Best-effort randomized word placer.
#[derive(Clone, Debug, Default)]
pub struct GridGenerator {
    config: GeneratorConfig,
}

impl GridGenerator {
    /// Create a generator with the given settings.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a `size` x `size` grid embedding as many `words` as possible.
    pub fn generate(&self, words: &WordList, size: usize, rng: &mut GameRng) -> GeneratedGrid {
        let mut ordered: Vec<&Word> = words.iter().collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut board = Board::new(size);
        let mut placements = Vec::new();
        let mut skipped = Vec::new();

        for word in ordered {
            if word.len() > size {
                warn!(word = %word, size, "Word longer than grid, skipping");
                skipped.push(word.clone());
                continue;
            }

            match self.place(&mut board, word, size, rng) {
                Some(placement) => {
                    debug!(
                        word = %word,
                        start = %placement.start,
                        d_row = placement.direction.d_row,
                        d_col = placement.direction.d_col,
                        "Placed word"
                    );
                    placements.push(placement);
                }
                None => {
                    warn!(
                        word = %word,
                        attempts = self.config.max_attempts,
                        "Could not place word, skipping"
                    );
                    skipped.push(word.clone());
                }
            }
        }

        let grid = board.fill(&self.config.filler, rng);
        GeneratedGrid {
            grid,
            placements,
            skipped,
        }
    }

    fn place(
        &self,
        board: &mut Board,
        word: &Word,
        size: usize,
        rng: &mut GameRng,
    ) -> Option<Placement> {
        let letters = word.letters();
        for _ in 0..self.config.max_attempts {
            let start = Position::new(rng.gen_range_usize(0..size), rng.gen_range_usize(0..size));
            let direction = *rng.choose(&Direction::ALL)?;

            if let Some(positions) = board.fit(&letters, start, direction) {
                board.write(&letters, &positions);
                return Some(Placement {
                    word: word.clone(),
                    start,
                    direction,
                });
            }
        }
        None
    }
}

/// Generate a grid with default generator settings.
///
/// Unplaceable words are silently left out; use [`GridGenerator::generate`]
/// to learn which.
pub fn generate_grid(words: &WordList, size: usize, rng: &mut GameRng) -> Grid {
    GridGenerator::default().generate(words, size, rng).grid
}
