//! Filler alphabets for non-word cells.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::ConfigError;

/// Cyrillic letters plus the Kazakh additions.
pub const CYRILLIC_KAZAKH: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯӘІҢҒҮҰҚӨҺ";

/// Basic Latin capitals.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Non-empty set of letters used to fill cells no word occupies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FillerAlphabet {
    letters: Vec<char>,
}

impl FillerAlphabet {
    /// Build an alphabet from the distinct characters of `letters`.
    pub fn new(letters: &str) -> Result<Self, ConfigError> {
        let mut unique: Vec<char> = Vec::new();
        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        if unique.is_empty() {
            return Err(ConfigError::EmptyFiller);
        }
        Ok(Self { letters: unique })
    }

    /// The reference Cyrillic + Kazakh alphabet.
    #[must_use]
    pub fn cyrillic_kazakh() -> Self {
        Self::from_const(CYRILLIC_KAZAKH)
    }

    /// Latin capitals A-Z.
    #[must_use]
    pub fn latin() -> Self {
        Self::from_const(LATIN)
    }

    fn from_const(letters: &str) -> Self {
        Self {
            letters: letters.chars().collect(),
        }
    }

    /// Letters in this alphabet.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Draw one letter uniformly.
    pub fn sample(&self, rng: &mut GameRng) -> char {
        // Non-empty by construction.
        self.letters[rng.gen_range_usize(0..self.letters.len())]
    }
}

impl Default for FillerAlphabet {
    fn default() -> Self {
        Self::cyrillic_kazakh()
    }
}

impl TryFrom<String> for FillerAlphabet {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FillerAlphabet> for String {
    fn from(alphabet: FillerAlphabet) -> Self {
        alphabet.letters.into_iter().collect()
    }
}
