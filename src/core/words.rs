//! Target words and word lists.
//!
//! Words are opaque character sequences. A word's identity is its normalized
//! form: surrounding whitespace trimmed and every character uppercased.
//! Length is always counted in `char`s so that Cyrillic and Latin words
//! score and place the same way.

use serde::{Deserialize, Serialize};

/// A normalized target word.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Normalize raw input into a word.
    ///
    /// ```
    /// use rust_wordsearch::core::Word;
    ///
    /// assert_eq!(Word::new("  Сатурн ").as_str(), "САТУРН");
    /// assert_eq!(Word::new("cat").len(), 3);
    /// ```
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (chars, not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The word's letters in reading order.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.0.chars().collect()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Word {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Ordered, deduplicated list of words for one stage.
///
/// Duplicates (after normalization) keep their first position; blank
/// entries are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from raw strings, normalizing and deduplicating.
    ///
    /// ```
    /// use rust_wordsearch::core::WordList;
    ///
    /// let list = WordList::from_raw(["mars", "Mars ", "", "Venus"]);
    /// let words: Vec<_> = list.iter().map(|w| w.as_str()).collect();
    /// assert_eq!(words, ["MARS", "VENUS"]);
    /// ```
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<Word> = Vec::new();
        for entry in raw {
            let word = Word::new(entry.as_ref());
            if !word.is_empty() && !words.contains(&word) {
                words.push(word);
            }
        }
        Self { words }
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate words in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Check membership by normalized identity.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Length of the longest word, or 0 for an empty list.
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }
}

impl From<Vec<String>> for WordList {
    fn from(raw: Vec<String>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words.into_iter().map(|w| w.0).collect()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
