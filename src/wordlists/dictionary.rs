//! The validated word list a session filters
//!
//! Words are uppercase ASCII, all the same length, unique, and kept in the
//! order they were supplied.

use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for building or loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("word '{word}' has {actual} letters, expected {expected}")]
    WordLength {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("word '{0}' contains characters other than A-Z")]
    InvalidCharacters(String),

    #[error("no {word_length}-letter words found")]
    Empty { word_length: usize },

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable, duplicate-free word list with constant-time membership checks
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary of `word_length`-letter words
    ///
    /// Each entry is trimmed and uppercased. Blank entries are skipped and
    /// repeated words keep their first position.
    ///
    /// # Errors
    /// Returns `DictionaryError::WordLength` for a word of another length and
    /// `DictionaryError::InvalidCharacters` for a word with anything but ASCII
    /// letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::new(["crane", " Slate", "", "CRANE"], 5).unwrap();
    /// assert_eq!(dict.words(), ["CRANE", "SLATE"]);
    /// assert!(dict.contains("SLATE"));
    ///
    /// assert!(Dictionary::new(["toolong"], 5).is_err());
    /// ```
    pub fn new<I, S>(words: I, word_length: usize) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        let mut index = FxHashSet::default();

        for word in words {
            let trimmed = word.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(DictionaryError::InvalidCharacters(trimmed.to_string()));
            }
            if trimmed.len() != word_length {
                return Err(DictionaryError::WordLength {
                    word: trimmed.to_string(),
                    expected: word_length,
                    actual: trimmed.len(),
                });
            }

            let upper = trimmed.to_ascii_uppercase();
            if index.insert(upper.clone()) {
                list.push(upper);
            }
        }

        Ok(Self {
            words: list,
            index,
            word_length,
        })
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `word` is in the dictionary (exact, uppercase match)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}
