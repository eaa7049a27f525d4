//! Attempt chaining
//!
//! A [`Session`] owns the dictionary, the submitted attempts and the single
//! editable row of the active attempt. Submitting moves the active row into
//! history, resolves it, and filters the previous attempt's candidates
//! through it (the whole dictionary for the first attempt). Stored candidate
//! sets are never recomputed.

mod config;

pub use config::{ConfigError, SessionConfig};

use crate::core::{EngineError, GuessRow};
use crate::filter::filter_iter;
use crate::wordlists::Dictionary;
use log::debug;
use std::mem;

/// Open an empty row for a new attempt
#[must_use]
pub fn new_attempt(word_length: usize) -> GuessRow {
    GuessRow::new(word_length)
}

/// A submitted attempt: its resolved row and the candidates left after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    row: GuessRow,
    candidates: Vec<String>,
}

impl Attempt {
    /// The row after duplicate-letter derivation
    #[inline]
    #[must_use]
    pub const fn row(&self) -> &GuessRow {
        &self.row
    }

    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

/// One solving session over a fixed grid
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    dictionary: Dictionary,
    history: Vec<Attempt>,
    active: GuessRow,
}

impl Session {
    /// Start a session with an empty first row
    ///
    /// # Errors
    /// Returns `ConfigError::LengthMismatch` if the dictionary's word length
    /// differs from the grid width.
    pub fn new(dictionary: Dictionary, config: SessionConfig) -> Result<Self, ConfigError> {
        if dictionary.word_length() != config.word_length {
            return Err(ConfigError::LengthMismatch {
                dictionary: dictionary.word_length(),
                grid: config.word_length,
            });
        }

        Ok(Self {
            config,
            dictionary,
            history: Vec::new(),
            active: new_attempt(config.word_length),
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Submitted attempts, oldest first
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.history
    }

    /// Index of the attempt currently being edited
    #[inline]
    #[must_use]
    pub fn active_attempt(&self) -> usize {
        self.history.len()
    }

    /// True once every row of the grid has been submitted
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.history.len() >= self.config.max_rows
    }

    /// The row of the active attempt
    #[inline]
    #[must_use]
    pub const fn active_row(&self) -> &GuessRow {
        &self.active
    }

    /// Mutable access to the active row, the only row that can still change
    ///
    /// # Errors
    /// Returns `EngineError::NoMoreAttempts` once the session is finished.
    pub fn active_row_mut(&mut self) -> Result<&mut GuessRow, EngineError> {
        if self.is_finished() {
            return Err(EngineError::NoMoreAttempts {
                max_rows: self.config.max_rows,
            });
        }
        Ok(&mut self.active)
    }

    /// Submit the active attempt and return its candidate set
    ///
    /// Checks, in order: the grid still has rows, `attempt_index` is the
    /// active attempt, every slot has a letter, and the word is in the
    /// dictionary. A failed check changes nothing.
    ///
    /// # Errors
    /// - `EngineError::NoMoreAttempts` at or past the last row
    /// - `EngineError::AttemptNotActive` for any other index than the active one
    /// - `EngineError::IncompleteRow` when a slot is empty
    /// - `EngineError::NotInDictionary` when the word is unknown
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::RawState;
    /// use wordle_filter::session::{Session, SessionConfig};
    /// use wordle_filter::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["CRANE", "CRATE", "TRACE"], 5).unwrap();
    /// let mut session = Session::new(dictionary, SessionConfig::default()).unwrap();
    ///
    /// let row = session.active_row_mut().unwrap();
    /// for (i, ch) in "CRANE".chars().enumerate() {
    ///     row.set_character(i, ch).unwrap();
    ///     row.set_state(i, RawState::PresentHere).unwrap();
    /// }
    /// row.set_state(3, RawState::Absent).unwrap();
    ///
    /// // N is gray, so only CRATE fits
    /// assert_eq!(session.submit_attempt(0).unwrap(), ["CRATE"]);
    /// ```
    pub fn submit_attempt(&mut self, attempt_index: usize) -> Result<&[String], EngineError> {
        let active = self.active_attempt();
        if attempt_index >= self.config.max_rows || self.is_finished() {
            return Err(EngineError::NoMoreAttempts {
                max_rows: self.config.max_rows,
            });
        }
        if attempt_index != active {
            return Err(EngineError::AttemptNotActive {
                requested: attempt_index,
                active,
            });
        }
        let Some(word) = self.active.word() else {
            return Err(EngineError::IncompleteRow {
                filled: self.active.filled(),
                length: self.active.len(),
            });
        };
        if !self.dictionary.contains(&word) {
            return Err(EngineError::NotInDictionary(word));
        }

        let mut row = mem::replace(&mut self.active, new_attempt(self.config.word_length));
        row.derive_states();

        let source = self.current_candidates();
        let candidates: Vec<String> = filter_iter(source, &row).map(str::to_string).collect();
        debug!(
            "attempt {attempt_index}: {word} narrowed {} -> {} candidates",
            source.len(),
            candidates.len()
        );

        self.history.push(Attempt { row, candidates });
        Ok(&self.history[attempt_index].candidates)
    }

    /// Candidates stored for `attempt_index`
    ///
    /// Before anything is submitted, attempt 0 reports the whole dictionary.
    /// Attempts that have not been submitted report `None`.
    #[must_use]
    pub fn candidates_for(&self, attempt_index: usize) -> Option<&[String]> {
        match self.history.get(attempt_index) {
            Some(attempt) => Some(&attempt.candidates),
            None if attempt_index == 0 => Some(self.dictionary.words()),
            None => None,
        }
    }

    /// Candidates consistent with every submitted attempt
    #[must_use]
    pub fn current_candidates(&self) -> &[String] {
        self.history
            .last()
            .map_or(self.dictionary.words(), Attempt::candidates)
    }

    /// Withdraw the most recent attempt and make its row editable again
    ///
    /// The reopened row carries the letters and raw feedback that were
    /// submitted. Earlier attempts are untouched. Returns `None` when nothing
    /// has been submitted.
    pub fn undo_last(&mut self) -> Option<&GuessRow> {
        let Attempt { mut row, .. } = self.history.pop()?;
        row.restore_raw_states();
        self.active = row;
        debug!("reopened attempt {}", self.history.len());
        Some(&self.active)
    }

    /// Drop every attempt and start again from an empty first row
    pub fn reset(&mut self) {
        self.history.clear();
        self.active = new_attempt(self.config.word_length);
    }
}
