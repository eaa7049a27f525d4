//! A single guess row and its duplicate-letter derivation
//!
//! A row is a fixed-length sequence of [`Letter`] slots. Editors fill it in
//! place; once submitted it is resolved with [`GuessRow::derive_states`] and
//! never edited again.

use super::error::EngineError;
use super::letter::{Letter, LetterState, RawState};
use std::fmt;

const ALPHABET_LEN: usize = 26;

/// Position of an uppercase ASCII letter in the alphabet
///
/// Characters outside `A..=Z` have no slot; derivation matches them directly.
#[inline]
fn alphabet_index(ch: char) -> Option<usize> {
    ch.is_ascii_uppercase()
        .then(|| (ch as u8 - b'A') as usize)
}

/// One guess: a fixed number of letter slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    letters: Vec<Letter>,
}

impl GuessRow {
    /// Create an empty row of `word_length` slots
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            letters: vec![Letter::default(); word_length],
        }
    }

    /// Build a complete row from a word and the raw feedback for each letter
    ///
    /// # Errors
    /// Returns `EngineError::IndexOutOfBounds` at the first index where the word
    /// and the feedback disagree in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{GuessRow, RawState};
    ///
    /// let row = GuessRow::from_feedback(
    ///     "AB",
    ///     &[RawState::PresentHere, RawState::Absent],
    /// ).unwrap();
    /// assert_eq!(row.word().as_deref(), Some("AB"));
    /// ```
    pub fn from_feedback(word: &str, feedback: &[RawState]) -> Result<Self, EngineError> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() != feedback.len() {
            return Err(EngineError::IndexOutOfBounds {
                index: chars.len().min(feedback.len()),
                length: chars.len().min(feedback.len()),
            });
        }

        Ok(Self {
            letters: chars
                .into_iter()
                .zip(feedback)
                .map(|(ch, &state)| Letter::new(ch, state))
                .collect(),
        })
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Letter> {
        self.letters.get(index)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Letter, EngineError> {
        let length = self.letters.len();
        self.letters
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfBounds { index, length })
    }

    /// Put `ch` into slot `index`, replacing whatever was there
    ///
    /// The alphabet is not validated here.
    ///
    /// # Errors
    /// Returns `EngineError::IndexOutOfBounds` if `index >= len()`.
    pub fn set_character(&mut self, index: usize, ch: char) -> Result<(), EngineError> {
        self.slot_mut(index)?.set_character(ch);
        Ok(())
    }

    /// Record raw feedback for slot `index`
    ///
    /// # Errors
    /// Returns `EngineError::IndexOutOfBounds` if `index >= len()`.
    pub fn set_state(&mut self, index: usize, state: RawState) -> Result<(), EngineError> {
        self.slot_mut(index)?.set_state(state.into());
        Ok(())
    }

    /// Advance slot `index` to the next raw state and return it
    ///
    /// # Errors
    /// Returns `EngineError::IndexOutOfBounds` if `index >= len()`.
    pub fn cycle_state(&mut self, index: usize) -> Result<RawState, EngineError> {
        let slot = self.slot_mut(index)?;
        let next = slot.state().raw().next();
        slot.set_state(next.into());
        Ok(next)
    }

    /// Empty slot `index` and reset its state to `Absent`
    ///
    /// # Errors
    /// Returns `EngineError::IndexOutOfBounds` if `index >= len()`.
    pub fn clear_slot(&mut self, index: usize) -> Result<(), EngineError> {
        self.slot_mut(index)?.clear();
        Ok(())
    }

    /// Empty every slot and reset every state to `Absent`
    pub fn clear(&mut self) {
        self.letters.iter_mut().for_each(Letter::clear);
    }

    /// Number of slots holding a character
    #[must_use]
    pub fn filled(&self) -> usize {
        self.letters.iter().filter(|l| !l.is_empty()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.iter().all(|l| !l.is_empty())
    }

    /// The row's letters as a word, `None` while any slot is empty
    #[must_use]
    pub fn word(&self) -> Option<String> {
        self.letters.iter().map(Letter::character).collect()
    }

    /// Put every derived state back to the raw feedback it came from
    pub(crate) fn restore_raw_states(&mut self) {
        for letter in &mut self.letters {
            letter.set_state(letter.state().raw().into());
        }
    }

    /// Resolve duplicate letters within the row
    ///
    /// A slot reported `Absent` whose letter is reported present
    /// (`PresentHere` or `PresentWrongSpot`) at any other slot becomes
    /// `AbsentHereButElsewhere`. Present slots are never touched, so running
    /// this twice gives the same row as running it once.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{GuessRow, LetterState, RawState};
    ///
    /// let mut row = GuessRow::from_feedback(
    ///     "AA",
    ///     &[RawState::PresentWrongSpot, RawState::Absent],
    /// ).unwrap();
    /// row.derive_states();
    ///
    /// assert_eq!(row.letters()[0].state(), LetterState::PresentWrongSpot);
    /// assert_eq!(row.letters()[1].state(), LetterState::AbsentHereButElsewhere);
    /// ```
    pub fn derive_states(&mut self) {
        let mut present = [0u8; ALPHABET_LEN];
        let mut present_other = Vec::new();
        for letter in &self.letters {
            if letter.state().is_present()
                && let Some(ch) = letter.character()
            {
                match alphabet_index(ch) {
                    Some(i) => present[i] = present[i].saturating_add(1),
                    None => present_other.push(ch),
                }
            }
        }

        for letter in &mut self.letters {
            if letter.state() == LetterState::Absent
                && let Some(ch) = letter.character()
            {
                let elsewhere = match alphabet_index(ch) {
                    Some(i) => present[i] > 0,
                    None => present_other.contains(&ch),
                };
                if elsewhere {
                    letter.set_state(LetterState::AbsentHereButElsewhere);
                }
            }
        }
    }

    /// A resolved copy of this row, leaving `self` untouched
    #[must_use]
    pub fn derived(&self) -> Self {
        let mut row = self.clone();
        row.derive_states();
        row
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RawState::{Absent, PresentHere, PresentWrongSpot};

    fn states(row: &GuessRow) -> Vec<LetterState> {
        row.letters().iter().map(Letter::state).collect()
    }

    #[test]
    fn new_row_is_empty() {
        let row = GuessRow::new(5);
        assert_eq!(row.len(), 5);
        assert_eq!(row.filled(), 0);
        assert!(!row.is_complete());
        assert_eq!(row.word(), None);
        assert_eq!(row.to_string(), "_____");
    }

    #[test]
    fn set_character_overwrites() {
        let mut row = GuessRow::new(3);
        row.set_character(1, 'X').unwrap();
        row.set_character(1, 'Y').unwrap();
        assert_eq!(row.get(1).unwrap().character(), Some('Y'));
        assert_eq!(row.filled(), 1);
    }

    #[test]
    fn setters_reject_out_of_bounds_without_changes() {
        let mut row = GuessRow::new(5);
        let before = row.clone();

        assert!(matches!(
            row.set_character(5, 'A'),
            Err(EngineError::IndexOutOfBounds {
                index: 5,
                length: 5
            })
        ));
        assert!(matches!(
            row.set_state(9, PresentHere),
            Err(EngineError::IndexOutOfBounds { index: 9, .. })
        ));
        assert!(row.clear_slot(5).is_err());
        assert!(row.cycle_state(5).is_err());
        assert_eq!(row, before);
    }

    #[test]
    fn word_requires_every_slot() {
        let mut row = GuessRow::new(3);
        row.set_character(0, 'C').unwrap();
        row.set_character(2, 'T').unwrap();
        assert_eq!(row.word(), None);

        row.set_character(1, 'A').unwrap();
        assert!(row.is_complete());
        assert_eq!(row.word().as_deref(), Some("CAT"));
    }

    #[test]
    fn clear_resets_characters_and_states() {
        let mut row = GuessRow::from_feedback("CAT", &[PresentHere, PresentWrongSpot, Absent])
            .unwrap();
        row.clear();
        assert_eq!(row, GuessRow::new(3));
    }

    #[test]
    fn clear_slot_resets_state() {
        let mut row = GuessRow::from_feedback("CAT", &[PresentHere, PresentHere, PresentHere])
            .unwrap();
        row.clear_slot(2).unwrap();
        assert!(row.get(2).unwrap().is_empty());
        assert_eq!(row.get(2).unwrap().state(), LetterState::Absent);
        assert_eq!(row.get(1).unwrap().state(), LetterState::PresentHere);
    }

    #[test]
    fn cycle_state_follows_editing_cycle() {
        let mut row = GuessRow::new(1);
        assert_eq!(row.cycle_state(0).unwrap(), PresentWrongSpot);
        assert_eq!(row.cycle_state(0).unwrap(), PresentHere);
        assert_eq!(row.cycle_state(0).unwrap(), Absent);
    }

    #[test]
    fn cycle_from_derived_state_starts_at_raw() {
        let mut row = GuessRow::from_feedback("AA", &[PresentHere, Absent]).unwrap();
        row.derive_states();
        assert_eq!(row.cycle_state(1).unwrap(), PresentWrongSpot);
    }

    #[test]
    fn from_feedback_length_mismatch() {
        assert!(matches!(
            GuessRow::from_feedback("CRANE", &[Absent; 4]),
            Err(EngineError::IndexOutOfBounds { index: 4, .. })
        ));
    }

    #[test]
    fn derive_marks_duplicate_absent_slot() {
        let mut row = GuessRow::from_feedback("AA", &[PresentWrongSpot, Absent]).unwrap();
        row.derive_states();

        assert_eq!(
            states(&row),
            vec![
                LetterState::PresentWrongSpot,
                LetterState::AbsentHereButElsewhere
            ]
        );
    }

    #[test]
    fn derive_matches_characters_outside_uppercase_alphabet() {
        let mut row = GuessRow::from_feedback("ee", &[PresentHere, Absent]).unwrap();
        row.derive_states();
        assert_eq!(
            states(&row),
            vec![LetterState::PresentHere, LetterState::AbsentHereButElsewhere]
        );

        let mut row =
            GuessRow::from_feedback("é1é1", &[Absent, PresentWrongSpot, PresentHere, Absent])
                .unwrap();
        row.derive_states();
        assert_eq!(
            states(&row),
            vec![
                LetterState::AbsentHereButElsewhere,
                LetterState::PresentWrongSpot,
                LetterState::PresentHere,
                LetterState::AbsentHereButElsewhere,
            ]
        );
    }

    #[test]
    fn derive_keeps_case_distinct() {
        let mut row = GuessRow::from_feedback("Ee", &[PresentHere, Absent]).unwrap();
        row.derive_states();
        assert_eq!(row.get(1).unwrap().state(), LetterState::Absent);
    }

    #[test]
    fn derive_counts_present_here_too() {
        let mut row = GuessRow::from_feedback(
            "SPEED",
            &[Absent, Absent, Absent, PresentHere, PresentWrongSpot],
        )
        .unwrap();
        row.derive_states();

        assert_eq!(
            states(&row),
            vec![
                LetterState::Absent,
                LetterState::Absent,
                LetterState::AbsentHereButElsewhere,
                LetterState::PresentHere,
                LetterState::PresentWrongSpot,
            ]
        );
    }

    #[test]
    fn derive_leaves_unique_absent_letters() {
        let mut row = GuessRow::from_feedback("CRANE", &[Absent; 5]).unwrap();
        row.derive_states();
        assert!(states(&row).iter().all(|&s| s == LetterState::Absent));
    }

    #[test]
    fn derive_is_idempotent() {
        let rows = [
            ("EERIE", [Absent, PresentHere, Absent, Absent, PresentWrongSpot]),
            ("SASSY", [PresentWrongSpot, Absent, Absent, PresentHere, Absent]),
            ("ABBEY", [Absent; 5]),
        ];

        for (word, feedback) in rows {
            let once = GuessRow::from_feedback(word, &feedback).unwrap().derived();
            let twice = once.derived();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn derive_ignores_empty_slots() {
        let mut row = GuessRow::new(3);
        row.set_character(0, 'A').unwrap();
        row.set_state(0, PresentHere).unwrap();
        row.derive_states();
        assert_eq!(row.get(1).unwrap().state(), LetterState::Absent);
        assert_eq!(row.get(2).unwrap().state(), LetterState::Absent);
    }

    #[test]
    fn restore_raw_states_undoes_derivation() {
        let raw = GuessRow::from_feedback("AA", &[PresentHere, Absent]).unwrap();
        let mut resolved = raw.derived();
        assert_ne!(resolved, raw);

        resolved.restore_raw_states();
        assert_eq!(resolved, raw);
    }

    #[test]
    fn derived_copy_leaves_original() {
        let row = GuessRow::from_feedback("AA", &[PresentHere, Absent]).unwrap();
        let _ = row.derived();
        assert_eq!(row.get(1).unwrap().state(), LetterState::Absent);
    }
}
