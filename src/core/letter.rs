//! Per-slot letter model
//!
//! A slot holds at most one character and what is known about that character
//! at that position.

use std::fmt;

/// Resolved knowledge about one slot of a guess
///
/// The first three variants are raw puzzle feedback. `AbsentHereButElsewhere`
/// only ever comes out of [`GuessRow::derive_states`](super::GuessRow::derive_states):
/// the slot was reported absent, but the same letter is present at another
/// slot of the same row, so the letter exists in the answer, just not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// Letter is not in the answer at all
    #[default]
    Absent,
    /// Letter is in the answer, but not at this position
    PresentWrongSpot,
    /// Letter is in the answer at exactly this position
    PresentHere,
    /// This occurrence is absent, another occurrence in the row is present
    AbsentHereButElsewhere,
}

impl LetterState {
    /// The raw feedback this state was derived from
    #[inline]
    #[must_use]
    pub const fn raw(self) -> RawState {
        match self {
            Self::Absent | Self::AbsentHereButElsewhere => RawState::Absent,
            Self::PresentWrongSpot => RawState::PresentWrongSpot,
            Self::PresentHere => RawState::PresentHere,
        }
    }

    /// Whether the puzzle reported this letter as part of the answer
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::PresentHere | Self::PresentWrongSpot)
    }
}

/// Feedback a caller is allowed to set directly
///
/// This is the settable subset of [`LetterState`]; the derived-only variant
/// has no counterpart, so it cannot be written by an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RawState {
    #[default]
    Absent,
    PresentWrongSpot,
    PresentHere,
}

impl RawState {
    /// Next state in the editing cycle: absent, wrong spot, here, absent again
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::PresentWrongSpot,
            Self::PresentWrongSpot => Self::PresentHere,
            Self::PresentHere => Self::Absent,
        }
    }
}

impl From<RawState> for LetterState {
    fn from(raw: RawState) -> Self {
        match raw {
            RawState::Absent => Self::Absent,
            RawState::PresentWrongSpot => Self::PresentWrongSpot,
            RawState::PresentHere => Self::PresentHere,
        }
    }
}

/// One slot of a guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Letter {
    character: Option<char>,
    state: LetterState,
}

impl Letter {
    /// Create a filled slot with raw feedback
    #[must_use]
    pub fn new(character: char, state: RawState) -> Self {
        Self {
            character: Some(character),
            state: state.into(),
        }
    }

    /// The slot's character, `None` when nothing has been entered
    #[inline]
    #[must_use]
    pub const fn character(&self) -> Option<char> {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.character.is_none()
    }

    pub(crate) fn set_character(&mut self, character: char) {
        self.character = Some(character);
    }

    pub(crate) fn set_state(&mut self, state: LetterState) {
        self.state = state;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.character {
            Some(ch) => write!(f, "{ch}"),
            None => write!(f, "_"),
        }
    }
}
