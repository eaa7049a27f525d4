//! Keyboard editing of the guess grid
//!
//! [`Editor`] pairs a [`Session`] with a cursor over the active row and
//! turns single key presses into row edits and submissions. Every handler
//! reports an [`EditOutcome`] so a front end can show what happened.

use crate::core::{EngineError, RawState};
use crate::session::Session;

/// Result of one editing action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A letter was written into slot `index`
    Typed { index: usize, letter: char },
    /// The raw state of slot `index` moved on to `state`
    Cycled { index: usize, state: RawState },
    /// Slot `index` was emptied
    Erased { index: usize },
    /// The active row was emptied
    RowCleared,
    /// Attempt `attempt` was submitted, leaving `remaining` candidates
    Submitted { attempt: usize, remaining: usize },
    /// Attempt `attempt` was withdrawn and is editable again
    Reopened { attempt: usize },
    /// Submission failed; nothing changed
    Rejected(EngineError),
    /// The key had no effect
    Ignored,
}

/// Cursor-driven editor over a session's active row
#[derive(Debug, Clone)]
pub struct Editor {
    session: Session,
    cursor: usize,
}

impl Editor {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session, cursor: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Slot of the active row that keys act on
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn last_slot(&self) -> usize {
        self.session.config().word_length - 1
    }

    /// Write a letter at or just after the cursor
    ///
    /// An empty cursor slot takes the letter in place. A filled one moves the
    /// cursor one slot right first, so a filled last slot ignores the key.
    /// Anything but an ASCII letter is ignored.
    pub fn type_letter(&mut self, ch: char) -> EditOutcome {
        if !ch.is_ascii_alphabetic() {
            return EditOutcome::Ignored;
        }
        let letter = ch.to_ascii_uppercase();
        let last = self.last_slot();
        let mut cursor = self.cursor;

        let Ok(row) = self.session.active_row_mut() else {
            return EditOutcome::Ignored;
        };
        if row.get(cursor).is_some_and(|slot| !slot.is_empty()) {
            if cursor >= last {
                return EditOutcome::Ignored;
            }
            cursor += 1;
        }
        if row.set_character(cursor, letter).is_err() {
            return EditOutcome::Ignored;
        }

        self.cursor = cursor;
        EditOutcome::Typed {
            index: cursor,
            letter,
        }
    }

    /// Step the cursor slot through absent, wrong spot and here
    pub fn cycle_state(&mut self) -> EditOutcome {
        let index = self.cursor;
        match self
            .session
            .active_row_mut()
            .and_then(|row| row.cycle_state(index))
        {
            Ok(state) => EditOutcome::Cycled { index, state },
            Err(_) => EditOutcome::Ignored,
        }
    }

    /// Empty the cursor slot and step the cursor left
    pub fn backspace(&mut self) -> EditOutcome {
        let index = self.cursor;
        match self
            .session
            .active_row_mut()
            .and_then(|row| row.clear_slot(index))
        {
            Ok(()) => {
                self.cursor = index.saturating_sub(1);
                EditOutcome::Erased { index }
            }
            Err(_) => EditOutcome::Ignored,
        }
    }

    /// Submit the active attempt
    pub fn submit(&mut self) -> EditOutcome {
        let attempt = self.session.active_attempt();
        match self.session.submit_attempt(attempt) {
            Ok(candidates) => {
                let remaining = candidates.len();
                self.cursor = 0;
                EditOutcome::Submitted { attempt, remaining }
            }
            Err(err) => EditOutcome::Rejected(err),
        }
    }

    /// Clear the active row, or reopen the previous attempt if it is empty
    ///
    /// This is the only action that still works once the grid is full.
    pub fn delete(&mut self) -> EditOutcome {
        if self.session.active_row().filled() > 0 {
            if let Ok(row) = self.session.active_row_mut() {
                row.clear();
            }
            self.cursor = 0;
            return EditOutcome::RowCleared;
        }

        if self.session.undo_last().is_some() {
            self.cursor = self.last_slot();
            return EditOutcome::Reopened {
                attempt: self.session.active_attempt(),
            };
        }

        self.cursor = 0;
        EditOutcome::Ignored
    }

    /// Start over with an empty grid
    pub fn reset(&mut self) {
        self.session.reset();
        self.cursor = 0;
    }
}
