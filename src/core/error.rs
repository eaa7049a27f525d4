//! Errors reported by the guess constraint engine
//!
//! Every variant is recoverable: the operation that reports it leaves the
//! row or session exactly as it was.

use thiserror::Error;

/// Error type for row edits and attempt submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Submission attempted before every slot of the active row has a letter
    #[error("row is incomplete: {filled} of {length} letters entered")]
    IncompleteRow { filled: usize, length: usize },

    /// The row spells a word that is not in the dictionary
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    /// Every attempt of the grid has already been submitted
    #[error("no attempts remaining (the grid has {max_rows} rows)")]
    NoMoreAttempts { max_rows: usize },

    /// A slot index outside `[0, length)`
    #[error("letter index {index} is out of bounds for a {length}-letter row")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Attempts are submitted strictly in order
    #[error("attempt {requested} is not the active attempt (active is {active})")]
    AttemptNotActive { requested: usize, active: usize },
}
