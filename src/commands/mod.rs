//! Command implementations

pub mod filter;
pub mod replay;
pub mod simple;

pub use filter::{Clue, FilterResult, parse_clue, run_filter};
pub use replay::{ReplayConfig, ReplayResult, replay_guesses};
pub use simple::run_simple;

use crate::core::{GuessRow, RawState};
use crate::session::Session;
use anyhow::{Result, ensure};
use std::mem;

/// One submitted guess and how it narrowed the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub attempt: usize,
    /// The row as stored, after duplicate-letter derivation
    pub row: GuessRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Write `word` with `feedback` into the active row and submit it
///
/// The word is trimmed and uppercased first. On failure the session is left
/// as it was, including whatever the active row held.
///
/// # Errors
///
/// Returns an error if the word or feedback length differs from the grid
/// width, or if the session rejects the submission.
pub fn submit_guess(session: &mut Session, word: &str, feedback: &[RawState]) -> Result<Step> {
    let word_length = session.config().word_length;
    let word = word.trim().to_ascii_uppercase();
    let letters = word.chars().count();
    ensure!(
        letters == word_length,
        "'{word}' has {letters} letters, expected {word_length}"
    );

    let row = GuessRow::from_feedback(&word, feedback)?;
    let attempt = session.active_attempt();
    let candidates_before = session.current_candidates().len();

    let previous = mem::replace(session.active_row_mut()?, row);
    let candidates_after = match session.submit_attempt(attempt) {
        Ok(candidates) => candidates.len(),
        Err(err) => {
            if let Ok(active) = session.active_row_mut() {
                *active = previous;
            }
            return Err(err.into());
        }
    };

    Ok(Step {
        attempt,
        row: session.attempts()[attempt].row().clone(),
        candidates_before,
        candidates_after,
    })
}
