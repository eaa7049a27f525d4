//! One-shot filtering command
//!
//! Applies `GUESS:FEEDBACK` clues to a fresh session in order and reports the
//! words that survive all of them.

use super::{Step, submit_guess};
use crate::core::{RawState, parse_feedback};
use crate::session::Session;
use anyhow::{Context, Result};

/// A guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub word: String,
    pub feedback: Vec<RawState>,
}

/// Result of applying a list of clues
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub steps: Vec<Step>,
    pub candidates: Vec<String>,
}

/// Parse a clue written as `GUESS:FEEDBACK`, e.g. `crane:-Y--G`
///
/// # Errors
///
/// Returns an error if the separator is missing or the feedback is invalid
/// for `word_length` letters.
pub fn parse_clue(clue: &str, word_length: usize) -> Result<Clue> {
    let (word, feedback) = clue
        .split_once(':')
        .with_context(|| format!("clue '{clue}' must look like GUESS:FEEDBACK"))?;
    let feedback = parse_feedback(feedback, word_length)
        .with_context(|| format!("bad feedback in clue '{clue}'"))?;

    Ok(Clue {
        word: word.trim().to_ascii_uppercase(),
        feedback,
    })
}

/// Apply every clue to `session`, oldest first
///
/// All clues are parsed before anything is submitted.
///
/// # Errors
///
/// Returns an error naming the first clue that cannot be parsed or submitted.
pub fn run_filter<S: AsRef<str>>(session: &mut Session, clues: &[S]) -> Result<FilterResult> {
    let word_length = session.config().word_length;
    let parsed = clues
        .iter()
        .map(|clue| parse_clue(clue.as_ref(), word_length))
        .collect::<Result<Vec<_>>>()?;

    let mut steps = Vec::with_capacity(parsed.len());
    for (i, clue) in parsed.iter().enumerate() {
        let step = submit_guess(session, &clue.word, &clue.feedback)
            .with_context(|| format!("clue {} ({})", i + 1, clue.word))?;
        steps.push(step);
    }

    Ok(FilterResult {
        steps,
        candidates: session.current_candidates().to_vec(),
    })
}
