//! Puzzle feedback: parsing, scoring and rendering
//!
//! Feedback strings use one symbol per letter:
//! - `G`/`g`/🟩 = green (letter in this position)
//! - `Y`/`y`/🟨 = yellow (letter in the word, wrong position)
//! - `-`/`_`/`.`/⬜ = gray (letter not in the word)

use super::letter::RawState;
use thiserror::Error;

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have {expected} symbols, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid feedback symbol '{0}' (use G, Y or -)")]
    InvalidSymbol(char),
}

/// Parse a feedback string like `"GY-G-"` or `"🟩🟨⬜🟩⬜"`
///
/// # Errors
/// Returns `FeedbackError` if the string does not have exactly `word_length`
/// symbols or contains an unknown symbol.
///
/// # Examples
/// ```
/// use wordle_filter::core::{parse_feedback, RawState};
///
/// let states = parse_feedback("GY-", 3).unwrap();
/// assert_eq!(states, vec![RawState::PresentHere, RawState::PresentWrongSpot, RawState::Absent]);
///
/// assert_eq!(parse_feedback("🟩🟨⬜", 3).unwrap(), states);
/// ```
pub fn parse_feedback(s: &str, word_length: usize) -> Result<Vec<RawState>, FeedbackError> {
    let states = s
        .trim()
        .chars()
        .map(|ch| match ch {
            'G' | 'g' | '🟩' => Ok(RawState::PresentHere),
            'Y' | 'y' | '🟨' => Ok(RawState::PresentWrongSpot),
            '-' | '_' | '.' | '⬜' => Ok(RawState::Absent),
            other => Err(FeedbackError::InvalidSymbol(other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if states.len() != word_length {
        return Err(FeedbackError::Length {
            expected: word_length,
            actual: states.len(),
        });
    }

    Ok(states)
}

/// The feedback the puzzle gives when `guess` is played against `answer`
///
/// Implements Wordle's duplicate-letter rules:
/// 1. First pass: exact matches turn green and use up that letter of the answer
/// 2. Second pass: remaining letters turn yellow while unused copies remain
///
/// Words are compared character by character; `guess` and `answer` are
/// expected to have the same length, extra characters of `guess` score gray.
///
/// # Examples
/// ```
/// use wordle_filter::core::{score_guess, RawState::*};
///
/// // ROBOT against FLOOR: the first O is yellow, the second O is green
/// assert_eq!(
///     score_guess("ROBOT", "FLOOR"),
///     vec![PresentWrongSpot, PresentWrongSpot, Absent, PresentHere, Absent]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &str, answer: &str) -> Vec<RawState> {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();
    let mut result = vec![RawState::Absent; guess.len()];
    let mut unused: Vec<Option<char>> = answer.iter().copied().map(Some).collect();

    for (i, &letter) in guess.iter().enumerate() {
        if answer.get(i) == Some(&letter) {
            result[i] = RawState::PresentHere;
            unused[i] = None;
        }
    }

    for (i, &letter) in guess.iter().enumerate() {
        if result[i] == RawState::PresentHere {
            continue;
        }
        if let Some(slot) = unused.iter_mut().find(|slot| **slot == Some(letter)) {
            result[i] = RawState::PresentWrongSpot;
            *slot = None;
        }
    }

    result
}

/// Render feedback as a string like `"🟩🟨⬜🟩🟨"`
#[must_use]
pub fn to_emoji(states: &[RawState]) -> String {
    states
        .iter()
        .map(|state| match state {
            RawState::PresentHere => '🟩',
            RawState::PresentWrongSpot => '🟨',
            RawState::Absent => '⬜',
        })
        .collect()
}

/// True when every letter is green
#[must_use]
pub fn is_solved(states: &[RawState]) -> bool {
    !states.is_empty() && states.iter().all(|&s| s == RawState::PresentHere)
}

#[cfg(test)]
mod tests {
    use super::*;
    use RawState::{Absent, PresentHere, PresentWrongSpot};

    #[test]
    fn parse_accepts_all_symbol_sets() {
        let p1 = parse_feedback("GYG--", 5).unwrap();
        let p2 = parse_feedback("🟩🟨🟩⬜⬜", 5).unwrap();
        let p3 = parse_feedback("gyg_.", 5).unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(
            p1,
            vec![PresentHere, PresentWrongSpot, PresentHere, Absent, Absent]
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            parse_feedback("GYGGYG", 5),
            Err(FeedbackError::Length {
                expected: 5,
                actual: 6
            })
        ));
        assert!(matches!(
            parse_feedback("GYG", 5),
            Err(FeedbackError::Length { actual: 3, .. })
        ));
        assert!(matches!(
            parse_feedback("GXGGY", 5),
            Err(FeedbackError::InvalidSymbol('X'))
        ));
        assert!(parse_feedback("", 5).is_err());
    }

    #[test]
    fn parse_respects_configured_length() {
        assert_eq!(parse_feedback("GG", 2).unwrap().len(), 2);
        assert!(parse_feedback("GG", 5).is_err());
    }

    #[test]
    fn score_all_gray() {
        assert_eq!(score_guess("ABCDE", "FGHIJ"), vec![Absent; 5]);
    }

    #[test]
    fn score_all_green() {
        let states = score_guess("CRANE", "CRANE");
        assert_eq!(states, vec![PresentHere; 5]);
        assert!(is_solved(&states));
    }

    #[test]
    fn score_duplicate_letters_yellow() {
        // ERASE has two E's, so both E's of SPEED are yellow
        assert_eq!(
            score_guess("SPEED", "ERASE"),
            vec![PresentWrongSpot, Absent, PresentWrongSpot, PresentWrongSpot, Absent]
        );
    }

    #[test]
    fn score_green_takes_priority_over_yellow() {
        // ABIDE has one E at the end; the green E of the guess uses it up
        assert_eq!(
            score_guess("EERIE", "ABIDE"),
            vec![Absent, Absent, Absent, PresentWrongSpot, PresentHere]
        );
    }

    #[test]
    fn score_real_wordle_example() {
        // R is gray because SLATE has no R
        assert_eq!(
            score_guess("CRANE", "SLATE"),
            vec![Absent, Absent, PresentHere, Absent, PresentHere]
        );
    }

    #[test]
    fn emoji_rendering() {
        let states = parse_feedback("GY-GY", 5).unwrap();
        assert_eq!(to_emoji(&states), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn solved_needs_every_green() {
        assert!(!is_solved(&[PresentHere, PresentWrongSpot]));
        assert!(!is_solved(&[]));
    }
}
