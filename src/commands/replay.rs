//! Replay guesses against a known answer
//!
//! Scores each guess the way the puzzle would and submits it, showing how the
//! candidate set narrows toward the answer.

use super::{Step, submit_guess};
use crate::core::{is_solved, score_guess};
use crate::session::Session;
use anyhow::{Context, Result, ensure};
use log::debug;

/// What to replay
pub struct ReplayConfig {
    pub answer: String,
    pub guesses: Vec<String>,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(answer: &str, guesses: Vec<String>) -> Self {
        Self {
            answer: answer.trim().to_ascii_uppercase(),
            guesses: guesses
                .into_iter()
                .map(|guess| guess.trim().to_ascii_uppercase())
                .collect(),
        }
    }
}

/// Result of a replay
pub struct ReplayResult {
    pub answer: String,
    pub steps: Vec<Step>,
    pub solved: bool,
    pub candidates: Vec<String>,
}

/// Replay `config.guesses` in order, stopping early once one is correct
///
/// # Errors
///
/// Returns an error if the answer is not in the session's dictionary, or if a
/// guess cannot be submitted.
pub fn replay_guesses(session: &mut Session, config: &ReplayConfig) -> Result<ReplayResult> {
    ensure!(
        session.dictionary().contains(&config.answer),
        "answer '{}' is not in the word list",
        config.answer
    );

    let mut steps = Vec::with_capacity(config.guesses.len());
    let mut solved = false;

    for guess in &config.guesses {
        let feedback = score_guess(guess, &config.answer);
        let step = submit_guess(session, guess, &feedback)
            .with_context(|| format!("guess {} ({guess})", steps.len() + 1))?;
        debug!(
            "{guess}: {} -> {} candidates",
            step.candidates_before, step.candidates_after
        );
        steps.push(step);

        if is_solved(&feedback) {
            solved = true;
            break;
        }
    }

    Ok(ReplayResult {
        answer: config.answer.clone(),
        steps,
        solved,
        candidates: session.current_candidates().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawState;
    use crate::session::SessionConfig;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    fn session() -> Session {
        let dictionary = words_from_slice(WORDS, 5).unwrap();
        Session::new(dictionary, SessionConfig::default()).unwrap()
    }

    fn guesses(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn replay_solves_and_keeps_answer() {
        let mut s = session();
        let config = ReplayConfig::new("latte", guesses(&["crane", "toast", "latte", "slate"]));

        let result = replay_guesses(&mut s, &config).unwrap();

        assert!(result.solved);
        assert_eq!(result.steps.len(), 3);
        assert!(result.candidates.contains(&"LATTE".to_string()));
        for pair in result.steps.windows(2) {
            assert!(pair[1].candidates_after <= pair[0].candidates_after);
        }
        let last = &result.steps[2].row;
        assert!(
            last.letters()
                .iter()
                .all(|l| l.state().raw() == RawState::PresentHere)
        );
    }

    #[test]
    fn answer_survives_every_step() {
        for answer in ["SPEED", "ERASE", "FLOOR", "EERIE", "SASSY"] {
            let mut s = session();
            let config = ReplayConfig::new(answer, guesses(&["SLATE", "ROBOT", "ABBEY"]));
            let result = replay_guesses(&mut s, &config).unwrap();

            assert!(result.candidates.iter().any(|w| w == answer), "{answer}");
        }
    }

    #[test]
    fn unsolved_replay_reports_remaining() {
        let mut s = session();
        let config = ReplayConfig::new("TOAST", guesses(&["CRANE"]));
        let result = replay_guesses(&mut s, &config).unwrap();

        assert!(!result.solved);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.candidates.len(), result.steps[0].candidates_after);
    }

    #[test]
    fn unknown_answer_is_rejected() {
        let mut s = session();
        let config = ReplayConfig::new("QQQQQ", guesses(&["CRANE"]));
        assert!(replay_guesses(&mut s, &config).is_err());
        assert_eq!(s.active_attempt(), 0);
    }
}
