//! Core domain types for the guess constraint engine
//!
//! Letters, rows, feedback and the engine's error type. Everything here is
//! pure data plus the duplicate-letter derivation rule; no I/O.

mod error;
mod feedback;
mod letter;
mod row;

pub use error::EngineError;
pub use feedback::{FeedbackError, is_solved, parse_feedback, score_guess, to_emoji};
pub use letter::{Letter, LetterState, RawState};
pub use row::GuessRow;
