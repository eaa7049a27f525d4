//! Wordle Filter
//!
//! Narrows a word list from the feedback of every guess in a Wordle grid.
//! Each submitted attempt filters the candidates left by the one before it,
//! with Wordle's duplicate-letter rules applied to every row.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::{parse_feedback, GuessRow};
//! use wordle_filter::session::{Session, SessionConfig};
//! use wordle_filter::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::new(["CRANE", "TRACE", "SLATE", "TOAST"], 5).unwrap();
//! let mut session = Session::new(dictionary, SessionConfig::default()).unwrap();
//!
//! // CRANE: C yellow, R and A green, N gray, E green
//! let feedback = parse_feedback("YGG-G", 5).unwrap();
//! *session.active_row_mut().unwrap() = GuessRow::from_feedback("CRANE", &feedback).unwrap();
//!
//! assert_eq!(session.submit_attempt(0).unwrap(), ["TRACE"]);
//! ```

// Letters, rows and feedback
pub mod core;

// Candidate filtering
pub mod filter;

// Attempt chaining
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
