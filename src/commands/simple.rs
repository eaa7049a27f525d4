//! Simple interactive CLI mode
//!
//! Line-based filtering without the TUI: enter each guess and its feedback,
//! see what is left.

use super::submit_guess;
use crate::core::{FeedbackError, RawState, is_solved, parse_feedback};
use crate::output::{print_candidates, print_step};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A line typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
    Guess(String),
    Nothing,
}

fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => Command::Nothing,
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::New,
        "undo" | "u" => Command::Undo,
        _ => Command::Guess(input.to_ascii_uppercase()),
    }
}

/// Feedback typed at the feedback prompt; `win` stands for all green
fn parse_response(input: &str, word_length: usize) -> Result<Vec<RawState>, FeedbackError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "win" | "correct" | "solved" => Ok(vec![RawState::PresentHere; word_length]),
        _ => parse_feedback(input, word_length),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(session: &mut Session, limit: usize) -> Result<()> {
    let word_length = session.config().word_length;
    let total = session.dictionary().len();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Filter - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter each guess you played, then the feedback it got:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if the guess was right\n");
    println!("Commands: 'quit' to exit, 'new' to start over, 'undo' to take back a guess\n");
    println!("{total} words loaded.\n");

    loop {
        if session.is_finished() {
            println!(
                "{}",
                "All rows used. Type 'undo' or 'new', or 'quit'.".bright_black()
            );
        }

        let prompt = format!("Guess {}", session.active_attempt() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(());
        };

        let word = match parse_command(&input) {
            Command::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Command::New => {
                session.reset();
                println!("\n🔄 Started over with {total} words.\n");
                continue;
            }
            Command::Undo => {
                match session.undo_last() {
                    Some(row) => println!("✓ Took back {row}\n"),
                    None => println!("Nothing to undo!\n"),
                }
                continue;
            }
            Command::Nothing => continue,
            Command::Guess(word) => word,
        };

        let feedback = loop {
            let Some(input) = get_user_input("Feedback")? else {
                return Ok(());
            };
            match parse_response(&input, word_length) {
                Ok(feedback) => break feedback,
                Err(err) => println!("❌ {err}\n"),
            }
        };

        match submit_guess(session, &word, &feedback) {
            Ok(step) => {
                println!();
                print_step(&step, total);
                println!();

                if is_solved(&feedback) {
                    println!(
                        "{}\n",
                        format!("🎉 Solved in {} guesses!", step.attempt + 1)
                            .bright_green()
                            .bold()
                    );
                } else {
                    print_candidates(session.current_candidates(), limit);
                    println!();
                }
            }
            Err(err) => println!("❌ {err:#}\n"),
        }
    }
}

/// Read one trimmed line, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
