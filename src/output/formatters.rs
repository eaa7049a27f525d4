//! Formatting utilities for terminal output

use crate::core::{GuessRow, Letter, LetterState};
use colored::{ColoredString, Colorize};

/// A letter as a coloured tile, `" A "` on the colour of its state
///
/// Derived slots keep the gray tile but show their letter in yellow.
#[must_use]
pub fn colored_tile(letter: &Letter) -> ColoredString {
    let text = format!(" {} ", letter.character().unwrap_or(' '));
    let text = text.as_str();
    match letter.state() {
        _ if letter.is_empty() => text.normal(),
        LetterState::PresentHere => text.black().on_green().bold(),
        LetterState::PresentWrongSpot => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black().bold(),
        LetterState::AbsentHereButElsewhere => text.yellow().on_bright_black().bold(),
    }
}

/// A whole row as adjacent tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.letters()
        .iter()
        .map(|letter| colored_tile(letter).to_string())
        .collect()
}

/// Lay words out `per_line` to a line
#[must_use]
pub fn candidate_lines(words: &[String], per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|chunk| chunk.join("  "))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width).div_ceil(max)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
