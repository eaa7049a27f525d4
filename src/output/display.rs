//! Display functions for command results

use super::formatters::{candidate_lines, colored_row, create_progress_bar};
use crate::commands::{FilterResult, ReplayResult, Step};
use crate::core::{RawState, to_emoji};
use colored::Colorize;

const WORDS_PER_LINE: usize = 8;
const BAR_WIDTH: usize = 20;

/// Print one submitted guess with how far it narrowed the candidates
pub fn print_step(step: &Step, total: usize) {
    println!(
        "  {}. {}  {} → {}  [{}]",
        (step.attempt + 1).to_string().bright_black(),
        colored_row(&step.row),
        step.candidates_before,
        step.candidates_after.to_string().bright_yellow().bold(),
        create_progress_bar(step.candidates_after, total, BAR_WIDTH).cyan()
    );
}

/// Print up to `limit` candidates, several to a line
pub fn print_candidates(words: &[String], limit: usize) {
    if words.is_empty() {
        println!("{}", "No words match. Check the feedback you entered.".red());
        return;
    }

    let shown = &words[..words.len().min(limit)];
    for line in candidate_lines(shown, WORDS_PER_LINE) {
        println!("  {line}");
    }
    if words.len() > shown.len() {
        println!(
            "  {}",
            format!("... and {} more", words.len() - shown.len()).bright_black()
        );
    }
}

/// Print the result of applying clues
pub fn print_filter_result(result: &FilterResult, total: usize, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "FILTER".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        print_step(step, total);
    }

    println!(
        "\n{} candidates remaining:",
        result.candidates.len().to_string().bright_yellow().bold()
    );
    print_candidates(&result.candidates, limit);
}

/// Print the result of replaying guesses against an answer
pub fn print_replay_result(result: &ReplayResult, total: usize, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Replaying: {}", result.answer.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        print_step(step, total);
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
        for step in &result.steps {
            let feedback: Vec<RawState> = step
                .row
                .letters()
                .iter()
                .map(|letter| letter.state().raw())
                .collect();
            println!("  {}", to_emoji(&feedback));
        }
    } else {
        println!(
            "{}",
            format!(
                "{} candidates remain after {} guesses:",
                result.candidates.len(),
                result.steps.len()
            )
            .yellow()
            .bold()
        );
        print_candidates(&result.candidates, limit);
    }
}
