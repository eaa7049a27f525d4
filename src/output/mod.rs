//! Terminal output formatting
//!
//! Coloured rows and candidate listings for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_candidates, print_filter_result, print_replay_result, print_step};
