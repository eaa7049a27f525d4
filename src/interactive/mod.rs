//! Interactive full-screen mode
//!
//! The grid editor plus a ratatui front end driving it.

mod app;
pub mod editor;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use editor::{EditOutcome, Editor};
