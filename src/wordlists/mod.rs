//! Word lists for candidate filtering
//!
//! Provides the [`Dictionary`] type, an embedded default list, and loaders for
//! user-supplied files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};
