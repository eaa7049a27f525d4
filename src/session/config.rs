//! Grid configuration

use thiserror::Error;

/// Error type for invalid grid settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroWordLength,

    #[error("the grid needs at least one row")]
    ZeroRows,

    #[error("dictionary holds {dictionary}-letter words but the grid is {grid} letters wide")]
    LengthMismatch { dictionary: usize, grid: usize },
}

/// Size of the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Letters per guess
    pub word_length: usize,
    /// Number of guesses before the session is finished
    pub max_rows: usize,
}

impl SessionConfig {
    /// Letters per guess in the classic puzzle
    pub const DEFAULT_WORD_LENGTH: usize = 5;
    /// Guesses in the classic puzzle
    pub const DEFAULT_MAX_ROWS: usize = 6;

    /// Create a grid configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either dimension is zero.
    pub const fn new(word_length: usize, max_rows: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        Ok(Self {
            word_length,
            max_rows,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: Self::DEFAULT_WORD_LENGTH,
            max_rows: Self::DEFAULT_MAX_ROWS,
        }
    }
}
