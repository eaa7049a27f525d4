//! Word list loading utilities
//!
//! Builds a [`Dictionary`] from a file or from an embedded string slice.
//! Unlike [`Dictionary::new`], loading is lenient: entries of another length
//! or with non-letter characters are skipped, so general-purpose word files
//! can be used directly.

use super::dictionary::{Dictionary, DictionaryError};
use log::debug;
use std::fs;
use std::path::Path;

fn is_usable(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn from_entries<'a>(
    entries: impl Iterator<Item = &'a str>,
    word_length: usize,
) -> Result<Dictionary, DictionaryError> {
    let mut skipped = 0usize;
    let usable: Vec<&str> = entries
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .filter(|word| {
            let keep = is_usable(word, word_length);
            if !keep {
                skipped += 1;
            }
            keep
        })
        .collect();

    let dictionary = Dictionary::new(usable, word_length)?;
    debug!(
        "loaded {} {word_length}-letter words ({skipped} entries skipped)",
        dictionary.len()
    );

    if dictionary.is_empty() {
        return Err(DictionaryError::Empty { word_length });
    }
    Ok(dictionary)
}

/// Load a dictionary from a file with one word per line
///
/// Both `\n` and `\r\n` line endings are accepted.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read and
/// `DictionaryError::Empty` if it holds no usable `word_length`-letter words.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    from_entries(content.lines(), word_length)
}

/// Build a dictionary from an embedded string slice
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if the slice holds no usable
/// `word_length`-letter words.
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
/// use wordle_filter::wordlists::WORDS;
///
/// let dictionary = words_from_slice(WORDS, 5).unwrap();
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Result<Dictionary, DictionaryError> {
    from_entries(slice.iter().copied(), word_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let dictionary = words_from_slice(&["crane", "slate", "irate"], 5).unwrap();

        assert_eq!(dictionary.words(), ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_skips_other_lengths_and_symbols() {
        let dictionary =
            words_from_slice(&["crane", "toolong", "abc", "o'hay", "slate"], 5).unwrap();

        assert_eq!(dictionary.words(), ["CRANE", "SLATE"]);
    }

    #[test]
    fn words_from_slice_empty_is_error() {
        assert!(matches!(
            words_from_slice(&[], 5),
            Err(DictionaryError::Empty { word_length: 5 })
        ));
        assert!(matches!(
            words_from_slice(&["crane"], 6),
            Err(DictionaryError::Empty { word_length: 6 })
        ));
    }

    #[test]
    fn load_from_file_handles_crlf() {
        let path = std::env::temp_dir().join(format!(
            "wordle_filter_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            write!(file, "crane\r\nslate\r\n\r\nabc\r\n").unwrap();
        }

        let dictionary = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.words(), ["CRANE", "SLATE"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/definitely/not/here.txt", 5),
            Err(DictionaryError::Io { .. })
        ));
    }
}
