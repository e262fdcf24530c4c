//! Word list loading utilities
//!
//! Word lists are comma-separated, on one line or spread across several.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Split comma-separated word list content into trimmed, non-empty entries
///
/// # Examples
/// ```
/// use akshara_wordle::wordlists::loader::parse_entries;
///
/// let entries = parse_entries("राम, सीता,\nलक्ष्मण,,");
/// assert_eq!(entries, ["राम", "सीता", "लक्ष्मण"]);
/// ```
#[must_use]
pub fn parse_entries(content: &str) -> Vec<String> {
    content
        .split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Read raw entries from a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_entries<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use akshara_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let entries = read_entries(path)?;
    Ok(entries.iter().filter_map(|entry| to_word(entry)).collect())
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use akshara_wordle::wordlists::loader::words_from_slice;
/// use akshara_wordle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&entry| to_word(entry)).collect()
}

fn to_word(entry: &str) -> Option<Word> {
    match Word::new(entry) {
        Ok(word) => Some(word),
        Err(e) => {
            debug!(entry, error = %e, "skipping word list entry");
            None
        }
    }
}
