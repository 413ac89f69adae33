//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize_letter;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Normalize one entry, returning `None` for blanks and non-alphabetic words
#[must_use]
pub fn normalize_word(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.chars().map(normalize_letter).collect()
}

/// Load words from a file, one per line
///
/// Entries are trimmed and lowercased; blank lines and entries containing
/// anything other than the letters a-z are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or
/// `Error::EmptyWordList` if no usable words remain.
///
/// # Examples
/// ```no_run
/// use sqwordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }
    Ok(words)
}

/// Convert embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use sqwordle::wordlists::loader::words_from_slice;
/// use sqwordle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter_map(|line| {
            let word = normalize_word(line);
            if word.is_none() && !line.trim().is_empty() {
                warn!(entry = line, "skipping word list entry");
            }
            word
        })
        .collect()
}
