//! Word list loading utilities
//!
//! Provides functions to build a `Dictionary` from a file or from the
//! embedded word list.

use crate::wordlists::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Entries are normalized to lowercase; blank lines and malformed entries are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use tilescore::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::new(content.lines()))
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use tilescore::wordlists::WORDS;
/// use tilescore::wordlists::loader::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice.iter().copied())
}
