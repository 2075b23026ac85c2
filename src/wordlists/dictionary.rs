//! Dictionary of valid words
//!
//! An immutable set of lowercase words built once per session and shared
//! read-only by everything that needs word validity.

use rustc_hash::FxHashSet;

/// Immutable set of valid lowercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw word entries
    ///
    /// Entries are trimmed and lowercased; blank lines and entries with
    /// non-letter characters are skipped.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
            .collect();
        Self { words }
    }

    /// Check membership of a lowercase word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_after_build() {
        let dict = Dictionary::new(["cat", "at"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
        assert!(dict.contains("at"));
        assert!(!dict.contains("dog"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let dict = Dictionary::new(["  CaT\n", "at"]);
        assert!(dict.contains("cat"));
    }

    #[test]
    fn skips_blank_and_malformed_entries() {
        let dict = Dictionary::new(["", "   ", "ok", "not ok", "h3llo"]);
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("ok"));
    }

    #[test]
    fn duplicate_entries_collapse() {
        let dict = Dictionary::new(["cat", "cat", "CAT"]);
        assert_eq!(dict.len(), 1);
    }
}
