//! Word lists and the session dictionary
//!
//! Provides the `Dictionary` type, an embedded word list compiled into the
//! binary, and a loader for external word list files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn embedded_words_include_short_words() {
        // Short words keep small hands playable
        let dict = loader::dictionary_from_slice(WORDS);
        assert!(dict.contains("cat"));
        assert!(dict.contains("at"));
    }

    #[test]
    fn embedded_words_are_unique() {
        let dict = loader::dictionary_from_slice(WORDS);
        assert_eq!(dict.len(), WORDS.len());
    }
}
