//! Hand of letter tiles
//!
//! A Hand is a multiset of lowercase letters stored as per-letter counts.
//! Operations that consume letters return a new Hand; the caller's copy is
//! never touched, which is what makes replaying a dealt hand sound.

use crate::core::letters::{CONSONANTS, VOWELS, is_vowel};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// A multiset of letter tiles available to the player
///
/// Invariant: letters with a count of zero are not stored; absence and a zero
/// count are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    counts: FxHashMap<char, u32>,
}

/// Error type for hand operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    /// The hand holds fewer copies of this letter than the word needs
    InsufficientLetters(char),
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientLetters(letter) => {
                write!(f, "hand does not hold enough copies of '{letter}'")
            }
        }
    }
}

impl std::error::Error for HandError {}

impl Hand {
    /// Create an empty hand
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from a sequence of letters, e.g. `Hand::from_letters("aabc")`
    ///
    /// Mostly useful in tests and examples; repeated letters accumulate.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in letters.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Deal a random hand of exactly `n` letters
    ///
    /// At least `n / 3` (rounded down) of the letters are vowels, drawn
    /// uniformly at random with repetition; the rest are consonants, likewise
    /// uniform with repetition. `n = 0` yields the empty hand.
    pub fn deal<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut counts = FxHashMap::default();
        let num_vowels = n / 3;

        for _ in 0..num_vowels {
            let letter = VOWELS[rng.random_range(0..VOWELS.len())];
            *counts.entry(letter).or_insert(0) += 1;
        }

        for _ in num_vowels..n {
            let letter = CONSONANTS[rng.random_range(0..CONSONANTS.len())];
            *counts.entry(letter).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Total number of letters in the hand, counting repeats
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&count| count as usize).sum()
    }

    /// Check whether the hand holds no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of copies of a specific letter in the hand
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of vowel tiles in the hand, counting repeats
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&(&letter, _)| is_vowel(letter))
            .map(|(_, &count)| count as usize)
            .sum()
    }

    /// Check whether every letter of `word` can be drawn from this hand
    ///
    /// Works on a private decrementing copy of the counts; the hand itself is
    /// not modified. A word needing two copies of a letter fails against a
    /// hand holding one.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for letter in word.chars() {
            match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// Return a new hand with one copy of each letter of `word` removed per
    /// occurrence
    ///
    /// Letters whose count reaches zero are removed from the map entirely.
    /// The input hand is left unchanged.
    ///
    /// # Errors
    /// Returns `HandError::InsufficientLetters` if the word needs a letter the
    /// hand cannot supply. Callers are expected to validate first, so hitting
    /// this indicates a caller bug; failing fast beats corrupting the counts.
    pub fn without_word(&self, word: &str) -> Result<Self, HandError> {
        let mut counts = self.counts.clone();
        for letter in word.chars() {
            match counts.get_mut(&letter) {
                Some(count) if *count > 1 => *count -= 1,
                Some(_) => {
                    counts.remove(&letter);
                }
                None => return Err(HandError::InsufficientLetters(letter)),
            }
        }
        Ok(Self { counts })
    }
}

impl fmt::Display for Hand {
    /// Print every copy of every letter, space-separated, in alphabetical
    /// order so output is deterministic
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<char> = self.counts.keys().copied().collect();
        letters.sort_unstable();

        let mut first = true;
        for letter in letters {
            for _ in 0..self.counts[&letter] {
                if first {
                    first = false;
                } else {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_hand() {
        let hand = Hand::new();
        assert_eq!(hand.len(), 0);
        assert!(hand.is_empty());
        assert_eq!(hand.count('a'), 0);
    }

    #[test]
    fn from_letters_counts_repeats() {
        let hand = Hand::from_letters("aabca");
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.count('a'), 3);
        assert_eq!(hand.count('b'), 1);
        assert_eq!(hand.count('c'), 1);
        assert_eq!(hand.count('z'), 0);
    }

    #[test]
    fn deal_has_exact_size_and_vowel_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..=20 {
            let hand = Hand::deal(n, &mut rng);
            assert_eq!(hand.len(), n, "dealt hand of size {n} has wrong length");
            assert!(
                hand.vowel_count() >= n / 3,
                "hand of size {n} has {} vowels, expected at least {}",
                hand.vowel_count(),
                n / 3
            );
        }
    }

    #[test]
    fn deal_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let hand = Hand::deal(0, &mut rng);
        assert!(hand.is_empty());
    }

    #[test]
    fn deal_only_lowercase_letters() {
        let mut rng = StdRng::seed_from_u64(99);
        let hand = Hand::deal(30, &mut rng);
        let shown = hand.to_string();
        assert!(
            shown
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == ' ')
        );
    }

    #[test]
    fn deal_is_deterministic_with_seeded_rng() {
        let mut rng1 = StdRng::seed_from_u64(123);
        let mut rng2 = StdRng::seed_from_u64(123);
        assert_eq!(Hand::deal(7, &mut rng1), Hand::deal(7, &mut rng2));
    }

    #[test]
    fn can_spell_basic() {
        let hand = Hand::from_letters("catx");
        assert!(hand.can_spell("cat"));
        assert!(hand.can_spell("at"));
        assert!(hand.can_spell(""));
        assert!(!hand.can_spell("dog"));
    }

    #[test]
    fn can_spell_respects_repeated_letters() {
        let hand = Hand::from_letters("tac");
        // "tt" needs two t's, hand has one
        assert!(!hand.can_spell("tt"));
        assert!(Hand::from_letters("ttac").can_spell("tt"));
    }

    #[test]
    fn can_spell_does_not_mutate() {
        let hand = Hand::from_letters("cat");
        let before = hand.clone();
        let _ = hand.can_spell("cat");
        let _ = hand.can_spell("zzz");
        assert_eq!(hand, before);
    }

    #[test]
    fn without_word_decrements_counts() {
        let hand = Hand::from_letters("aabct");
        let updated = hand.without_word("cat").unwrap();
        assert_eq!(updated.len(), 2);
        assert_eq!(updated.count('a'), 1);
        assert_eq!(updated.count('b'), 1);
        // fully consumed letters are gone, not kept at zero
        assert_eq!(updated.count('c'), 0);
        assert_eq!(updated.count('t'), 0);
    }

    #[test]
    fn without_word_does_not_mutate_input() {
        let hand = Hand::from_letters("cat");
        let before = hand.clone();
        let _ = hand.without_word("cat").unwrap();
        assert_eq!(hand, before);
    }

    #[test]
    fn without_word_to_empty() {
        let hand = Hand::from_letters("cat");
        let updated = hand.without_word("cat").unwrap();
        assert!(updated.is_empty());
    }

    #[test]
    fn without_word_missing_letter_fails_fast() {
        let hand = Hand::from_letters("cat");
        assert_eq!(
            hand.without_word("cab"),
            Err(HandError::InsufficientLetters('b'))
        );
        // needing two a's when holding one also fails
        assert_eq!(
            hand.without_word("ata"),
            Err(HandError::InsufficientLetters('a'))
        );
    }

    #[test]
    fn display_shows_all_copies_sorted() {
        let hand = Hand::from_letters("xaxle");
        assert_eq!(hand.to_string(), "a e l x x");
        assert_eq!(Hand::new().to_string(), "");
    }
}
