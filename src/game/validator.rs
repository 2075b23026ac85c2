//! Candidate word validation
//!
//! A word is playable only if the hand can supply every letter and the
//! dictionary knows the word. Both checks must pass; neither the hand nor the
//! dictionary is modified.

use crate::core::Hand;
use crate::wordlists::Dictionary;

/// Check whether `word` can legally be played from `hand`
///
/// True iff every letter of `word` occurs in `word` no more times than it
/// occurs in `hand`, and `word` is a member of `dictionary`. The empty string
/// is never a valid word.
#[must_use]
pub fn is_valid_word(word: &str, hand: &Hand, dictionary: &Dictionary) -> bool {
    !word.is_empty() && hand.can_spell(word) && dictionary.contains(word)
}
