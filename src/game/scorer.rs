//! Word scoring
//!
//! Pure scoring function over the fixed letter value table.

use crate::core::letters::letter_value;

/// Flat bonus for spelling a word that uses the entire hand allotment
pub const FULL_HAND_BONUS: u32 = 50;

/// Score a word against a given hand size
///
/// The score is the sum of the letter values over every occurrence in `word`,
/// multiplied by the word's length, plus a flat 50-point bonus when the word
/// uses all `hand_size` letters. The empty word scores 0.
///
/// Assumes `word` is lowercase and already validated; dictionary membership
/// and hand feasibility are checked elsewhere.
///
/// # Examples
/// ```
/// use tilescore::game::word_score;
///
/// // (c=3 + a=1 + t=1) * 3 letters
/// assert_eq!(word_score("cat", 7), 15);
/// // same word as a whole 3-letter hand earns the bonus
/// assert_eq!(word_score("cat", 3), 65);
/// ```
#[must_use]
pub fn word_score(word: &str, hand_size: usize) -> u32 {
    let letter_sum: u32 = word.chars().map(letter_value).sum();
    let mut score = letter_sum * word.len() as u32;
    if !word.is_empty() && word.len() == hand_size {
        score += FULL_HAND_BONUS;
    }
    score
}
