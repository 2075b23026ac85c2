//! Letter classification and point values
//!
//! The 26-letter lowercase alphabet partitioned into vowels and consonants,
//! plus the fixed Scrabble-style value table used for scoring.

/// The five vowels
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// The twenty-one consonants
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

// Point values for 'a'..='z', Scrabble-style
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Get the point value of a lowercase letter
///
/// # Panics
/// Panics if `letter` is not a lowercase ASCII letter; callers normalize input
/// before scoring.
#[inline]
#[must_use]
pub const fn letter_value(letter: char) -> u32 {
    LETTER_VALUES[letter as usize - 'a' as usize]
}

/// Check whether a lowercase letter is a vowel
#[inline]
#[must_use]
pub const fn is_vowel(letter: char) -> bool {
    matches!(letter, 'a' | 'e' | 'i' | 'o' | 'u')
}
