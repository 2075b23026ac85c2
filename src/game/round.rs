//! Round engine
//!
//! Drives one dealt hand to completion: display the hand, read a word,
//! validate, score, consume letters, repeat. The round ends when the player
//! enters "." or the hand runs out of letters.

use crate::core::Hand;
use crate::game::{is_valid_word, read_line, word_score};
use crate::wordlists::Dictionary;
use anyhow::Result;
use std::io::{BufRead, Write};

/// How a round reached its terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// The player entered "." (or input ended)
    Quit,
    /// Every letter in the hand was used up
    OutOfLetters,
}

/// Outcome of a completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// Total score accumulated over the round
    pub score: u32,
    /// Which of the two terminal causes ended the round
    pub end: RoundEnd,
}

/// Play a single hand to completion
///
/// Takes ownership of `hand` and advances it turn by turn; callers wanting to
/// replay keep their own copy. `hand_size` is the original per-round hand
/// allotment and stays fixed for bonus purposes even as the hand shrinks.
/// Invalid words are rejected with a message and change nothing. Input and
/// output are injected so tests can drive the loop deterministically.
///
/// # Errors
/// Returns an error on I/O failure, or if the hand cannot supply a word that
/// already passed validation (a bug, reported rather than ignored).
pub fn play_hand<R: BufRead, W: Write>(
    mut hand: Hand,
    dictionary: &Dictionary,
    hand_size: usize,
    input: &mut R,
    output: &mut W,
) -> Result<RoundSummary> {
    let mut total = 0u32;

    let end = loop {
        if hand.is_empty() {
            break RoundEnd::OutOfLetters;
        }

        writeln!(output, "Current hand: {hand}")?;
        write!(output, "Enter a word, or \".\" to finish this hand: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            // end of input is a voluntary exit
            break RoundEnd::Quit;
        };
        if line == "." {
            break RoundEnd::Quit;
        }

        let word = line.to_lowercase();
        if !is_valid_word(&word, &hand, dictionary) {
            writeln!(output, "That is not a valid word. Please try again.")?;
            continue;
        }

        let score = word_score(&word, hand_size);
        total += score;
        writeln!(output, "\"{word}\" earned {score} points. Total: {total} points")?;
        hand = hand.without_word(&word)?;
    };

    match end {
        RoundEnd::Quit => {
            writeln!(output, "Goodbye! Total score: {total} points")?;
        }
        RoundEnd::OutOfLetters => {
            writeln!(output, "Ran out of letters. Total score: {total} points")?;
        }
    }

    Ok(RoundSummary { score: total, end })
}
