//! Gameplay logic
//!
//! Scoring, validation, the round engine, and the session controller.

mod round;
mod scorer;
mod session;
mod validator;

pub use round::{RoundEnd, RoundSummary, play_hand};
pub use scorer::{FULL_HAND_BONUS, word_score};
pub use session::play_game;
pub use validator::is_valid_word;

use std::io::{self, BufRead};

/// Read one trimmed line of input
///
/// Returns `Ok(None)` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
