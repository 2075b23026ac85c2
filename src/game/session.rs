//! Session controller
//!
//! Outer command loop across hands: deal a new hand, replay the last one, or
//! end the session. The last-dealt hand is kept as it was originally dealt,
//! so every replay starts from the same letters.

use crate::core::Hand;
use crate::game::{play_hand, read_line};
use crate::wordlists::Dictionary;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the session command loop until the player ends it
///
/// Commands: `n` deals a fresh hand and plays it, `r` replays the last-dealt
/// hand from its original letters, `e` ends the session. Anything else is
/// rejected with a message and re-prompted. Replaying before any hand has
/// been dealt is reported, not a fault. End of input behaves like `e`.
///
/// # Errors
/// Returns an error only on I/O failure or an internal round-engine fault;
/// every user mistake is handled in the loop.
pub fn play_game<R, W, G>(
    dictionary: &Dictionary,
    hand_size: usize,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    // absent until the first deal; replay checks for absence explicitly
    let mut last_dealt: Option<Hand> = None;

    loop {
        write!(
            output,
            "Enter n to deal a new hand, r to replay the last hand, or e to end the game: "
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "n" => {
                let hand = Hand::deal(hand_size, rng);
                last_dealt = Some(hand.clone());
                play_hand(hand, dictionary, hand_size, input, output)?;
            }
            "r" => {
                if let Some(hand) = &last_dealt {
                    play_hand(hand.clone(), dictionary, hand_size, input, output)?;
                } else {
                    writeln!(
                        output,
                        "You have not played a hand yet. Deal a new hand first!"
                    )?;
                }
            }
            "e" => break,
            _ => {
                writeln!(output, "Invalid command.")?;
            }
        }
    }

    Ok(())
}
