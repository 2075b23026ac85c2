//! Display functions for the CLI

use crate::core::Hand;
use crate::game::FULL_HAND_BONUS;
use colored::Colorize;

/// Print the startup banner with the loaded dictionary size
pub fn print_banner(word_count: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Tilescore - Word Tile Game                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "{} {} {}",
        "Dictionary loaded:".bright_cyan(),
        word_count.to_string().bright_yellow().bold(),
        "words".bright_cyan()
    );
    println!("Spell words from your hand; a word using every letter earns a bonus.\n");
}

/// Print a freshly dealt hand
pub fn print_dealt_hand(hand: &Hand) {
    println!(
        "{} {}",
        "Dealt hand:".bright_cyan(),
        hand.to_string().bright_yellow().bold()
    );
    println!("   {} letters, {} vowels", hand.len(), hand.vowel_count());
}

/// Print the score breakdown for a single word
pub fn print_word_score(word: &str, score: u32, earned_bonus: bool) {
    println!(
        "{} {}",
        word.to_uppercase().bright_yellow().bold(),
        format!("scores {score} points").bright_white()
    );
    if earned_bonus {
        println!(
            "   {}",
            format!("includes the {FULL_HAND_BONUS}-point whole-hand bonus").green()
        );
    }
}
