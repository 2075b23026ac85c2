//! Tilescore - CLI
//!
//! Word-tile scoring game played at the terminal: deal hands, spell words,
//! accumulate points.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use tilescore::{
    core::Hand,
    game::{play_game, word_score},
    output::{print_banner, print_dealt_hand, print_word_score},
    wordlists::{
        Dictionary, WORDS,
        loader::{dictionary_from_slice, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "tilescore",
    about = "Single-player word-tile scoring game played in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, bundled list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters dealt per hand (also the whole-hand bonus length)
    #[arg(short = 's', long, global = true, default_value_t = 7)]
    hand_size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default - deal, replay, and score hands interactively)
    Play,

    /// Deal one random hand and print it
    Deal,

    /// Score a word against the configured hand size
    Score {
        /// Word to score
        word: String,
    },
}

/// Build the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Ok(dictionary_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, cli.hand_size),
        Commands::Deal => {
            run_deal_command(cli.hand_size);
            Ok(())
        }
        Commands::Score { word } => run_score_command(&word, cli.hand_size),
    }
}

fn run_play_command(wordlist_mode: &str, hand_size: usize) -> Result<()> {
    let dictionary = load_dictionary(wordlist_mode)?;
    print_banner(dictionary.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut rng = rand::rng();

    play_game(&dictionary, hand_size, &mut rng, &mut input, &mut output)
}

fn run_deal_command(hand_size: usize) {
    let hand = Hand::deal(hand_size, &mut rand::rng());
    print_dealt_hand(&hand);
}

fn run_score_command(word: &str, hand_size: usize) -> Result<()> {
    let word = word.to_lowercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        anyhow::bail!("word must be non-empty and contain only letters");
    }

    let score = word_score(&word, hand_size);
    print_word_score(&word, score, word.len() == hand_size);
    Ok(())
}
