//! Terminal output formatting
//!
//! Colored banners and summaries printed by the binary. The game loops write
//! plain text to an injected writer; everything here goes straight to stdout.

pub mod display;

pub use display::{print_banner, print_dealt_hand, print_word_score};
