//! Tilescore
//!
//! A single-player word-tile scoring game: deal a hand of random letters,
//! spell dictionary words from it, and rack up points until the letters run
//! out or you stop.
//!
//! # Quick Start
//!
//! ```rust
//! use tilescore::core::Hand;
//! use tilescore::game::word_score;
//!
//! let hand = Hand::from_letters("catsx");
//! assert!(hand.can_spell("cats"));
//!
//! // (c=3 + a=1 + t=1) * 3 letters = 15 points
//! assert_eq!(word_score("cat", 7), 15);
//! ```

// Core domain types
pub mod core;

// Gameplay logic
pub mod game;

// Word lists and the dictionary
pub mod wordlists;

// Terminal output formatting
pub mod output;
