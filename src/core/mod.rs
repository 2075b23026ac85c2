//! Core domain types for the tile game
//!
//! This module contains the fundamental domain types with zero external
//! collaborators. All types here are pure, testable, and have clear
//! mathematical properties.

mod hand;
pub mod letters;

pub use hand::{Hand, HandError};
