//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and can be driven directly from tests.

mod outcome;
mod round;
mod word;

pub use outcome::{Alert, ErrorKind, Outcome, REJECTION_PENALTY};
pub use round::{Round, ScoreReset};
pub use word::{LetterPool, char_len, normalize};

/// Shortest word the game accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Score multiplier for words as long as the root
pub const FULL_LENGTH_MULTIPLIER: i32 = 2;
