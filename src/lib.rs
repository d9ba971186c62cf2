//! Word Scramble
//!
//! A word derivation game: spell as many words as you can from the letters of
//! a randomly chosen root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Outcome, Round};
//! use word_scramble::engine::evaluate;
//!
//! let mut round = Round::new("alphabet", ["bat", "table"]);
//!
//! let outcome = evaluate(&round, "Table").unwrap();
//! assert_eq!(outcome.score_delta(), 5);
//!
//! round.apply(&outcome);
//! assert_eq!(round.score(), 5);
//! ```

// Core domain types
pub mod core;

// Submission evaluation and sessions
pub mod engine;

// Round data
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
