//! State of one round: the root word, its dictionary, and player progress

use super::outcome::Outcome;
use super::word::normalize;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// When a restart clears the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreReset {
    /// Zero the score as part of the restart
    #[default]
    Immediate,
    /// Keep the old score until [`Round::settle_score_reset`] is called
    Deferred,
}

/// A single round of play
///
/// Mutated only through [`Round::apply`] and [`Round::settle_score_reset`];
/// a new round replaces this one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root_word: String,
    valid_words: FxHashSet<String>,
    used_words: VecDeque<String>,
    score: i32,
    found_words: usize,
    score_reset_pending: bool,
}

impl Round {
    /// Start a round on `root_word` with score 0
    ///
    /// The root and every valid word go through [`normalize`]; blank entries
    /// are dropped.
    pub fn new<I, S>(root_word: &str, valid_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let valid_words = valid_words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            root_word: normalize(root_word),
            valid_words,
            used_words: VecDeque::new(),
            score: 0,
            found_words: 0,
            score_reset_pending: false,
        }
    }

    /// Same round, starting from `score`
    #[must_use]
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Mark the score to be cleared later by [`Round::settle_score_reset`]
    #[must_use]
    pub fn with_pending_reset(self) -> Self {
        self.with_reset_pending(true)
    }

    /// Same round with the deferred-reset flag set to `pending`
    #[must_use]
    pub fn with_reset_pending(mut self, pending: bool) -> Self {
        self.score_reset_pending = pending;
        self
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.used_words.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    #[inline]
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.valid_words.contains(word)
    }

    /// Number of distinct words the player could find this round
    #[must_use]
    pub fn valid_word_count(&self) -> usize {
        self.valid_words.len()
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn found_words(&self) -> usize {
        self.found_words
    }

    #[inline]
    #[must_use]
    pub const fn score_reset_pending(&self) -> bool {
        self.score_reset_pending
    }

    /// Apply an evaluation outcome
    ///
    /// Acceptance records the word and bumps the found count; every outcome
    /// adjusts the score.
    pub fn apply(&mut self, outcome: &Outcome) {
        if let Outcome::Accepted { word, .. } = outcome {
            self.used_words.push_front(word.clone());
            self.found_words += 1;
        }
        self.score += outcome.score_delta();
    }

    /// Clear the score if a deferred reset is pending
    ///
    /// Returns `true` if the score was cleared.
    pub const fn settle_score_reset(&mut self) -> bool {
        if self.score_reset_pending {
            self.score = 0;
            self.score_reset_pending = false;
            true
        } else {
            false
        }
    }
}
